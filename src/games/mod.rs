//! Game implementations.

pub mod ludo;
