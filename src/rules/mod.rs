//! Rules: the engine trait, movement arithmetic, and rule violations.
//!
//! `movement` is pure arithmetic on piece states. The `RulesEngine` trait is
//! where turn protocol and state mutation come together; `games::ludo`
//! implements it.

pub mod engine;
pub mod error;
pub mod movement;

pub use engine::{ActionOutcome, Captured, GameResult, RulesEngine};
pub use error::{MoveError, RuleError};
