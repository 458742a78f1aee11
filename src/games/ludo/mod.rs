//! Four-player Ludo.
//!
//! - Each player has four pieces that start at home
//! - Roll two dice; a six on either die lets a piece enter the ring
//! - Pieces move by the sum of both dice, then run a private four-cell stretch
//! - Landing on an opponent's ring cell sends it home
//! - A double grants another roll
//! - First player with all four pieces finished wins
//!
//! [`LudoGame`] is the front-end facing controller. [`LudoRules`] implements
//! [`RulesEngine`](crate::rules::RulesEngine) for callers driving the state
//! directly.

mod controller;
mod rules;
mod view;

pub use controller::{LudoGame, LudoGameBuilder};
pub use rules::{capture_targets, legal_moves, LegalMove, LegalMoves, LudoRules};
pub use view::{ring_occupancy, GameSnapshot, PieceView};
