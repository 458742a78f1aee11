//! Core engine types: board, players, pieces, dice, state, actions, configuration.
//!
//! These are plain values. Rules live in `rules` and `games::ludo`.

pub mod board;
pub mod player;
pub mod piece;
pub mod dice;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use board::{RingIndex, StretchIndex, RING_SIZE, STRETCH_LEN};
pub use player::{Player, PlayerColor, PlayerId, PlayerMap, PIECES_PER_PLAYER, PLAYER_COUNT};
pub use piece::{Piece, PieceId, PieceState};
pub use dice::{DiceError, DicePair, DiceSource, ScriptedDice};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use action::{Action, ActionRecord};
pub use state::{GameState, InvariantViolation, TurnPhase, TurnState};
