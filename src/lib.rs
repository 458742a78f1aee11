//! # ludo-engine
//!
//! Rules engine for four-player Ludo with two dice.
//!
//! ## Design Principles
//!
//! 1. **Illegal States Unrepresentable**: A piece is home, on the ring, in its
//!    stretch, or finished, and carries exactly the coordinate that state needs.
//!    Turn flags are derived from what happened this turn.
//!
//! 2. **Injected Randomness**: Dice come from a `DiceSource`. Seeded play uses
//!    `GameRng`; tests script exact rolls with `ScriptedDice`.
//!
//! 3. **Rejections Are Values**: Commands out of order return a `RuleError`
//!    and leave the state untouched.
//!
//! ## Architecture
//!
//! - **Progress Coordinate**: Movement works on a per-player distance from
//!   the entry cell, so stretch entry and overshoot fall out of one comparison.
//!
//! - **Persistent History**: Applied actions go into an `im::Vector`, so
//!   cloning a game for lookahead stays cheap.
//!
//! ## Modules
//!
//! - `core`: Board geometry, players, pieces, dice, RNG, state, actions, configuration
//! - `rules`: RulesEngine trait, movement arithmetic, rule errors
//! - `games`: The Ludo rules, the turn controller, and render views

pub mod core;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerColor, PlayerMap, Player,
    PieceId, PieceState, Piece,
    RingIndex, StretchIndex,
    DiceError, DicePair, DiceSource, ScriptedDice,
    GameRng, GameRngState, GameConfig,
    Action, ActionRecord,
    GameState, TurnPhase, TurnState,
};

pub use crate::rules::{ActionOutcome, Captured, GameResult, MoveError, RuleError, RulesEngine};

pub use crate::games::ludo::{GameSnapshot, LegalMove, LudoGame, LudoGameBuilder, LudoRules, PieceView};
