//! Rules engine trait for game implementations.
//!
//! Implementations define:
//! - What actions are legal
//! - How actions modify state
//! - When the game is won

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Action, DicePair, GameConfig, GameState, PieceId, PieceState, PlayerId};

use super::error::RuleError;

/// Pieces sent home by a single capture.
pub type Captured = SmallVec<[PieceId; 4]>;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// First player to bring all four pieces home.
    pub winner: PlayerId,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// What an applied action changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Dice were rolled.
    Rolled(DicePair),
    /// Selection replaced.
    Selected(PieceId),
    /// Selection cleared.
    Deselected,
    /// A piece moved.
    Moved {
        piece: PieceId,
        from: PieceState,
        to: PieceState,
    },
    /// Opponents on the moved piece's cell went home (possibly none).
    Captured(Captured),
    /// The turn ended; `next` is to roll. `bonus` is set when the same player keeps the turn.
    TurnEnded { next: PlayerId, bonus: bool },
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return only actions `apply_action` would accept
/// - `apply_action`: Must leave `state` untouched when returning `Err`
/// - `is_terminal`: Return None if nobody has won yet
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Enumerate every action the current player may take.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action for the current player.
    fn apply_action(&mut self, state: &mut GameState, action: &Action) -> Result<ActionOutcome, RuleError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Whether `action` is currently legal.
    fn is_legal(&self, state: &GameState, action: &Action) -> bool {
        self.legal_actions(state).contains(action)
    }
}
