//! Player actions and the history records kept for them.
//!
//! Actions mirror the controller's command surface one-to-one, so a game can
//! be driven either through `LudoGame` methods or by applying `Action`s
//! through the `RulesEngine` trait.

use serde::{Deserialize, Serialize};

use super::dice::DicePair;
use super::piece::PieceId;
use super::player::PlayerId;

/// A command a player can issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Roll both dice.
    Roll,
    /// Select one of the current player's pieces.
    Select(PieceId),
    /// Clear the selection.
    Deselect,
    /// Move the selected piece by the rolled dice.
    Move,
    /// Send opponents sharing the moved piece's ring cell home.
    Capture,
    /// Finish the turn after moving.
    EndTurn,
    /// Give up the turn when no piece can move.
    Pass,
}

impl Action {
    /// Lowercase name of the action, for logs and errors.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Action::Roll => "roll",
            Action::Select(_) => "select",
            Action::Deselect => "deselect",
            Action::Move => "move",
            Action::Capture => "capture",
            Action::EndTurn => "end_turn",
            Action::Pass => "pass",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Select(piece) => write!(f, "select {piece}"),
            other => f.write_str(other.name()),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Dice showing after the action, if any.
    pub dice: Option<DicePair>,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, dice: Option<DicePair>, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            dice,
            turn,
            sequence,
        }
    }
}
