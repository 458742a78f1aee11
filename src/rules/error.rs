//! Rule violations.
//!
//! Every variant is recoverable: the state is left untouched and the caller
//! may issue another command. Broken invariants are not errors; they panic.

use derive_more::{Display, Error, From};

use crate::core::{Action, PieceId, PlayerId, TurnPhase};

/// Why the movement rules reject a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Leaving home needs a six on either die.
    #[display("a six is needed to leave home")]
    NeedsSix,

    /// The move would go past the finish.
    #[display("move overshoots the finish by {overshoot}")]
    Overshoot {
        /// Steps beyond the finish.
        overshoot: u8,
    },

    /// Finished pieces do not move.
    #[display("piece has already finished")]
    AlreadyFinished,
}

/// Why a command was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error, From)]
pub enum RuleError {
    /// The command is not allowed in the current phase of the turn.
    #[display("cannot {action} while {phase}")]
    PhaseViolation {
        action: Action,
        phase: TurnPhase,
    },

    /// The selected piece cannot make this move.
    #[display("illegal move: {_0}")]
    #[from]
    IllegalMove(#[error(source)] MoveError),

    /// The piece belongs to someone other than the current player.
    #[display("{piece} does not belong to {current}")]
    WrongOwner {
        piece: PieceId,
        current: PlayerId,
    },

    /// Moving requires a selected piece.
    #[display("no piece is selected")]
    NoSelection,

    /// Passing is only allowed when nothing can move.
    #[display("{player} still has a legal move")]
    MoveAvailable {
        player: PlayerId,
    },
}

impl RuleError {
    /// Build a phase violation for `action` rejected in `phase`.
    #[must_use]
    pub fn phase(action: Action, phase: TurnPhase) -> Self {
        RuleError::PhaseViolation { action, phase }
    }
}
