//! Movement arithmetic.
//!
//! Pure functions from (owner, piece state, dice) to the piece's next state.
//! Nothing here touches `GameState`; the rules engine decides when a move may
//! be attempted and applies the result.
//!
//! ## Rules
//!
//! - **Home**: leaves only when a die shows six, landing on the entry cell.
//!   The rest of the roll is not walked.
//! - **Ring**: walks `dice.sum()` cells. Passing the final-path entry cell
//!   diverts into the home stretch.
//! - **Stretch**: walks `dice.sum()` cells toward the finish.
//! - **Finish**: must be reached exactly; overshooting is illegal.
//!
//! ```
//! use ludo_engine::core::{DicePair, PieceState, PlayerId, RingIndex, StretchIndex};
//! use ludo_engine::rules::movement::advance;
//!
//! let red = PlayerId::new(0);
//! let next = advance(red, PieceState::Active(RingIndex::new(38)), DicePair::new(3, 3));
//! assert_eq!(next, Ok(PieceState::FinalPath(StretchIndex::new(3))));
//! ```

use crate::core::board::{self, StretchIndex, FINISH_PROGRESS, RING_SIZE};
use crate::core::{DicePair, PieceState, PlayerId, RingIndex};

use super::error::MoveError;

/// Compute where a piece owned by `owner` ends up after rolling `dice`.
pub fn advance(owner: PlayerId, state: PieceState, dice: DicePair) -> Result<PieceState, MoveError> {
    match state {
        PieceState::Home => {
            if dice.has_six() {
                Ok(PieceState::Active(board::entry_cell(owner)))
            } else {
                Err(MoveError::NeedsSix)
            }
        }
        PieceState::Active(cell) => from_progress(owner, board::ring_progress(owner, cell) + dice.sum()),
        PieceState::FinalPath(cell) => from_progress(owner, RING_SIZE + cell.value() + dice.sum()),
        PieceState::Finished => Err(MoveError::AlreadyFinished),
    }
}

/// Whether walking `steps` from `cell` carries the piece past its final-path entry.
#[must_use]
pub fn enters_final_path(owner: PlayerId, cell: RingIndex, steps: u8) -> bool {
    board::ring_progress(owner, cell) + steps >= RING_SIZE
}

/// Steps left over inside the stretch after passing the final-path entry.
///
/// `0..4` lands in the stretch, `4` finishes, more overshoots. `None` when
/// the move stays on the ring.
#[must_use]
pub fn steps_in_final_path(owner: PlayerId, cell: RingIndex, steps: u8) -> Option<u8> {
    let to_exit = board::ring_progress(owner, board::final_entry_cell(owner))
        - board::ring_progress(owner, cell);
    steps.checked_sub(to_exit + 1)
}

fn from_progress(owner: PlayerId, progress: u8) -> Result<PieceState, MoveError> {
    if progress < RING_SIZE {
        Ok(PieceState::Active(board::ring_from_progress(owner, progress)))
    } else if progress < FINISH_PROGRESS {
        Ok(PieceState::FinalPath(StretchIndex::new(progress - RING_SIZE)))
    } else if progress == FINISH_PROGRESS {
        Ok(PieceState::Finished)
    } else {
        Err(MoveError::Overshoot {
            overshoot: progress - FINISH_PROGRESS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: PlayerId = PlayerId::new(0);
    const BLUE: PlayerId = PlayerId::new(1);

    fn ring(cell: u8) -> PieceState {
        PieceState::Active(RingIndex::new(cell))
    }

    fn stretch(cell: u8) -> PieceState {
        PieceState::FinalPath(StretchIndex::new(cell))
    }

    #[test]
    fn test_home_needs_six() {
        assert_eq!(advance(RED, PieceState::Home, DicePair::new(3, 4)), Err(MoveError::NeedsSix));
        assert_eq!(advance(RED, PieceState::Home, DicePair::new(6, 2)), Ok(ring(1)));
        assert_eq!(advance(RED, PieceState::Home, DicePair::new(2, 6)), Ok(ring(1)));
        assert_eq!(advance(BLUE, PieceState::Home, DicePair::new(6, 6)), Ok(ring(11)));
    }

    #[test]
    fn test_ring_walk() {
        assert_eq!(advance(BLUE, ring(11), DicePair::new(5, 5)), Ok(ring(21)));
        assert_eq!(advance(RED, ring(15), DicePair::new(3, 1)), Ok(ring(19)));
    }

    #[test]
    fn test_ring_walk_wraps() {
        // Blue's exit is cell 10, so passing 39 -> 0 stays on the ring.
        assert_eq!(advance(BLUE, ring(37), DicePair::new(3, 2)), Ok(ring(2)));
    }

    #[test]
    fn test_land_on_final_entry() {
        assert_eq!(advance(RED, ring(34), DicePair::new(3, 3)), Ok(ring(0)));
        assert_eq!(advance(BLUE, ring(8), DicePair::new(1, 1)), Ok(ring(10)));
    }

    #[test]
    fn test_enter_final_path() {
        assert_eq!(advance(RED, ring(38), DicePair::new(3, 3)), Ok(stretch(3)));
        assert_eq!(advance(RED, ring(0), DicePair::new(1, 2)), Ok(stretch(2)));
        assert_eq!(advance(BLUE, ring(9), DicePair::new(1, 1)), Ok(stretch(0)));
    }

    #[test]
    fn test_finish_from_ring() {
        assert_eq!(advance(RED, ring(39), DicePair::new(3, 3)), Ok(PieceState::Finished));
    }

    #[test]
    fn test_overshoot_from_ring() {
        assert_eq!(
            advance(RED, ring(39), DicePair::new(6, 6)),
            Err(MoveError::Overshoot { overshoot: 6 })
        );
    }

    #[test]
    fn test_stretch_walk() {
        assert_eq!(advance(RED, stretch(0), DicePair::new(1, 1)), Ok(stretch(2)));
        assert_eq!(advance(RED, stretch(2), DicePair::new(1, 1)), Ok(PieceState::Finished));
        assert_eq!(
            advance(RED, stretch(2), DicePair::new(2, 3)),
            Err(MoveError::Overshoot { overshoot: 3 })
        );
    }

    #[test]
    fn test_last_stretch_cell_is_stuck() {
        // Two dice never sum to 1.
        for a in 1..=6 {
            for b in 1..=6 {
                assert!(advance(RED, stretch(3), DicePair::new(a, b)).is_err());
            }
        }
    }

    #[test]
    fn test_finished_never_moves() {
        assert_eq!(
            advance(RED, PieceState::Finished, DicePair::new(1, 1)),
            Err(MoveError::AlreadyFinished)
        );
    }

    #[test]
    fn test_enters_final_path() {
        assert!(enters_final_path(RED, RingIndex::new(38), 6));
        assert!(!enters_final_path(RED, RingIndex::new(38), 2));
        assert!(!enters_final_path(BLUE, RingIndex::new(11), 10));
        assert!(!enters_final_path(RED, RingIndex::new(15), 4));
        assert!(enters_final_path(BLUE, RingIndex::new(10), 2));
    }

    #[test]
    fn test_steps_in_final_path() {
        assert_eq!(steps_in_final_path(RED, RingIndex::new(38), 6), Some(3));
        assert_eq!(steps_in_final_path(RED, RingIndex::new(38), 2), None);
        assert_eq!(steps_in_final_path(RED, RingIndex::new(38), 3), Some(0));
        assert_eq!(steps_in_final_path(BLUE, RingIndex::new(5), 10), Some(4));
    }

    #[test]
    fn test_steps_in_final_path_matches_advance() {
        for owner in PlayerId::all() {
            for cell in RingIndex::all() {
                for steps in 2..=12u8 {
                    let dice = DicePair::new(steps / 2, steps - steps / 2);
                    let result = advance(owner, PieceState::Active(cell), dice);
                    match steps_in_final_path(owner, cell, steps) {
                        None => assert!(matches!(result, Ok(PieceState::Active(_)))),
                        Some(n) if n < 4 => assert_eq!(result, Ok(stretch(n))),
                        Some(4) => assert_eq!(result, Ok(PieceState::Finished)),
                        Some(n) => assert_eq!(result, Err(MoveError::Overshoot { overshoot: n - 4 })),
                    }
                }
            }
        }
    }
}
