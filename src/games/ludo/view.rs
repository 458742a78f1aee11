//! Read-only projections for renderers.
//!
//! A front-end needs to know, for every piece, who owns it and where it is;
//! and for the turn, who is up, what the dice say and what is allowed next.
//! Screen coordinates are the renderer's business.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{
    DicePair, GameState, Piece, PieceId, PieceState, PlayerColor, PlayerId, RingIndex, TurnPhase,
};

/// One piece as a renderer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceView {
    pub id: PieceId,
    pub owner: PlayerId,
    pub color: PlayerColor,
    pub state: PieceState,
    pub selected: bool,
}

impl PieceView {
    fn new(piece: &Piece, selected: Option<PieceId>) -> Self {
        Self {
            id: piece.id(),
            owner: piece.owner(),
            color: piece.owner().color(),
            state: piece.state(),
            selected: selected == Some(piece.id()),
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub current_player: PlayerId,
    pub current_color: PlayerColor,
    pub phase: TurnPhase,
    pub dice: Option<DicePair>,
    pub bonus_roll: bool,
    pub selected: Option<PieceId>,
    pub turn_number: u32,
    pub pieces: Vec<PieceView>,
    pub winner: Option<PlayerId>,
}

impl GameSnapshot {
    /// Capture the current state.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        let turn = state.turn();
        Self {
            current_player: turn.current(),
            current_color: turn.current().color(),
            phase: turn.phase(),
            dice: turn.dice(),
            bonus_roll: turn.bonus_roll(),
            selected: turn.selected(),
            turn_number: state.turn_number(),
            pieces: state.pieces().map(|p| PieceView::new(p, turn.selected())).collect(),
            winner: state.winner(),
        }
    }

    /// Pieces of one player.
    pub fn pieces_of(&self, player: PlayerId) -> impl Iterator<Item = &PieceView> {
        self.pieces.iter().filter(move |p| p.owner == player)
    }
}

/// Which pieces stand on each occupied ring cell.
///
/// Cells holding several pieces (same owner stacking) list all of them.
#[must_use]
pub fn ring_occupancy(state: &GameState) -> FxHashMap<RingIndex, SmallVec<[PieceId; 4]>> {
    let mut occupancy: FxHashMap<RingIndex, SmallVec<[PieceId; 4]>> = FxHashMap::default();
    for piece in state.pieces() {
        if let Some(cell) = piece.state().ring() {
            occupancy.entry(cell).or_default().push(piece.id());
        }
    }
    occupancy
}
