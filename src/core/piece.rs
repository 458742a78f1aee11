//! Pieces: stable identity plus lifecycle state.
//!
//! A piece moves through `Home -> Active -> FinalPath -> Finished`, skipping
//! `FinalPath` when a move lands exactly on the finish. The only way back to
//! `Home` is being captured.
//!
//! Each state carries its own coordinate type, so a piece can never hold a
//! ring index while in its stretch or vice versa.

use serde::{Deserialize, Serialize};

use super::board::{self, OutOfRange, RingIndex, StretchIndex, FINISH_PROGRESS, RING_SIZE};
use super::player::{PlayerId, PIECES_PER_PLAYER};

/// Stable piece identifier: owning seat plus piece index `0..4`.
///
/// ```
/// use ludo_engine::core::{PieceId, PlayerId};
///
/// let id = PieceId::new(PlayerId::new(1), 3);
/// assert_eq!(id.player(), PlayerId::new(1));
/// assert_eq!(id.index(), 3);
/// assert_eq!(id.to_string(), "Blue#3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPieceId")]
pub struct PieceId {
    player: PlayerId,
    index: u8,
}

/// Unchecked wire form of a [`PieceId`].
#[derive(Deserialize)]
struct RawPieceId {
    player: PlayerId,
    index: u8,
}

impl TryFrom<RawPieceId> for PieceId {
    type Error = OutOfRange;

    fn try_from(raw: RawPieceId) -> Result<Self, Self::Error> {
        let limit = PIECES_PER_PLAYER as u8;
        if raw.index < limit {
            Ok(Self { player: raw.player, index: raw.index })
        } else {
            Err(OutOfRange { value: raw.index, limit })
        }
    }
}

impl PieceId {
    /// Create a piece ID.
    ///
    /// # Panics
    ///
    /// Panics if `index >= PIECES_PER_PLAYER`.
    #[must_use]
    pub const fn new(player: PlayerId, index: u8) -> Self {
        assert!((index as usize) < PIECES_PER_PLAYER, "Piece index out of range");
        Self { player, index }
    }

    /// The owning player.
    #[must_use]
    pub const fn player(self) -> PlayerId {
        self.player
    }

    /// Index of the piece within its owner's set.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Iterate over every piece on the table, player by player.
    pub fn all() -> impl Iterator<Item = PieceId> {
        PlayerId::all().flat_map(Self::all_of)
    }

    /// Iterate over one player's pieces.
    pub fn all_of(player: PlayerId) -> impl Iterator<Item = PieceId> {
        (0..PIECES_PER_PLAYER as u8).map(move |index| PieceId { player, index })
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.player, self.index)
    }
}

/// Lifecycle state of a piece, carrying the position that state needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceState {
    /// Waiting in the starting pool.
    #[default]
    Home,
    /// On the shared ring.
    Active(RingIndex),
    /// In the owner's private home stretch.
    FinalPath(StretchIndex),
    /// Journey complete; no further moves apply.
    Finished,
}

impl PieceState {
    #[must_use]
    pub fn is_home(self) -> bool {
        matches!(self, PieceState::Home)
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, PieceState::Active(_))
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, PieceState::Finished)
    }

    /// The ring cell, if the piece is on the ring.
    #[must_use]
    pub fn ring(self) -> Option<RingIndex> {
        match self {
            PieceState::Active(cell) => Some(cell),
            _ => None,
        }
    }

    /// The stretch cell, if the piece is in its home stretch.
    #[must_use]
    pub fn stretch(self) -> Option<StretchIndex> {
        match self {
            PieceState::FinalPath(cell) => Some(cell),
            _ => None,
        }
    }

    /// How far along its journey a piece owned by `owner` is.
    ///
    /// `None` at home; `0..40` on the ring; `40..44` in the stretch; `44`
    /// when finished. Never decreases except through capture.
    #[must_use]
    pub fn progress(self, owner: PlayerId) -> Option<u8> {
        match self {
            PieceState::Home => None,
            PieceState::Active(cell) => Some(board::ring_progress(owner, cell)),
            PieceState::FinalPath(cell) => Some(RING_SIZE + cell.value()),
            PieceState::Finished => Some(FINISH_PROGRESS),
        }
    }
}

impl std::fmt::Display for PieceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceState::Home => f.write_str("home"),
            PieceState::Active(cell) => write!(f, "{cell}"),
            PieceState::FinalPath(cell) => write!(f, "{cell}"),
            PieceState::Finished => f.write_str("finished"),
        }
    }
}

/// A piece: identity plus current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    id: PieceId,
    state: PieceState,
}

impl Piece {
    /// Create a piece in its starting pool.
    #[must_use]
    pub const fn at_home(id: PieceId) -> Self {
        Self { id, state: PieceState::Home }
    }

    #[must_use]
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// The owning player.
    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.id.player()
    }

    #[must_use]
    pub fn state(&self) -> PieceState {
        self.state
    }

    /// See [`PieceState::progress`].
    #[must_use]
    pub fn progress(&self) -> Option<u8> {
        self.state.progress(self.owner())
    }

    pub(crate) fn set_state(&mut self, state: PieceState) {
        self.state = state;
    }
}
