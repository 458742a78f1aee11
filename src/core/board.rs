//! Board geometry: the shared ring and the private home stretches.
//!
//! ## Layout
//!
//! - A closed ring of [`RING_SIZE`] cells, indexed `0..40`, shared by all players.
//! - One home stretch of [`STRETCH_LEN`] cells per player, indexed `0..4`.
//!
//! Each player enters the ring at their entry cell (`1`, `11`, `21`, `31`)
//! and leaves it for the stretch after their final-path entry cell, the ring
//! cell just before the entry (`0`, `10`, `20`, `30`).
//!
//! ## Progress
//!
//! Movement arithmetic is done in a per-player *progress* coordinate:
//!
//! | Location            | Progress      |
//! |---------------------|---------------|
//! | ring cell `entry+k` | `k` (`0..40`) |
//! | stretch cell `s`    | `40 + s`      |
//! | finished            | `44`          |
//!
//! The final-path entry cell always has progress `39`, so a piece never
//! laps the ring a second time.
//!
//! ```
//! use ludo_engine::core::board::{entry_cell, final_entry_cell, ring_progress};
//! use ludo_engine::core::PlayerId;
//!
//! let blue = PlayerId::new(1);
//! assert_eq!(entry_cell(blue).value(), 11);
//! assert_eq!(final_entry_cell(blue).value(), 10);
//! assert_eq!(ring_progress(blue, final_entry_cell(blue)), 39);
//! ```

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Number of cells on the shared ring.
pub const RING_SIZE: u8 = 40;

/// Number of cells in each player's home stretch.
pub const STRETCH_LEN: u8 = 4;

/// Distance between consecutive players' entry cells.
pub const ENTRY_SPACING: u8 = 10;

/// Progress value of a finished piece.
pub const FINISH_PROGRESS: u8 = RING_SIZE + STRETCH_LEN;

/// A raw value outside the range of a board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display("{value} is out of range 0..{limit}")]
pub struct OutOfRange {
    /// The rejected value.
    pub value: u8,
    /// Exclusive upper bound.
    pub limit: u8,
}

/// A cell on the shared ring, `0..40`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[display("ring {_0}")]
pub struct RingIndex(u8);

impl RingIndex {
    /// Create a ring index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= RING_SIZE`.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < RING_SIZE, "Ring index out of range");
        Self(index)
    }

    /// Get the raw cell number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The cell `steps` cells further along the ring, wrapping at the end.
    #[must_use]
    pub const fn offset(self, steps: u8) -> Self {
        Self(((self.0 as u16 + steps as u16) % RING_SIZE as u16) as u8)
    }

    /// Iterate over every ring cell in order.
    pub fn all() -> impl Iterator<Item = RingIndex> {
        (0..RING_SIZE).map(RingIndex)
    }
}

impl TryFrom<u8> for RingIndex {
    type Error = OutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < RING_SIZE {
            Ok(Self(value))
        } else {
            Err(OutOfRange { value, limit: RING_SIZE })
        }
    }
}

impl From<RingIndex> for u8 {
    fn from(index: RingIndex) -> Self {
        index.0
    }
}

/// A cell in a player's home stretch, `0..4`.
///
/// `0` is the first stretch cell; `3` is the last one before the finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[display("stretch {_0}")]
pub struct StretchIndex(u8);

impl StretchIndex {
    /// Create a stretch index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= STRETCH_LEN`.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < STRETCH_LEN, "Stretch index out of range");
        Self(index)
    }

    /// Get the raw stretch cell number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for StretchIndex {
    type Error = OutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < STRETCH_LEN {
            Ok(Self(value))
        } else {
            Err(OutOfRange { value, limit: STRETCH_LEN })
        }
    }
}

impl From<StretchIndex> for u8 {
    fn from(index: StretchIndex) -> Self {
        index.0
    }
}

/// The ring cell where a player's piece lands when it leaves home.
#[must_use]
pub const fn entry_cell(player: PlayerId) -> RingIndex {
    RingIndex(1 + player.raw() * ENTRY_SPACING)
}

/// The last ring cell a player's piece visits before its home stretch.
#[must_use]
pub const fn final_entry_cell(player: PlayerId) -> RingIndex {
    entry_cell(player).offset(RING_SIZE - 1)
}

/// Progress of a player's piece standing on `cell`.
#[must_use]
pub const fn ring_progress(player: PlayerId, cell: RingIndex) -> u8 {
    (cell.0 + RING_SIZE - entry_cell(player).0) % RING_SIZE
}

/// The ring cell a player's piece reaches at the given ring progress.
///
/// # Panics
///
/// Panics if `progress >= RING_SIZE`.
#[must_use]
pub const fn ring_from_progress(player: PlayerId, progress: u8) -> RingIndex {
    assert!(progress < RING_SIZE, "Progress is past the ring");
    entry_cell(player).offset(progress)
}
