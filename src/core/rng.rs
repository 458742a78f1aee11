//! Seeded dice.
//!
//! [`GameRng`] is the default [`DiceSource`]: a ChaCha8 stream keyed by the
//! game seed. Two games built from the same seed roll the same dice, and the
//! stream position can be saved and restored mid-game.
//!
//! ```
//! use ludo_engine::core::{DiceSource, GameRng};
//!
//! let mut table = GameRng::new(42);
//! let mut replay = GameRng::new(42);
//! assert_eq!(table.roll(), replay.roll());
//!
//! // A branch rolls its own sequence without disturbing the table.
//! let mut what_if = table.fork();
//! let _ = what_if.roll();
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::dice::{DicePair, DiceSource, MAX_FACE, MIN_FACE};

/// Golden-ratio increment spreading fork seeds apart.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic dice backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Seed the stream was keyed with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Branch off an independent stream, e.g. for lookahead playouts.
    ///
    /// The n-th fork of a given seed is always the same stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// One die, `1..=6`.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(MIN_FACE..=MAX_FACE)
    }

    /// Pick uniformly from `options`; `None` when empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        options.choose(&mut self.inner)
    }

    /// Snapshot the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.forks,
        }
    }

    /// Resume a stream from a snapshot.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            forks: state.fork_counter,
        }
    }
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> DicePair {
        let first = self.roll_die();
        let second = self.roll_die();
        DicePair::new(first, second)
    }
}

/// Saved position of a [`GameRng`].
///
/// Restoring is O(1) no matter how many dice were rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position.
    pub word_pos: u128,
    pub fork_counter: u64,
}
