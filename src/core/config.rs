//! Game configuration.
//!
//! Board geometry is fixed; what a host may choose is the dice seed, the
//! opening seat, and whether applied actions are kept in the history.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Default dice seed.
pub const DEFAULT_SEED: u64 = 42;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the default dice source.
    pub seed: u64,

    /// Seat that takes the first turn.
    pub starting_player: PlayerId,

    /// Keep an `ActionRecord` for every applied action.
    pub record_history: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            starting_player: PlayerId::new(0),
            record_history: true,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the opening seat.
    #[must_use]
    pub fn with_starting_player(mut self, player: PlayerId) -> Self {
        self.starting_player = player;
        self
    }

    /// Turn off action history.
    #[must_use]
    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self
    }
}
