//! Game configuration.

use serde::{Deserialize, Serialize};

use super::error::{PigError, Result};
use super::seat::Seat;

/// Default score needed to win.
pub const DEFAULT_TARGET_SCORE: u32 = 100;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

/// Per-game configuration.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// collaborator may supply a partial JSON document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Running total that ends the game once reached.
    pub target_score: u32,

    /// Seed for the game RNG.
    /// Same seed and same intents reproduce the same game.
    pub seed: u64,

    /// Seat that takes the first turn.
    pub first_seat: Seat,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            seed: DEFAULT_SEED,
            first_seat: Seat::First,
        }
    }
}

impl GameConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the target score.
    #[must_use]
    pub fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target;
        self
    }

    /// Set which seat opens the game.
    #[must_use]
    pub fn with_first_seat(mut self, seat: Seat) -> Self {
        self.first_seat = seat;
        self
    }

    /// Reject configurations no game could be played under.
    pub fn validate(&self) -> Result<()> {
        if self.target_score == 0 {
            return Err(PigError::InvalidConfig("target score must be positive".into()));
        }
        Ok(())
    }
}
