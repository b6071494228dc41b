//! Engine configuration.
//!
//! `EngineConfig` carries everything a new game needs besides the tile
//! source: board size, how many tiles to place at the start, the chance a
//! spawned tile is a 4, and an optional RNG seed.
//!
//! The winning tile value is deliberately not configurable; see
//! [`WINNING_VALUE`].

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::Tile;

/// Board side length used when none is given.
pub const DEFAULT_SIZE: usize = 4;

/// Tile value that wins the game.
pub const WINNING_VALUE: Tile = 2048;

/// Number of tiles placed on a fresh board.
pub const INITIAL_TILES: usize = 2;

/// Probability that a spawned tile is a 4 rather than a 2.
pub const PROBABILITY_OF_FOUR: f64 = 0.1;

/// Complete engine configuration.
///
/// ```
/// use rust_2048::core::EngineConfig;
///
/// let config = EngineConfig::new().with_size(5).with_seed(7);
/// assert_eq!(config.size, 5);
/// assert_eq!(config.seed, Some(7));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Board side length (N for an N×N grid).
    pub size: usize,

    /// Tiles spawned when a new game starts.
    pub initial_tiles: usize,

    /// Chance that a spawned tile is a 4.
    pub four_probability: f64,

    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            initial_tiles: INITIAL_TILES,
            four_probability: PROBABILITY_OF_FOUR,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration (4×4, two starting tiles, 10% fours).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Fix the RNG seed for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of tiles placed on a fresh board.
    #[must_use]
    pub fn with_initial_tiles(mut self, count: usize) -> Self {
        self.initial_tiles = count;
        self
    }

    /// Set the probability that a spawned tile is a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Check the configuration for values the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(GameError::InvalidSize);
        }
        check_probability(self.four_probability)
    }
}

/// Reject probabilities outside `[0, 1]`, NaN included.
pub(crate) fn check_probability(probability: f64) -> Result<()> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(GameError::InvalidProbability(probability))
    }
}
