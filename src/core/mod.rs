//! Core engine types: tile aliases, errors, configuration, RNG.
//!
//! Everything here is independent of the board geometry and the rules.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{EngineConfig, DEFAULT_SIZE, INITIAL_TILES, PROBABILITY_OF_FOUR, WINNING_VALUE};
pub use error::{GameError, Result};
pub use rng::{GameRng, GameRngState};

/// A tile value. 0 is an empty cell; anything else is a power of two >= 2.
pub type Tile = u32;

/// Accumulated merge score.
pub type Score = u64;
