//! # rust-2048
//!
//! A deterministic engine for the 2048 sliding-tile puzzle.
//!
//! ## Design Principles
//!
//! 1. **Values, not mutation**: every accepted move or spawn produces a new
//!    `Grid`. Old grids stay valid snapshots, which is what makes undo a
//!    plain swap.
//!
//! 2. **Injected randomness**: tile spawns go through the `TileSpawner`
//!    trait. The default spawner wraps a seedable ChaCha8 RNG, so any game
//!    can be replayed from its seed.
//!
//! 3. **No failing gameplay**: only construction can return an error.
//!    Terminal moves are no-ops and an empty undo history is `None`.
//!
//! ## Modules
//!
//! - `core`: Tile aliases, errors, configuration, RNG
//! - `board`: Grid snapshot, move directions, slide/merge resolution
//! - `rules`: Game phases, the `GameEngine` trait, tile spawning
//! - `games`: Concrete engines (`ClassicGame`)
//!
//! ## Example
//!
//! ```
//! use rust_2048::{ClassicGameBuilder, GameEngine, Move};
//!
//! let mut game = ClassicGameBuilder::new().seed(42).build().unwrap();
//! for direction in Move::ALL {
//!     if game.is_valid_move(direction) {
//!         game.make_move(direction);
//!         break;
//!     }
//! }
//! assert!(game.undo().is_some());
//! assert!(game.undo().is_none());
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, GameError, GameRng, GameRngState, Result, Score, Tile,
    DEFAULT_SIZE, WINNING_VALUE,
};

pub use crate::board::{Grid, Move, SlideOutcome};

pub use crate::rules::{GameEngine, GameState, RandomSpawner, TileSpawner};

pub use crate::games::classic::{ClassicGame, ClassicGameBuilder};
