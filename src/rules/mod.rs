//! Game rules: phases, the engine contract, and tile spawning.
//!
//! Concrete engines implement `GameEngine`; the board layer underneath stays
//! free of state and randomness.

pub mod engine;
pub mod spawn;
pub mod state;

pub use engine::GameEngine;
pub use spawn::{RandomSpawner, TileSpawner};
pub use state::GameState;
