//! Tile spawning.
//!
//! The engine never calls a global RNG. It asks a `TileSpawner` where the
//! next tile goes and what it is worth, so tests can swap in a seeded or a
//! fully scripted source.

use tracing::trace;

use crate::board::Grid;
use crate::core::config::check_probability;
use crate::core::{GameRng, GameRngState, Result, Tile};

/// Source of new tiles.
pub trait TileSpawner {
    /// Pick one of `empty` (never called with an empty slice).
    fn pick_cell(&mut self, empty: &[(usize, usize)]) -> (usize, usize);

    /// Pick the value of the next tile.
    fn pick_value(&mut self) -> Tile;

    /// Place one tile on a random empty cell.
    ///
    /// A full grid is returned unchanged.
    fn spawn(&mut self, grid: &Grid) -> Grid {
        let empty = grid.empty_cells();
        if empty.is_empty() {
            trace!("grid full, spawn skipped");
            return grid.clone();
        }

        let (row, col) = self.pick_cell(&empty);
        let value = self.pick_value();
        trace!(row, col, value, "spawned tile");
        grid.with_tile(row, col, value)
    }
}

/// Default spawner: uniform cell, 2 or 4 with a fixed chance of 4.
#[derive(Clone, Debug)]
pub struct RandomSpawner {
    rng: GameRng,
    four_probability: f64,
}

impl RandomSpawner {
    /// Create a spawner. Fails unless `four_probability` lies in `[0, 1]`.
    pub fn new(rng: GameRng, four_probability: f64) -> Result<Self> {
        check_probability(four_probability)?;
        Ok(Self { rng, four_probability })
    }

    /// Capture the RNG position so a game can be replayed.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl TileSpawner for RandomSpawner {
    fn pick_cell(&mut self, empty: &[(usize, usize)]) -> (usize, usize) {
        empty[self.rng.gen_range_usize(0..empty.len())]
    }

    fn pick_value(&mut self) -> Tile {
        if self.rng.gen_bool(self.four_probability) {
            4
        } else {
            2
        }
    }
}
