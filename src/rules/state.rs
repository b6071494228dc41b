//! Game phase as a sum type.

use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::core::Score;

/// The current phase of a game, each variant owning its grid.
///
/// Exactly one variant is active at a time:
/// - `Playing`: normal play. `can_undo` is true once a prior snapshot exists.
/// - `Won`: a winning tile has appeared. `continue_playing` is false right
///   after the win and true once the player opts to keep going.
/// - `Lost`: no direction changes the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing { grid: Grid, can_undo: bool },
    Won { grid: Grid, continue_playing: bool },
    Lost { grid: Grid },
}

impl GameState {
    /// The grid carried by whichever variant is active.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        match self {
            GameState::Playing { grid, .. } | GameState::Won { grid, .. } | GameState::Lost { grid } => grid,
        }
    }

    #[must_use]
    pub fn into_grid(self) -> Grid {
        match self {
            GameState::Playing { grid, .. } | GameState::Won { grid, .. } | GameState::Lost { grid } => grid,
        }
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.grid().score()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self, GameState::Playing { .. })
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        matches!(self, GameState::Won { .. })
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        matches!(self, GameState::Lost { .. })
    }

    /// Whether the phase itself permits moves (ignores the board).
    ///
    /// `Lost` never does, and `Won` only after the player chose to continue.
    #[must_use]
    pub fn accepts_moves(&self) -> bool {
        match self {
            GameState::Playing { .. } => true,
            GameState::Won { continue_playing, .. } => *continue_playing,
            GameState::Lost { .. } => false,
        }
    }
}
