//! Error type for engine construction.
//!
//! Gameplay itself never fails: terminal moves are no-ops, undo without
//! history yields `None`, and spawning onto a full grid is skipped. Only
//! building a grid or an engine from bad input produces a `GameError`.

use super::Tile;

/// Validation failures raised while constructing grids or engines.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("board size must be positive")]
    InvalidSize,
    #[error("cell matrix has {found} rows, expected {expected}")]
    RowCountMismatch { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid holds {found} cells, expected {expected}")]
    CellCountMismatch { expected: usize, found: usize },
    #[error("tile value {value} at ({row}, {col}) is not a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: Tile },
    #[error("four-tile probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
