//! Immutable N×N grid snapshot.
//!
//! Cells are stored flat in row-major order. A `Grid` is a value: sliding or
//! spawning always produces a new grid, so any grid kept around (for undo,
//! for a renderer) stays a valid standalone snapshot.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::core::{GameError, Result, Score, Tile};

/// An N×N board of tiles plus the score accumulated so far.
///
/// Deserialization goes through the same checks as [`Grid::with_cells`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    cells: Vec<Tile>,
    score: Score,
}

impl Grid {
    /// Create an empty grid with zero score.
    pub fn empty(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
            score: 0,
        })
    }

    /// Build a grid from a square row matrix; the size is the row count.
    ///
    /// ```
    /// use rust_2048::board::Grid;
    ///
    /// let grid = Grid::from_rows(&[[2, 0], [0, 4]]).unwrap();
    /// assert_eq!(grid.size(), 2);
    /// assert_eq!(grid[(1, 1)], 4);
    /// ```
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self> {
        Self::with_cells(rows.len(), rows, 0)
    }

    /// Build a grid of a declared size from a row matrix and a score.
    ///
    /// Fails if the matrix is not `size`×`size` or holds a value that is not
    /// 0 or a power of two >= 2.
    pub fn with_cells<R: AsRef<[Tile]>>(size: usize, rows: &[R], score: Score) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        if rows.len() != size {
            return Err(GameError::RowCountMismatch {
                expected: size,
                found: rows.len(),
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(GameError::RowLengthMismatch {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                check_tile(row, col, value)?;
                cells.push(value);
            }
        }

        Ok(Self { size, cells, score })
    }

    /// Internal constructor for already-validated cells.
    pub(crate) fn from_parts(size: usize, cells: Vec<Tile>, score: Score) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells, score }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Tile at `(row, col)`, or `None` outside the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Flat row-major view of all cells.
    #[must_use]
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.size)
    }

    /// Copy the cells out as a nested row matrix.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    /// Compare cells only, ignoring score.
    #[must_use]
    pub fn cells_eq(&self, other: &Grid) -> bool {
        self.size == other.size && self.cells == other.cells
    }

    /// Coordinates of every empty cell, in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, value)| **value == 0)
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }

    /// Largest tile on the board (0 if empty).
    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Whether any tile is at least `value`.
    #[must_use]
    pub fn has_tile_at_least(&self, value: Tile) -> bool {
        self.cells.iter().any(|&tile| tile >= value)
    }

    /// Return a copy with `(row, col)` set to `value`.
    ///
    /// Out-of-bounds coordinates leave the grid unchanged.
    #[must_use]
    pub fn with_tile(&self, row: usize, col: usize, value: Tile) -> Self {
        let mut next = self.clone();
        if row < self.size && col < self.size {
            next.cells[row * self.size + col] = value;
        }
        next
    }
}

fn check_tile(row: usize, col: usize, value: Tile) -> Result<()> {
    if value != 0 && (value < 2 || !value.is_power_of_two()) {
        return Err(GameError::InvalidTile { row, col, value });
    }
    Ok(())
}

/// Wire form of a `Grid`, validated before it becomes one.
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    cells: Vec<Tile>,
    score: Score,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GameError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        if raw.size == 0 {
            return Err(GameError::InvalidSize);
        }
        let expected = raw.size.checked_mul(raw.size).ok_or(GameError::InvalidSize)?;
        if raw.cells.len() != expected {
            return Err(GameError::CellCountMismatch {
                expected,
                found: raw.cells.len(),
            });
        }
        for (idx, &value) in raw.cells.iter().enumerate() {
            check_tile(idx / raw.size, idx % raw.size, value)?;
        }

        Ok(Self {
            size: raw.size,
            cells: raw.cells,
            score: raw.score,
        })
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Tile;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < self.size && col < self.size, "cell ({row}, {col}) outside {0}x{0} grid", self.size);
        &self.cells[row * self.size + col]
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        writeln!(f, "Score: {}", self.score)?;
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|&value| {
                    if value == 0 {
                        format!("{:>width$}", ".")
                    } else {
                        format!("{value:>width$}")
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid() {
        let grid = Grid::empty(4).unwrap();

        assert_eq!(grid.size(), 4);
        assert_eq!(grid.score(), 0);
        assert_eq!(grid.empty_cells().len(), 16);
        assert!(!grid.is_full());
        assert_eq!(grid.max_tile(), 0);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Grid::empty(0), Err(GameError::InvalidSize));

        let rows: [[Tile; 0]; 0] = [];
        assert_eq!(Grid::from_rows(&rows), Err(GameError::InvalidSize));
    }

    #[test]
    fn test_dimension_mismatch() {
        let result = Grid::with_cells(4, &[[2, 0, 0, 0], [0, 0, 0, 0]], 0);
        assert_eq!(
            result,
            Err(GameError::RowCountMismatch {
                expected: 4,
                found: 2
            })
        );

        let ragged: Vec<Vec<Tile>> = vec![vec![0, 0, 0], vec![0, 0], vec![0, 0, 0]];
        assert_eq!(
            Grid::from_rows(&ragged),
            Err(GameError::RowLengthMismatch {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_invalid_tile_rejected() {
        assert_eq!(
            Grid::from_rows(&[[2, 3], [0, 0]]),
            Err(GameError::InvalidTile {
                row: 0,
                col: 1,
                value: 3
            })
        );
        assert_eq!(
            Grid::from_rows(&[[0, 0], [1, 0]]),
            Err(GameError::InvalidTile {
                row: 1,
                col: 0,
                value: 1
            })
        );
    }

    #[test]
    fn test_accessors() {
        let grid = Grid::with_cells(2, &[[2, 4], [0, 8]], 12).unwrap();

        assert_eq!(grid.score(), 12);
        assert_eq!(grid.get(0, 1), Some(4));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid[(1, 1)], 8);
        assert_eq!(grid.cells(), &[2, 4, 0, 8]);
        assert_eq!(grid.empty_cells(), vec![(1, 0)]);
        assert_eq!(grid.max_tile(), 8);
        assert!(grid.has_tile_at_least(8));
        assert!(!grid.has_tile_at_least(16));
        assert_eq!(grid.to_rows(), vec![vec![2, 4], vec![0, 8]]);
    }

    #[test]
    #[should_panic(expected = "outside 2x2 grid")]
    fn test_index_out_of_bounds() {
        let grid = Grid::empty(2).unwrap();
        let _ = grid[(0, 2)];
    }

    #[test]
    fn test_with_tile_is_a_copy() {
        let grid = Grid::empty(3).unwrap();
        let next = grid.with_tile(1, 2, 4);

        assert_eq!(grid[(1, 2)], 0);
        assert_eq!(next[(1, 2)], 4);
        assert_eq!(next.empty_cells().len(), 8);
        assert_eq!(grid.with_tile(5, 5, 2), grid);
    }

    #[test]
    fn test_equality_is_structural() {
        let a = Grid::with_cells(2, &[[2, 0], [0, 0]], 4).unwrap();
        let b = Grid::with_cells(2, &[[2, 0], [0, 0]], 4).unwrap();
        let c = Grid::with_cells(2, &[[2, 0], [0, 0]], 8).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.cells_eq(&c));
    }

    #[test]
    fn test_full_grid() {
        let grid = Grid::from_rows(&[[2, 4], [4, 2]]).unwrap();
        assert!(grid.is_full());
        assert!(grid.empty_cells().is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let grid = Grid::with_cells(2, &[[2, 0], [0, 4]], 8).unwrap();
        let json = serde_json::to_string(&grid).unwrap();

        assert_eq!(json, r#"{"size":2,"cells":[2,0,0,4],"score":8}"#);
        assert_eq!(serde_json::from_str::<Grid>(&json).unwrap(), grid);
    }

    #[test]
    fn test_deserialize_rejects_bad_shape() {
        let short = serde_json::from_str::<Grid>(r#"{"size":4,"cells":[2,2],"score":0}"#);
        let err = short.unwrap_err().to_string();
        assert!(err.contains("grid holds 2 cells, expected 16"), "{err}");

        let zero = serde_json::from_str::<Grid>(r#"{"size":0,"cells":[],"score":0}"#);
        assert!(zero.unwrap_err().to_string().contains("board size must be positive"));
    }

    #[test]
    fn test_deserialize_rejects_bad_tile() {
        let result = serde_json::from_str::<Grid>(r#"{"size":2,"cells":[2,0,6,0],"score":0}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("tile value 6 at (1, 0)"), "{err}");
    }

    #[test]
    fn test_display() {
        let grid = Grid::with_cells(2, &[[2, 0], [16, 4]], 20).unwrap();
        assert_eq!(grid.to_string(), "Score: 20\n 2  .\n16  4\n");
    }
}
