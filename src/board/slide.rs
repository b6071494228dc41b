//! Slide and merge resolution.
//!
//! Every row (horizontal moves) or column (vertical moves) is processed as an
//! independent line. Lines are always read starting from the edge the tiles
//! travel toward, so one merge routine serves all four directions: for `Right`
//! and `Down` the line is read back to front and written back the same way.
//!
//! ## Merge rule
//!
//! A single sweep over the non-zero tiles. Two equal neighbours become one
//! tile of double value and the sweep skips past both, so a tile produced by
//! a merge never merges again in the same move:
//!
//! ```
//! use rust_2048::board::merge_line;
//!
//! let (line, gained) = merge_line(&[2, 2, 2, 2]);
//! assert_eq!(line.as_slice(), &[4, 4, 0, 0]);
//! assert_eq!(gained, 8);
//! ```

use smallvec::SmallVec;

use super::direction::Move;
use super::grid::Grid;
use crate::core::{Score, Tile};

/// Line buffer; boards up to 8×8 never touch the heap.
pub type LineBuf<T> = SmallVec<[T; 8]>;

/// Result of sliding a whole grid in one direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideOutcome {
    pub(crate) grid: Grid,
    pub(crate) gained: Score,
    pub(crate) moved: bool,
}

impl SlideOutcome {
    /// The slid grid, with `gained` already added to its score.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Score produced by merges in this slide.
    #[must_use]
    pub fn gained(&self) -> Score {
        self.gained
    }

    /// Whether any cell differs from the input grid.
    #[must_use]
    pub fn moved(&self) -> bool {
        self.moved
    }

    /// A slide counts as a legal move if it moved a tile or scored.
    #[must_use]
    pub fn is_effective(&self) -> bool {
        self.moved || self.gained > 0
    }
}

/// Compact and merge one line toward index 0.
///
/// Returns the new line, zero-padded to the input length, and the score
/// gained from its merges. Two tiles of the largest representable value
/// (`1 << 31`) never merge.
pub fn merge_line(line: &[Tile]) -> (LineBuf<Tile>, Score) {
    let tiles: LineBuf<Tile> = line.iter().copied().filter(|&value| value != 0).collect();

    let mut merged = LineBuf::with_capacity(line.len());
    let mut gained: Score = 0;
    let mut i = 0;
    while i < tiles.len() {
        // A pair whose sum does not fit in a `Tile` stays unmerged.
        let pair = tiles
            .get(i + 1)
            .filter(|&&next| next == tiles[i])
            .and_then(|_| tiles[i].checked_mul(2));
        if let Some(value) = pair {
            merged.push(value);
            gained += Score::from(value);
            i += 2;
        } else {
            merged.push(tiles[i]);
            i += 1;
        }
    }

    merged.resize(line.len(), 0);
    (merged, gained)
}

/// Slide every line of `grid` in `direction`.
///
/// The input grid is untouched; the outcome carries a new grid.
pub fn slide(grid: &Grid, direction: Move) -> SlideOutcome {
    let size = grid.size();
    let source = grid.cells();
    let mut cells = source.to_vec();
    let mut gained: Score = 0;

    for lane in 0..size {
        let indices: LineBuf<usize> = (0..size)
            .map(|step| {
                let pos = if direction.toward_far_end() { size - 1 - step } else { step };
                if direction.is_horizontal() {
                    lane * size + pos
                } else {
                    pos * size + lane
                }
            })
            .collect();

        let line: LineBuf<Tile> = indices.iter().map(|&idx| source[idx]).collect();
        let (merged, line_gain) = merge_line(&line);

        for (&idx, &value) in indices.iter().zip(merged.iter()) {
            cells[idx] = value;
        }
        gained += line_gain;
    }

    let moved = cells.as_slice() != source;
    SlideOutcome {
        grid: Grid::from_parts(size, cells, grid.score() + gained),
        gained,
        moved,
    }
}

/// Whether sliding `grid` in `direction` would be a legal move.
#[must_use]
pub fn can_move(grid: &Grid, direction: Move) -> bool {
    slide(grid, direction).is_effective()
}

/// Whether any direction is legal. `false` means the board is terminal.
#[must_use]
pub fn has_any_move(grid: &Grid) -> bool {
    Move::ALL.iter().any(|&direction| can_move(grid, direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[[Tile; 4]; 4]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_merge_line_cases() {
        let cases: [([Tile; 4], [Tile; 4], Score); 7] = [
            ([0, 0, 0, 0], [0, 0, 0, 0], 0),
            ([0, 0, 0, 2], [2, 0, 0, 0], 0),
            ([2, 0, 2, 0], [4, 0, 0, 0], 4),
            ([2, 2, 2, 0], [4, 2, 0, 0], 4),
            ([2, 2, 2, 2], [4, 4, 0, 0], 8),
            ([4, 4, 8, 8], [8, 16, 0, 0], 24),
            ([2, 4, 2, 4], [2, 4, 2, 4], 0),
        ];

        for (input, expected, score) in cases {
            let (line, gained) = merge_line(&input);
            assert_eq!(line.as_slice(), &expected, "input {:?}", input);
            assert_eq!(gained, score, "input {:?}", input);
        }
    }

    #[test]
    fn test_merged_tile_does_not_remerge() {
        // 2+2 makes a 4, which must not absorb the following 4.
        let (line, gained) = merge_line(&[2, 2, 4, 0]);
        assert_eq!(line.as_slice(), &[4, 4, 0, 0]);
        assert_eq!(gained, 4);
    }

    #[test]
    fn test_largest_tiles_do_not_merge() {
        let top: Tile = 1 << 31;

        let (line, gained) = merge_line(&[top, top, 0, 0]);
        assert_eq!(line.as_slice(), &[top, top, 0, 0]);
        assert_eq!(gained, 0);

        let (line, gained) = merge_line(&[1 << 30, 1 << 30, top, 0]);
        assert_eq!(line.as_slice(), &[top, top, 0, 0]);
        assert_eq!(gained, 1 << 31);

        let g = Grid::from_rows(&[[top, top], [0, 0]]).unwrap();
        assert!(!can_move(&g, Move::Left));
        assert!(!can_move(&g, Move::Right));
        assert!(can_move(&g, Move::Down));
    }

    #[test]
    fn test_slide_left() {
        let g = grid(&[[2, 2, 0, 0], [2, 0, 2, 0], [4, 0, 4, 0], [2, 2, 2, 2]]);
        let outcome = slide(&g, Move::Left);

        assert_eq!(
            outcome.grid().to_rows(),
            vec![vec![4, 0, 0, 0], vec![4, 0, 0, 0], vec![8, 0, 0, 0], vec![4, 4, 0, 0]]
        );
        assert_eq!(outcome.gained(), 4 + 4 + 8 + 8);
        assert_eq!(outcome.grid().score(), 24);
        assert!(outcome.moved());
    }

    #[test]
    fn test_slide_right() {
        let g = grid(&[[2, 2, 2, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let outcome = slide(&g, Move::Right);

        assert_eq!(outcome.grid().to_rows()[0], vec![0, 0, 2, 4]);
        assert_eq!(outcome.gained(), 4);
    }

    #[test]
    fn test_slide_up() {
        let g = grid(&[[2, 0, 4, 2], [2, 0, 0, 2], [0, 0, 4, 2], [0, 0, 0, 2]]);
        let outcome = slide(&g, Move::Up);

        assert_eq!(
            outcome.grid().to_rows(),
            vec![vec![4, 0, 8, 4], vec![0, 0, 0, 4], vec![0, 0, 0, 0], vec![0, 0, 0, 0]]
        );
        assert_eq!(outcome.gained(), 4 + 8 + 8);
    }

    #[test]
    fn test_slide_down() {
        let g = grid(&[[2, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0]]);
        let outcome = slide(&g, Move::Down);

        let col: Vec<Tile> = outcome.grid().rows().map(|row| row[0]).collect();
        assert_eq!(col, vec![0, 0, 2, 4]);
    }

    #[test]
    fn test_slide_without_change() {
        let g = grid(&[[2, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let outcome = slide(&g, Move::Left);

        assert!(!outcome.moved());
        assert_eq!(outcome.gained(), 0);
        assert!(!outcome.is_effective());
        assert_eq!(outcome.grid(), &g);
        assert!(can_move(&g, Move::Right));
        assert!(can_move(&g, Move::Down));
        assert!(!can_move(&g, Move::Up));
    }

    #[test]
    fn test_score_only_outcome_is_effective() {
        let g = grid(&[[2, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let outcome = SlideOutcome {
            grid: g,
            gained: 8,
            moved: false,
        };

        assert!(outcome.is_effective());
    }

    #[test]
    fn test_checkerboard_is_terminal() {
        let g = grid(&[[4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4]]);

        for direction in Move::ALL {
            assert!(!can_move(&g, direction), "{direction} should be blocked");
        }
        assert!(!has_any_move(&g));
    }

    #[test]
    fn test_vertical_pair_only_allows_vertical_moves() {
        let g = grid(&[[2, 4, 2, 4], [2, 8, 16, 32], [64, 128, 256, 512], [4, 2, 4, 2]]);

        assert!(has_any_move(&g));
        assert!(can_move(&g, Move::Up));
        assert!(can_move(&g, Move::Down));
        assert!(!can_move(&g, Move::Left));
        assert!(!can_move(&g, Move::Right));
    }

    #[test]
    fn test_other_board_sizes() {
        let g = Grid::from_rows(&[[2, 0, 2], [0, 0, 0], [4, 4, 4]]).unwrap();
        let outcome = slide(&g, Move::Right);

        assert_eq!(
            outcome.grid().to_rows(),
            vec![vec![0, 0, 4], vec![0, 0, 0], vec![0, 4, 8]]
        );
        assert_eq!(outcome.gained(), 12);

        let single = Grid::from_rows(&[[2]]).unwrap();
        assert!(!has_any_move(&single));
    }
}
