//! Move directions.

use serde::{Deserialize, Serialize};

/// A direction to slide tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All four directions, in declaration order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row delta: -1 for `Up`, 1 for `Down`, 0 otherwise.
    #[must_use]
    pub const fn row_delta(self) -> i32 {
        match self {
            Move::Up => -1,
            Move::Down => 1,
            Move::Left | Move::Right => 0,
        }
    }

    /// Column delta: -1 for `Left`, 1 for `Right`, 0 otherwise.
    #[must_use]
    pub const fn col_delta(self) -> i32 {
        match self {
            Move::Left => -1,
            Move::Right => 1,
            Move::Up | Move::Down => 0,
        }
    }

    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Move::Up | Move::Down)
    }

    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Move::Left | Move::Right)
    }

    /// True when tiles travel toward the high-index end of their line.
    #[must_use]
    pub(crate) const fn toward_far_end(self) -> bool {
        matches!(self, Move::Right | Move::Down)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        f.write_str(name)
    }
}
