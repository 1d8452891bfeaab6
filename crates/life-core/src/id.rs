//! Value identifiers: the [`Position`] coordinate and [`Generation`] counter.

use std::fmt;

/// A cell coordinate on the simulation plane.
///
/// Positions are plain values: two positions are equal iff both fields are
/// equal, and they hash accordingly, so they serve directly as set and map
/// keys. Ordering is row-major (`row` first, then `col`), which is the
/// canonical order used when a grid's alive cells are written out as a
/// signature.
///
/// Coordinates are signed so that pattern offsets and neighbour arithmetic
/// can step past the grid edge without wrapping; whether a position lies
/// inside a particular grid is a question for that grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index, growing downwards.
    pub row: i32,
    /// Column index, growing rightwards.
    pub col: i32,
}

impl Position {
    /// Create a position from a row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// This position shifted by `(d_row, d_col)`.
    ///
    /// Saturates at the `i32` range instead of overflowing; a saturated
    /// position is far outside any grid and is rejected there.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// Monotonically increasing generation counter.
///
/// Starts at 0 for the initial pattern and is incremented once per step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation after this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
