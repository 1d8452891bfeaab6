//! A free-floating set of alive cells.

use std::collections::BTreeSet;

use life_core::Position;
use life_space::Grid;

use crate::error::PatternError;

/// Alive positions relative to the pattern's own origin.
///
/// A pattern has no dimensions of its own; it only gains bounds when
/// [`place`](Pattern::place)d on a grid. Cells are kept in row-major order
/// and duplicates collapse, so two patterns are equal iff they describe
/// the same set. An empty pattern is valid and places as an empty grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pattern {
    cells: BTreeSet<Position>,
}

impl Pattern {
    /// A pattern containing `cells`.
    pub fn new(cells: impl IntoIterator<Item = Position>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// A pattern from `(row, col)` pairs.
    pub fn from_coords(coords: &[(i32, i32)]) -> Self {
        coords.iter().map(|&c| Position::from(c)).collect()
    }

    /// Number of alive cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the pattern has no alive cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `position` is alive in the pattern.
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }

    /// Alive cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    /// The pattern shifted by `(d_row, d_col)`.
    pub fn translate(&self, d_row: i32, d_col: i32) -> Self {
        self.iter().map(|p| p.offset(d_row, d_col)).collect()
    }

    /// Smallest and largest corner of the rectangle enclosing every cell.
    ///
    /// `None` for an empty pattern.
    pub fn bounding_box(&self) -> Option<(Position, Position)> {
        let first = *self.cells.first()?;
        let last = *self.cells.last()?;
        let (min_col, max_col) = self
            .cells
            .iter()
            .fold((i32::MAX, i32::MIN), |(lo, hi), p| (lo.min(p.col), hi.max(p.col)));
        Some((
            Position::new(first.row, min_col),
            Position::new(last.row, max_col),
        ))
    }

    /// Rows spanned by the bounding box (0 when empty).
    pub fn height(&self) -> u32 {
        self.bounding_box()
            .map_or(0, |(lo, hi)| hi.row.abs_diff(lo.row).saturating_add(1))
    }

    /// Columns spanned by the bounding box (0 when empty).
    pub fn width(&self) -> u32 {
        self.bounding_box()
            .map_or(0, |(lo, hi)| hi.col.abs_diff(lo.col).saturating_add(1))
    }

    /// The pattern shifted so its bounding box starts at `(0, 0)`.
    pub fn normalized(&self) -> Self {
        match self.bounding_box() {
            Some((lo, _)) => self.translate(lo.row.saturating_neg(), lo.col.saturating_neg()),
            None => Self::default(),
        }
    }

    /// Offset that centres the bounding box on a `width x height` grid.
    ///
    /// Intended for [`place`](Pattern::place) on a normalized pattern.
    pub fn centered_offset(&self, width: u32, height: u32) -> (i32, i32) {
        let d_row = (i64::from(height) - i64::from(self.height())) / 2;
        let d_col = (i64::from(width) - i64::from(self.width())) / 2;
        (d_row.max(0) as i32, d_col.max(0) as i32)
    }

    /// Build a `width x height` grid with this pattern shifted by `offset`.
    ///
    /// Every shifted cell must land inside the grid: the first one that
    /// does not fails with [`PatternError::InvalidPlacement`] and no grid
    /// is produced.
    pub fn place(&self, width: u32, height: u32, offset: (i32, i32)) -> Result<Grid, PatternError> {
        let (d_row, d_col) = offset;
        let grid = Grid::from_cells(width, height, self.iter().map(|p| p.offset(d_row, d_col)))?;
        Ok(grid)
    }
}

impl FromIterator<Position> for Pattern {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<&Grid> for Pattern {
    fn from(grid: &Grid) -> Self {
        grid.iter_alive().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_space::GridError;
    use proptest::prelude::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn duplicates_collapse() {
        let pat = Pattern::from_coords(&[(1, 1), (1, 1), (0, 2)]);
        assert_eq!(pat.len(), 2);
        assert_eq!(pat.iter().collect::<Vec<_>>(), vec![p(0, 2), p(1, 1)]);
    }

    #[test]
    fn empty_pattern_has_no_box() {
        let pat = Pattern::default();
        assert!(pat.is_empty());
        assert_eq!(pat.bounding_box(), None);
        assert_eq!((pat.width(), pat.height()), (0, 0));
        assert_eq!(pat.normalized(), pat);
    }

    #[test]
    fn bounding_box_spans_all_cells() {
        let pat = Pattern::from_coords(&[(2, 5), (3, 1), (6, 4)]);
        assert_eq!(pat.bounding_box(), Some((p(2, 1), p(6, 5))));
        assert_eq!(pat.height(), 5);
        assert_eq!(pat.width(), 5);
    }

    #[test]
    fn translate_shifts_every_cell() {
        let pat = Pattern::from_coords(&[(0, 0), (1, 2)]);
        assert_eq!(
            pat.translate(3, -1),
            Pattern::from_coords(&[(3, -1), (4, 1)])
        );
    }

    #[test]
    fn normalized_starts_at_origin() {
        let pat = Pattern::from_coords(&[(5, 7), (6, 9)]);
        assert_eq!(pat.normalized(), Pattern::from_coords(&[(0, 0), (1, 2)]));
    }

    #[test]
    fn centered_offset_centres_box() {
        let pat = Pattern::from_coords(&[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(pat.centered_offset(9, 9), (4, 3));
        // Larger than the grid: never negative.
        assert_eq!(pat.centered_offset(1, 1), (0, 0));
    }

    // ── Placement ────────────────────────────────────────────────

    #[test]
    fn place_applies_offset() {
        let pat = Pattern::from_coords(&[(0, 0), (1, 1)]);
        let grid = pat.place(5, 5, (2, 3)).unwrap();
        assert_eq!(grid.sorted_cells(), vec![p(2, 3), p(3, 4)]);
    }

    #[test]
    fn place_rejects_out_of_bounds() {
        let pat = Pattern::from_coords(&[(0, 0), (0, 4)]);
        match pat.place(4, 4, (0, 0)) {
            Err(PatternError::InvalidPlacement {
                position,
                width: 4,
                height: 4,
            }) => assert_eq!(position, p(0, 4)),
            other => panic!("expected InvalidPlacement, got {other:?}"),
        }
    }

    #[test]
    fn place_rejects_negative_offset_past_edge() {
        let pat = Pattern::from_coords(&[(0, 0)]);
        assert!(matches!(
            pat.place(4, 4, (-1, 0)),
            Err(PatternError::InvalidPlacement { .. })
        ));
    }

    #[test]
    fn place_rejects_empty_grid() {
        match Pattern::default().place(0, 3, (0, 0)) {
            Err(PatternError::Grid(GridError::EmptyGrid { .. })) => {}
            other => panic!("expected Grid(EmptyGrid), got {other:?}"),
        }
    }

    #[test]
    fn empty_pattern_places_empty_grid() {
        let grid = Pattern::default().place(3, 3, (1, 1)).unwrap();
        assert!(grid.is_extinct());
    }

    #[test]
    fn grid_round_trips_through_pattern() {
        let pat = Pattern::from_coords(&[(0, 1), (2, 2)]);
        let grid = pat.place(4, 4, (0, 0)).unwrap();
        assert_eq!(Pattern::from(&grid), pat);
    }

    proptest! {
        #[test]
        fn placed_cells_match_translated_pattern(
            cells in prop::collection::vec((0i32..5, 0i32..5), 0..15),
            d_row in 0i32..5,
            d_col in 0i32..5,
        ) {
            let pat = Pattern::from_coords(&cells);
            let grid = pat.place(10, 10, (d_row, d_col)).unwrap();
            prop_assert_eq!(Pattern::from(&grid), pat.translate(d_row, d_col));
        }
    }
}
