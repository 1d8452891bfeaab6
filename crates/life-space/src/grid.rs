//! Bounded sparse grid of alive cells.

use std::collections::HashSet;

use indexmap::IndexSet;
use life_core::Position;

use crate::error::GridError;
use crate::neighbourhood::{moore_neighbours, Neighbours};

/// One generation of a Life simulation.
///
/// A `Grid` is a fixed `height x width` rectangle plus the set of alive
/// positions inside it. Storage is proportional to the number of alive
/// cells, not the area. Cells are addressed as `(row, col)` with
/// `0 <= row < height` and `0 <= col < width`; the rectangle does not wrap.
///
/// Grids are treated as immutable snapshots: producing the next generation
/// builds a new `Grid` via [`with_cells`](Grid::with_cells) rather than
/// editing this one, so a generation handed to a renderer or kept in a
/// history can never change underneath its holder.
///
/// Equality is value equality over `(width, height, alive set)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    alive: HashSet<Position>,
}

impl Grid {
    /// Largest accepted dimension: coordinates are `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an empty grid of `width x height` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds [`Grid::MAX_DIM`].
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            width,
            height,
            alive: HashSet::new(),
        })
    }

    /// Create a grid with the given alive cells.
    ///
    /// Fails with [`GridError::CellOutOfBounds`] on the first cell outside
    /// the rectangle; nothing is clipped or wrapped.
    pub fn from_cells(
        width: u32,
        height: u32,
        cells: impl IntoIterator<Item = Position>,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;
        for position in cells {
            if !grid.contains(position) {
                return Err(GridError::CellOutOfBounds {
                    position,
                    width,
                    height,
                });
            }
            grid.alive.insert(position);
        }
        Ok(grid)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells in the rectangle (alive or dead).
    pub fn cell_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Whether `position` lies inside the rectangle.
    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && (position.row as u32) < self.height
            && position.col >= 0
            && (position.col as u32) < self.width
    }

    /// Whether the cell at `position` is alive.
    ///
    /// Positions outside the rectangle are always dead.
    pub fn alive_at(&self, position: Position) -> bool {
        self.alive.contains(&position)
    }

    /// The in-bounds neighbours of `position`.
    ///
    /// Interior cells have 8, edge cells 5 and corner cells 3. The order
    /// follows [`MOORE_OFFSETS`](crate::MOORE_OFFSETS) and is therefore
    /// the same on every call.
    pub fn neighbors(&self, position: Position) -> Neighbours {
        moore_neighbours(position, self.width, self.height)
    }

    /// Number of alive cells among [`neighbors`](Grid::neighbors), in `0..=8`.
    pub fn live_neighbor_count(&self, position: Position) -> u8 {
        self.neighbors(position)
            .iter()
            .filter(|n| self.alive.contains(n))
            .count() as u8
    }

    /// A grid with the same dimensions and `cells` as its alive set.
    ///
    /// This is how successive generations are produced. Positions outside
    /// the rectangle are dropped so the bounds invariant holds for every
    /// grid; callers that must reject such cells use
    /// [`from_cells`](Grid::from_cells) instead.
    pub fn with_cells(&self, cells: impl IntoIterator<Item = Position>) -> Self {
        let alive = cells.into_iter().filter(|p| self.contains(*p)).collect();
        Self {
            width: self.width,
            height: self.height,
            alive,
        }
    }

    /// The cells that can be alive in the next generation.
    ///
    /// Every alive cell plus every in-bounds neighbour of an alive cell. A
    /// cell outside this set is dead and has no live neighbour, so no rule
    /// that leaves such cells dead can change it. The size is bounded by
    /// `9 * alive_count()`, independent of the grid area.
    ///
    /// Iteration order depends only on the alive set: alive cells are
    /// visited row-major, each followed by its new neighbours.
    pub fn candidates(&self) -> IndexSet<Position> {
        let mut out = IndexSet::with_capacity(self.alive.len() * 9);
        for cell in self.sorted_cells() {
            out.insert(cell);
            out.extend(self.neighbors(cell));
        }
        out
    }

    /// Number of alive cells.
    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }

    /// Whether no cell is alive.
    pub fn is_extinct(&self) -> bool {
        self.alive.is_empty()
    }

    /// The alive set.
    pub fn alive_cells(&self) -> &HashSet<Position> {
        &self.alive
    }

    /// Iterate alive cells in unspecified order.
    pub fn iter_alive(&self) -> impl Iterator<Item = Position> + '_ {
        self.alive.iter().copied()
    }

    /// Alive cells in row-major order.
    pub fn sorted_cells(&self) -> Vec<Position> {
        let mut cells: Vec<Position> = self.alive.iter().copied().collect();
        cells.sort_unstable();
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_width_returns_error() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(GridError::EmptyGrid {
                width: 0,
                height: 5
            })
        ));
        assert!(matches!(Grid::new(5, 0), Err(GridError::EmptyGrid { .. })));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Grid::new(big, 5),
            Err(GridError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            Grid::new(5, big),
            Err(GridError::DimensionTooLarge { name: "height", .. })
        ));
    }

    #[test]
    fn from_cells_rejects_out_of_bounds() {
        match Grid::from_cells(4, 3, [p(0, 0), p(3, 0)]) {
            Err(GridError::CellOutOfBounds {
                position,
                width: 4,
                height: 3,
            }) => assert_eq!(position, p(3, 0)),
            other => panic!("expected CellOutOfBounds, got {other:?}"),
        }
        assert!(Grid::from_cells(4, 3, [p(-1, 0)]).is_err());
        assert!(Grid::from_cells(4, 3, [p(2, 3)]).is_ok());
    }

    // ── Membership tests ────────────────────────────────────────

    #[test]
    fn alive_at_outside_bounds_is_false() {
        let g = Grid::from_cells(3, 3, [p(0, 0)]).unwrap();
        assert!(g.alive_at(p(0, 0)));
        assert!(!g.alive_at(p(1, 1)));
        assert!(!g.alive_at(p(-1, 0)));
        assert!(!g.alive_at(p(0, 99)));
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_interior() {
        let g = Grid::new(5, 5).unwrap();
        assert_eq!(g.neighbors(p(2, 2)).len(), 8);
    }

    #[test]
    fn neighbours_corner() {
        let g = Grid::new(5, 5).unwrap();
        let n = g.neighbors(p(0, 0));
        assert_eq!(n.len(), 3);
        assert!(n.contains(&p(1, 0)));
        assert!(n.contains(&p(0, 1)));
        assert!(n.contains(&p(1, 1)));
    }

    #[test]
    fn neighbours_edge() {
        let g = Grid::new(5, 5).unwrap();
        assert_eq!(g.neighbors(p(0, 2)).len(), 5);
        assert_eq!(g.neighbors(p(4, 2)).len(), 5);
    }

    #[test]
    fn neighbours_order_is_stable() {
        let g = Grid::new(6, 6).unwrap();
        assert_eq!(g.neighbors(p(3, 3)), g.neighbors(p(3, 3)));
    }

    #[test]
    fn single_cell_has_no_neighbours() {
        let g = Grid::new(1, 1).unwrap();
        assert!(g.neighbors(p(0, 0)).is_empty());
        assert_eq!(g.live_neighbor_count(p(0, 0)), 0);
    }

    #[test]
    fn live_neighbor_count_counts_only_alive() {
        let g = Grid::from_cells(5, 5, [p(1, 0), p(1, 1), p(1, 2)]).unwrap();
        assert_eq!(g.live_neighbor_count(p(0, 1)), 3);
        assert_eq!(g.live_neighbor_count(p(1, 1)), 2);
        assert_eq!(g.live_neighbor_count(p(4, 4)), 0);
    }

    #[test]
    fn live_neighbor_count_full_block() {
        let all = (0..3).flat_map(|r| (0..3).map(move |c| p(r, c)));
        let g = Grid::from_cells(3, 3, all).unwrap();
        assert_eq!(g.live_neighbor_count(p(1, 1)), 8);
        assert_eq!(g.live_neighbor_count(p(0, 0)), 3);
    }

    // ── Functional update ───────────────────────────────────────

    #[test]
    fn with_cells_leaves_source_untouched() {
        let g = Grid::from_cells(4, 4, [p(0, 0)]).unwrap();
        let h = g.with_cells([p(2, 2), p(3, 3)]);
        assert_eq!(g.sorted_cells(), vec![p(0, 0)]);
        assert_eq!(h.sorted_cells(), vec![p(2, 2), p(3, 3)]);
        assert_eq!((h.width(), h.height()), (4, 4));
    }

    #[test]
    fn with_cells_never_stores_out_of_bounds() {
        let g = Grid::new(2, 2).unwrap();
        let h = g.with_cells([p(0, 0), p(2, 0), p(-1, -1)]);
        assert_eq!(h.sorted_cells(), vec![p(0, 0)]);
    }

    #[test]
    fn equality_is_by_value() {
        let a = Grid::from_cells(3, 3, [p(0, 0), p(1, 1)]).unwrap();
        let b = Grid::from_cells(3, 3, [p(1, 1), p(0, 0)]).unwrap();
        let c = Grid::from_cells(4, 3, [p(1, 1), p(0, 0)]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    // ── Candidates ──────────────────────────────────────────────

    #[test]
    fn candidates_of_empty_grid_is_empty() {
        assert!(Grid::new(10, 10).unwrap().candidates().is_empty());
    }

    #[test]
    fn candidates_of_isolated_cell_is_its_block() {
        let g = Grid::from_cells(10, 10, [p(5, 5)]).unwrap();
        let c = g.candidates();
        assert_eq!(c.len(), 9);
        assert!(c.contains(&p(5, 5)));
        assert!(c.contains(&p(4, 4)));
        assert!(c.contains(&p(6, 6)));
    }

    #[test]
    fn candidates_order_depends_only_on_alive_set() {
        let cells = [(7, 3), (0, 0), (4, 9), (4, 8), (9, 9)].map(Position::from);
        let a = Grid::from_cells(10, 10, cells).unwrap();
        let b = Grid::from_cells(10, 10, cells.into_iter().rev()).unwrap();
        let order_a: Vec<Position> = a.candidates().into_iter().collect();
        let order_b: Vec<Position> = b.candidates().into_iter().collect();
        assert_eq!(order_a, order_b);
        assert_eq!(order_a[0], Position::new(0, 0));
    }

    #[test]
    fn candidates_clipped_at_corner() {
        let g = Grid::from_cells(10, 10, [p(0, 0)]).unwrap();
        assert_eq!(g.candidates().len(), 4);
    }

    #[test]
    fn sorted_cells_are_row_major() {
        let g = Grid::from_cells(5, 5, [p(2, 0), p(0, 3), p(0, 1)]).unwrap();
        assert_eq!(g.sorted_cells(), vec![p(0, 1), p(0, 3), p(2, 0)]);
        assert_eq!(g.alive_count(), 3);
        assert!(!g.is_extinct());
        assert_eq!(g.cell_count(), 25);
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_square() {
        compliance::run_full_compliance(&Grid::new(6, 6).unwrap());
    }

    #[test]
    fn compliance_thin_strips() {
        compliance::run_full_compliance(&Grid::new(1, 7).unwrap());
        compliance::run_full_compliance(&Grid::new(7, 1).unwrap());
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_cells(max: i32) -> impl Strategy<Value = Vec<(i32, i32)>> {
        prop::collection::vec((0..max, 0..max), 0..40)
    }

    proptest! {
        #[test]
        fn candidates_cover_alive_and_neighbours(
            cells in arb_cells(12),
        ) {
            let g = Grid::from_cells(12, 12, cells.iter().map(|&(r, c)| p(r, c))).unwrap();
            let cand = g.candidates();
            for cell in g.iter_alive() {
                prop_assert!(cand.contains(&cell));
                for nb in g.neighbors(cell) {
                    prop_assert!(cand.contains(&nb));
                }
            }
            for c in &cand {
                prop_assert!(g.contains(*c));
            }
        }

        #[test]
        fn cells_outside_candidates_have_no_live_neighbours(
            cells in arb_cells(10),
        ) {
            let g = Grid::from_cells(10, 10, cells.iter().map(|&(r, c)| p(r, c))).unwrap();
            let cand = g.candidates();
            for r in 0..10 {
                for c in 0..10 {
                    let pos = p(r, c);
                    if !cand.contains(&pos) {
                        prop_assert!(!g.alive_at(pos));
                        prop_assert_eq!(g.live_neighbor_count(pos), 0);
                    }
                }
            }
        }
    }
}
