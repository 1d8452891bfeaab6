//! Grid neighbourhood compliance helpers.
//!
//! These functions verify that a grid's neighbourhood satisfies the
//! invariants the engine relies on. Reused across the grid test module.

use crate::grid::Grid;
use indexmap::IndexSet;
use life_core::Position;

fn all_cells(grid: &Grid) -> Vec<Position> {
    (0..grid.height() as i32)
        .flat_map(|r| (0..grid.width() as i32).map(move |c| Position::new(r, c)))
        .collect()
}

/// Assert that `b in neighbors(a)` implies `a in neighbors(b)`.
pub fn assert_neighbours_symmetric(grid: &Grid) {
    for coord in all_cells(grid) {
        for nb in grid.neighbors(coord) {
            assert!(
                grid.neighbors(nb).contains(&coord),
                "neighbour symmetry violated: {nb} in N({coord}) but {coord} not in N({nb})"
            );
        }
    }
}

/// Assert that every neighbour is in bounds and distinct from the cell.
pub fn assert_neighbours_in_bounds(grid: &Grid) {
    for coord in all_cells(grid) {
        for nb in grid.neighbors(coord) {
            assert!(grid.contains(nb), "neighbour {nb} of {coord} out of bounds");
            assert_ne!(nb, coord, "{coord} listed as its own neighbour");
        }
    }
}

/// Assert that neighbour lists contain no duplicates and at most 8 entries.
pub fn assert_neighbours_unique(grid: &Grid) {
    for coord in all_cells(grid) {
        let n = grid.neighbors(coord);
        let unique: IndexSet<_> = n.iter().collect();
        assert_eq!(unique.len(), n.len(), "duplicate neighbours of {coord}");
        assert!(n.len() <= 8, "{coord} has {} neighbours", n.len());
    }
}

/// Assert that two calls to `neighbors` return the same sequence.
pub fn assert_neighbours_deterministic(grid: &Grid) {
    for coord in all_cells(grid) {
        assert_eq!(
            grid.neighbors(coord),
            grid.neighbors(coord),
            "neighbors({coord}) is non-deterministic"
        );
    }
}

/// Assert Chebyshev adjacency: each neighbour differs by at most 1 per axis.
pub fn assert_neighbours_adjacent(grid: &Grid) {
    for coord in all_cells(grid) {
        for nb in grid.neighbors(coord) {
            let dr = (nb.row - coord.row).abs();
            let dc = (nb.col - coord.col).abs();
            assert!(dr <= 1 && dc <= 1, "{nb} is not adjacent to {coord}");
        }
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance(grid: &Grid) {
    assert_neighbours_symmetric(grid);
    assert_neighbours_in_bounds(grid);
    assert_neighbours_unique(grid);
    assert_neighbours_deterministic(grid);
    assert_neighbours_adjacent(grid);
}
