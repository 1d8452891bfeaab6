//! Reusable grid fixtures.
//!
//! Small patterns placed with enough margin that edge effects never touch
//! them during the first few generations. All fixtures panic on invalid
//! input: they are for tests only.

use life_core::Position;
use life_patterns::library;
use life_space::Grid;

/// A `width x height` grid with the given `(row, col)` cells alive.
pub fn grid_with(width: u32, height: u32, cells: &[(i32, i32)]) -> Grid {
    Grid::from_cells(width, height, cells.iter().map(|&c| Position::from(c)))
        .expect("fixture cells must be in bounds")
}

/// The named library pattern centred on a `size x size` grid.
pub fn centred(name: &str, size: u32) -> Grid {
    let pattern = library::get(name).expect("unknown library pattern");
    let offset = pattern.centered_offset(size, size);
    pattern
        .place(size, size, offset)
        .expect("library pattern must fit")
}

/// Horizontal blinker in the middle of a 5x5 grid.
pub fn blinker() -> Grid {
    grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)])
}

/// Vertical blinker phase matching [`blinker`].
pub fn blinker_vertical() -> Grid {
    grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)])
}

/// 2x2 block on a 4x4 grid.
pub fn block() -> Grid {
    grid_with(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)])
}

/// South-east glider near the top-left of a 20x20 grid.
pub fn glider() -> Grid {
    library::get("glider")
        .expect("glider is builtin")
        .place(20, 20, (1, 1))
        .expect("glider fits")
}
