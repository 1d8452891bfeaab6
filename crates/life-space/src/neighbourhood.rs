//! The 8-connected (Moore) neighbourhood on a bounded plane.

use life_core::Position;
use smallvec::SmallVec;

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
///
/// Neighbour enumeration always follows this order, so the sequence
/// returned for a given position is stable across calls.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// In-bounds neighbours of a cell. At most 8, so never heap-allocated.
pub type Neighbours = SmallVec<[Position; 8]>;

/// Resolve a single axis value against `[0, len)`.
/// Returns `None` when the value falls off the edge.
#[inline]
pub(crate) fn resolve_axis(val: i32, len: u32) -> Option<i32> {
    if val >= 0 && (val as u32) < len {
        Some(val)
    } else {
        None
    }
}

/// Neighbours of `pos` inside a `height x width` plane, in
/// [`MOORE_OFFSETS`] order. Off-plane neighbours are omitted.
pub(crate) fn moore_neighbours(pos: Position, width: u32, height: u32) -> Neighbours {
    let mut out = Neighbours::new();
    for (dr, dc) in MOORE_OFFSETS {
        let nr = resolve_axis(pos.row.saturating_add(dr), height);
        let nc = resolve_axis(pos.col.saturating_add(dc), width);
        if let (Some(row), Some(col)) = (nr, nc) {
            out.push(Position { row, col });
        }
    }
    out
}
