//! Canonical generation signatures for cycle detection.
//!
//! A [`GenerationSignature`] identifies a generation by its alive set,
//! independent of the order in which cells were stored. It keeps the
//! sorted cell list alongside a 64-bit FNV-1a digest: the digest makes
//! mismatches cheap to reject, and the cell list makes equality exact, so
//! a digest collision can never produce a false cycle.

use std::hash::{Hash, Hasher};

use life_core::Position;
use life_space::Grid;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Order-independent identity of one generation's alive set.
///
/// Two signatures are equal iff their alive sets are equal. Grid
/// dimensions are folded into the digest, so generations of differently
/// sized grids never compare equal either.
#[derive(Clone, Debug)]
pub struct GenerationSignature {
    digest: u64,
    width: u32,
    height: u32,
    cells: Box<[Position]>,
}

impl GenerationSignature {
    /// Compute the signature of `grid`.
    pub fn of(grid: &Grid) -> Self {
        let cells = grid.sorted_cells().into_boxed_slice();
        let mut hash = FNV_OFFSET;
        hash = fnv1a_u32(hash, grid.width());
        hash = fnv1a_u32(hash, grid.height());
        for cell in cells.iter() {
            hash = fnv1a_u32(hash, cell.row as u32);
            hash = fnv1a_u32(hash, cell.col as u32);
        }
        Self {
            digest: hash,
            width: grid.width(),
            height: grid.height(),
            cells,
        }
    }

    /// The 64-bit FNV-1a digest.
    pub fn digest(&self) -> u64 {
        self.digest
    }

    /// Alive cells in row-major order.
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Number of alive cells.
    pub fn alive_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether the generation had no alive cells.
    pub fn is_extinct(&self) -> bool {
        self.cells.is_empty()
    }
}

impl PartialEq for GenerationSignature {
    fn eq(&self, other: &Self) -> bool {
        self.digest == other.digest
            && self.width == other.width
            && self.height == other.height
            && self.cells == other.cells
    }
}

impl Eq for GenerationSignature {}

impl Hash for GenerationSignature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digest.hash(state);
    }
}

impl From<&Grid> for GenerationSignature {
    fn from(grid: &Grid) -> Self {
        Self::of(grid)
    }
}
