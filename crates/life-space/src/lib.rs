//! Spatial data structures for Life simulations.
//!
//! This crate defines [`Grid`], the bounded sparse set of alive cells that
//! every generation is stored as, together with the 8-connected (Moore)
//! neighbourhood it answers queries over.
//!
//! # Boundaries
//!
//! Grids are bounded, not toroidal: a cell on the edge simply has fewer
//! neighbours, and positions outside `[0, height) x [0, width)` are never
//! alive.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod neighbourhood;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::GridError;
pub use grid::Grid;
pub use neighbourhood::{Neighbours, MOORE_OFFSETS};
