//! Pattern sources for Life simulations.
//!
//! A [`Pattern`] is a set of alive positions relative to its own origin.
//! Patterns come from a [`PatternLoader`]:
//!
//! - [`PlainTextLoader`]: `*`/`1`/`O` alive, `.`/`0`/`·` dead, one row per line.
//! - [`JsonLoader`]: `{"alive_cells": [[row, col], ...]}`.
//! - [`RandomSoupLoader`]: seeded random fill at a given density.
//!
//! or from the builtin [`library`]. [`Pattern::place()`] turns a pattern
//! into a [`Grid`](life_space::Grid), rejecting any cell that would land
//! outside it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod json;
pub mod library;
pub mod loader;
pub mod pattern;
pub mod plaintext;
pub mod soup;

pub use error::PatternError;
pub use json::JsonLoader;
pub use loader::{loader_for_path, PatternLoader};
pub use pattern::Pattern;
pub use plaintext::PlainTextLoader;
pub use soup::RandomSoupLoader;
