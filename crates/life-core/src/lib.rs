//! Core value types for the Life simulation workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the coordinate type every other crate keys its sets and maps on,
//! and the generation counter the engine advances.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;

pub use id::{Generation, Position};
