//! Life: Conway's Game of Life and other Life-like cellular automata.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Life sub-crates. For most users, adding `life` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use life::prelude::*;
//!
//! // A horizontal blinker in the middle of a 5x5 grid.
//! let grid = PlainTextLoader::new("***")
//!     .load()
//!     .unwrap()
//!     .place(5, 5, (2, 1))
//!     .unwrap();
//!
//! let controller = SimulationController::new(RunOptions {
//!     max_generations: Some(100),
//!     ..RunOptions::default()
//! });
//! let state = controller.run(grid.clone(), Engine::new(), Box::new(ConwayRules), None);
//!
//! // Two generations later the blinker is back where it started.
//! assert_eq!(state.termination, Termination::Oscillating { period: 2 });
//! assert_eq!(state.generation, Generation(2));
//! assert_eq!(state.grid, grid);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `life-core` | `Position`, `Generation` |
//! | [`space`] | `life-space` | `Grid` and the Moore neighbourhood |
//! | [`rules`] | `life-rules` | `RuleSet`, Conway and rulestring rules |
//! | [`engine`] | `life-engine` | Stepping, cycle detection, run loop, rendering |
//! | [`patterns`] | `life-patterns` | Pattern loaders and the builtin library |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates and generation counters (`life-core`).
pub use life_core as types;

/// The bounded sparse grid (`life-space`).
///
/// [`space::Grid`] stores one generation as a set of alive positions.
pub use life_space as space;

/// Rule predicates (`life-rules`).
///
/// The [`rules::RuleSet`] trait is the extension point for other
/// automata; [`rules::LifeLikeRule`] parses `B3/S23`-style rulestrings.
pub use life_rules as rules;

/// Stepping, cycle detection and the run loop (`life-engine`).
///
/// [`engine::Simulation`] for lockstep stepping,
/// [`engine::SimulationController`] for the render/check/step loop, and
/// [`engine::BackgroundRun`] to run that loop on its own thread.
pub use life_engine as engine;

/// Pattern loaders and the builtin library (`life-patterns`).
pub use life_patterns as patterns;

/// Common imports for typical usage.
///
/// ```rust
/// use life::prelude::*;
/// ```
///
/// This imports the grid, the rule types, the engine and controller, the
/// renderers, and the pattern loaders.
pub mod prelude {
    // Core types
    pub use life_core::{Generation, Position};

    // Space
    pub use life_space::{Grid, GridError};

    // Rules
    pub use life_rules::{ConwayRules, LifeLikeRule, RuleParseError, RuleSet};

    // Engine
    pub use life_engine::{
        BackgroundRun, ConfigError, Engine, RunOptions, SimConfig, Simulation,
        SimulationController, SimulationState, StopHandle, Termination, Verdict,
    };

    // Rendering
    pub use life_engine::{ConsoleRenderer, NullRenderer, Renderer};

    // Patterns
    pub use life_patterns::{
        library, JsonLoader, Pattern, PatternError, PatternLoader, PlainTextLoader,
        RandomSoupLoader,
    };
}
