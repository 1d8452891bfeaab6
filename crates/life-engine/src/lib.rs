//! Simulation engine for Life-like cellular automata.
//!
//! Provides the [`Engine`] that turns one [`Grid`](life_space::Grid) into
//! the next, the [`StabilityDetector`] that recognises fixed points and
//! oscillators from a bounded signature history, and the run loop that
//! drives generations through both.
//!
//! Two ways to drive a simulation:
//!
//! - [`Simulation`]: lockstep, one [`step()`](Simulation::step) per call.
//! - [`SimulationController`]: the render → check → step loop with
//!   termination on a generation budget, on stability, or on a
//!   [`StopHandle`]. [`BackgroundRun`] runs the same loop on its own
//!   thread.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod background;
pub mod config;
pub mod controller;
pub mod engine;
pub mod history;
pub mod metrics;
pub mod render;
pub mod signature;
pub mod simulation;

pub use background::{BackgroundRun, GenerationReport};
pub use config::{ConfigError, SimConfig};
pub use controller::{RunOptions, SimulationController, SimulationState, StopHandle, Termination};
pub use engine::{Engine, DEFAULT_PARALLEL_THRESHOLD};
pub use history::{SignatureHistory, StabilityDetector, Verdict, DEFAULT_HISTORY_CAPACITY};
pub use metrics::StepMetrics;
pub use render::{ConsoleRenderer, NullRenderer, Renderer};
pub use signature::GenerationSignature;
pub use simulation::Simulation;
