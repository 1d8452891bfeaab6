//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] gathers everything needed to start a run: grid size,
//! rule, generation budget, delay, detector window, and worker count.
//! It deserializes from JSON with every field optional, and
//! [`validate()`](SimConfig::validate) checks the structural invariants
//! before any grid is built.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use life_rules::LifeLikeRule;
use life_space::{Grid, GridError};
use serde::{Deserialize, Serialize};

use crate::controller::RunOptions;
use crate::engine::{Engine, DEFAULT_PARALLEL_THRESHOLD};
use crate::history::DEFAULT_HISTORY_CAPACITY;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building or validating a simulation setup.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Width or height is zero.
    InvalidDimensions {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
    /// Grid construction rejected the dimensions.
    Grid(GridError),
    /// `delay_secs` is NaN, negative, or too large for a `Duration`.
    InvalidDelay {
        /// The invalid value.
        value: f64,
    },
    /// `history_capacity` is zero.
    HistoryCapacityZero,
    /// The initial grid does not have the configured dimensions.
    GridSizeMismatch {
        /// Configured `(width, height)`.
        expected: (u32, u32),
        /// The grid's `(width, height)`.
        found: (u32, u32),
    },
    /// The configuration text could not be decoded.
    Parse {
        /// Decoder message.
        reason: String,
    },
    /// A background thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of which thread failed.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidDelay { value } => {
                write!(f, "delay_secs must be a non-negative number of seconds, got {value}")
            }
            Self::HistoryCapacityZero => write!(f, "history_capacity must be at least 1"),
            Self::GridSizeMismatch { expected, found } => write!(
                f,
                "initial grid is {}x{}, configuration expects {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            Self::Parse { reason } => write!(f, "invalid configuration: {reason}"),
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "thread spawn failed: {reason}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        match e {
            GridError::EmptyGrid { width, height } => Self::InvalidDimensions { width, height },
            other => Self::Grid(other),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse {
            reason: e.to_string(),
        }
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for one simulation run.
///
/// Missing JSON fields take their [`Default`] values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of columns. Default: 40.
    pub width: u32,
    /// Number of rows. Default: 20.
    pub height: u32,
    /// Rule in `B…/S…` notation. Default: Conway (B3/S23).
    pub rule: LifeLikeRule,
    /// Generation budget; `None` runs until stable or stopped. Default: `None`.
    pub generations: Option<u64>,
    /// Pause between generations, in seconds. Default: 0.1.
    pub delay_secs: f64,
    /// Stop when the detector reports a fixed point or oscillation. Default: true.
    pub stop_on_stable: bool,
    /// `(row, col)` offset applied when placing the initial pattern. Default: `(0, 0)`.
    pub offset: (i32, i32),
    /// Signatures kept for cycle detection. Default: 16. Minimum: 1.
    pub history_capacity: usize,
    /// Worker threads for large steps. `None` = sequential.
    pub workers: Option<usize>,
    /// Candidate count at which a step is split across workers. Default: 4096.
    pub parallel_threshold: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 20,
            rule: LifeLikeRule::conway(),
            generations: None,
            delay_secs: 0.1,
            stop_on_stable: true,
            offset: (0, 0),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            workers: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SimConfig {
    /// Decode a configuration from JSON and validate it.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Dimensions must produce a constructible grid.
        self.empty_grid()?;
        // 2. Delay must be a usable Duration.
        if Duration::try_from_secs_f64(self.delay_secs).is_err() {
            return Err(ConfigError::InvalidDelay {
                value: self.delay_secs,
            });
        }
        // 3. Detector needs at least one slot.
        if self.history_capacity == 0 {
            return Err(ConfigError::HistoryCapacityZero);
        }
        Ok(())
    }

    /// An empty grid of the configured size.
    pub fn empty_grid(&self) -> Result<Grid, ConfigError> {
        Ok(Grid::new(self.width, self.height)?)
    }

    /// Worker count with explicit values clamped to `[1, 64]`.
    pub fn resolved_worker_count(&self) -> usize {
        self.workers.map_or(1, |n| n.clamp(1, 64))
    }

    /// The engine described by `workers` and `parallel_threshold`.
    pub fn engine(&self) -> Engine {
        Engine::with_workers(self.resolved_worker_count(), self.parallel_threshold)
    }

    /// Run-loop options for a [`SimulationController`](crate::SimulationController).
    ///
    /// Call [`validate()`](SimConfig::validate) first: an invalid delay is
    /// treated as zero here.
    pub fn run_options(&self) -> RunOptions {
        let delay = Duration::try_from_secs_f64(self.delay_secs).unwrap_or(Duration::ZERO);
        RunOptions {
            max_generations: self.generations,
            stop_on_stable: self.stop_on_stable,
            delay,
            history_capacity: self.history_capacity,
        }
    }
}
