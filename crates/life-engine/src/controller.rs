//! The run loop: render, check termination, wait, step.
//!
//! [`SimulationController`] drives a [`Simulation`] until one of its
//! termination conditions holds. Each iteration renders the current
//! generation, then checks whether to stop, then sleeps for the configured
//! delay, then computes the next generation. With a budget of `N`
//! generations the renderer therefore sees generations `0..=N`, each
//! exactly once.
//!
//! # Cancellation
//!
//! A [`StopHandle`] is a shared flag checked once per iteration. Setting
//! it from any thread ends the run with [`Termination::Cancelled`] at the
//! next check; the simulation is left at a consistent generation and can
//! be resumed after [`StopHandle::clear()`].

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use life_core::Generation;
use life_rules::RuleSet;
use life_space::Grid;

use crate::config::{ConfigError, SimConfig};
use crate::engine::Engine;
use crate::history::{SignatureHistory, Verdict, DEFAULT_HISTORY_CAPACITY};
use crate::render::Renderer;
use crate::simulation::Simulation;

// ── RunOptions ───────────────────────────────────────────────────

/// When a run stops and how fast it goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Stop after this many steps. `None` = no budget.
    pub max_generations: Option<u64>,
    /// Stop as soon as the detector reports a fixed point or oscillation.
    pub stop_on_stable: bool,
    /// Pause before computing each generation. Never affects results.
    pub delay: Duration,
    /// Signatures kept for cycle detection by runs started with
    /// [`SimulationController::run()`].
    pub history_capacity: usize,
}

impl RunOptions {
    /// Check the options before a run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::HistoryCapacityZero);
        }
        Ok(())
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            max_generations: None,
            stop_on_stable: true,
            delay: Duration::ZERO,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

// ── Termination ──────────────────────────────────────────────────

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The generation budget was used up.
    MaxGenerations,
    /// The grid stopped changing. Includes dying out.
    Stabilized,
    /// The grid entered a cycle.
    Oscillating {
        /// Generations per cycle, at least 2.
        period: usize,
    },
    /// The [`StopHandle`] was triggered.
    Cancelled,
}

impl From<Verdict> for Termination {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Stable => Self::Stabilized,
            Verdict::Oscillating { period } => Self::Oscillating { period },
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxGenerations => write!(f, "reached generation limit"),
            Self::Stabilized => write!(f, "stabilized"),
            Self::Oscillating { period } => write!(f, "oscillating with period {period}"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

// ── SimulationState ──────────────────────────────────────────────

/// Final state of a finished run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationState {
    /// The last generation computed.
    pub grid: Grid,
    /// Its generation number.
    pub generation: Generation,
    /// Why the run ended.
    pub termination: Termination,
    /// Signatures the detector still held, oldest first.
    pub history: SignatureHistory,
}

impl SimulationState {
    /// Snapshot `sim` with the given reason.
    pub fn capture(sim: &Simulation, termination: Termination) -> Self {
        Self {
            grid: sim.grid().clone(),
            generation: sim.generation(),
            termination,
            history: sim.history().clone(),
        }
    }

    /// Whether every cell is dead.
    pub fn is_extinct(&self) -> bool {
        self.grid.is_extinct()
    }
}

// ── StopHandle ───────────────────────────────────────────────────

/// Cloneable cancellation flag shared with a running controller.
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    /// A fresh, untriggered handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the run to end at its next termination check.
    pub fn stop(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether [`stop()`](StopHandle::stop) has been called since the last clear.
    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Re-arm the handle so a cancelled simulation can be resumed.
    pub fn clear(&self) {
        self.flag.store(false, Ordering::Release);
    }
}

// ── SimulationController ─────────────────────────────────────────

/// Drives simulations until they finish, are stopped, or run out of budget.
#[derive(Clone, Debug, Default)]
pub struct SimulationController {
    options: RunOptions,
    stop: StopHandle,
}

impl SimulationController {
    /// A controller with its own [`StopHandle`].
    pub fn new(options: RunOptions) -> Self {
        Self {
            options,
            stop: StopHandle::new(),
        }
    }

    /// A controller with `options`, rejected if they fail
    /// [`RunOptions::validate()`].
    pub fn try_new(options: RunOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self::new(options))
    }

    /// A controller with the options described by `config`.
    pub fn from_config(config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.run_options()))
    }

    /// Use `stop` instead of the controller's own handle.
    pub fn with_stop_handle(mut self, stop: StopHandle) -> Self {
        self.stop = stop;
        self
    }

    /// The run options.
    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// A handle that cancels runs driven by this controller.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Run `initial` from generation 0 until it terminates.
    ///
    /// `max_generations` bounds the generation number reached. A
    /// `history_capacity` of 0 is treated as 1; use
    /// [`try_new()`](SimulationController::try_new) to reject it instead.
    pub fn run(
        &self,
        initial: Grid,
        engine: Engine,
        rules: Box<dyn RuleSet>,
        renderer: Option<&mut dyn Renderer>,
    ) -> SimulationState {
        let capacity = self.options.history_capacity.max(1);
        let mut sim = Simulation::new(initial, engine, rules, capacity);
        let termination = self.drive(&mut sim, self.options.max_generations, renderer);
        SimulationState::capture(&sim, termination)
    }

    /// Continue an existing simulation until it terminates.
    ///
    /// `max_generations` counts steps taken by this call, so a paused
    /// simulation can be resumed with a fresh budget. A generation already
    /// rendered before the pause is not rendered again.
    pub fn resume(&self, sim: &mut Simulation, renderer: Option<&mut dyn Renderer>) -> Termination {
        self.drive(sim, self.options.max_generations, renderer)
    }

    /// Advance an existing simulation by at most `generations` steps.
    ///
    /// Stability and cancellation still end the run early.
    pub fn run_for(
        &self,
        sim: &mut Simulation,
        generations: u64,
        renderer: Option<&mut dyn Renderer>,
    ) -> Termination {
        self.drive(sim, Some(generations), renderer)
    }

    fn drive(
        &self,
        sim: &mut Simulation,
        budget: Option<u64>,
        mut renderer: Option<&mut dyn Renderer>,
    ) -> Termination {
        let mut steps: u64 = 0;
        loop {
            // 1. Show the current generation.
            if let Some(r) = renderer.as_deref_mut() {
                sim.render_to(r);
            }

            // 2. Check termination.
            if let Some(termination) = self.termination(sim, steps, budget) {
                log_termination(sim, termination);
                return termination;
            }

            // 3. Pace, then advance.
            if !self.options.delay.is_zero() {
                thread::sleep(self.options.delay);
            }
            sim.step();
            steps += 1;
        }
    }

    fn termination(&self, sim: &Simulation, steps: u64, budget: Option<u64>) -> Option<Termination> {
        if budget.is_some_and(|max| steps >= max) {
            return Some(Termination::MaxGenerations);
        }
        if self.options.stop_on_stable {
            if let Some(verdict) = sim.verdict() {
                return Some(verdict.into());
            }
        }
        if self.stop.is_stopped() {
            return Some(Termination::Cancelled);
        }
        None
    }
}

fn log_termination(sim: &Simulation, termination: Termination) {
    let generation = sim.generation();
    match termination {
        Termination::Stabilized if sim.grid().is_extinct() => {
            log::info!("all cells died by generation {generation}");
        }
        Termination::Stabilized => log::info!("pattern stabilized at generation {generation}"),
        Termination::Oscillating { period } => {
            log::info!("pattern oscillating with period {period} at generation {generation}");
        }
        Termination::MaxGenerations => {
            log::info!("stopped at generation limit {generation}");
        }
        Termination::Cancelled => log::info!("run cancelled at generation {generation}"),
    }
}
