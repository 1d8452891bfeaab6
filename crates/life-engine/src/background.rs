//! Running a simulation on a dedicated thread.
//!
//! [`BackgroundRun`] moves a [`Simulation`] and a [`SimulationController`]
//! onto a named thread and runs the normal loop there. Every rendered
//! generation is also published as a [`GenerationReport`] on a bounded
//! channel so the spawning thread can follow progress without sharing the
//! grid.
//!
//! ```text
//! Caller                         life-sim thread
//!   |                                 |
//!   |                                 | render → check → sleep → step
//!   |<--- reports [bounded(64)] ------| try_send(report)
//!   |                                 |
//!   |--- stop() (StopHandle) -------->| Termination::Cancelled
//!   |<--- join() -> SimulationState --|
//! ```
//!
//! A slow consumer never stalls the simulation: reports that do not fit
//! in the channel are dropped.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, TrySendError};
use life_core::Generation;
use life_space::Grid;

use crate::config::ConfigError;
use crate::controller::{SimulationController, SimulationState, StopHandle};
use crate::render::Renderer;
use crate::simulation::Simulation;

/// Reports buffered before new ones are dropped.
const REPORT_CHANNEL_CAPACITY: usize = 64;

// ── GenerationReport ─────────────────────────────────────────────

/// One generation as seen by the background loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    /// Generation number.
    pub generation: Generation,
    /// The generation's grid.
    pub grid: Grid,
}

impl GenerationReport {
    /// Number of alive cells.
    pub fn alive_count(&self) -> usize {
        self.grid.alive_count()
    }
}

/// Forwards each frame to an optional inner renderer, then publishes it.
struct ReportingRenderer {
    tx: Sender<GenerationReport>,
    inner: Option<Box<dyn Renderer + Send>>,
}

impl Renderer for ReportingRenderer {
    fn render(&mut self, grid: &Grid, generation: Generation) {
        if let Some(inner) = self.inner.as_mut() {
            inner.render(grid, generation);
        }
        let report = GenerationReport {
            generation,
            grid: grid.clone(),
        };
        match self.tx.try_send(report) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                log::debug!("report channel full, dropped generation {generation}");
            }
            // Nobody is listening; the run continues regardless.
            Err(TrySendError::Disconnected(_)) => {}
        }
    }
}

// ── BackgroundRun ────────────────────────────────────────────────

/// A simulation running on its own thread.
///
/// Dropping a `BackgroundRun` stops the loop and waits for the thread.
pub struct BackgroundRun {
    stop: StopHandle,
    reports: Receiver<GenerationReport>,
    handle: Option<JoinHandle<SimulationState>>,
}

impl BackgroundRun {
    /// Start `simulation` on a thread named `life-sim`.
    ///
    /// The run ends under the same conditions as
    /// [`SimulationController::resume()`]. `renderer`, if given, sees
    /// every generation on the background thread.
    pub fn spawn(
        controller: SimulationController,
        mut simulation: Simulation,
        renderer: Option<Box<dyn Renderer + Send>>,
    ) -> Result<Self, ConfigError> {
        let (tx, reports) = crossbeam_channel::bounded(REPORT_CHANNEL_CAPACITY);
        let stop = controller.stop_handle();

        let handle = thread::Builder::new()
            .name("life-sim".into())
            .spawn(move || {
                let mut reporter = ReportingRenderer {
                    tx,
                    inner: renderer,
                };
                let termination = controller.resume(&mut simulation, Some(&mut reporter));
                SimulationState::capture(&simulation, termination)
            })
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: format!("life-sim: {e}"),
            })?;

        Ok(Self {
            stop,
            reports,
            handle: Some(handle),
        })
    }

    /// Ask the loop to end at its next termination check.
    pub fn stop(&self) {
        self.stop.stop();
    }

    /// A handle that stops this run from elsewhere.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Published generations, in order.
    pub fn reports(&self) -> &Receiver<GenerationReport> {
        &self.reports
    }

    /// Whether the loop has finished.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Wait for the loop to finish and return its final state.
    ///
    /// Does not stop the loop: call [`stop()`](BackgroundRun::stop) first
    /// for an unbounded run. Returns `None` if the thread panicked.
    pub fn join(mut self) -> Option<SimulationState> {
        let handle = self.handle.take()?;
        match handle.join() {
            Ok(state) => Some(state),
            Err(_) => {
                log::warn!("life-sim thread panicked");
                None
            }
        }
    }
}

impl Drop for BackgroundRun {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.stop.stop();
            let _ = handle.join();
        }
    }
}
