//! Lockstep (synchronous) simulation.
//!
//! [`Simulation`] owns the current generation together with everything
//! needed to advance it: the [`Engine`], the rule set, and the
//! [`StabilityDetector`]. Each [`step()`](Simulation::step) computes one
//! generation, records its signature, and returns the detector's verdict.
//!
//! # Ownership model
//!
//! `Simulation` is [`Send`], so a configured simulation can be handed to a
//! [`BackgroundRun`](crate::BackgroundRun). All mutating methods take
//! `&mut self`; [`grid()`](Simulation::grid) borrows the current
//! generation, which is never modified in place.

use life_core::Generation;
use life_rules::RuleSet;
use life_space::Grid;

use crate::config::{ConfigError, SimConfig};
use crate::engine::Engine;
use crate::history::{SignatureHistory, StabilityDetector, Verdict};
use crate::metrics::StepMetrics;
use crate::render::Renderer;
use crate::signature::GenerationSignature;

// Compile-time assertion: Simulation is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

/// A grid advancing one generation per call.
pub struct Simulation {
    engine: Engine,
    rules: Box<dyn RuleSet>,
    grid: Grid,
    generation: Generation,
    detector: StabilityDetector,
    verdict: Option<Verdict>,
    last_metrics: StepMetrics,
    rendered: Option<Generation>,
}

impl Simulation {
    /// Start a simulation at generation 0 from `initial`.
    ///
    /// The initial generation's signature is recorded immediately, so a
    /// still life is reported [`Verdict::Stable`] after the first step.
    ///
    /// # Panics
    ///
    /// Panics if `history_capacity == 0`.
    pub fn new(
        initial: Grid,
        engine: Engine,
        rules: Box<dyn RuleSet>,
        history_capacity: usize,
    ) -> Self {
        let mut sim = Self {
            engine,
            rules,
            grid: initial,
            generation: Generation::default(),
            detector: StabilityDetector::new(history_capacity),
            verdict: None,
            last_metrics: StepMetrics::default(),
            rendered: None,
        };
        sim.detector.observe(GenerationSignature::of(&sim.grid));
        sim
    }

    /// Start a simulation using the engine, rule and history size from `config`.
    ///
    /// `initial` must have the configured width and height.
    pub fn from_config(config: &SimConfig, initial: Grid) -> Result<Self, ConfigError> {
        config.validate()?;
        let found = (initial.width(), initial.height());
        if found != (config.width, config.height) {
            return Err(ConfigError::GridSizeMismatch {
                expected: (config.width, config.height),
                found,
            });
        }
        Ok(Self::new(
            initial,
            config.engine(),
            Box::new(config.rule.clone()),
            config.history_capacity,
        ))
    }

    /// Advance one generation.
    ///
    /// Returns the detector's verdict for the new generation: `None` while
    /// no repetition is visible in the history window.
    pub fn step(&mut self) -> Option<Verdict> {
        let (next, metrics) = self.engine.step_with_metrics(&self.grid, self.rules.as_ref());
        self.grid = next;
        self.generation = self.generation.next();
        self.verdict = self.detector.observe(GenerationSignature::of(&self.grid));

        log::debug!(
            "generation {}: alive={} candidates={} births={} deaths={} took {}us",
            self.generation,
            metrics.alive_count,
            metrics.candidate_count,
            metrics.births,
            metrics.deaths,
            metrics.total_us,
        );
        self.last_metrics = metrics;
        self.verdict
    }

    /// Advance `n` generations, returning the verdict after the last one.
    ///
    /// Does not stop early on a verdict; use a
    /// [`SimulationController`](crate::SimulationController) for that.
    pub fn step_n(&mut self, n: u64) -> Option<Verdict> {
        for _ in 0..n {
            self.step();
        }
        self.verdict
    }

    /// Replace the current grid and restart from generation 0.
    ///
    /// The detector history is cleared and seeded with `grid`.
    pub fn load(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = Generation::default();
        self.detector.reset();
        self.detector.observe(GenerationSignature::of(&self.grid));
        self.verdict = None;
        self.last_metrics = StepMetrics::default();
        self.rendered = None;
    }

    /// Hand the current generation to `renderer` unless it has already
    /// been shown.
    ///
    /// Returns whether anything was rendered. This keeps a paused and
    /// resumed run from displaying the same generation twice.
    pub fn render_to(&mut self, renderer: &mut dyn Renderer) -> bool {
        if self.rendered == Some(self.generation) {
            return false;
        }
        renderer.render(&self.grid, self.generation);
        self.rendered = Some(self.generation);
        true
    }

    /// The current generation's grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of steps taken since start or the last [`load()`](Simulation::load).
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Verdict for the current generation.
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The rule set in use.
    pub fn rules(&self) -> &dyn RuleSet {
        self.rules.as_ref()
    }

    /// The engine in use.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Signatures retained by the detector.
    pub fn history(&self) -> &SignatureHistory {
        self.detector.history()
    }

    /// Consume the simulation, returning the current grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("rules", &self.rules.name())
            .field("generation", &self.generation)
            .field("alive", &self.grid.alive_count())
            .field("verdict", &self.verdict)
            .finish_non_exhaustive()
    }
}
