//! Generation stepping: apply a rule set to a grid.
//!
//! [`Engine`] is stateless with respect to the simulation: it maps one
//! [`Grid`] to the next and never mutates its input. Only the candidate
//! set (alive cells and their in-bounds neighbours) is evaluated, so the
//! cost of a step follows the population rather than the grid area.
//!
//! # Parallel evaluation
//!
//! Every candidate's fate depends only on the previous generation, which
//! is read-only for the duration of a step. When the candidate set is at
//! least [`Engine::parallel_threshold`] cells and more than one worker is
//! configured, candidates are split into contiguous chunks and evaluated
//! on scoped threads. The resulting alive set is identical to the
//! sequential one.

use std::thread;
use std::time::Instant;

use life_core::Position;
use life_rules::RuleSet;
use life_space::Grid;

use crate::metrics::StepMetrics;

/// Candidate count below which a step always runs on the calling thread.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

// ── Engine ───────────────────────────────────────────────────────

/// Computes successive generations under a [`RuleSet`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    workers: usize,
    parallel_threshold: usize,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// A sequential engine.
    pub fn new() -> Self {
        Self {
            workers: 1,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// An engine that splits large steps across `workers` threads.
    ///
    /// `workers` is clamped to at least 1. Steps with fewer than
    /// `parallel_threshold` candidates stay sequential.
    pub fn with_workers(workers: usize, parallel_threshold: usize) -> Self {
        Self {
            workers: workers.max(1),
            parallel_threshold,
        }
    }

    /// Configured worker count (1 = sequential).
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Minimum candidate count for a parallel step.
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Compute the generation after `grid`.
    ///
    /// The result has the same dimensions as `grid`. A cell is alive in
    /// it iff `rules.should_cell_live(alive_now, live_neighbours)` holds.
    /// Cells outside the candidate set are dead and stay dead.
    pub fn step<R: RuleSet + ?Sized>(&self, grid: &Grid, rules: &R) -> Grid {
        self.step_with_metrics(grid, rules).0
    }

    /// Compute the next generation and report the work it took.
    pub fn step_with_metrics<R: RuleSet + ?Sized>(
        &self,
        grid: &Grid,
        rules: &R,
    ) -> (Grid, StepMetrics) {
        let start = Instant::now();
        let candidates: Vec<Position> = grid.candidates().into_iter().collect();
        let workers = self.workers_for(candidates.len());

        let next_alive = if workers > 1 {
            evaluate_parallel(grid, rules, &candidates, workers)
        } else {
            evaluate(grid, rules, &candidates)
        };

        let survivors = next_alive.iter().filter(|p| grid.alive_at(**p)).count();
        let next = grid.with_cells(next_alive);
        let metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            candidate_count: candidates.len(),
            alive_count: next.alive_count(),
            births: next.alive_count() - survivors,
            deaths: grid.alive_count() - survivors,
            workers_used: workers,
        };
        (next, metrics)
    }

    fn workers_for(&self, candidate_count: usize) -> usize {
        if self.workers > 1 && candidate_count >= self.parallel_threshold.max(1) {
            self.workers.min(candidate_count)
        } else {
            1
        }
    }
}

/// Candidates from `cells` that are alive in the next generation.
fn evaluate<R: RuleSet + ?Sized>(grid: &Grid, rules: &R, cells: &[Position]) -> Vec<Position> {
    cells
        .iter()
        .copied()
        .filter(|&cell| {
            rules.should_cell_live(grid.alive_at(cell), grid.live_neighbor_count(cell))
        })
        .collect()
}

fn evaluate_parallel<R: RuleSet + ?Sized>(
    grid: &Grid,
    rules: &R,
    cells: &[Position],
    workers: usize,
) -> Vec<Position> {
    let chunk_len = cells.len().div_ceil(workers);
    thread::scope(|scope| {
        let handles: Vec<_> = cells
            .chunks(chunk_len)
            .map(|chunk| scope.spawn(move || evaluate(grid, rules, chunk)))
            .collect();

        let mut out = Vec::with_capacity(grid.alive_count());
        for handle in handles {
            match handle.join() {
                Ok(alive) => out.extend(alive),
                // A rule panicked on a worker; surface it on the caller.
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        out
    })
}
