//! Per-step metrics for the simulation engine.
//!
//! [`StepMetrics`] captures the work done by a single generation step,
//! enabling logging and profiling of how the candidate set tracks the
//! population.

/// Work and timing collected during a single step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the step, in microseconds.
    pub total_us: u64,
    /// Number of candidate cells evaluated against the rule.
    pub candidate_count: usize,
    /// Number of alive cells in the produced generation.
    pub alive_count: usize,
    /// Cells dead before the step and alive after it.
    pub births: usize,
    /// Cells alive before the step and dead after it.
    pub deaths: usize,
    /// Worker threads the candidate set was split across (1 = sequential).
    pub workers_used: usize,
}
