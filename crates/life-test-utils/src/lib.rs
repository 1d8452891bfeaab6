//! Test utilities and mock types for Life simulation development.
//!
//! Provides a [`RecordingRenderer`] that captures every frame a run
//! produces, a [`CountingRules`] wrapper that counts rule evaluations,
//! and grid [`fixtures`] for the standard small patterns.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::atomic::{AtomicUsize, Ordering};

use life_core::Generation;
use life_engine::Renderer;
use life_rules::RuleSet;
use life_space::Grid;

/// Captures every frame handed to it.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<(Generation, Grid)>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded `(generation, grid)` pairs in render order.
    pub fn frames(&self) -> &[(Generation, Grid)] {
        &self.frames
    }

    /// Generation numbers in render order.
    pub fn generations(&self) -> Vec<u64> {
        self.frames.iter().map(|(g, _)| g.0).collect()
    }

    /// The last recorded grid.
    pub fn last_grid(&self) -> Option<&Grid> {
        self.frames.last().map(|(_, grid)| grid)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, grid: &Grid, generation: Generation) {
        self.frames.push((generation, grid.clone()));
    }
}

/// Wraps a rule set and counts how often it is consulted.
///
/// Lets tests check that a step evaluates only the candidate set rather
/// than the whole grid.
pub struct CountingRules<R> {
    inner: R,
    calls: AtomicUsize,
}

impl<R: RuleSet> CountingRules<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Evaluations since creation or the last [`reset`](CountingRules::reset).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
    }
}

impl<R: RuleSet> RuleSet for CountingRules<R> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn should_cell_live(&self, is_alive: bool, neighbor_count: u8) -> bool {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.should_cell_live(is_alive, neighbor_count)
    }
}
