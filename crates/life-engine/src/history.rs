//! Bounded signature history and stability detection.
//!
//! [`SignatureHistory`] keeps the most recent generation signatures in
//! observation order, evicting the oldest once full. [`StabilityDetector`]
//! consults it before recording each new signature: a match `d` entries
//! back means the pattern repeats every `d` generations.
//!
//! Only cycles of period up to the history capacity are recognised. Moving
//! patterns such as gliders never produce an exact match, because
//! signatures are not normalised for translation.

use std::collections::VecDeque;
use std::fmt;

use crate::signature::GenerationSignature;

/// History length used when none is configured.
///
/// Long enough for the common oscillators, including the period-15
/// pentadecathlon.
pub const DEFAULT_HISTORY_CAPACITY: usize = 16;

// ── SignatureHistory ─────────────────────────────────────────────

/// The most recent `capacity` signatures, oldest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureHistory {
    entries: VecDeque<GenerationSignature>,
    capacity: usize,
}

impl SignatureHistory {
    /// Create an empty history.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "SignatureHistory capacity must be >= 1, got {capacity}");
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record `signature` as the newest entry.
    ///
    /// Returns the evicted oldest entry when the history was full.
    pub fn push(&mut self, signature: GenerationSignature) -> Option<GenerationSignature> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(signature);
        evicted
    }

    /// How many entries back `signature` was last recorded.
    ///
    /// The newest entry is at distance 1. Returns `None` if no retained
    /// entry matches.
    pub fn distance_to(&self, signature: &GenerationSignature) -> Option<usize> {
        self.entries
            .iter()
            .rev()
            .position(|s| s == signature)
            .map(|i| i + 1)
    }

    /// The most recently recorded signature.
    pub fn latest(&self) -> Option<&GenerationSignature> {
        self.entries.back()
    }

    /// Iterate entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &GenerationSignature> + '_ {
        self.entries.iter()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded since creation or the last clear.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// ── Verdict ──────────────────────────────────────────────────────

/// Outcome of a detected repetition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The generation equals its predecessor (period 1). An extinct grid
    /// reports this one generation after dying out.
    Stable,
    /// The generation equals the one `period` generations earlier, with
    /// `period >= 2`.
    Oscillating {
        /// Generations per cycle.
        period: usize,
    },
}

impl Verdict {
    /// Cycle length: 1 for [`Verdict::Stable`].
    pub fn period(&self) -> usize {
        match self {
            Self::Stable => 1,
            Self::Oscillating { period } => *period,
        }
    }

    fn from_distance(distance: usize) -> Self {
        if distance <= 1 {
            Self::Stable
        } else {
            Self::Oscillating { period: distance }
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable => write!(f, "stable"),
            Self::Oscillating { period } => write!(f, "oscillating with period {period}"),
        }
    }
}

// ── StabilityDetector ────────────────────────────────────────────

/// Recognises fixed points and oscillators over a bounded window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StabilityDetector {
    history: SignatureHistory,
}

impl Default for StabilityDetector {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl StabilityDetector {
    /// Create a detector that remembers `capacity` generations.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn new(capacity: usize) -> Self {
        Self {
            history: SignatureHistory::new(capacity),
        }
    }

    /// Check `signature` against the history, then record it.
    ///
    /// The signature is recorded whether or not it matched, so a run that
    /// continues past a detection keeps reporting the same period.
    pub fn observe(&mut self, signature: GenerationSignature) -> Option<Verdict> {
        let verdict = self
            .history
            .distance_to(&signature)
            .map(Verdict::from_distance);
        self.history.push(signature);
        verdict
    }

    /// Forget all observed generations.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// The retained signatures.
    pub fn history(&self) -> &SignatureHistory {
        &self.history
    }

    /// Longest period this detector can recognise.
    pub fn max_period(&self) -> usize {
        self.history.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::Position;
    use life_space::Grid;

    fn sig(cells: &[(i32, i32)]) -> GenerationSignature {
        let grid = Grid::from_cells(8, 8, cells.iter().map(|&c| Position::from(c))).unwrap();
        GenerationSignature::of(&grid)
    }

    // ── SignatureHistory ─────────────────────────────────────────

    #[test]
    #[should_panic(expected = "capacity must be >= 1")]
    fn zero_capacity_panics() {
        let _ = SignatureHistory::new(0);
    }

    #[test]
    fn push_evicts_oldest_when_full() {
        let mut h = SignatureHistory::new(2);
        assert!(h.push(sig(&[(0, 0)])).is_none());
        assert!(h.push(sig(&[(1, 1)])).is_none());
        let evicted = h.push(sig(&[(2, 2)]));
        assert_eq!(evicted, Some(sig(&[(0, 0)])));
        assert_eq!(h.len(), 2);
        assert_eq!(h.latest(), Some(&sig(&[(2, 2)])));
    }

    #[test]
    fn distance_counts_from_newest() {
        let mut h = SignatureHistory::new(4);
        h.push(sig(&[(0, 0)]));
        h.push(sig(&[(1, 1)]));
        h.push(sig(&[(2, 2)]));
        assert_eq!(h.distance_to(&sig(&[(2, 2)])), Some(1));
        assert_eq!(h.distance_to(&sig(&[(0, 0)])), Some(3));
        assert_eq!(h.distance_to(&sig(&[(5, 5)])), None);
    }

    #[test]
    fn iter_is_oldest_first() {
        let mut h = SignatureHistory::new(3);
        h.push(sig(&[(0, 0)]));
        h.push(sig(&[(1, 1)]));
        let counts: Vec<_> = h.iter().map(|s| s.cells()[0]).collect();
        assert_eq!(counts, vec![Position::new(0, 0), Position::new(1, 1)]);
    }

    #[test]
    fn clear_empties() {
        let mut h = SignatureHistory::new(3);
        h.push(sig(&[]));
        h.clear();
        assert!(h.is_empty());
        assert_eq!(h.capacity(), 3);
    }

    // ── Verdict ──────────────────────────────────────────────────

    #[test]
    fn verdict_period() {
        assert_eq!(Verdict::Stable.period(), 1);
        assert_eq!(Verdict::Oscillating { period: 3 }.period(), 3);
        assert_eq!(Verdict::from_distance(1), Verdict::Stable);
        assert_eq!(Verdict::from_distance(2), Verdict::Oscillating { period: 2 });
    }

    #[test]
    fn verdict_display() {
        assert_eq!(Verdict::Stable.to_string(), "stable");
        assert_eq!(
            Verdict::Oscillating { period: 2 }.to_string(),
            "oscillating with period 2"
        );
    }

    // ── StabilityDetector ────────────────────────────────────────

    #[test]
    fn first_observation_never_matches() {
        let mut d = StabilityDetector::default();
        assert_eq!(d.observe(sig(&[(1, 1)])), None);
        assert_eq!(d.history().len(), 1);
    }

    #[test]
    fn repeated_signature_is_stable() {
        let mut d = StabilityDetector::new(4);
        d.observe(sig(&[(1, 1)]));
        assert_eq!(d.observe(sig(&[(1, 1)])), Some(Verdict::Stable));
    }

    #[test]
    fn alternating_signatures_oscillate() {
        let a = sig(&[(1, 0), (1, 1), (1, 2)]);
        let b = sig(&[(0, 1), (1, 1), (2, 1)]);
        let mut d = StabilityDetector::new(4);
        assert_eq!(d.observe(a.clone()), None);
        assert_eq!(d.observe(b.clone()), None);
        assert_eq!(d.observe(a.clone()), Some(Verdict::Oscillating { period: 2 }));
        // Recording on a match keeps the period visible on later calls.
        assert_eq!(d.observe(b), Some(Verdict::Oscillating { period: 2 }));
        assert_eq!(d.observe(a), Some(Verdict::Oscillating { period: 2 }));
    }

    #[test]
    fn period_longer_than_capacity_is_missed() {
        let cycle = [sig(&[(0, 0)]), sig(&[(1, 1)]), sig(&[(2, 2)])];
        let mut d = StabilityDetector::new(2);
        for s in cycle.iter().chain(cycle.iter()) {
            assert_eq!(d.observe(s.clone()), None);
        }
        assert_eq!(d.max_period(), 2);
    }

    #[test]
    fn period_equal_to_capacity_is_found() {
        let cycle = [sig(&[(0, 0)]), sig(&[(1, 1)]), sig(&[(2, 2)])];
        let mut d = StabilityDetector::new(3);
        for s in &cycle {
            assert_eq!(d.observe(s.clone()), None);
        }
        assert_eq!(
            d.observe(cycle[0].clone()),
            Some(Verdict::Oscillating { period: 3 })
        );
    }

    #[test]
    fn reset_forgets_history() {
        let mut d = StabilityDetector::new(4);
        d.observe(sig(&[(1, 1)]));
        d.reset();
        assert_eq!(d.observe(sig(&[(1, 1)])), None);
    }
}
