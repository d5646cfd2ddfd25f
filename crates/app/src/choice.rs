//! Choice source — the seam that isolates randomness.
//!
//! Generators never call an RNG directly; they draw from a [`ChoiceSource`]
//! so that production picks stay uniformly random while tests and demo mode
//! inject a deterministic source and assert exact output. Randomness only
//! affects which candidate is selected, never control flow.

use rand::Rng;

/// Supplier of bounded random choices.
pub trait ChoiceSource {
    /// An index into a candidate list of `len` elements (`len` ≥ 1).
    fn pick_index(&mut self, len: usize) -> usize;

    /// A uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Pick one element of a non-empty candidate slice.
    fn pick<'a, T>(&mut self, candidates: &'a [T]) -> &'a T {
        &candidates[self.pick_index(candidates.len())]
    }
}

/// Thread-local RNG backed source used outside tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct RngChoice;

impl ChoiceSource for RngChoice {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }

    fn unit(&mut self) -> f64 {
        rand::thread_rng().r#gen()
    }
}

/// Deterministic source: always the same index and unit value.
///
/// Used by tests asserting exact generator output and by demo mode, where
/// reproducible content matters more than variety.
#[derive(Debug, Clone, Copy)]
pub struct FixedChoice {
    index: usize,
    unit: f64,
}

impl FixedChoice {
    /// Always pick `index` (clamped to the candidate list) and return `unit`
    /// from [`ChoiceSource::unit`].
    #[must_use]
    pub fn new(index: usize, unit: f64) -> Self {
        Self { index, unit }
    }

    /// Always the first candidate, unit 0.
    #[must_use]
    pub fn first() -> Self {
        Self::new(0, 0.0)
    }
}

impl ChoiceSource for FixedChoice {
    fn pick_index(&mut self, len: usize) -> usize {
        self.index.min(len - 1)
    }

    fn unit(&mut self) -> f64 {
        self.unit
    }
}
