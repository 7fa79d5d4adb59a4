//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use secret_santa_core::rng::DeterministicRng;

/// An RNG stuck at `0.0`. With a Fisher–Yates shuffle this always swaps
/// with index 0.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// An RNG that returns values from a predetermined sequence of floats.
/// Panics if the sequence is exhausted. Used in tests that need to steer a
/// shuffle to a specific permutation and count how many draws were taken.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<f64>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values, each in `[0, 1)`.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values handed out so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_f64(&mut self) -> f64 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
