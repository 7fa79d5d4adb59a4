//! Random number generator abstraction for determinism.
//!
//! Draws are reproduced from a seed, so the production generator is the
//! seeded [`Mulberry32`]. Tests inject scripted implementations instead.

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;
}

const GOLDEN_GAMMA: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Mulberry32: a 32-bit state generator whose exact arithmetic is part of
/// the link compatibility contract. A shared seed must replay the same
/// stream in every implementation, so all operations wrap at 32 bits.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Creates a generator positioned at the start of the stream for `seed`.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the state and returns the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

impl DeterministicRng for Mulberry32 {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }
}
