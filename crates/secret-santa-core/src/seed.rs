//! Seed source abstraction.
//!
//! A draw without an explicit seed picks one here, then reports it back so
//! the result can be reproduced and shared.

use rand::Rng;

/// Exclusive upper bound for generated seeds. Keeps seeds short enough to
/// read aloud and type back in.
pub const GENERATED_SEED_LIMIT: u32 = 1_000_000;

/// Abstraction over picking a fresh seed.
pub trait SeedSource: Send + Sync {
    /// Returns a seed for a draw that did not specify one.
    fn next_seed(&self) -> u32;
}

/// Production seed source backed by the thread-local OS-seeded RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSeedSource;

impl SeedSource for RandomSeedSource {
    fn next_seed(&self) -> u32 {
        rand::rng().random_range(0..GENERATED_SEED_LIMIT)
    }
}
