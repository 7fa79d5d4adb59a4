//! Test seed source — deterministic `SeedSource` implementation for tests.

use secret_santa_core::seed::SeedSource;

/// A seed source that always returns the same seed.
#[derive(Debug, Clone, Copy)]
pub struct FixedSeedSource(pub u32);

impl SeedSource for FixedSeedSource {
    fn next_seed(&self) -> u32 {
        self.0
    }
}
