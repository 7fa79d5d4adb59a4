//! Shared test mocks and utilities for the Secret Santa draw.

mod rng;
mod seed;

pub use rng::{MockRng, SequenceRng};
pub use seed::FixedSeedSource;
