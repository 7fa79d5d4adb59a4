//! Secret Santa — Draw bounded context.
//!
//! Responsible for holding the roster, running the seeded backtracking
//! search that pairs givers with receivers, and revealing a single
//! person's assignment from a replayed draw.

pub mod application;
pub mod domain;
