//! Secret Santa Core — shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that the draw and
//! share contexts depend on. It contains no infrastructure code.

pub mod command;
pub mod error;
pub mod rng;
pub mod seed;

/// Smallest roster for which a draw can exist without self-gifts or
/// two-person loops.
pub const MIN_PARTICIPANTS: usize = 3;

/// Largest roster accepted for a draw. The search recurses once per giver,
/// so this bounds its stack depth.
pub const MAX_PARTICIPANTS: usize = 1000;
