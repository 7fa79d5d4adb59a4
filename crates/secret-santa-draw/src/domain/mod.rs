//! Domain model for the Draw context.

pub mod assignment;
pub mod commands;
pub mod generator;
pub mod roster;
pub mod shuffle;
