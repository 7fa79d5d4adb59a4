//! Query handlers for the Draw context.
//!
//! Draws are never stored; a reveal replays the draw from its seed and
//! returns only the requested giver's receiver.

use secret_santa_core::command::Command;
use secret_santa_core::error::DomainError;
use serde::Serialize;
use tracing::{info, instrument};

use crate::application::command_handlers::{drawable_roster, run_draw};
use crate::domain::commands::RevealAssignment;

/// Read-only view of one person's assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealView {
    /// The giver the link was made for.
    pub person: String,
    /// Who they are buying for.
    pub receiver: String,
    /// Seed of the replayed draw.
    pub seed: u32,
}

/// Replays the draw described by `query` and returns `query.person`'s
/// receiver.
///
/// # Errors
///
/// Returns `DomainError::InsufficientParticipants`,
/// `DomainError::TooManyParticipants` or `DomainError::Validation` for an
/// unusable roster, and `DomainError::AssignmentNotFound` if the person has
/// no assignment, including when the replayed draw finds no solution.
#[instrument(
    skip(query),
    fields(
        command_type = query.command_type(),
        correlation_id = %query.correlation_id,
        seed = query.seed,
    )
)]
pub fn reveal_assignment(query: &RevealAssignment) -> Result<RevealView, DomainError> {
    let roster = drawable_roster(query)?;
    let not_found = || DomainError::AssignmentNotFound(query.person.clone());

    let assignment = match run_draw(&roster, query.seed) {
        Ok(assignment) => assignment,
        Err(DomainError::NoSolution) => return Err(not_found()),
        Err(other) => return Err(other),
    };

    let receiver = assignment.receiver_for(&query.person).ok_or_else(not_found)?;
    info!("assignment revealed");

    Ok(RevealView {
        person: query.person.clone(),
        receiver: receiver.to_owned(),
        seed: query.seed,
    })
}
