//! Domain error types.

use thiserror::Error;

use crate::{MAX_PARTICIPANTS, MIN_PARTICIPANTS};

/// Top-level domain error type.
///
/// Every variant is an expected, recoverable outcome with a user-facing
/// message; none of them indicates a crash in the search itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Fewer participants than a valid draw needs.
    #[error(
        "need at least {min} participants for Secret Santa (to avoid 2-person loops), got {count}",
        min = MIN_PARTICIPANTS
    )]
    InsufficientParticipants {
        /// How many participants were supplied.
        count: usize,
    },

    /// More participants than a single draw accepts.
    #[error(
        "at most {max} participants can take part in one draw, got {count}",
        max = MAX_PARTICIPANTS
    )]
    TooManyParticipants {
        /// How many participants were supplied.
        count: usize,
    },

    /// The search exhausted every candidate without a valid assignment.
    #[error(
        "unable to generate valid assignments with the current constraints; try reducing exclusion groups or adding more participants"
    )]
    NoSolution,

    /// A reveal named someone who has no assignment in the recomputed draw.
    #[error("could not find assignment for \"{0}\"; please check the link")]
    AssignmentNotFound(String),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),
}
