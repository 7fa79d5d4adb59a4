//! Command handlers for the Draw context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: build the roster, guard the minimum size, pick
//! or replay a seed, and run the search.

use secret_santa_core::{MAX_PARTICIPANTS, MIN_PARTICIPANTS};
use secret_santa_core::command::Command;
use secret_santa_core::error::DomainError;
use secret_santa_core::rng::Mulberry32;
use secret_santa_core::seed::SeedSource;
use serde::Serialize;
use tracing::{info, instrument};

use crate::domain::assignment::Assignment;
use crate::domain::commands::DrawAssignments;
use crate::domain::generator;
use crate::domain::roster::Roster;

/// A completed draw together with the seed that reproduces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draw {
    /// Seed the draw was run with.
    pub seed: u32,
    /// The resulting pairings.
    pub assignment: Assignment,
}

/// Builds and size-checks the roster a command carries.
///
/// # Errors
///
/// Returns `DomainError::TooManyParticipants` above [`MAX_PARTICIPANTS`],
/// `DomainError::Validation` for blank or duplicate names and
/// `DomainError::InsufficientParticipants` for fewer than three people.
pub(crate) fn drawable_roster(command: &dyn Command) -> Result<Roster, DomainError> {
    // Checked on the raw list so oversized input is never copied.
    let count = command.participants().len();
    if count > MAX_PARTICIPANTS {
        return Err(DomainError::TooManyParticipants { count });
    }

    let roster = Roster::new(
        command.participants().to_vec(),
        command.exclusion_groups().to_vec(),
    )?;
    if roster.len() < MIN_PARTICIPANTS {
        return Err(DomainError::InsufficientParticipants {
            count: roster.len(),
        });
    }
    Ok(roster)
}

/// Runs the search for `roster` with a generator seeded from `seed`.
///
/// # Errors
///
/// Returns `DomainError::NoSolution` if the constraints cannot be met.
pub(crate) fn run_draw(roster: &Roster, seed: u32) -> Result<Assignment, DomainError> {
    let mut rng = Mulberry32::new(seed);
    generator::generate(roster, &mut rng).ok_or(DomainError::NoSolution)
}

/// Handles the `DrawAssignments` command: validates the roster, picks a seed
/// when none was supplied, and runs the seeded search.
///
/// # Errors
///
/// Returns `DomainError` if the roster is invalid or too small, or if no
/// assignment satisfies the constraints.
#[instrument(
    skip(command, seeds),
    fields(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id,
        participants = command.participants.len(),
    )
)]
pub fn handle_draw_assignments(
    command: &DrawAssignments,
    seeds: &dyn SeedSource,
) -> Result<Draw, DomainError> {
    let roster = drawable_roster(command)?;
    let seed = command.seed.unwrap_or_else(|| seeds.next_seed());

    let assignment = run_draw(&roster, seed)?;
    info!(seed, pairs = assignment.len(), "draw completed");

    Ok(Draw { seed, assignment })
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use secret_santa_test_support::FixedSeedSource;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|&s| s.to_owned()).collect()
    }

    fn command(participants: &[&str], groups: &[&[&str]], seed: Option<u32>) -> DrawAssignments {
        DrawAssignments {
            correlation_id: Uuid::new_v4(),
            participants: names(participants),
            exclusion_groups: groups.iter().map(|g| names(g)).collect(),
            seed,
        }
    }

    #[test]
    fn test_handle_draw_uses_supplied_seed() {
        let cmd = command(&["A", "B", "C"], &[], Some(1));

        let draw = handle_draw_assignments(&cmd, &FixedSeedSource(999)).unwrap();

        assert_eq!(draw.seed, 1);
        assert_eq!(draw.assignment.receiver_for("A"), Some("B"));
        assert_eq!(draw.assignment.receiver_for("B"), Some("C"));
        assert_eq!(draw.assignment.receiver_for("C"), Some("A"));
    }

    #[test]
    fn test_handle_draw_picks_seed_when_absent() {
        let cmd = command(&["A", "B", "C"], &[], None);

        let draw = handle_draw_assignments(&cmd, &FixedSeedSource(42)).unwrap();

        assert_eq!(draw.seed, 42);
        assert_eq!(
            draw.assignment,
            handle_draw_assignments(&command(&["A", "B", "C"], &[], Some(42)), &FixedSeedSource(0))
                .unwrap()
                .assignment
        );
    }

    #[test]
    fn test_handle_draw_rejects_two_participants_before_search() {
        let cmd = command(&["A", "B"], &[], Some(1));

        let result = handle_draw_assignments(&cmd, &FixedSeedSource(0));

        assert_eq!(
            result.unwrap_err(),
            DomainError::InsufficientParticipants { count: 2 }
        );
    }

    #[test]
    fn test_handle_draw_rejects_roster_over_maximum_before_search() {
        let names: Vec<String> = (0..=MAX_PARTICIPANTS).map(|i| format!("P{i}")).collect();
        let cmd = DrawAssignments {
            correlation_id: Uuid::new_v4(),
            participants: names,
            exclusion_groups: Vec::new(),
            seed: Some(1),
        };

        let result = handle_draw_assignments(&cmd, &FixedSeedSource(0));

        assert_eq!(
            result.unwrap_err(),
            DomainError::TooManyParticipants {
                count: MAX_PARTICIPANTS + 1
            }
        );
    }

    #[test]
    fn test_handle_draw_accepts_roster_at_maximum() {
        let names: Vec<String> = (0..MAX_PARTICIPANTS).map(|i| format!("P{i}")).collect();
        let cmd = DrawAssignments {
            correlation_id: Uuid::new_v4(),
            participants: names,
            exclusion_groups: Vec::new(),
            seed: Some(1),
        };

        let draw = handle_draw_assignments(&cmd, &FixedSeedSource(0)).unwrap();

        assert_eq!(draw.assignment.len(), MAX_PARTICIPANTS);
    }

    #[test]
    fn test_handle_draw_reports_no_solution() {
        let cmd = command(
            &["A", "B", "C"],
            &[&["A", "B"], &["A", "C"], &["B", "C"]],
            Some(12),
        );

        let result = handle_draw_assignments(&cmd, &FixedSeedSource(0));

        assert_eq!(result.unwrap_err(), DomainError::NoSolution);
    }

    #[test]
    fn test_handle_draw_rejects_duplicate_names() {
        let cmd = command(&["A", "B", "C", "B"], &[], Some(1));

        let result = handle_draw_assignments(&cmd, &FixedSeedSource(0));

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_handle_draw_ignores_groups_naming_strangers() {
        let with_stranger = command(&["A", "B", "C", "D"], &[&["A", "Zed"]], Some(8));
        let without = command(&["A", "B", "C", "D"], &[], Some(8));

        let a = handle_draw_assignments(&with_stranger, &FixedSeedSource(0)).unwrap();
        let b = handle_draw_assignments(&without, &FixedSeedSource(0)).unwrap();

        assert_eq!(a, b);
    }
}
