//! Commands for the Draw context.

use secret_santa_core::command::Command;
use uuid::Uuid;

/// Command to draw a full set of assignments.
#[derive(Debug, Clone)]
pub struct DrawAssignments {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Participants in their significant order.
    pub participants: Vec<String>,
    /// Groups whose members must not give to each other.
    pub exclusion_groups: Vec<Vec<String>>,
    /// Seed to replay; a fresh one is picked when absent.
    pub seed: Option<u32>,
}

impl Command for DrawAssignments {
    fn command_type(&self) -> &'static str {
        "draw.draw_assignments"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn participants(&self) -> &[String] {
        &self.participants
    }

    fn exclusion_groups(&self) -> &[Vec<String>] {
        &self.exclusion_groups
    }
}

/// Command to replay a draw and reveal one giver's receiver.
#[derive(Debug, Clone)]
pub struct RevealAssignment {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Participants in their significant order.
    pub participants: Vec<String>,
    /// Groups whose members must not give to each other.
    pub exclusion_groups: Vec<Vec<String>>,
    /// Seed of the draw being replayed.
    pub seed: u32,
    /// The giver whose receiver is revealed.
    pub person: String,
}

impl Command for RevealAssignment {
    fn command_type(&self) -> &'static str {
        "draw.reveal_assignment"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn participants(&self) -> &[String] {
        &self.participants
    }

    fn exclusion_groups(&self) -> &[Vec<String>] {
        &self.exclusion_groups
    }
}
