//! The result of a successful draw.

use std::collections::HashSet;

use secret_santa_core::error::DomainError;
use serde::Serialize;

use super::roster::Roster;

/// One giver and the person they buy for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    /// The participant giving the gift.
    pub giver: String,
    /// The participant receiving it.
    pub receiver: String,
}

/// A complete giver → receiver mapping, listed in the order givers were
/// placed by the search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Assignment {
    pairs: Vec<Pairing>,
}

impl Assignment {
    pub(crate) fn new(pairs: Vec<Pairing>) -> Self {
        Self { pairs }
    }

    /// All pairings in placement order.
    #[must_use]
    pub fn pairs(&self) -> &[Pairing] {
        &self.pairs
    }

    /// Number of pairings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no pairings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Who `giver` buys for, if they are part of this assignment.
    #[must_use]
    pub fn receiver_for(&self, giver: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|p| p.giver == giver)
            .map(|p| p.receiver.as_str())
    }

    /// Checks every draw invariant against `roster`: each participant gives
    /// and receives exactly once, nobody gives to themselves, no two people
    /// give to each other, and no pair shares an exclusion group.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` describing the first violation.
    pub fn verify(&self, roster: &Roster) -> Result<(), DomainError> {
        if self.pairs.len() != roster.len() {
            return Err(DomainError::Validation(format!(
                "assignment has {} pairs for {} participants",
                self.pairs.len(),
                roster.len()
            )));
        }

        let mut givers = HashSet::new();
        let mut receivers = HashSet::new();
        for Pairing { giver, receiver } in &self.pairs {
            if !roster.contains(giver) || !roster.contains(receiver) {
                return Err(DomainError::Validation(format!(
                    "{giver} -> {receiver} names someone outside the roster"
                )));
            }
            if !givers.insert(giver.as_str()) {
                return Err(DomainError::Validation(format!("{giver} gives twice")));
            }
            if !receivers.insert(receiver.as_str()) {
                return Err(DomainError::Validation(format!("{receiver} receives twice")));
            }
            if giver == receiver {
                return Err(DomainError::Validation(format!("{giver} gives to themselves")));
            }
            if self.receiver_for(receiver) == Some(giver.as_str()) {
                return Err(DomainError::Validation(format!(
                    "{giver} and {receiver} give to each other"
                )));
            }
            if roster.are_excluded(giver, receiver) {
                return Err(DomainError::Validation(format!(
                    "{giver} and {receiver} share an exclusion group"
                )));
            }
        }
        Ok(())
    }
}
