//! The roster: who takes part in a draw and who must not be paired.

use secret_santa_core::error::DomainError;

/// Ordered participants plus exclusion groups.
///
/// Participant order is the basis of every shuffle, so it is kept exactly as
/// supplied. Exclusion groups only ever hold current participants, have no
/// repeated members and contain at least two people.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<String>,
    exclusion_groups: Vec<Vec<String>>,
}

impl Roster {
    /// Builds a roster from raw input.
    ///
    /// Exclusion group members that are not participants are dropped, as are
    /// groups left with fewer than two members.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if a participant name is blank or
    /// appears more than once.
    pub fn new(
        participants: Vec<String>,
        exclusion_groups: Vec<Vec<String>>,
    ) -> Result<Self, DomainError> {
        for (index, name) in participants.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(DomainError::Validation(format!(
                    "participant at position {} has a blank name",
                    index + 1
                )));
            }
            if participants[..index].contains(name) {
                return Err(DomainError::Validation(format!(
                    "participant \"{name}\" appears more than once"
                )));
            }
        }

        let mut roster = Self {
            participants,
            exclusion_groups: Vec::new(),
        };
        for group in exclusion_groups {
            let members = roster.known_members(group);
            if members.len() > 1 {
                roster.exclusion_groups.push(members);
            }
        }
        Ok(roster)
    }

    /// Participants in their significant order.
    #[must_use]
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Exclusion groups in the order they were added.
    #[must_use]
    pub fn exclusion_groups(&self) -> &[Vec<String>] {
        &self.exclusion_groups
    }

    /// Number of participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the roster has no participants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Whether `name` is a participant.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p == name)
    }

    /// Adds a participant after trimming surrounding whitespace.
    ///
    /// Returns `false` without changing anything when the trimmed name is
    /// blank or already present.
    pub fn add_participant(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.participants.push(name.to_owned());
        true
    }

    /// Removes a participant and strips them from every exclusion group.
    /// Groups that fall below two members are dropped.
    ///
    /// Returns `false` if `name` was not a participant.
    pub fn remove_participant(&mut self, name: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p != name);
        if self.participants.len() == before {
            return false;
        }

        for group in &mut self.exclusion_groups {
            group.retain(|member| member != name);
        }
        self.exclusion_groups.retain(|group| group.len() > 1);
        true
    }

    /// Adds an exclusion group.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if a member is not a participant or
    /// fewer than two distinct people are selected.
    pub fn add_exclusion_group(&mut self, members: Vec<String>) -> Result<(), DomainError> {
        if let Some(unknown) = members.iter().find(|m| !self.contains(m)) {
            return Err(DomainError::Validation(format!(
                "\"{unknown}\" is not a participant"
            )));
        }

        let members = self.known_members(members);
        if members.len() < 2 {
            return Err(DomainError::Validation(
                "please select at least 2 people for an exclusion group".to_owned(),
            ));
        }

        self.exclusion_groups.push(members);
        Ok(())
    }

    /// Removes the exclusion group at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if there is no group at `index`.
    pub fn remove_exclusion_group(&mut self, index: usize) -> Result<Vec<String>, DomainError> {
        if index >= self.exclusion_groups.len() {
            return Err(DomainError::Validation(format!(
                "no exclusion group at position {}",
                index + 1
            )));
        }
        Ok(self.exclusion_groups.remove(index))
    }

    /// Whether `a` and `b` share at least one exclusion group.
    #[must_use]
    pub fn are_excluded(&self, a: &str, b: &str) -> bool {
        self.exclusion_groups
            .iter()
            .any(|group| group.iter().any(|m| m == a) && group.iter().any(|m| m == b))
    }

    /// Pairwise exclusion table indexed by participant position.
    pub(crate) fn exclusion_matrix(&self) -> Vec<Vec<bool>> {
        let n = self.participants.len();
        let mut matrix = vec![vec![false; n]; n];
        for group in &self.exclusion_groups {
            let indices: Vec<usize> = group.iter().filter_map(|m| self.position(m)).collect();
            for &a in &indices {
                for &b in &indices {
                    matrix[a][b] = true;
                }
            }
        }
        matrix
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.participants.iter().position(|p| p == name)
    }

    fn known_members(&self, group: Vec<String>) -> Vec<String> {
        let mut members: Vec<String> = Vec::with_capacity(group.len());
        for member in group {
            if self.contains(&member) && !members.contains(&member) {
                members.push(member);
            }
        }
        members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn test_new_preserves_participant_order() {
        let roster = Roster::new(names(&["Carol", "alice", "Bob"]), vec![]).unwrap();

        assert_eq!(roster.participants(), names(&["Carol", "alice", "Bob"]).as_slice());
    }

    #[test]
    fn test_new_rejects_duplicate_participant() {
        let result = Roster::new(names(&["Ann", "Ben", "Ann"]), vec![]);

        match result.unwrap_err() {
            DomainError::Validation(msg) => {
                assert_eq!(msg, "participant \"Ann\" appears more than once");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_new_names_are_case_sensitive() {
        let roster = Roster::new(names(&["ann", "Ann", "ANN"]), vec![]).unwrap();

        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_new_rejects_blank_participant() {
        let result = Roster::new(names(&["Ann", "  "]), vec![]);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_new_drops_unknown_members_and_small_groups() {
        let roster = Roster::new(
            names(&["A", "B", "C"]),
            vec![names(&["A", "Z"]), names(&["B", "C", "Y"]), names(&["A", "A"])],
        )
        .unwrap();

        assert_eq!(roster.exclusion_groups(), &[names(&["B", "C"])]);
    }

    #[test]
    fn test_add_participant_trims_and_ignores_duplicates() {
        let mut roster = Roster::default();

        assert!(roster.add_participant("  Dana "));
        assert!(!roster.add_participant("Dana"));
        assert!(!roster.add_participant("   "));
        assert_eq!(roster.participants(), names(&["Dana"]).as_slice());
    }

    #[test]
    fn test_remove_participant_prunes_exclusion_groups() {
        let mut roster = Roster::new(
            names(&["A", "B", "C", "D"]),
            vec![names(&["A", "B"]), names(&["B", "C", "D"])],
        )
        .unwrap();

        assert!(roster.remove_participant("B"));

        assert_eq!(roster.participants(), names(&["A", "C", "D"]).as_slice());
        assert_eq!(roster.exclusion_groups(), &[names(&["C", "D"])]);
    }

    #[test]
    fn test_remove_unknown_participant_is_a_no_op() {
        let mut roster = Roster::new(names(&["A", "B", "C"]), vec![]).unwrap();

        assert!(!roster.remove_participant("Q"));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_add_exclusion_group_requires_two_people() {
        let mut roster = Roster::new(names(&["A", "B", "C"]), vec![]).unwrap();

        let result = roster.add_exclusion_group(names(&["A"]));

        match result.unwrap_err() {
            DomainError::Validation(msg) => {
                assert_eq!(msg, "please select at least 2 people for an exclusion group");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_add_exclusion_group_rejects_unknown_member() {
        let mut roster = Roster::new(names(&["A", "B", "C"]), vec![]).unwrap();

        let result = roster.add_exclusion_group(names(&["A", "Q"]));

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(roster.exclusion_groups().is_empty());
    }

    #[test]
    fn test_groups_may_overlap() {
        let mut roster = Roster::new(names(&["A", "B", "C"]), vec![]).unwrap();

        roster.add_exclusion_group(names(&["A", "B"])).unwrap();
        roster.add_exclusion_group(names(&["B", "C"])).unwrap();

        assert!(roster.are_excluded("A", "B"));
        assert!(roster.are_excluded("C", "B"));
        assert!(!roster.are_excluded("A", "C"));
    }

    #[test]
    fn test_remove_exclusion_group_by_index() {
        let mut roster = Roster::new(
            names(&["A", "B", "C"]),
            vec![names(&["A", "B"]), names(&["B", "C"])],
        )
        .unwrap();

        let removed = roster.remove_exclusion_group(0).unwrap();

        assert_eq!(removed, names(&["A", "B"]));
        assert_eq!(roster.exclusion_groups(), &[names(&["B", "C"])]);
        assert!(roster.remove_exclusion_group(5).is_err());
    }

    #[test]
    fn test_exclusion_matrix_is_symmetric() {
        let roster = Roster::new(names(&["A", "B", "C"]), vec![names(&["C", "A"])]).unwrap();

        let matrix = roster.exclusion_matrix();

        assert!(matrix[0][2]);
        assert!(matrix[2][0]);
        assert!(!matrix[0][1]);
        assert!(!matrix[1][2]);
    }
}
