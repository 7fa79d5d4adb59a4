//! Randomized backtracking search for a valid assignment.
//!
//! The order of PRNG draws is part of the reproducibility contract: givers
//! are shuffled, then receivers, then the unconsumed receivers are
//! reshuffled on every visit to a giver, including visits that end up
//! being undone. Any change here changes which assignment a shared seed
//! produces.

use secret_santa_core::rng::DeterministicRng;
use tracing::debug;

use super::assignment::{Assignment, Pairing};
use super::roster::Roster;
use super::shuffle::shuffle;

/// Searches for an assignment satisfying every roster constraint.
///
/// Returns `None` when the search is exhausted. The caller is responsible for
/// rejecting rosters with fewer than three participants beforehand; with
/// fewer, the result is simply `None` or trivially empty.
pub fn generate(roster: &Roster, rng: &mut dyn DeterministicRng) -> Option<Assignment> {
    let n = roster.len();
    let positions: Vec<usize> = (0..n).collect();
    let givers = shuffle(&positions, rng);
    let receivers = shuffle(&positions, rng);

    let mut search = Search {
        rng,
        excluded: roster.exclusion_matrix(),
        givers,
        receivers,
        gives_to: vec![None; n],
        used: vec![false; n],
        placements: 0,
    };
    let solved = search.place(0);
    debug!(
        participants = n,
        exclusion_groups = roster.exclusion_groups().len(),
        placements = search.placements,
        solved,
        "assignment search finished"
    );
    if !solved {
        return None;
    }

    let names = roster.participants();
    let pairs = search
        .givers
        .iter()
        .map(|&giver| {
            search.gives_to[giver].map(|receiver| Pairing {
                giver: names[giver].clone(),
                receiver: names[receiver].clone(),
            })
        })
        .collect::<Option<Vec<_>>>()?;
    Some(Assignment::new(pairs))
}

/// Search state, indexed by participant position.
struct Search<'a> {
    rng: &'a mut dyn DeterministicRng,
    excluded: Vec<Vec<bool>>,
    givers: Vec<usize>,
    receivers: Vec<usize>,
    gives_to: Vec<Option<usize>>,
    used: Vec<bool>,
    placements: u64,
}

impl Search<'_> {
    /// Assigns the giver at `depth` and everyone after them.
    fn place(&mut self, depth: usize) -> bool {
        let Some(&giver) = self.givers.get(depth) else {
            return true;
        };

        let remaining: Vec<usize> = self
            .receivers
            .iter()
            .copied()
            .filter(|&r| !self.used[r])
            .collect();
        let candidates = shuffle(&remaining, self.rng);

        for receiver in candidates {
            if receiver == giver
                || self.excluded[giver][receiver]
                || self.gives_to[receiver] == Some(giver)
            {
                continue;
            }

            self.gives_to[giver] = Some(receiver);
            self.used[receiver] = true;
            self.placements += 1;

            if self.place(depth + 1) {
                return true;
            }

            self.gives_to[giver] = None;
            self.used[receiver] = false;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secret_santa_core::rng::Mulberry32;
    use secret_santa_test_support::SequenceRng;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|&s| s.to_owned()).collect()
    }

    fn roster(participants: &[&str], groups: &[&[&str]]) -> Roster {
        Roster::new(
            names(participants),
            groups.iter().map(|g| names(g)).collect(),
        )
        .unwrap()
    }

    fn pairs(assignment: &Assignment) -> Vec<(&str, &str)> {
        assignment
            .pairs()
            .iter()
            .map(|p| (p.giver.as_str(), p.receiver.as_str()))
            .collect()
    }

    #[test]
    fn test_three_people_seed_1_forms_a_three_cycle() {
        let roster = roster(&["A", "B", "C"], &[]);

        let assignment = generate(&roster, &mut Mulberry32::new(1)).unwrap();

        assert_eq!(pairs(&assignment), vec![("C", "A"), ("A", "B"), ("B", "C")]);
        assignment.verify(&roster).unwrap();
    }

    #[test]
    fn test_reference_traces_for_small_rosters() {
        let roster = roster(&["A", "B", "C"], &[]);

        let seed_3 = generate(&roster, &mut Mulberry32::new(3)).unwrap();
        let seed_42 = generate(&roster, &mut Mulberry32::new(42)).unwrap();

        assert_eq!(pairs(&seed_3), vec![("B", "A"), ("A", "C"), ("C", "B")]);
        assert_eq!(pairs(&seed_42), vec![("C", "B"), ("A", "C"), ("B", "A")]);
    }

    #[test]
    fn test_reference_trace_with_couples() {
        let roster = roster(
            &["Alice", "Bob", "Carol", "Dave", "Eve", "Frank"],
            &[&["Alice", "Bob"], &["Carol", "Dave"]],
        );

        let assignment = generate(&roster, &mut Mulberry32::new(42)).unwrap();

        assert_eq!(
            pairs(&assignment),
            vec![
                ("Bob", "Dave"),
                ("Alice", "Carol"),
                ("Eve", "Bob"),
                ("Frank", "Eve"),
                ("Carol", "Frank"),
                ("Dave", "Alice"),
            ]
        );
        assignment.verify(&roster).unwrap();
    }

    #[test]
    fn test_all_pairs_excluded_has_no_solution_for_any_seed() {
        let roster = roster(&["A", "B", "C"], &[&["A", "B"], &["A", "C"], &["B", "C"]]);

        for seed in 0..200 {
            assert!(generate(&roster, &mut Mulberry32::new(seed)).is_none());
        }
    }

    #[test]
    fn test_unsatisfiable_search_terminates_with_none() {
        // A, B and C may only give to D, which cannot cover three givers.
        let roster = roster(&["A", "B", "C", "D"], &[&["A", "B", "C"]]);

        assert!(generate(&roster, &mut Mulberry32::new(5)).is_none());
    }

    #[test]
    fn test_same_seed_same_assignment() {
        let roster = roster(
            &["Ann", "Ben", "Cat", "Dan", "Eli", "Fay", "Gus", "Hal"],
            &[&["Ann", "Ben"], &["Cat", "Dan", "Eli"]],
        );

        let first = generate(&roster, &mut Mulberry32::new(777)).unwrap();
        let second = generate(&roster, &mut Mulberry32::new(777)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_every_successful_draw_is_valid() {
        let roster = roster(
            &["Ann", "Ben", "Cat", "Dan", "Eli", "Fay", "Gus"],
            &[&["Ann", "Ben"], &["Ben", "Cat"], &["Dan", "Eli", "Fay"]],
        );

        for seed in 0..300 {
            if let Some(assignment) = generate(&roster, &mut Mulberry32::new(seed)) {
                assignment.verify(&roster).unwrap();
            }
        }
    }

    #[test]
    fn test_participant_order_changes_the_result_basis() {
        let forward = roster(&["A", "B", "C", "D", "E"], &[]);
        let reversed = roster(&["E", "D", "C", "B", "A"], &[]);

        let results: Vec<bool> = (0..20)
            .map(|seed| {
                generate(&forward, &mut Mulberry32::new(seed))
                    != generate(&reversed, &mut Mulberry32::new(seed))
            })
            .collect();

        assert!(results.contains(&true));
    }

    #[test]
    fn test_reshuffles_remaining_receivers_for_each_giver() {
        // Three people, all draws 0.0: two 2-draw shuffles for the orders,
        // then 2 + 1 + 0 draws while placing givers without backtracking.
        let roster = roster(&["A", "B", "C"], &[]);
        let mut rng = SequenceRng::new(vec![0.0; 7]);

        let assignment = generate(&roster, &mut rng).unwrap();

        assert_eq!(rng.consumed(), 7);
        assignment.verify(&roster).unwrap();
    }
}
