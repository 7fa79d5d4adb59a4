//! The state carried by a shared link.

/// Everything needed to rebuild the configuration screen or one person's
/// private reveal.
///
/// Values are kept exactly as given; validating the roster is the draw
/// context's job. `seed` and `view` are optional: without a seed there is
/// nothing to replay, and without a view the link opens the full draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareableState {
    /// Participants in their significant order.
    pub participants: Vec<String>,
    /// Groups whose members must not give to each other.
    pub exclusion_groups: Vec<Vec<String>>,
    /// Seed of the draw, if one has been made.
    pub seed: Option<u32>,
    /// The giver a reveal link was made for.
    pub view: Option<String>,
}

impl ShareableState {
    /// Returns a copy addressed to `person`'s private reveal.
    #[must_use]
    pub fn viewed_by(&self, person: &str) -> Self {
        Self {
            view: Some(person.to_owned()),
            ..self.clone()
        }
    }

    /// Returns a copy with the viewed person cleared.
    #[must_use]
    pub fn without_view(&self) -> Self {
        Self {
            view: None,
            ..self.clone()
        }
    }
}
