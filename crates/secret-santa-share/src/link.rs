//! Building shared links and working out what an incoming link asks for.

use secret_santa_core::MIN_PARTICIPANTS;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::DecodeError;
use crate::legacy;
use crate::query::QueryParams;
use crate::state::ShareableState;
use crate::token;

/// Parameter holding the bundled state token.
pub const STATE_PARAM: &str = "state";
/// Parameter asking the configuration view to run the draw on load.
pub const AUTORUN_PARAM: &str = "autorun";

/// What a shared link asks the receiving side to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkRequest {
    /// The configuration screen, optionally running the draw straight away.
    Configure {
        /// The decoded state.
        state: ShareableState,
        /// Whether to run the draw immediately.
        autorun: bool,
    },
    /// A single person's private reveal.
    Reveal {
        /// The decoded state, including the viewed person.
        state: ShareableState,
        /// The person whose assignment is revealed.
        person: String,
        /// Seed of the draw to replay.
        seed: u32,
    },
}

impl Default for LinkRequest {
    fn default() -> Self {
        Self::Configure {
            state: ShareableState::default(),
            autorun: false,
        }
    }
}

impl LinkRequest {
    /// Interprets the query string of a shared link.
    ///
    /// The bundled `state` token wins; legacy parameters are read only when
    /// it is absent; with neither, the state is empty. A link opens a reveal
    /// when it names a viewed person and a seed and has at least three
    /// participants. Otherwise it opens the configuration view, which only
    /// auto-runs when `autorun=true` and at least three participants are
    /// loaded.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` if the token or the legacy parameters are
    /// malformed. Callers should then fall back to [`LinkRequest::default`].
    pub fn from_query(query: &str) -> Result<Self, DecodeError> {
        let params = QueryParams::parse(query);

        let state = if let Some(raw) = params.get_non_empty(STATE_PARAM) {
            debug!("decoding bundled state token");
            token::decode(raw)?
        } else if legacy::is_present(&params) {
            debug!("decoding legacy link parameters");
            legacy::decode(&params)?
        } else {
            ShareableState::default()
        };

        let enough_people = state.participants.len() >= MIN_PARTICIPANTS;
        if let (true, Some(person), Some(seed)) = (enough_people, state.view.clone(), state.seed) {
            return Ok(Self::Reveal {
                state,
                person,
                seed,
            });
        }

        let autorun = enough_people && params.get(AUTORUN_PARAM) == Some("true");
        Ok(Self::Configure { state, autorun })
    }
}

/// A reveal link for one giver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonLink {
    /// The giver the link is meant for.
    pub person: String,
    /// The reveal URL.
    pub url: String,
}

/// Link to the configuration view carrying `state`, with any viewed person
/// cleared.
#[must_use]
pub fn share_url(base: &Url, state: &ShareableState) -> Url {
    with_token(base, &state.without_view())
}

/// [`share_url`] with `autorun=true`, so opening it runs the draw.
#[must_use]
pub fn autorun_url(base: &Url, state: &ShareableState) -> Url {
    let mut url = share_url(base, state);
    url.query_pairs_mut().append_pair(AUTORUN_PARAM, "true");
    url
}

/// Link to `person`'s private reveal of the draw in `state`.
#[must_use]
pub fn reveal_url(base: &Url, state: &ShareableState, person: &str) -> Url {
    with_token(base, &state.viewed_by(person))
}

/// One reveal link per person, in the order given.
#[must_use]
pub fn individual_links<'a>(
    base: &Url,
    state: &ShareableState,
    people: impl IntoIterator<Item = &'a str>,
) -> Vec<PersonLink> {
    people
        .into_iter()
        .map(|person| PersonLink {
            person: person.to_owned(),
            url: reveal_url(base, state, person).to_string(),
        })
        .collect()
}

/// Link carrying `state` in the legacy multi-parameter form, for clients
/// that predate the bundled token.
#[must_use]
pub fn legacy_url(base: &Url, state: &ShareableState) -> Url {
    let mut url = bare(base);
    {
        let mut query = url.query_pairs_mut();
        for (key, value) in legacy::encode(state) {
            query.append_pair(key, &value);
        }
    }
    if url.query() == Some("") {
        url.set_query(None);
    }
    url
}

fn with_token(base: &Url, state: &ShareableState) -> Url {
    let mut url = bare(base);
    url.query_pairs_mut()
        .append_pair(STATE_PARAM, &token::encode(state));
    url
}

fn bare(base: &Url) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url
}
