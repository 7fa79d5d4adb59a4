//! The original multi-parameter link form.
//!
//! Before the bundled token existed, links carried the state in separate
//! query parameters:
//!
//! - `participants`: names escaped as URI components, joined with `,`
//! - `exclusions`: groups joined with `,`, members escaped and joined with `|`
//! - `seed`: decimal integer
//! - `view`: escaped name of the person whose reveal the link opens
//!
//! Those links are still in circulation, so they must keep decoding.

use crate::error::DecodeError;
use crate::escape::{decode_component, encode_component};
use crate::query::QueryParams;
use crate::state::ShareableState;

/// Parameter holding escaped, comma-joined participant names.
pub const PARTICIPANTS_PARAM: &str = "participants";
/// Parameter holding comma-separated, pipe-joined exclusion groups.
pub const EXCLUSIONS_PARAM: &str = "exclusions";
/// Parameter holding the decimal seed.
pub const SEED_PARAM: &str = "seed";
/// Parameter holding the escaped name of the viewed person.
pub const VIEW_PARAM: &str = "view";

/// Whether `params` carries any legacy state parameter.
#[must_use]
pub fn is_present(params: &QueryParams) -> bool {
    [PARTICIPANTS_PARAM, EXCLUSIONS_PARAM, SEED_PARAM, VIEW_PARAM]
        .iter()
        .any(|key| params.get(key).is_some())
}

/// Reads the legacy parameters. Missing parameters leave the matching field
/// empty.
///
/// Names are trimmed before unescaping and blank entries are skipped;
/// exclusion groups left with fewer than two members are dropped.
///
/// # Errors
///
/// Returns `DecodeError::Escape` or `DecodeError::Utf8` for a badly escaped
/// name and `DecodeError::Seed` for a seed that is not a `u32`.
pub fn decode(params: &QueryParams) -> Result<ShareableState, DecodeError> {
    let participants = match params.get_non_empty(PARTICIPANTS_PARAM) {
        Some(raw) => split_names(raw, ',')?,
        None => Vec::new(),
    };

    let mut exclusion_groups = Vec::new();
    if let Some(raw) = params.get_non_empty(EXCLUSIONS_PARAM) {
        for group in raw.split(',') {
            let members = split_names(group, '|')?;
            if members.len() > 1 {
                exclusion_groups.push(members);
            }
        }
    }

    let seed = params
        .get_non_empty(SEED_PARAM)
        .map(|raw| {
            raw.trim()
                .parse::<u32>()
                .map_err(|_| DecodeError::Seed(raw.to_owned()))
        })
        .transpose()?;

    let view = params
        .get_non_empty(VIEW_PARAM)
        .map(decode_component)
        .transpose()?;

    Ok(ShareableState {
        participants,
        exclusion_groups,
        seed,
        view,
    })
}

/// Writes `state` as legacy parameters, ready to be appended to a URL with
/// form encoding. Empty collections and absent values are omitted.
#[must_use]
pub fn encode(state: &ShareableState) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();

    if !state.participants.is_empty() {
        params.push((PARTICIPANTS_PARAM, join_names(&state.participants, ",")));
    }

    if !state.exclusion_groups.is_empty() {
        let groups: Vec<String> = state
            .exclusion_groups
            .iter()
            .map(|group| join_names(group, "|"))
            .collect();
        params.push((EXCLUSIONS_PARAM, groups.join(",")));
    }

    if let Some(seed) = state.seed {
        params.push((SEED_PARAM, seed.to_string()));
    }

    if let Some(view) = &state.view {
        params.push((VIEW_PARAM, encode_component(view)));
    }

    params
}

fn split_names(raw: &str, separator: char) -> Result<Vec<String>, DecodeError> {
    let mut names = Vec::new();
    for part in raw.split(separator) {
        let name = decode_component(part.trim())?;
        if !name.is_empty() {
            names.push(name);
        }
    }
    Ok(names)
}

fn join_names(names: &[String], separator: &str) -> String {
    names
        .iter()
        .map(|name| encode_component(name))
        .collect::<Vec<_>>()
        .join(separator)
}
