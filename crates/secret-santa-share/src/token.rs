//! Opaque token encoding of a [`ShareableState`].
//!
//! The state is written as a JSON record (`participants`,
//! `exclusionGroups`, `seed`, `view`), escaped like a URI component so only
//! ASCII remains, then base64-encoded with the URL-safe alphabet and no
//! padding. The result can sit in a query string as-is.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::escape::{decode_component, encode_component};
use crate::state::ShareableState;

/// Record version written by this build. Records without a version are
/// treated as this one.
pub const TOKEN_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<u32>,
    #[serde(default)]
    participants: Vec<String>,
    #[serde(default)]
    exclusion_groups: Vec<Vec<String>>,
    #[serde(default)]
    seed: Option<u32>,
    #[serde(default)]
    view: Option<String>,
}

/// Encodes `state` into a URL-safe token.
///
/// # Panics
///
/// Never in practice: the record holds only strings and integers, which
/// always serialize.
#[must_use]
pub fn encode(state: &ShareableState) -> String {
    let record = TokenRecord {
        version: None,
        participants: state.participants.clone(),
        exclusion_groups: state.exclusion_groups.clone(),
        seed: state.seed,
        view: state.view.clone(),
    };
    // Serialization of derived Serialize types with string keys is infallible.
    let json = serde_json::to_string(&record).expect("TokenRecord serialization is infallible");
    URL_SAFE_NO_PAD.encode(encode_component(&json))
}

/// Decodes a token produced by [`encode`].
///
/// Tokens in the standard base64 alphabet, with or without padding, are
/// accepted too, including ones where query-string decoding turned `+` into
/// a space.
///
/// # Errors
///
/// Returns `DecodeError` if the token is not base64, the payload is not
/// UTF-8 or has malformed escapes, the JSON does not have the expected
/// shape, or the record version is unknown.
pub fn decode(token: &str) -> Result<ShareableState, DecodeError> {
    let normalized: String = token
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' | ' ' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = URL_SAFE_NO_PAD.decode(normalized)?;
    let escaped = String::from_utf8(bytes).map_err(|_| DecodeError::Utf8)?;
    let json = decode_component(&escaped)?;
    let record: TokenRecord = serde_json::from_str(&json)?;

    match record.version {
        None | Some(TOKEN_VERSION) => {}
        Some(other) => return Err(DecodeError::UnsupportedVersion(other)),
    }

    Ok(ShareableState {
        participants: record.participants,
        exclusion_groups: record.exclusion_groups,
        seed: record.seed,
        view: record.view,
    })
}
