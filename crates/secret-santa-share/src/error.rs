//! Decoding errors for shared links.

use thiserror::Error;

/// A shared token or legacy parameter set could not be decoded.
///
/// Decoding never guesses: any of these means the link is unusable and the
/// caller should fall back to an empty state.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The token is not base64 in either the URL-safe or standard alphabet.
    #[error("token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded bytes or escapes do not form UTF-8 text.
    #[error("decoded text is not valid UTF-8")]
    Utf8,

    /// A `%` is not followed by two hex digits.
    #[error("malformed percent escape in {0:?}")]
    Escape(String),

    /// The decoded text is not a state record of the expected shape.
    #[error("token is not a valid state record: {0}")]
    Json(#[from] serde_json::Error),

    /// The record declares a version this build does not understand.
    #[error("unsupported state record version {0}")]
    UnsupportedVersion(u32),

    /// A legacy `seed` parameter is not an unsigned 32-bit integer.
    #[error("seed {0:?} is not an unsigned 32-bit integer")]
    Seed(String),
}
