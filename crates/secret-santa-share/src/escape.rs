//! Component escaping compatible with browser `encodeURIComponent`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::error::DecodeError;

/// Everything except ASCII alphanumerics and `-_.!~*'()` is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub(crate) fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Reverses [`encode_component`], rejecting stray `%` signs and escapes
/// that decode to invalid UTF-8.
pub(crate) fn decode_component(text: &str) -> Result<String, DecodeError> {
    let mut rest = text;
    while let Some(pos) = rest.find('%') {
        let well_formed = rest
            .get(pos + 1..pos + 3)
            .is_some_and(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()));
        if !well_formed {
            return Err(DecodeError::Escape(text.to_owned()));
        }
        rest = &rest[pos + 3..];
    }

    percent_decode_str(text)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| DecodeError::Utf8)
}
