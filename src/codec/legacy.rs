//! Pre-collection wire generations.
//!
//! Two shapes exist in the wild:
//! - `compress("recipient|label|text")`
//! - standard base64 of a single-letter JSON object, with `+`/`/` swapped for
//!   `-`/`_` and padding often lost on the way through links.
//!
//! Only decoding matters for real traffic; the encoders build test fixtures.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::compress::compress;
use crate::error::CodecError;

/// Field separator of the delimited generation.
pub const DELIMITER: char = '|';

pub(super) fn encode_delimited(
    recipient: &str,
    label: &str,
    text: &str,
    level: u32,
) -> Result<String, CodecError> {
    let joined = format!("{recipient}{DELIMITER}{label}{DELIMITER}{text}");
    compress(&joined, level)
}

/// Split a delimited payload into `(recipient, label, text)`.
///
/// The text keeps any further delimiters. Missing trailing parts are empty.
pub(super) fn split_delimited(payload: &str) -> Option<(&str, &str, &str)> {
    if !payload.contains(DELIMITER) {
        return None;
    }
    let mut parts = payload.splitn(3, DELIMITER);
    let recipient = parts.next().unwrap_or_default();
    let label = parts.next().unwrap_or_default();
    let text = parts.next().unwrap_or_default();
    Some((recipient, label, text))
}

pub(super) fn encode_base64_json(value: &serde_json::Value) -> Result<String, CodecError> {
    let json = serde_json::to_string(value)?;
    let encoded = STANDARD.encode(json.as_bytes());
    Ok(encoded
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect())
}

/// Undo URL-safe substitution and lost padding, then base64-decode to text.
pub(super) fn decode_base64_text(token: &str) -> Result<String, CodecError> {
    let mut normalized: String = token
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();
    let unpadded = normalized.trim_end_matches('=').len();
    normalized.truncate(unpadded);
    while normalized.len() % 4 != 0 {
        normalized.push('=');
    }
    let bytes = STANDARD.decode(normalized.as_bytes())?;
    String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)
}
