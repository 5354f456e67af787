//! Decode cascade.
//!
//! Interpreters run in a fixed order, newest generation first. Each is a pure
//! function of the [`Probe`]; the first `Ok` wins and every `Err` just moves on
//! to the next interpreter. Only exhaustion is reported to the caller.

use serde_json::{Map, Value};

use super::legacy::{decode_base64_text, split_delimited};
use crate::compress::decompress;
use crate::config::CodecConfig;
use crate::error::CodecError;
use crate::identity::derive_id;
use crate::keys::{
    KeyTable, COLLECTION_KEYS, LEGACY_LETTER_KEYS, LEGACY_SHORT_MARKERS, LETTER_KEYS,
};
use crate::timestamp;
use crate::types::{Collection, Letter, LetterKind};

/// Wire generation a token was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenFormat {
    /// Compressed short-key collection (current).
    ShortKey,
    /// Compressed `recipient|label|text`.
    Delimited,
    /// Base64 JSON: short-key or long-key single letter, or long-key
    /// collection.
    LegacyJson,
}

/// A token plus the outcome of the one decompression attempt shared by the
/// compressed-format interpreters.
pub(super) struct Probe<'a> {
    token: &'a str,
    inflated: Result<String, CodecError>,
}

impl<'a> Probe<'a> {
    fn new(token: &'a str, config: &CodecConfig) -> Self {
        Self {
            token,
            inflated: decompress(token, config.max_inflated_len),
        }
    }

    fn inflated(&self) -> Result<&str, CodecError> {
        self.inflated
            .as_deref()
            .map_err(|e| CodecError::Decompression(e.to_string()))
    }
}

/// A long-key single letter carries at least one of these.
const LONG_LETTER_MARKERS: &[&str] = &["id", "label", "content"];

type Interpreter = fn(&Probe<'_>) -> Result<Collection, CodecError>;

/// Priority order matters: a short-key document may contain the delimiter in
/// free text, so the structural check must run before the delimiter check.
const CASCADE: &[(TokenFormat, Interpreter)] = &[
    (TokenFormat::ShortKey, read_short_key),
    (TokenFormat::Delimited, read_delimited),
    (TokenFormat::LegacyJson, read_legacy_json),
];

pub(super) fn run(
    token: &str,
    config: &CodecConfig,
) -> Result<(Collection, TokenFormat), CodecError> {
    let token = token.trim();
    if token.len() > config.max_token_len {
        return Err(CodecError::TokenTooLong {
            len: token.len(),
            limit: config.max_token_len,
        });
    }

    let probe = Probe::new(token, config);
    for (format, interpret) in CASCADE {
        match interpret(&probe) {
            Ok(collection) => {
                tracing::debug!(?format, letters = collection.letters.len(), "token decoded");
                return Ok((collection, *format));
            }
            Err(error) => tracing::trace!(?format, %error, "interpreter declined token"),
        }
    }
    tracing::debug!(len = token.len(), "no interpreter accepted token");
    Err(CodecError::Unrecognized)
}

// ============================================================================
// Interpreters
// ============================================================================

fn read_short_key(probe: &Probe<'_>) -> Result<Collection, CodecError> {
    let text = probe.inflated()?;
    let value: Value = serde_json::from_str(text)?;
    let obj = value.as_object().ok_or(CodecError::NotAnObject)?;
    collection_from_fields(&COLLECTION_KEYS.expand(obj), Some(&LETTER_KEYS), text)
}

fn read_delimited(probe: &Probe<'_>) -> Result<Collection, CodecError> {
    let text = probe.inflated()?;
    if is_json_object(text) {
        return Err(CodecError::NotDelimited);
    }
    let (recipient, label, body) = split_delimited(text).ok_or(CodecError::NotDelimited)?;
    let id = derive_id(text);
    let letter = Letter::text(id.clone(), label, body);
    Ok(Collection::single(id, recipient.to_string(), letter))
}

fn read_legacy_json(probe: &Probe<'_>) -> Result<Collection, CodecError> {
    let text = decode_base64_text(probe.token)?;
    let value: Value = serde_json::from_str(&text)?;
    let obj = value.as_object().ok_or(CodecError::NotAnObject)?;

    if KeyTable::has_any(obj, LEGACY_SHORT_MARKERS) {
        return Ok(single_from_fields(&LEGACY_LETTER_KEYS.expand(obj), &text));
    }
    // Long-key collections predate short keys but postdate single letters.
    if obj.get("letters").is_some_and(Value::is_array) {
        return collection_from_fields(obj, None, &text);
    }
    if !KeyTable::has_any(obj, LONG_LETTER_MARKERS) {
        return Err(CodecError::InvalidLetter {
            index: 0,
            reason: "no letter fields".to_string(),
        });
    }
    Ok(single_from_fields(obj, &text))
}

// ============================================================================
// Long-key field readers
// ============================================================================

/// Build a collection from long-key fields. Letter entries are expanded with
/// `letter_keys` first when they are still in short-key form.
fn collection_from_fields(
    fields: &Map<String, Value>,
    letter_keys: Option<&KeyTable>,
    source: &str,
) -> Result<Collection, CodecError> {
    let raw_letters = fields
        .get("letters")
        .and_then(Value::as_array)
        .ok_or(CodecError::MissingLetters)?;
    let id = string_field(fields, "id").unwrap_or_else(|| derive_id(source));

    let letters = raw_letters
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let obj = raw.as_object().ok_or_else(|| CodecError::InvalidLetter {
                index,
                reason: "expected object".to_string(),
            })?;
            let fallback_id = || derive_id(&format!("{id}:{index}"));
            Ok(match letter_keys {
                Some(table) => letter_from_fields(&table.expand(obj), fallback_id),
                None => letter_from_fields(obj, fallback_id),
            })
        })
        .collect::<Result<Vec<_>, CodecError>>()?;

    Ok(Collection {
        name: string_field(fields, "name").unwrap_or_default(),
        recipient: string_field(fields, "recipient").unwrap_or_default(),
        created_at: timestamp::from_value("createdAt", fields.get("createdAt")),
        id,
        letters,
    })
}

/// Wrap a lone pre-collection letter. The stored id, or one derived from the
/// payload text, identifies both the collection and its letter.
fn single_from_fields(fields: &Map<String, Value>, source: &str) -> Collection {
    let id = string_field(fields, "id").unwrap_or_else(|| derive_id(source));
    let letter = letter_from_fields(fields, || id.clone());
    let recipient = string_field(fields, "recipient").unwrap_or_default();
    Collection::single(id, recipient, letter)
}

fn letter_from_fields(
    fields: &Map<String, Value>,
    fallback_id: impl FnOnce() -> String,
) -> Letter {
    Letter {
        id: string_field(fields, "id").unwrap_or_else(fallback_id),
        kind: fields
            .get("type")
            .and_then(Value::as_str)
            .map(LetterKind::from_wire)
            .unwrap_or_default(),
        label: string_field(fields, "label").unwrap_or_default(),
        text_body: string_field(fields, "content").unwrap_or_default(),
        audio_payload: fields
            .get("audioData")
            .and_then(Value::as_str)
            .map(str::to_string),
        release_date: timestamp::from_value("releaseDate", fields.get("releaseDate")),
    }
}

/// Non-empty string (or number, for hand-edited ids) field.
fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn is_json_object(text: &str) -> bool {
    text.trim_start().starts_with('{')
        && serde_json::from_str::<Value>(text).is_ok_and(|v| v.is_object())
}
