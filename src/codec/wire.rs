//! Current-generation encoder.
//!
//! Format: `compress(json)` where `json` is the short-key object
//! `{i, n?, r?, t?, l: [{i, b, t?, c?, a?, d?}, ...]}` with keys in table order.

use serde_json::{Map, Value};

use crate::compress::compress;
use crate::error::CodecError;
use crate::keys::{COLLECTION_KEYS, LETTER_KEYS};
use crate::timestamp::to_millis;
use crate::types::{Collection, Letter, LetterKind};

pub(super) fn encode(collection: &Collection, level: u32) -> Result<String, CodecError> {
    let json = serde_json::to_string(&collection_to_wire(collection))?;
    compress(&json, level)
}

fn collection_to_wire(collection: &Collection) -> Value {
    let mut obj = Map::new();
    for (long, short) in COLLECTION_KEYS.fields() {
        let value = match long {
            "id" => Some(Value::String(collection.id.clone())),
            "name" => non_empty(&collection.name),
            "recipient" => non_empty(&collection.recipient),
            "createdAt" => collection.created_at.as_ref().map(|t| Value::from(to_millis(t))),
            "letters" => Some(Value::Array(
                collection.letters.iter().map(letter_to_wire).collect(),
            )),
            _ => None,
        };
        if let Some(value) = value {
            obj.insert(short.to_string(), value);
        }
    }
    Value::Object(obj)
}

fn letter_to_wire(letter: &Letter) -> Value {
    let mut obj = Map::new();
    for (long, short) in LETTER_KEYS.fields() {
        let value = match long {
            "id" => Some(Value::String(letter.id.clone())),
            "label" => Some(Value::String(letter.label.clone())),
            "type" => match letter.kind {
                LetterKind::Text => None,
                kind => Some(Value::String(kind.as_str().to_string())),
            },
            "content" => non_empty(&letter.text_body),
            "audioData" => letter.audio_payload.clone().map(Value::String),
            "releaseDate" => letter.release_date.as_ref().map(|t| Value::from(to_millis(t))),
            _ => None,
        };
        if let Some(value) = value {
            obj.insert(short.to_string(), value);
        }
    }
    Value::Object(obj)
}

fn non_empty(s: &str) -> Option<Value> {
    (!s.is_empty()).then(|| Value::String(s.to_string()))
}
