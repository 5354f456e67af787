//! Short-key tables.
//!
//! Each table maps a long field name to a one-character wire code. Tables are
//! append-only: a code that has ever been emitted is never reassigned, or old
//! tokens would decode into the wrong field.

use serde_json::{Map, Value};

/// A fixed `(long, short)` field table in canonical wire order.
#[derive(Debug, Clone, Copy)]
pub struct KeyTable {
    entries: &'static [(&'static str, &'static str)],
}

impl KeyTable {
    const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Wire code for a long field name.
    pub fn short(&self, long: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(l, _)| *l == long)
            .map(|(_, s)| *s)
    }

    /// Long field name for a wire code.
    pub fn long(&self, short: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, s)| *s == short)
            .map(|(l, _)| *l)
    }

    /// `(long, short)` pairs in canonical order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// Rewrite every known short key of `obj` to its long name.
    ///
    /// Unknown keys are kept verbatim. Values are not touched.
    pub fn expand(&self, obj: &Map<String, Value>) -> Map<String, Value> {
        obj.iter()
            .map(|(k, v)| {
                let key = self.long(k).map(str::to_string).unwrap_or_else(|| k.clone());
                (key, v.clone())
            })
            .collect()
    }

    /// Whether `obj` carries any of the given wire codes.
    pub fn has_any(obj: &Map<String, Value>, codes: &[&str]) -> bool {
        codes.iter().any(|c| obj.contains_key(*c))
    }
}

/// Collection-level fields of the current generation.
pub static COLLECTION_KEYS: KeyTable = KeyTable::new(&[
    ("id", "i"),
    ("name", "n"),
    ("recipient", "r"),
    ("createdAt", "t"),
    ("letters", "l"),
]);

/// Letter-level fields of the current generation.
pub static LETTER_KEYS: KeyTable = KeyTable::new(&[
    ("id", "i"),
    ("label", "b"),
    ("type", "t"),
    ("content", "c"),
    ("audioData", "a"),
    ("releaseDate", "d"),
]);

/// The oldest short-key shape: one letter, recipient inline.
pub static LEGACY_LETTER_KEYS: KeyTable = KeyTable::new(&[
    ("id", "i"),
    ("recipient", "r"),
    ("label", "l"),
    ("content", "c"),
]);

/// Presence of any of these selects the legacy short-key interpretation over
/// the long-key one.
pub const LEGACY_SHORT_MARKERS: &[&str] = &["l", "c", "r"];
