//! Point-in-time normalization.
//!
//! The current wire generation stores epoch milliseconds. Older generations
//! stored RFC 3339 strings (`createdAt`) or bare `YYYY-MM-DD` dates from the
//! release-date picker. Everything is normalized to `DateTime<Utc>` here so the
//! rest of the crate only ever sees one representation.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::Value;

/// Epoch milliseconds for the wire.
pub fn to_millis(at: &DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}

/// Parse any historical timestamp representation.
///
/// `null` and empty strings are absent. Values that are present but cannot be
/// understood are dropped with a warning rather than failing the whole token.
pub fn from_value(field: &str, value: Option<&Value>) -> Option<DateTime<Utc>> {
    let parsed = match value? {
        Value::Null => return None,
        Value::String(s) if s.trim().is_empty() => return None,
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        Value::String(s) => parse_text(s.trim()),
        _ => None,
    };
    if parsed.is_none() {
        tracing::warn!(field, "dropping unparseable timestamp");
    }
    parsed
}

fn parse_text(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(ms) = s.parse::<i64>() {
        return Utc.timestamp_millis_opt(ms).single();
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
