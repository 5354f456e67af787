//! Codec configuration.

use serde::Deserialize;

use crate::compress::MAX_LEVEL;

/// Limits and tuning for [`TokenCodec`](crate::TokenCodec).
///
/// Loadable from JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodecConfig {
    /// zlib level, 0 (store) to 9 (smallest). Values above 9 are clamped.
    pub compression_level: u32,
    /// Tokens longer than this are rejected before any decoding work.
    pub max_token_len: usize,
    /// Upper bound on decompressed payload size.
    pub max_inflated_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            compression_level: MAX_LEVEL,
            max_token_len: 1 << 20,
            max_inflated_len: 8 << 20,
        }
    }
}

impl CodecConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
