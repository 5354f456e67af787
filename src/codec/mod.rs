//! Token encode/decode.
//!
//! Encoding always produces the current wire generation. Decoding runs a fixed
//! cascade of interpreters, newest generation first, because tokens carry no
//! version marker and links shared years ago must keep working.

mod cascade;
mod legacy;
mod wire;

pub use cascade::TokenFormat;
pub use legacy::DELIMITER;

use crate::config::CodecConfig;
use crate::error::CodecError;
use crate::types::Collection;

/// Encoder/decoder bound to a [`CodecConfig`].
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct TokenCodec {
    config: CodecConfig,
}

impl TokenCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Pack a collection into a URL-safe token.
    pub fn encode(&self, collection: &Collection) -> Result<String, CodecError> {
        wire::encode(collection, self.config.compression_level)
    }

    /// Build a token in the delimited single-letter generation
    /// (`recipient|label|text`). Only used to produce backward-compatibility
    /// fixtures; it cannot carry voice letters, schedules or multiple letters.
    pub fn encode_legacy_letter(
        &self,
        recipient: &str,
        label: &str,
        text: &str,
    ) -> Result<String, CodecError> {
        legacy::encode_delimited(recipient, label, text, self.config.compression_level)
    }

    /// Decode a token, reporting which wire generation it belonged to.
    ///
    /// Returns [`CodecError::Unrecognized`] when every interpreter declined.
    pub fn try_decode(&self, token: &str) -> Result<(Collection, TokenFormat), CodecError> {
        cascade::run(token, &self.config)
    }

    pub fn decode_with_format(&self, token: &str) -> Option<(Collection, TokenFormat)> {
        self.try_decode(token).ok()
    }

    /// Decode a token. `None` means "not found"; this never panics, whatever
    /// the input.
    pub fn decode(&self, token: &str) -> Option<Collection> {
        self.decode_with_format(token).map(|(collection, _)| collection)
    }
}

/// [`TokenCodec::encode`] with the default configuration.
pub fn encode(collection: &Collection) -> Result<String, CodecError> {
    TokenCodec::default().encode(collection)
}

/// [`TokenCodec::decode`] with the default configuration.
pub fn decode(token: &str) -> Option<Collection> {
    TokenCodec::default().decode(token)
}

/// [`TokenCodec::decode_with_format`] with the default configuration.
pub fn decode_with_format(token: &str) -> Option<(Collection, TokenFormat)> {
    TokenCodec::default().decode_with_format(token)
}

/// [`TokenCodec::encode_legacy_letter`] with the default configuration.
pub fn encode_legacy_letter(
    recipient: &str,
    label: &str,
    text: &str,
) -> Result<String, CodecError> {
    TokenCodec::default().encode_legacy_letter(recipient, label, text)
}

/// Build a token in the oldest generation: the JSON object in standard base64
/// with URL-safe substitution. Fixtures only.
pub fn encode_legacy_json(value: &serde_json::Value) -> Result<String, CodecError> {
    legacy::encode_base64_json(value)
}
