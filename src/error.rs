use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Compression failed: {0}")]
    Compression(String),

    #[error("Decompression failed: {0}")]
    Decompression(String),

    #[error("Inflated payload exceeds {limit} bytes")]
    InflatedTooLarge { limit: usize },

    #[error("Token too long: {len} bytes (limit {limit})")]
    TokenTooLong { len: usize, limit: usize },

    #[error("Payload is not valid UTF-8")]
    InvalidUtf8,

    #[error("Invalid token payload: expected object")]
    NotAnObject,

    #[error("Invalid token payload: missing letters array")]
    MissingLetters,

    #[error("Payload is not in delimited form")]
    NotDelimited,

    #[error("Invalid letter at index {index}: {reason}")]
    InvalidLetter { index: usize, reason: String },

    #[error("Invalid link: {0}")]
    Link(String),

    #[error("Token not recognized by any known format")]
    Unrecognized,
}
