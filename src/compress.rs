//! URL-safe string compression.
//!
//! Format: `base64url_nopad(zlib(utf8 text))`. The zlib trailer carries an
//! Adler-32 checksum, so data that was never produced by [`compress`] fails to
//! inflate instead of yielding garbage text.

use std::io::Write;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};

use crate::error::CodecError;

/// Highest zlib compression level.
pub const MAX_LEVEL: u32 = 9;

/// Compress `text` into a URL-path-safe string (`[A-Za-z0-9_-]`).
pub fn compress(text: &str, level: u32) -> Result<String, CodecError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(level.min(MAX_LEVEL)));
    encoder
        .write_all(text.as_bytes())
        .map_err(|e| CodecError::Compression(e.to_string()))?;
    let deflated = encoder
        .finish()
        .map_err(|e| CodecError::Compression(e.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(deflated))
}

/// Inverse of [`compress`].
///
/// Output larger than `max_len` bytes is rejected without being buffered in
/// full.
pub fn decompress(token: &str, max_len: usize) -> Result<String, CodecError> {
    let deflated = URL_SAFE_NO_PAD.decode(token)?;
    let inflated = inflate(&deflated, max_len)?;
    String::from_utf8(inflated).map_err(|_| CodecError::InvalidUtf8)
}

/// Inflate a complete zlib stream. A stream that ends before its trailer is an
/// error, not a short read.
fn inflate(deflated: &[u8], max_len: usize) -> Result<Vec<u8>, CodecError> {
    let mut inflater = Decompress::new(true);
    let initial = deflated
        .len()
        .saturating_mul(4)
        .min(max_len.saturating_add(1))
        .max(64);
    let mut out = Vec::with_capacity(initial);

    loop {
        if out.len() == out.capacity() {
            out.reserve(out.capacity());
        }
        let before = (inflater.total_in(), inflater.total_out());
        let input = &deflated[inflater.total_in() as usize..];
        let status = inflater
            .decompress_vec(input, &mut out, FlushDecompress::Finish)
            .map_err(|e| CodecError::Decompression(e.to_string()))?;

        if out.len() > max_len {
            return Err(CodecError::InflatedTooLarge { limit: max_len });
        }
        if matches!(status, Status::StreamEnd) {
            return Ok(out);
        }
        if (inflater.total_in(), inflater.total_out()) == before {
            return Err(CodecError::Decompression("truncated stream".to_string()));
        }
    }
}
