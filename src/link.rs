//! Share links: `{origin}/{token}`.

use url::Url;

use crate::error::CodecError;

/// Build the shareable link for `token` under `origin`
/// (e.g. `https://openwhen.example`).
pub fn share_link(origin: &str, token: &str) -> Result<String, CodecError> {
    let mut url = Url::parse(origin).map_err(|e| CodecError::Link(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(CodecError::Link(format!("not a base URL: {origin}")));
    }
    url.set_path(&format!("/{token}"));
    url.set_query(None);
    url.set_fragment(None);
    Ok(url.to_string())
}

/// Extract the token from a share link.
///
/// Accepts a full URL (last non-empty path segment wins) or a bare token.
pub fn token_from_link(link: &str) -> Option<String> {
    let link = link.trim();
    if link.is_empty() {
        return None;
    }
    match Url::parse(link) {
        Ok(url) => url
            .path_segments()?
            .rev()
            .find(|segment| !segment.is_empty())
            .map(str::to_string),
        Err(_) => Some(link.trim_matches('/').to_string()).filter(|t| !t.is_empty()),
    }
}
