//! Stateless token codec for shareable "open when" letters.
//!
//! A [`Collection`] of letters is packed into a compact, URL-safe token and
//! recovered from it without any server-side store. Tokens produced by every
//! earlier wire generation still decode; see [`TokenFormat`].
//!
//! ```
//! use openwhen_codec::{decode, encode, Collection, Letter};
//!
//! let collection = Collection {
//!     id: "k3x9q2m1a".to_string(),
//!     recipient: "Sam".to_string(),
//!     letters: vec![Letter::text("a1", "you had a tough day", "Hope you smile.")],
//!     ..Default::default()
//! };
//! let token = encode(&collection).unwrap();
//! assert_eq!(decode(&token), Some(collection));
//! assert_eq!(decode("not-a-valid-token!!"), None);
//! ```

pub mod codec;
pub mod compress;
pub mod config;
pub mod error;
pub mod identity;
pub mod keys;
pub mod link;
pub mod schedule;
pub mod timestamp;
pub mod types;

pub use codec::{
    decode, decode_with_format, encode, encode_legacy_json, encode_legacy_letter, TokenCodec,
    TokenFormat, DELIMITER,
};
pub use config::CodecConfig;
pub use error::CodecError;
pub use identity::{derive_id, generate_id};
pub use link::{share_link, token_from_link};
pub use schedule::{format_release_date, lock_state, Countdown, LockState};
pub use types::{Collection, Letter, LetterKind};
