//! Signed search key codec
//!
//! Builds and validates the compact, integrity-protected tokens used to
//! scope a caller's search permissions:
//! - Canonical JSON encoding of the fixed `{"typ":"JWT","alg":"HS256"}`
//!   header and an insertion-ordered payload map
//! - Unpadded base64url segment encoding (RFC 7515)
//! - HMAC-SHA256 signing with constant-time verification
//!
//! The codec is synchronous and stateless. `sign` and `verify` are pure
//! functions of their inputs and may be called concurrently without
//! coordination; the secret is borrowed for the duration of a call and
//! never retained or logged.

mod codec;
pub(crate) mod crypto;
pub(crate) mod encoding;
mod error;
mod search_key;
mod types;

pub use codec::{sign, verify};
pub use error::*;
pub use search_key::{API_KEY_NAME_FIELD, create_signed_search_key};
pub use types::*;
