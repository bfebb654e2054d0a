//! Error types for the signed search key codec

use thiserror::Error;

/// Codec operation result type
pub type TokenResult<T> = Result<T, TokenError>;

/// Errors surfaced by token signing and verification
///
/// All variants are recoverable, caller-visible conditions. The codec
/// performs no retries and returns no partial results: `verify` either
/// yields a fully parsed payload or one of these.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    /// Payload has no JSON representation
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Token structure is broken: wrong segment count, a segment that is
    /// not valid base64url, or a payload segment that is not a JSON object
    #[error("Malformed token: {0}")]
    MalformedToken(String),
    /// Recomputed signature does not match the token's signature segment
    #[error("Invalid token signature")]
    InvalidSignature,
    /// Key material was rejected by the HMAC constructor
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

impl TokenError {
    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        TokenError::Serialization(msg.to_string())
    }

    /// Create a malformed token error
    #[inline]
    #[must_use]
    pub fn malformed(msg: &str) -> Self {
        TokenError::MalformedToken(msg.to_string())
    }
}
