//! Header and payload types for the token codec

use serde::{Deserialize, Serialize};

/// Caller payload: string keys mapped to any JSON-compatible value.
///
/// `serde_json`'s `preserve_order` feature keeps the map insertion-ordered,
/// so serializing the same payload always produces the same bytes. The
/// signature is computed over those exact bytes, not the logical structure.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Token header structure
///
/// Constructed identically for every token and never caller-configurable.
/// Field declaration order is serialization order: the signed header bytes
/// are exactly `{"typ":"JWT","alg":"HS256"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
    pub typ: String,
    pub alg: String,
}

impl Header {
    /// The fixed HS256 header used for every token
    #[must_use]
    pub fn hs256() -> Self {
        Self {
            typ: "JWT".to_string(),
            alg: "HS256".to_string(),
        }
    }
}
