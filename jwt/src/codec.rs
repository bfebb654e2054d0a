//! Token codec: the sign and verify operations
//!
//! A token is three dot-joined unpadded base64url segments: header JSON,
//! payload JSON, and the HMAC-SHA256 signature over
//! `header_segment.payload_segment`.

use crate::crypto::hmac_sha256;
use crate::encoding::{base64_url_decode, base64_url_encode};
use crate::error::{TokenError, TokenResult};
use crate::types::{Header, Payload};

/// Sign `payload` with `secret`, producing a compact token
///
/// The header is fixed to `{"typ":"JWT","alg":"HS256"}`. Payload keys are
/// serialized in insertion order, so repeated calls with the same secret
/// and payload yield the same token. The secret is used as raw UTF-8 key
/// material; an empty secret is accepted as-is.
///
/// # Errors
///
/// Returns [`TokenError::Serialization`] if the payload cannot be encoded
/// as JSON.
pub fn sign(secret: &str, payload: &Payload) -> TokenResult<String> {
    let header_json = serde_json::to_string(&Header::hs256())
        .map_err(|e| TokenError::serialization(&e.to_string()))?;
    let payload_json = serde_json::to_string(payload)
        .map_err(|e| TokenError::serialization(&e.to_string()))?;

    let header_b64 = base64_url_encode(header_json.as_bytes());
    let payload_b64 = base64_url_encode(payload_json.as_bytes());
    let message = format!("{header_b64}.{payload_b64}");

    let signature = hmac_sha256::sign(secret.as_bytes(), message.as_bytes())?;
    let signature_b64 = base64_url_encode(&signature);
    Ok(format!("{message}.{signature_b64}"))
}

/// Verify `token` against `secret` and return its payload
///
/// The expected signature is recomputed over the literal header and payload
/// segments embedded in the token and compared in constant time. The header
/// segment is covered by the signature but never parsed.
///
/// # Errors
///
/// Returns [`TokenError::MalformedToken`] when the token does not split
/// into exactly three segments, when a consumed segment is not valid
/// base64url, or when the payload segment is not a JSON object. Returns
/// [`TokenError::InvalidSignature`] when the recomputed signature differs
/// from the token's — tampering and a wrong secret are indistinguishable.
pub fn verify(secret: &str, token: &str) -> TokenResult<Payload> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        tracing::debug!(
            segments = parts.len(),
            "rejected token: unexpected segment count"
        );
        return Err(TokenError::malformed(
            "expected three dot-separated segments",
        ));
    }

    let candidate = base64_url_decode(parts[2])
        .map_err(|_| TokenError::malformed("signature segment is not valid base64url"))?;

    let message = format!("{}.{}", parts[0], parts[1]);
    if !hmac_sha256::verify(secret.as_bytes(), message.as_bytes(), &candidate)? {
        tracing::debug!("rejected token: signature mismatch");
        return Err(TokenError::InvalidSignature);
    }

    let payload_bytes = base64_url_decode(parts[1])
        .map_err(|_| TokenError::malformed("payload segment is not valid base64url"))?;
    let payload: Payload = serde_json::from_slice(&payload_bytes)
        .map_err(|e| TokenError::malformed(&format!("payload segment is not a JSON object: {e}")))?;

    Ok(payload)
}
