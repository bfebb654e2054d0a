//! HMAC-SHA256 signing and constant-time verification

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::{TokenError, TokenResult};

type HmacSha256 = Hmac<Sha256>;

/// Compute the 32-byte HMAC-SHA256 digest of `message` keyed by `secret`
///
/// HMAC admits keys of any length per RFC 2104, the empty key included;
/// keys longer than the block size are hashed first.
pub(crate) fn sign(secret: &[u8], message: &[u8]) -> TokenResult<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|_| TokenError::InvalidKey("Invalid HMAC key".to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Compare `candidate` against the recomputed digest in constant time
///
/// Differing lengths compare unequal without inspecting content.
pub(crate) fn verify(secret: &[u8], message: &[u8], candidate: &[u8]) -> TokenResult<bool> {
    let expected = sign(secret, message)?;
    Ok(expected.ct_eq(candidate).into())
}
