//! Base64url transcoding for token segments
//!
//! RFC 7515 base64url: `-`/`_` in place of `+`/`/`, padding stripped.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

/// Encode bytes as unpadded base64url
#[inline]
pub(crate) fn base64_url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode unpadded base64url into bytes
///
/// Fails on characters outside the base64url alphabet, on padding
/// characters, and on lengths not reachable by stripping 0-2 padding
/// characters from a padded encoding.
#[inline]
pub(crate) fn base64_url_decode(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_url_safe_alphabet() {
        // 0xfb 0xff maps onto indices 62 and 63, the characters the
        // url-safe alphabet swaps out
        assert_eq!(base64_url_encode(&[0xfb, 0xff]), "-_8");
    }

    #[test]
    fn encodes_without_padding() {
        assert_eq!(base64_url_encode(b"ca"), "Y2E");
        assert_eq!(base64_url_encode(b"cat"), "Y2F0");
    }

    #[test]
    fn round_trips() {
        let input = b"any carnal pleasure";
        let decoded = base64_url_decode(&base64_url_encode(input)).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn decodes_empty_input() {
        assert_eq!(base64_url_decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn rejects_standard_alphabet() {
        assert!(base64_url_decode("+/").is_err());
    }

    #[test]
    fn rejects_padded_input() {
        assert!(base64_url_decode("Y2E=").is_err());
    }

    #[test]
    fn rejects_unreachable_length() {
        // length 1 mod 4 cannot result from stripping 0-2 padding chars
        assert!(base64_url_decode("Y2F0Y").is_err());
    }
}
