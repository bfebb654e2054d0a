//! Scoped search key minting
//!
//! A signed search key embeds the caller's required search options plus the
//! name of the API key it was minted from, so the serving side can resolve
//! the shared secret and enforce the options.

use serde_json::Value;

use crate::codec::sign;
use crate::error::TokenResult;
use crate::types::Payload;

/// Payload field naming the API key a search key was minted from
pub const API_KEY_NAME_FIELD: &str = "api_key_name";

/// Mint a signed search key enforcing the given search options
///
/// Copies `options` into the payload, sets `api_key_name` to the given key
/// name (overwriting any caller-supplied value), and signs the payload with
/// `api_key` as the shared secret.
///
/// # Errors
///
/// Returns [`crate::TokenError::Serialization`] if the assembled payload
/// cannot be encoded as JSON.
pub fn create_signed_search_key(
    api_key: &str,
    api_key_name: &str,
    options: Payload,
) -> TokenResult<String> {
    let mut payload = options;
    payload.insert(
        API_KEY_NAME_FIELD.to_string(),
        Value::String(api_key_name.to_string()),
    );
    sign(api_key, &payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::verify;

    #[test]
    fn injects_api_key_name() {
        let mut options = Payload::new();
        options.insert("query".to_string(), "cat".into());

        let key = create_signed_search_key("api-secret", "my-token-name", options).unwrap();
        let payload = verify("api-secret", &key).unwrap();

        assert_eq!(payload.len(), 2);
        assert_eq!(payload["query"], "cat");
        assert_eq!(payload[API_KEY_NAME_FIELD], "my-token-name");
    }

    #[test]
    fn overwrites_caller_supplied_key_name() {
        let mut options = Payload::new();
        options.insert(API_KEY_NAME_FIELD.to_string(), "spoofed".into());
        options.insert("query".to_string(), "cat".into());

        let key = create_signed_search_key("api-secret", "real-name", options).unwrap();
        let payload = verify("api-secret", &key).unwrap();

        assert_eq!(payload[API_KEY_NAME_FIELD], "real-name");
    }

    #[test]
    fn works_with_empty_options() {
        let key = create_signed_search_key("api-secret", "my-token-name", Payload::new()).unwrap();
        let payload = verify("api-secret", &key).unwrap();

        assert_eq!(payload.len(), 1);
        assert_eq!(payload[API_KEY_NAME_FIELD], "my-token-name");
    }
}
