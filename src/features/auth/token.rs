use rand::{rngs::OsRng, RngCore};

use crate::shared::constants::{AUTH_SCHEME, AUTH_TOKEN_BYTES};

/// Mint a fresh provider token: 20 random bytes, hex-encoded.
pub fn generate_token() -> String {
    let mut bytes = [0u8; AUTH_TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Extract the token key from an `Authorization: Token <key>` header value.
pub fn parse_token_header(header: &str) -> Option<&str> {
    let key = header.strip_prefix(AUTH_SCHEME)?.strip_prefix(' ')?.trim();
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_token_is_40_hex_chars() {
        let token = generate_token();
        assert_eq!(token.len(), 40);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(generate_token(), generate_token());
    }

    #[test]
    fn test_parse_token_header() {
        assert_eq!(parse_token_header("Token abc123"), Some("abc123"));
        assert_eq!(parse_token_header("Token  abc123 "), Some("abc123"));
        assert_eq!(parse_token_header("Bearer abc123"), None);
        assert_eq!(parse_token_header("Token"), None);
        assert_eq!(parse_token_header("Token "), None);
        assert_eq!(parse_token_header(""), None);
    }
}
