//! Opaque refresh token generation.
//!
//! A refresh token has no internal structure; it is only meaningful as a
//! lookup key for the session row stored alongside it. Expiry and revocation
//! live in that row, not in the token.

use rand::rngs::OsRng;
use rand::RngCore;

/// 256 bits of entropy per token.
const TOKEN_BYTES: usize = 32;

/// Generate a refresh token from OS randomness, hex-encoded.
pub fn generate_token() -> String {
    let mut buffer = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut buffer);

    hex::encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shape() {
        let token = generate_token();

        assert_eq!(token.len(), TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(generate_token(), generate_token());
    }
}
