use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Signs and verifies short-lived access tokens.
///
/// Tokens are HS256-signed JWTs carrying a [`Claims`] payload. They are
/// stateless: verification is a signature-and-expiry check with no store
/// lookup, which is also why a leaked token cannot be revoked before its
/// expiry. Keep the TTL short.
///
/// # Security Notes
/// - The secret should be at least 256 bits (32 bytes) for HS256
/// - Store secrets in environment variables or secure vaults, never in code
pub struct AccessTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl AccessTokenCodec {
    /// Create a codec signing and verifying under `secret`.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token asserting `subject` for the next `ttl`.
    ///
    /// # Errors
    /// * `SigningFailed` - The signing primitive failed
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        let claims = Claims::new(subject, ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a token and return the subject it asserts.
    ///
    /// # Errors
    /// * `Expired` - `exp` has passed (no leeway)
    /// * `Invalid` - Bad signature or structurally malformed token
    /// * `MissingSubject` - The signed payload has an empty `sub`
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        if token_data.claims.sub.is_empty() {
            return Err(TokenError::MissingSubject);
        }

        Ok(token_data.claims.sub)
    }
}
