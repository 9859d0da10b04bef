use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Issuer asserted in every access token.
pub const ISSUER: &str = "chirpy";

/// Payload of an access token.
///
/// The shape is fixed: issuer, subject, issued-at, and expiry, all with
/// second granularity. No other fields are encoded, and verification trusts
/// nothing outside this signed payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer, always [`ISSUER`]
    pub iss: String,

    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims asserting `subject` for the next `ttl`.
    pub fn new(subject: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            iss: ISSUER.to_string(),
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_span_the_ttl() {
        let claims = Claims::new("user123", Duration::seconds(100));

        assert_eq!(claims.iss, "chirpy");
        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.exp - claims.iat, 100);
    }
}
