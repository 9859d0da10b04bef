//! Shared-secret checks for trusted server-to-server callers.
//!
//! Webhook callers authenticate with a single process-wide key carried as
//! `Authorization: ApiKey <value>`, distinct from the per-user `Bearer`
//! channel.

/// Expected header scheme, including the trailing space.
const SCHEME: &str = "ApiKey ";

/// Extract the key from an `ApiKey`-prefixed Authorization header value.
///
/// Returns `None` for a missing prefix or an empty key.
pub fn from_header(header: &str) -> Option<&str> {
    header
        .strip_prefix(SCHEME)
        .map(str::trim)
        .filter(|key| !key.is_empty())
}

/// Compare a presented key against the configured one.
///
/// Keys of equal length are compared over their full width instead of
/// stopping at the first mismatched byte, so response timing does not tell
/// a probing caller how much of a guess matched.
pub fn verify(presented: &str, configured: &str) -> bool {
    if presented.len() != configured.len() {
        return false;
    }

    presented
        .bytes()
        .zip(configured.bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_header() {
        assert_eq!(from_header("ApiKey f271c819"), Some("f271c819"));
        assert_eq!(from_header("Bearer f271c819"), None);
        assert_eq!(from_header("f271c819"), None);
        assert_eq!(from_header("ApiKey "), None);
    }

    #[test]
    fn test_verify_exact_match_only() {
        assert!(verify("f271c819", "f271c819"));
        assert!(!verify("f271c818", "f271c819"));
        assert!(!verify("f271c81", "f271c819"));
        assert!(!verify("", "f271c819"));
    }
}
