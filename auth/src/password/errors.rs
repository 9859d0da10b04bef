use thiserror::Error;

/// Error type for password operations.
///
/// A non-matching password is not an error; both variants indicate a
/// primitive or data problem, not a failed credential check.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}
