use thiserror::Error;

use auth::PasswordError;
use auth::TokenError;

/// Closed set of failure kinds every domain operation resolves to.
///
/// The HTTP boundary maps each kind to exactly one status code, so a new
/// variant here forces a decision there. Leaf error types convert in via
/// the `From` impls below rather than being matched at call sites.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// Malformed or missing input, or an unknown principal
    #[error("{0}")]
    BadRequest(String),

    /// Bad credential, or an invalid, expired, or revoked token or key
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated, but not allowed to touch the resource
    #[error("{0}")]
    Forbidden(String),

    /// Referenced entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// Storage or crypto primitive failure. The message is for operator
    /// logs; the boundary never echoes it to a client.
    #[error("{0}")]
    Internal(String),
}

/// Generic storage failure raised by the persistence adapters.
///
/// "No row found" is not a storage error; repositories report it as a
/// normal `None`.
#[derive(Debug, Clone, Error)]
#[error("storage error: {0}")]
pub struct StorageError(pub String);

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        ServiceError::Internal(err.to_string())
    }
}

impl From<PasswordError> for ServiceError {
    fn from(err: PasswordError) -> Self {
        ServiceError::Internal(err.to_string())
    }
}

impl From<TokenError> for ServiceError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::SigningFailed(_) => ServiceError::Internal(err.to_string()),
            TokenError::Expired | TokenError::Invalid(_) | TokenError::MissingSubject => {
                ServiceError::Unauthorized(err.to_string())
            }
        }
    }
}
