use thiserror::Error;

use crate::domain::errors::ServiceError;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

impl From<UserIdError> for ServiceError {
    fn from(err: UserIdError) -> Self {
        ServiceError::BadRequest(err.to_string())
    }
}

impl From<EmailError> for ServiceError {
    fn from(err: EmailError) -> Self {
        ServiceError::BadRequest(err.to_string())
    }
}
