use thiserror::Error;

use crate::domain::errors::ServiceError;

/// Error for ChirpId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChirpIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

impl From<ChirpIdError> for ServiceError {
    fn from(err: ChirpIdError) -> Self {
        ServiceError::BadRequest(err.to_string())
    }
}
