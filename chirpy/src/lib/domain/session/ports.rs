use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::errors::StorageError;
use crate::domain::session::models::RefreshToken;

/// Persistence operations for refresh tokens.
///
/// An unknown token is a normal `None`, never an error. Validity checks
/// read the row state at the instant of the call; there is no
/// optimistic-concurrency guard around revocation races.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync + 'static {
    /// Persist a freshly issued token record.
    async fn insert(&self, record: &RefreshToken) -> Result<(), StorageError>;

    /// Look up a token record by its opaque string.
    async fn find(&self, token: &str) -> Result<Option<RefreshToken>, StorageError>;

    /// Stamp a token as revoked at `when`.
    async fn mark_revoked(&self, token: &str, when: DateTime<Utc>) -> Result<(), StorageError>;
}
