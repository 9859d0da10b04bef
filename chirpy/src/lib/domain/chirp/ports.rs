use async_trait::async_trait;

use crate::domain::chirp::models::Chirp;
use crate::domain::chirp::models::ChirpId;
use crate::domain::errors::StorageError;

/// Persistence operations for chirps.
#[async_trait]
pub trait ChirpRepository: Send + Sync + 'static {
    /// Persist a new chirp.
    async fn create(&self, chirp: Chirp) -> Result<Chirp, StorageError>;

    /// Retrieve a chirp by identifier.
    async fn find_by_id(&self, id: &ChirpId) -> Result<Option<Chirp>, StorageError>;

    /// Retrieve all chirps, oldest first.
    async fn list_all(&self) -> Result<Vec<Chirp>, StorageError>;

    /// Remove a chirp.
    async fn delete(&self, id: &ChirpId) -> Result<(), StorageError>;
}
