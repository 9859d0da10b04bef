use async_trait::async_trait;

use crate::domain::errors::StorageError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Persistence operations for the user aggregate.
///
/// Absent rows are a normal `None`; only genuine storage failures surface
/// as `StorageError`.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// Returns `None` when the email is already taken (the insert is a
    /// conflict no-op rather than an error).
    async fn create(&self, user: User) -> Result<Option<User>, StorageError>;

    /// Retrieve a user by email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;

    /// Replace a user's email and password hash.
    ///
    /// Returns the updated user, or `None` if the user does not exist.
    async fn update_credentials(
        &self,
        id: &UserId,
        email: &EmailAddress,
        password_hash: &str,
    ) -> Result<Option<User>, StorageError>;

    /// Flag a user as a Chirpy Red member.
    ///
    /// Returns the updated user, or `None` if the user does not exist.
    async fn set_chirpy_red(&self, id: &UserId) -> Result<Option<User>, StorageError>;

    /// Remove every user. Dependent rows cascade in storage.
    async fn delete_all(&self) -> Result<(), StorageError>;
}
