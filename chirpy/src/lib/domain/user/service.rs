use std::sync::Arc;

use chrono::Utc;

use crate::domain::errors::ServiceError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UpdateCredentialsCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service for user account operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    /// Register a new user with a hashed password.
    ///
    /// # Errors
    /// * `BadRequest` - Email is already registered
    /// * `Internal` - Hashing or storage failed
    pub async fn create_user(&self, command: CreateUserCommand) -> Result<User, ServiceError> {
        let password_hash = self.hash_password(command.password).await?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            is_chirpy_red: false,
            created_at: now,
            updated_at: now,
        };

        self.repository
            .create(user)
            .await?
            .ok_or_else(|| ServiceError::BadRequest("email is already registered".to_string()))
    }

    /// Replace a user's email and password.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Internal` - Hashing or storage failed
    pub async fn update_credentials(
        &self,
        id: &UserId,
        command: UpdateCredentialsCommand,
    ) -> Result<User, ServiceError> {
        let password_hash = self.hash_password(command.password).await?;

        self.repository
            .update_credentials(id, &command.email, &password_hash)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("user {} not found", id)))
    }

    /// Flag a user as a Chirpy Red member.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    pub async fn upgrade_to_chirpy_red(&self, id: &UserId) -> Result<(), ServiceError> {
        self.repository
            .set_chirpy_red(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("user {} not found", id)))?;

        Ok(())
    }

    /// Remove every user (and, by cascade, their sessions and chirps).
    pub async fn reset(&self) -> Result<(), ServiceError> {
        self.repository.delete_all().await?;
        Ok(())
    }

    // Argon2 is deliberately slow; keep it off the async request path.
    async fn hash_password(&self, password: String) -> Result<String, ServiceError> {
        let hasher = self.password_hasher;

        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| ServiceError::Internal(format!("hashing task failed: {}", e)))??;

        Ok(hash)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::errors::StorageError;
    use crate::domain::user::models::EmailAddress;
    use async_trait::async_trait;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<Option<User>, StorageError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;
            async fn update_credentials(
                &self,
                id: &UserId,
                email: &EmailAddress,
                password_hash: &str,
            ) -> Result<Option<User>, StorageError>;
            async fn set_chirpy_red(&self, id: &UserId) -> Result<Option<User>, StorageError>;
            async fn delete_all(&self) -> Result<(), StorageError>;
        }
    }

    fn test_email(s: &str) -> EmailAddress {
        EmailAddress::new(s.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.email.as_str() == "test@example.com"
                    && user.password_hash.starts_with("$argon2")
                    && !user.is_chirpy_red
            })
            .times(1)
            .returning(|user| Ok(Some(user)));

        let service = UserService::new(Arc::new(repository));

        let command = CreateUserCommand::new(test_email("test@example.com"), "pass".to_string());
        let user = service.create_user(command).await.unwrap();

        assert_eq!(user.email.as_str(), "test@example.com");
        assert_ne!(user.password_hash, "pass");
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let command = CreateUserCommand::new(test_email("taken@example.com"), "pass".to_string());
        let result = service.create_user(command).await;

        assert!(matches!(result, Err(ServiceError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_update_credentials_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_update_credentials()
            .times(1)
            .returning(|_, _, _| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let command = UpdateCredentialsCommand {
            email: test_email("new@example.com"),
            password: "newpass".to_string(),
        };
        let result = service.update_credentials(&UserId::new(), command).await;

        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_upgrade_to_chirpy_red() {
        let mut repository = MockTestUserRepository::new();

        let user_id = UserId::new();
        repository
            .expect_set_chirpy_red()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(|id| {
                let now = Utc::now();
                Ok(Some(User {
                    id: *id,
                    email: EmailAddress::new("red@example.com".to_string()).unwrap(),
                    password_hash: "$argon2id$test_hash".to_string(),
                    is_chirpy_red: true,
                    created_at: now,
                    updated_at: now,
                }))
            });

        let service = UserService::new(Arc::new(repository));

        assert!(service.upgrade_to_chirpy_red(&user_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_upgrade_unknown_user() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_set_chirpy_red()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.upgrade_to_chirpy_red(&UserId::new()).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_storage_failure_is_internal() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_delete_all()
            .times(1)
            .returning(|| Err(StorageError("connection reset".to_string())));

        let service = UserService::new(Arc::new(repository));

        let result = service.reset().await;
        assert!(matches!(result, Err(ServiceError::Internal(_))));
    }
}
