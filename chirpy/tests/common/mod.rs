use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use chirpy::domain::errors::StorageError;
use chirpy::domain::session::models::RefreshToken;
use chirpy::domain::session::ports::RefreshTokenRepository;
use chirpy::domain::user::models::EmailAddress;
use chirpy::domain::user::models::User;
use chirpy::domain::user::models::UserId;
use chirpy::domain::user::ports::UserRepository;

/// In-memory user store backing end-to-end session tests.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<Option<User>, StorageError> {
        let mut users = self.users.lock().unwrap();

        if users.values().any(|u| u.email == user.email) {
            return Ok(None);
        }

        users.insert(user.id, user.clone());
        Ok(Some(user))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }

    async fn update_credentials(
        &self,
        id: &UserId,
        email: &EmailAddress,
        password_hash: &str,
    ) -> Result<Option<User>, StorageError> {
        let mut users = self.users.lock().unwrap();

        match users.get_mut(id) {
            Some(user) => {
                user.email = email.clone();
                user.password_hash = password_hash.to_string();
                user.updated_at = Utc::now();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn set_chirpy_red(&self, id: &UserId) -> Result<Option<User>, StorageError> {
        let mut users = self.users.lock().unwrap();

        match users.get_mut(id) {
            Some(user) => {
                user.is_chirpy_red = true;
                user.updated_at = Utc::now();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_all(&self) -> Result<(), StorageError> {
        self.users.lock().unwrap().clear();
        Ok(())
    }
}

/// In-memory refresh token store keyed by the opaque token string.
#[derive(Default)]
pub struct InMemoryRefreshTokenRepository {
    records: Mutex<HashMap<String, RefreshToken>>,
}

#[async_trait]
impl RefreshTokenRepository for InMemoryRefreshTokenRepository {
    async fn insert(&self, record: &RefreshToken) -> Result<(), StorageError> {
        self.records
            .lock()
            .unwrap()
            .insert(record.token.clone(), record.clone());
        Ok(())
    }

    async fn find(&self, token: &str) -> Result<Option<RefreshToken>, StorageError> {
        Ok(self.records.lock().unwrap().get(token).cloned())
    }

    async fn mark_revoked(&self, token: &str, when: DateTime<Utc>) -> Result<(), StorageError> {
        if let Some(record) = self.records.lock().unwrap().get_mut(token) {
            record.revoked_at = Some(when);
        }
        Ok(())
    }
}
