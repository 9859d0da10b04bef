use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::errors::StorageError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn user_from_row(row: &PgRow) -> Result<User, StorageError> {
    let email: String = row.try_get("email")?;

    Ok(User {
        id: UserId(row.try_get::<Uuid, _>("id")?),
        email: EmailAddress::new(email)
            .map_err(|e| StorageError(format!("stored email is invalid: {}", e)))?,
        password_hash: row.try_get("password_hash")?,
        is_chirpy_red: row.try_get("is_chirpy_red")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
    })
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<Option<User>, StorageError> {
        // Conflicting emails are a silent no-op, reported as None.
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, is_chirpy_red, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(user.id.0)
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.is_chirpy_red)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(user))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash, is_chirpy_red, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn update_credentials(
        &self,
        id: &UserId,
        email: &EmailAddress,
        password_hash: &str,
    ) -> Result<Option<User>, StorageError> {
        let row = sqlx::query(
            r#"
            UPDATE users
            SET email = $2, password_hash = $3, updated_at = $4
            WHERE id = $1
            RETURNING id, email, password_hash, is_chirpy_red, created_at, updated_at
            "#,
        )
        .bind(id.0)
        .bind(email.as_str())
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn set_chirpy_red(&self, id: &UserId) -> Result<Option<User>, StorageError> {
        let row = sqlx::query(
            r#"
            UPDATE users
            SET is_chirpy_red = TRUE, updated_at = $2
            WHERE id = $1
            RETURNING id, email, password_hash, is_chirpy_red, created_at, updated_at
            "#,
        )
        .bind(id.0)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn delete_all(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM users").execute(&self.pool).await?;

        Ok(())
    }
}
