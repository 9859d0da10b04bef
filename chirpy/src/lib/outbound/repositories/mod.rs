pub mod chirp;
pub mod refresh_token;
pub mod user;

pub use chirp::PostgresChirpRepository;
pub use refresh_token::PostgresRefreshTokenRepository;
pub use user::PostgresUserRepository;

use crate::domain::errors::StorageError;

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError(err.to_string())
    }
}
