use std::sync::Arc;

use chrono::Utc;

use crate::domain::chirp::models::Chirp;
use crate::domain::chirp::models::ChirpId;
use crate::domain::chirp::ports::ChirpRepository;
use crate::domain::errors::ServiceError;
use crate::domain::user::models::UserId;

/// Maximum length of a chirp body, measured after moderation.
const MAX_BODY_LENGTH: usize = 120;

/// Words replaced by the moderation filter, matched case-insensitively.
const FORBIDDEN_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

const REPLACEMENT: &str = "****";

/// Domain service for chirp operations.
pub struct ChirpService<CR>
where
    CR: ChirpRepository,
{
    repository: Arc<CR>,
}

impl<CR> ChirpService<CR>
where
    CR: ChirpRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }

    /// Publish a chirp after moderation and length validation.
    ///
    /// # Errors
    /// * `BadRequest` - Cleaned body exceeds the length limit
    pub async fn create_chirp(&self, author: &UserId, body: &str) -> Result<Chirp, ServiceError> {
        let cleaned = clean_body(body);

        if cleaned.len() > MAX_BODY_LENGTH {
            return Err(ServiceError::BadRequest("Chirp is too long".to_string()));
        }

        let now = Utc::now();
        let chirp = Chirp {
            id: ChirpId::new(),
            user_id: *author,
            body: cleaned,
            created_at: now,
            updated_at: now,
        };

        Ok(self.repository.create(chirp).await?)
    }

    /// Retrieve a chirp by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Chirp does not exist
    pub async fn get_chirp(&self, id: &ChirpId) -> Result<Chirp, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("chirp {} not found", id)))
    }

    /// Retrieve all chirps, oldest first.
    pub async fn list_chirps(&self) -> Result<Vec<Chirp>, ServiceError> {
        Ok(self.repository.list_all().await?)
    }

    /// Delete a chirp on behalf of `caller`.
    ///
    /// # Errors
    /// * `NotFound` - Chirp does not exist
    /// * `Forbidden` - Caller is not the chirp's author
    pub async fn delete_chirp(&self, id: &ChirpId, caller: &UserId) -> Result<(), ServiceError> {
        let chirp = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("chirp {} not found", id)))?;

        if chirp.user_id != *caller {
            return Err(ServiceError::Forbidden(
                "you can only delete your own chirps".to_string(),
            ));
        }

        self.repository.delete(id).await?;

        Ok(())
    }
}

/// Replace any word containing a forbidden term with the mask.
///
/// Matching is word-by-word on spaces; a word with punctuation attached is
/// still masked wholesale.
fn clean_body(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            let lowered = word.to_lowercase();
            if FORBIDDEN_WORDS.iter().any(|w| lowered.contains(w)) {
                REPLACEMENT
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
