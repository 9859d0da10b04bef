use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::chirp::models::Chirp;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_chirp(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<CreateChirpRequestBody>,
) -> Result<(StatusCode, Json<ChirpData>), ApiError> {
    let chirp = state
        .chirp_service
        .create_chirp(&caller.user_id, &body.body)
        .await?;

    Ok((StatusCode::CREATED, Json((&chirp).into())))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateChirpRequestBody {
    body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChirpData {
    pub id: String,
    pub user_id: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Chirp> for ChirpData {
    fn from(chirp: &Chirp) -> Self {
        Self {
            id: chirp.id.to_string(),
            user_id: chirp.user_id.to_string(),
            body: chirp.body.clone(),
            created_at: chirp.created_at,
            updated_at: chirp.updated_at,
        }
    }
}
