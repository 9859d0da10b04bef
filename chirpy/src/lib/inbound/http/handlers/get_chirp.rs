use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::create_chirp::ChirpData;
use super::ApiError;
use crate::domain::chirp::models::ChirpId;
use crate::inbound::http::router::AppState;

pub async fn get_chirp(
    State(state): State<AppState>,
    Path(chirp_id): Path<String>,
) -> Result<(StatusCode, Json<ChirpData>), ApiError> {
    let chirp_id =
        ChirpId::from_string(&chirp_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let chirp = state.chirp_service.get_chirp(&chirp_id).await?;

    Ok((StatusCode::OK, Json((&chirp).into())))
}
