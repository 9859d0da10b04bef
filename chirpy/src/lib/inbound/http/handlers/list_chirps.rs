use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::create_chirp::ChirpData;
use super::ApiError;
use crate::inbound::http::router::AppState;

/// List every chirp, oldest first.
pub async fn list_chirps(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<ChirpData>>), ApiError> {
    let chirps = state.chirp_service.list_chirps().await?;

    let data = chirps.iter().map(ChirpData::from).collect();

    Ok((StatusCode::OK, Json(data)))
}
