use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use super::bearer_token;
use super::ApiError;
use crate::inbound::http::router::AppState;

/// Mint a new access token from the refresh token in the bearer header.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<RefreshResponseData>), ApiError> {
    let token = bearer_token(&headers)?;

    let access_token = state.session_service.refresh(token).await?;

    Ok((
        StatusCode::OK,
        Json(RefreshResponseData {
            token: access_token,
        }),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshResponseData {
    pub token: String,
}
