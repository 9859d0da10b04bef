use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;

use super::bearer_token;
use super::ApiError;
use crate::inbound::http::router::AppState;

/// Revoke the refresh token carried in the bearer header.
pub async fn revoke(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let token = bearer_token(&headers)?;

    state.session_service.revoke(token).await?;

    Ok(StatusCode::NO_CONTENT)
}
