use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use crate::inbound::http::router::AppState;

/// Wipe all users (sessions and chirps cascade). Dev environments only.
pub async fn reset(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    if state.platform != "dev" {
        return Err(ApiError::Forbidden(
            "reset is only allowed on the dev platform".to_string(),
        ));
    }

    state.user_service.reset().await?;

    Ok(StatusCode::OK)
}
