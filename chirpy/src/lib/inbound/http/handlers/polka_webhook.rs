use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::authorization_header;
use super::ApiError;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

const USER_UPGRADED_EVENT: &str = "user.upgraded";

/// Payment-provider webhook upgrading users to Chirpy Red.
///
/// Callers authenticate over the API key channel, not the bearer channel.
/// Unknown events are acknowledged without action so the provider does not
/// keep retrying them.
pub async fn polka_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<PolkaWebhookBody>,
) -> Result<StatusCode, ApiError> {
    let presented = auth::api_key::from_header(authorization_header(&headers)?).ok_or_else(
        || ApiError::Unauthorized("expected an ApiKey authorization header".to_string()),
    )?;

    if !auth::api_key::verify(presented, &state.api_key) {
        return Err(ApiError::Unauthorized("invalid api key".to_string()));
    }

    if body.event != USER_UPGRADED_EVENT {
        return Ok(StatusCode::NO_CONTENT);
    }

    let user_id = UserId::from_string(&body.data.user_id)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state.user_service.upgrade_to_chirpy_red(&user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PolkaWebhookBody {
    event: String,
    data: PolkaWebhookData,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PolkaWebhookData {
    user_id: String,
}
