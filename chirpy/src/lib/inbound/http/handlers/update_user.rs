use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::create_user::UserData;
use super::ApiError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateCredentialsCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Replace the caller's email and password.
pub async fn update_user(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<UpdateUserRequestBody>,
) -> Result<(StatusCode, Json<UserData>), ApiError> {
    let email = EmailAddress::new(body.email).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let command = UpdateCredentialsCommand {
        email,
        password: body.password,
    };

    let user = state
        .user_service
        .update_credentials(&caller.user_id, command)
        .await?;

    Ok((StatusCode::OK, Json((&user).into())))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateUserRequestBody {
    email: String,
    password: String,
}
