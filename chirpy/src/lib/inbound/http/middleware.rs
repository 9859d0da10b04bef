use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated caller through the request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware guarding routes that require a valid access token.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let authorization = match req.headers().get(header::AUTHORIZATION) {
        Some(value) => value.to_str().map_err(|_| {
            ApiError::Unauthorized("invalid Authorization header".to_string()).into_response()
        })?,
        None => {
            return Err(
                ApiError::Unauthorized("missing Authorization header".to_string()).into_response(),
            )
        }
    };

    let user_id = state
        .session_service
        .authenticate(authorization)
        .map_err(|e| ApiError::from(e).into_response())?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}
