use axum::http::header;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::errors::ServiceError;

pub mod create_chirp;
pub mod create_user;
pub mod delete_chirp;
pub mod get_chirp;
pub mod healthz;
pub mod list_chirps;
pub mod login;
pub mod polka_webhook;
pub mod refresh;
pub mod reset;
pub mod revoke;
pub mod update_user;

/// Fixed client message for internal failures; root causes stay in the log.
const INTERNAL_ERROR_MESSAGE: &str = "something went wrong on our end";

/// Boundary side of the error taxonomy.
///
/// One variant per failure kind, one status code per variant, body shape
/// `{"error": <message>}` throughout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    InternalServerError(String),
}

/// The single translation point from domain failures to HTTP.
impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::BadRequest(msg) => ApiError::BadRequest(msg),
            ServiceError::Unauthorized(msg) => ApiError::Unauthorized(msg),
            ServiceError::Forbidden(msg) => ApiError::Forbidden(msg),
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Internal(detail) => ApiError::InternalServerError(detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        if status.is_client_error() {
            tracing::warn!(status = status.as_u16(), error = %message, "request rejected");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Read the raw Authorization header, if present and valid UTF-8.
pub(crate) fn authorization_header(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("missing Authorization header".to_string()))?
        .to_str()
        .map_err(|_| ApiError::Unauthorized("invalid Authorization header".to_string()))
}

/// Extract the value of a `Bearer`-prefixed Authorization header.
///
/// Used where the carried value is an opaque refresh token rather than a
/// JWT; access token verification goes through the session service instead.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    authorization_header(headers)?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            ApiError::Unauthorized("expected a Bearer authorization header".to_string())
        })
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_translation_is_exhaustive_and_stable() {
        let cases = [
            (ServiceError::BadRequest("a".into()), ApiError::BadRequest("a".into())),
            (ServiceError::Unauthorized("b".into()), ApiError::Unauthorized("b".into())),
            (ServiceError::Forbidden("c".into()), ApiError::Forbidden("c".into())),
            (ServiceError::NotFound("d".into()), ApiError::NotFound("d".into())),
            (
                ServiceError::Internal("e".into()),
                ApiError::InternalServerError("e".into()),
            ),
        ];

        for (domain, expected) in cases {
            assert_eq!(ApiError::from(domain), expected);
        }
    }

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_err());

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
        assert_eq!(bearer_token(&headers).unwrap(), "abc123");

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("ApiKey abc123"));
        assert!(bearer_token(&headers).is_err());

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert!(bearer_token(&headers).is_err());
    }
}
