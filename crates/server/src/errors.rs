use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use service::auth::errors::AuthError;

/// Wraps core auth errors into HTTP responses.
#[derive(Debug)]
pub struct ApiAuthError(pub AuthError);

impl From<AuthError> for ApiAuthError {
    fn from(e: AuthError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiAuthError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match &err {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::DuplicateEmail => StatusCode::CONFLICT,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Registration(_) | AuthError::Authentication(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(code = err.code(), error = %err, "auth request failed");
        }
        let body = match &err {
            AuthError::Validation(issues) => {
                json!({"error": err.to_string(), "details": issues})
            }
            _ => json!({"error": err.to_string()}),
        };
        (status, Json(body)).into_response()
    }
}
