use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use notebook_core::error::CoreError;

use crate::response::ErrorResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] as the single place where failures become
/// `{ code, status, message }` envelopes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `notebook_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx, including transaction and rollback failures.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// No route matched the request path.
    #[error("Page does not exists")]
    RouteNotFound,
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::Core(CoreError::NotFound { entity })
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Core(CoreError::BadRequest(message.into()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, label, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(CoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "NOT FOUND", self.to_string())
            }
            AppError::Core(CoreError::BadRequest(msg)) => {
                (StatusCode::BAD_REQUEST, "BAD REQUEST", msg.clone())
            }
            AppError::Core(CoreError::Validation(failure)) => {
                (StatusCode::BAD_REQUEST, "BAD REQUEST", failure.message())
            }

            // --- Database errors (including failed rollbacks) ---
            AppError::Database(err) => (StatusCode::INTERNAL_SERVER_ERROR, "FAIL", err.to_string()),

            // --- HTTP-specific errors ---
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, "NOT FOUND", self.to_string()),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = ErrorResponse {
            code: status.as_u16(),
            status: label,
            message,
        };
        (status, axum::Json(body)).into_response()
    }
}
