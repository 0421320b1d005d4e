//! Request handlers.
//!
//! Handlers only extract and bind request data, call a service, and wrap
//! the result in a [`WebResponse`](crate::response::WebResponse). The only
//! errors they classify themselves are path-id failures (always "not found",
//! whether the segment fails to decode or to parse) and body bind failures
//! (always "bad request").

pub mod category;
pub mod note;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::Json;
use notebook_core::types::DbId;

use crate::error::{AppError, AppResult};

// ---------------------------------------------------------------------------
// Extraction helpers
// ---------------------------------------------------------------------------

/// Parse a path id. An id that cannot be extracted (e.g. invalid UTF-8
/// after percent-decoding) or parsed means the entity cannot exist.
pub(crate) fn parse_id(
    raw: Result<Path<String>, PathRejection>,
    entity: &'static str,
) -> AppResult<DbId> {
    let Ok(Path(raw)) = raw else {
        return Err(AppError::not_found(entity));
    };
    raw.parse().map_err(|_| AppError::not_found(entity))
}

/// Unwrap a JSON body, turning a rejection into a bad request carrying the
/// extractor's own message.
pub(crate) fn bind<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::bad_request(rejection.body_text()))
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// Fallback for unmatched routes.
pub async fn fallback() -> AppError {
    AppError::RouteNotFound
}
