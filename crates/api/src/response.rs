//! Shared response envelope types for API handlers.
//!
//! Every response is wrapped in `{ "code", "status", ... }`: successes carry
//! an optional `data` payload, failures carry a `message`.

use serde::Serialize;

/// Success envelope: `{ "code": 200, "status": "OK", "data": T }`.
///
/// `data` is omitted entirely when absent (e.g. after a delete).
///
/// # Example
///
/// ```ignore
/// Ok(Json(WebResponse::ok(items)))
/// ```
#[derive(Debug, Serialize)]
pub struct WebResponse<T: Serialize> {
    pub code: u16,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> WebResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: 200,
            status: "OK",
            data: Some(data),
        }
    }
}

impl WebResponse<()> {
    /// Success envelope without a payload.
    pub fn empty() -> Self {
        Self {
            code: 200,
            status: "OK",
            data: None,
        }
    }
}

/// Error envelope: `{ "code": 404, "status": "NOT FOUND", "message": "..." }`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub status: &'static str,
    pub message: String,
}
