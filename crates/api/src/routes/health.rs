use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::response::WebResponse;
use crate::state::AppState;

/// Payload of `GET /health`, wrapped in the usual success envelope.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthStatus {
    fn new(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }

    /// 200 while the database answers, 503 otherwise.
    fn status_code(&self) -> StatusCode {
        if self.db_healthy {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let db_healthy = match notebook_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            false
        }
    };

    let health = HealthStatus::new(db_healthy);
    let status = health.status_code();
    let body = WebResponse {
        code: status.as_u16(),
        status: if db_healthy { "OK" } else { "SERVICE UNAVAILABLE" },
        data: Some(health),
    };
    (status, Json(body))
}

/// Root-level routes (outside `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
