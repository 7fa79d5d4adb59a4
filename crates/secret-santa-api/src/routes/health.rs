//! Liveness probe.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process can answer.
    pub status: &'static str,
    /// Name of the running service.
    pub service: &'static str,
    /// Crate version of the running binary.
    pub version: &'static str,
}

/// GET /health
///
/// Draws need no backing store, so answering at all means healthy.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
