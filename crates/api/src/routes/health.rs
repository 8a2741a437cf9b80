use axum::extract::State;
use axum::{routing::get, Json, Router};
use msru_core::lifecycle::Lifecycle;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` once ready, `starting` during bootstrap, `degraded` after a
    /// failed bootstrap.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub lifecycle: Lifecycle,
}

/// GET /health -- always 200 so orchestrators can tell "up" from "ready".
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let lifecycle = state.lifecycle.current();

    let status = match lifecycle {
        Lifecycle::Ready => "ok",
        Lifecycle::Initializing => "starting",
        Lifecycle::InitializationFailed => "degraded",
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        lifecycle,
    })
}

/// Mount health check routes (root level, not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
