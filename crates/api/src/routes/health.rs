//! Health check endpoints.
//!
//! The recorder has no external dependencies, so readiness and liveness
//! coincide: the service is healthy whenever it is serving.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use crate::response::HealthResponse;
use crate::state::AppState;

/// GET /health - Service health summary.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime_secs: (Utc::now() - state.started_at).num_seconds(),
        active_requests: state.logger.current_active_requests(),
    })
}

/// GET /health/live - Liveness probe.
pub async fn live_handler() -> StatusCode {
    StatusCode::OK
}
