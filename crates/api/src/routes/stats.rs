//! Aggregate statistics endpoint.

use axum::extract::State;
use axum::Json;
use chrono::Utc;

use crate::response::StatsResponse;
use crate::state::AppState;

/// GET /stats - Aggregate request and session counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let logger = &state.logger;

    Json(StatsResponse {
        total_created_sessions: logger.total_created_sessions(),
        peak_sessions: logger.peak_sessions(),
        live_sessions: logger.live_sessions().len(),
        current_active_requests: logger.current_active_requests(),
        peak_active_requests: logger.peak_active_requests(),
        retained_requests: logger.requests().len(),
        uptime_secs: (Utc::now() - state.started_at).num_seconds(),
    })
}
