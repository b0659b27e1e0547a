//! Recording middleware.
//!
//! Wraps every handled request in a telemetry record: the event target is
//! the dispatch line (method + path), the response target is the status the
//! inner handler produced.

use std::time::Instant;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use crate::state::AppState;

/// Session id header recognized by the recording middleware.
pub const SESSION_HEADER: &str = "x-session-id";

pub async fn record_request(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let logger = state.logger.clone();
    let id = logger.request_started();
    let start = Instant::now();

    let target = format!("{} {}", request.method(), request.uri().path());
    logger.log_event_target(id, &target);

    if let Some(session_id) = request
        .headers()
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
    {
        // First sight of an id creates the live session; create is idempotent
        logger.session_created(session_id);
        logger.bind_session(id, session_id, 0, None);
    }

    let response = next.run(request).await;

    logger.log_response_target(id, &format!("status {}", response.status().as_u16()));
    let time_taken = start.elapsed();
    logger.request_completed(id, time_taken);

    debug!(%id, target = %target, took_ms = time_taken.as_millis() as u64, "request recorded");

    response
}
