//! Request history and live-session endpoints.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use lookout_core::limits::{DEFAULT_QUERY_LIMIT, MAX_QUERY_LIMIT};
use lookout_core::{Error, RequestData, SessionData};

use crate::response::ApiError;
use crate::state::AppState;

/// Query parameters for the request history.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

impl HistoryQuery {
    fn limit(&self) -> Result<usize, Error> {
        match self.limit {
            None => Ok(DEFAULT_QUERY_LIMIT),
            Some(0) => Err(Error::query("limit must be at least 1")),
            Some(n) if n > MAX_QUERY_LIMIT => Err(Error::query(format!(
                "limit {} exceeds {} maximum",
                n, MAX_QUERY_LIMIT
            ))),
            Some(n) => Ok(n),
        }
    }
}

/// GET /requests - Recent completed requests, newest first.
pub async fn requests_handler(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<RequestData>>, ApiError> {
    let limit = query.limit()?;

    let mut requests = state.logger.requests();
    requests.truncate(limit);
    Ok(Json(requests))
}

/// GET /sessions - Live sessions, most recently active first.
pub async fn sessions_handler(State(state): State<AppState>) -> Json<Vec<SessionData>> {
    Json(state.logger.live_sessions())
}
