//! Standardized viewer responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Aggregate counters reported by the stats endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_created_sessions: u64,
    pub peak_sessions: u64,
    pub live_sessions: usize,
    pub current_active_requests: u64,
    pub peak_active_requests: u64,
    pub retained_requests: usize,
    pub uptime_secs: i64,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: i64,
    pub active_requests: u64,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// API error type with coded bodies.
pub struct ApiError {
    pub status: StatusCode,
    pub response: ErrorResponse,
}

impl ApiError {
    pub fn with_code(status: StatusCode, code: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            status,
            response: ErrorResponse {
                error: msg.into(),
                code: code.into(),
            },
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::with_code(StatusCode::BAD_REQUEST, "QUERY_001", msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_code(StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_001", msg)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<lookout_core::Error> for ApiError {
    fn from(err: lookout_core::Error) -> Self {
        match &err {
            lookout_core::Error::Query(msg) => ApiError::bad_request(msg),
            lookout_core::Error::Config(msg) => ApiError::internal(msg),
        }
    }
}
