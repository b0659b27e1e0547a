//! Viewer routes.

pub mod health;
pub mod requests;
pub mod stats;

use axum::middleware::from_fn_with_state;
use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::middleware::record::record_request;
use crate::state::AppState;

/// Creates the viewer router with the recording middleware attached.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/stats", get(stats::stats_handler))
        .route("/requests", get(requests::requests_handler))
        .route("/sessions", get(requests::sessions_handler))
        .route("/health", get(health::health_handler))
        .route("/health/live", get(health::live_handler))
        .layer(from_fn_with_state(state.clone(), record_request))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
