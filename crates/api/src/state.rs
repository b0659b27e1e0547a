//! Application state shared across handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use recorder::RequestLogger;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The request logger every handled request reports into
    pub logger: Arc<dyn RequestLogger>,
    /// When the service started, for uptime reporting
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(logger: Arc<dyn RequestLogger>) -> Self {
        Self {
            logger,
            started_at: Utc::now(),
        }
    }
}
