//! Test context wiring a fresh recorder behind the viewer router.

use std::sync::Arc;

use api::{router, AppState};
use axum::Router;
use recorder::{InMemoryRequestLogger, RecorderConfig};

pub struct TestContext {
    pub logger: Arc<InMemoryRequestLogger>,
    pub router: Router,
}

impl TestContext {
    /// Creates a context with the default request window.
    pub fn new() -> Self {
        Self::with_window(lookout_core::limits::DEFAULT_REQUEST_WINDOW)
    }

    /// Creates a context retaining at most `window` completed requests.
    pub fn with_window(window: usize) -> Self {
        let logger = Arc::new(
            InMemoryRequestLogger::new(RecorderConfig {
                request_window: window,
            })
            .expect("valid recorder config"),
        );
        let state = AppState::new(logger.clone());
        Self {
            logger,
            router: router(state),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
