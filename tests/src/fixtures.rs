//! Test fixtures for store churn and sessions.

use std::time::Duration;

use lookout_core::{SessionInfo, StoreObject};
use recorder::RequestLogger;

/// A named store attribute of the given size.
pub fn attribute(name: &str, size_bytes: u64) -> StoreObject {
    StoreObject::attribute(name, size_bytes)
}

/// Session info for a logged-in user.
pub fn user_info(user: &str) -> SessionInfo {
    SessionInfo::for_user(user)
}

/// Records one completed request bound to `session_id`.
pub fn record_session_request(logger: &dyn RequestLogger, session_id: &str, took_ms: u64) {
    let id = logger.request_started();
    logger.bind_session(id, session_id, 0, None);
    logger.request_completed(id, Duration::from_millis(took_ms));
}
