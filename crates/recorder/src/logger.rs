//! The request logger contract.

use std::time::Duration;

use lookout_core::{RequestData, RequestId, SessionData, SessionInfo, StoreObject};

/// Observation points a request/session runtime reports through, plus the
/// aggregate and query surface a monitoring viewer reads.
///
/// Notifications arrive from concurrently executing request tasks;
/// implementations are internally synchronized. No operation fails:
/// notifications carrying an unknown request id are dropped.
pub trait RequestLogger: Send + Sync {
    /// Total sessions created since startup.
    fn total_created_sessions(&self) -> u64;

    /// Highest number of concurrently live sessions observed.
    fn peak_sessions(&self) -> u64;

    /// Requests currently in flight.
    fn current_active_requests(&self) -> u64;

    /// Highest number of concurrently in-flight requests observed.
    fn peak_active_requests(&self) -> u64;

    /// Read-only snapshot of the completed-request history, newest first.
    fn requests(&self) -> Vec<RequestData>;

    /// Summaries of live sessions, most recently active first.
    fn live_sessions(&self) -> Vec<SessionData>;

    /// Called when a session is created and has an id.
    fn session_created(&self, session_id: &str);

    /// Called when the host invalidates a session.
    fn session_destroyed(&self, session_id: &str);

    /// Called when a request enters processing. The returned id routes the
    /// in-flight notifications below to this request's record.
    fn request_started(&self) -> RequestId;

    /// Called when the request is over. Stamps the total time taken and
    /// moves the record into the history.
    fn request_completed(&self, request: RequestId, time_taken: Duration);

    /// Binds the session the request runs under, with the session's byte
    /// size and summary as known at this point.
    fn bind_session(
        &self,
        request: RequestId,
        session_id: &str,
        session_size_bytes: u64,
        info: Option<SessionInfo>,
    );

    /// Called when a value is added to the session store.
    fn object_created(&self, request: RequestId, value: &StoreObject);

    /// Called when a value in the session store is updated.
    fn object_updated(&self, request: RequestId, value: &StoreObject);

    /// Called when a value is removed from the session store.
    fn object_removed(&self, request: RequestId, value: &StoreObject);

    /// Records the target the request was dispatched to.
    fn log_event_target(&self, request: RequestId, target: &str);

    /// Records the target that produced the response.
    fn log_response_target(&self, request: RequestId, target: &str);
}

/// Logger used when recording is disabled.
///
/// Every notification is a no-op and every query returns empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRequestLogger;

impl RequestLogger for NullRequestLogger {
    fn total_created_sessions(&self) -> u64 {
        0
    }

    fn peak_sessions(&self) -> u64 {
        0
    }

    fn current_active_requests(&self) -> u64 {
        0
    }

    fn peak_active_requests(&self) -> u64 {
        0
    }

    fn requests(&self) -> Vec<RequestData> {
        Vec::new()
    }

    fn live_sessions(&self) -> Vec<SessionData> {
        Vec::new()
    }

    fn session_created(&self, _session_id: &str) {}

    fn session_destroyed(&self, _session_id: &str) {}

    fn request_started(&self) -> RequestId {
        RequestId::new()
    }

    fn request_completed(&self, _request: RequestId, _time_taken: Duration) {}

    fn bind_session(
        &self,
        _request: RequestId,
        _session_id: &str,
        _session_size_bytes: u64,
        _info: Option<SessionInfo>,
    ) {
    }

    fn object_created(&self, _request: RequestId, _value: &StoreObject) {}

    fn object_updated(&self, _request: RequestId, _value: &StoreObject) {}

    fn object_removed(&self, _request: RequestId, _value: &StoreObject) {}

    fn log_event_target(&self, _request: RequestId, _target: &str) {}

    fn log_response_target(&self, _request: RequestId, _target: &str) {}
}
