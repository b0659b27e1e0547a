//! Per-request telemetry records.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::limits::MAX_TARGET_LEN;
use crate::session::SessionInfo;

/// Separator between altered-object entries in the rendered display string.
pub const ENTRY_SEPARATOR: &str = "<br/>";

/// Handle for a request while it is in flight.
///
/// Notifications raised during request processing are routed to the record
/// created by `request_started` through this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Telemetry captured for one request.
///
/// Created when the request enters processing, mutated only by the recorder
/// while the request is in flight, and read-only once it lands in the
/// bounded history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestData {
    /// Unique request id
    pub id: RequestId,
    /// Wall-clock start, derived from the duration at completion
    pub started_at: DateTime<Utc>,
    /// Total processing time in milliseconds
    pub time_taken_ms: u64,
    /// Store-churn entries accumulated during the request, in order
    pub entries: Vec<String>,
    /// Description of the handler the request was dispatched to
    pub event_target: Option<String>,
    /// Description of the target that produced the response
    pub response_target: Option<String>,
    /// Session the request belonged to, if any
    pub session_id: Option<String>,
    /// Byte size of the session at log time
    pub session_size_bytes: u64,
    /// Application-supplied session summary
    pub session_info: Option<SessionInfo>,
    /// Concurrently active requests observed at log time
    pub active_requests: u64,
}

impl RequestData {
    /// Creates an empty record for a request entering processing.
    pub fn new(id: RequestId) -> Self {
        Self {
            id,
            started_at: Utc::now(),
            time_taken_ms: 0,
            entries: Vec::new(),
            event_target: None,
            response_target: None,
            session_id: None,
            session_size_bytes: 0,
            session_info: None,
            active_requests: 0,
        }
    }

    /// Stamps the total duration.
    ///
    /// The start time is derived from the duration at the moment of the
    /// call, keeping the pair consistent: `started_at = now - time_taken`.
    pub fn set_time_taken(&mut self, time_taken: Duration) {
        self.time_taken_ms = time_taken.as_millis() as u64;
        self.started_at = Utc::now() - chrono::Duration::milliseconds(self.time_taken_ms as i64);
    }

    /// Appends one store-churn entry. Entries are never removed.
    pub fn add_entry(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn set_event_target(&mut self, target: &str) {
        self.event_target = Some(truncate(target, MAX_TARGET_LEN));
    }

    pub fn set_response_target(&mut self, target: &str) {
        self.response_target = Some(truncate(target, MAX_TARGET_LEN));
    }

    /// All entries for the objects created/updated/removed during this
    /// request, joined for display. No separator after the last entry.
    pub fn altered_objects(&self) -> String {
        self.entries.join(ENTRY_SEPARATOR)
    }
}

/// Truncates on a char boundary.
fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

impl fmt::Display for RequestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "request[id={}, taken={}ms, started={}, event={}, response={}, session={}, size={}, info={}, altered={}, active={}]",
            self.id,
            self.time_taken_ms,
            self.started_at.to_rfc3339(),
            self.event_target.as_deref().unwrap_or("-"),
            self.response_target.as_deref().unwrap_or("-"),
            self.session_id.as_deref().unwrap_or("-"),
            self.session_size_bytes,
            self.session_info
                .as_ref()
                .map(|info| info.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.altered_objects(),
            self.active_requests,
        )
    }
}
