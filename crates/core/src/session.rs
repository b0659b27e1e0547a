//! Session lifecycle summaries.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Sessions idle longer than this are destroyed by the sweeper (30 minutes).
pub const SESSION_IDLE_TIMEOUT_MINUTES: i64 = 30;

/// Application-supplied summary of the session behind a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    /// Identity of the user the session belongs to, if authenticated
    pub user_id: Option<String>,
    /// Free-form label supplied by the host application
    pub description: Option<String>,
}

impl SessionInfo {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl fmt::Display for SessionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "user={} desc={}",
            self.user_id.as_deref().unwrap_or("-"),
            self.description.as_deref().unwrap_or("-"),
        )
    }
}

/// Summary of one live session, updated as its requests complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    /// Session id
    pub session_id: String,
    /// When the session was first seen
    pub started_at: DateTime<Utc>,
    /// When the session's most recent request completed
    pub last_active_at: DateTime<Utc>,
    /// Completed requests bound to this session
    pub request_count: u64,
    /// Sum of request durations in milliseconds
    pub total_time_taken_ms: u64,
    /// Last reported session size in bytes
    pub session_size_bytes: u64,
    /// Last reported session summary
    pub session_info: Option<SessionInfo>,
}

impl SessionData {
    /// Creates a summary for a session that was just created.
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            session_id: session_id.into(),
            started_at: now,
            last_active_at: now,
            request_count: 0,
            total_time_taken_ms: 0,
            session_size_bytes: 0,
            session_info: None,
        }
    }

    /// Folds one completed request into the summary.
    pub fn record_request(&mut self, time_taken_ms: u64) {
        self.last_active_at = Utc::now();
        self.request_count += 1;
        self.total_time_taken_ms += time_taken_ms;
    }

    /// How long the session has been idle as of `now`.
    pub fn idle_for(&self, now: DateTime<Utc>) -> Duration {
        now - self.last_active_at
    }
}
