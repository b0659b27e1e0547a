//! In-memory request logger.
//!
//! Counters are relaxed atomics; live sessions, in-flight records, and the
//! bounded history sit behind their own locks so notification paths never
//! hold more than one at a time.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use lookout_core::limits::{DEFAULT_REQUEST_WINDOW, MAX_REQUEST_WINDOW};
use lookout_core::{
    ChangeKind, Error, RequestData, RequestId, Result, SessionData, SessionInfo, StoreObject,
};

use crate::logger::RequestLogger;

/// Configuration for the in-memory logger.
#[derive(Debug, Clone)]
pub struct RecorderConfig {
    /// Completed requests retained in memory
    pub request_window: usize,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            request_window: DEFAULT_REQUEST_WINDOW,
        }
    }
}

impl RecorderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.request_window == 0 {
            return Err(Error::config("request_window must be at least 1"));
        }
        if self.request_window > MAX_REQUEST_WINDOW {
            return Err(Error::config(format!(
                "request_window {} exceeds {} limit",
                self.request_window, MAX_REQUEST_WINDOW
            )));
        }
        Ok(())
    }
}

/// Request logger keeping aggregate counters, live-session summaries, and a
/// bounded completed-request history in process memory.
pub struct InMemoryRequestLogger {
    config: RecorderConfig,
    total_sessions: AtomicU64,
    peak_sessions: AtomicU64,
    active_requests: AtomicU64,
    peak_active_requests: AtomicU64,
    live: Mutex<HashMap<String, SessionData>>,
    inflight: Mutex<HashMap<RequestId, RequestData>>,
    history: Mutex<VecDeque<RequestData>>,
}

impl InMemoryRequestLogger {
    pub fn new(config: RecorderConfig) -> Result<Self> {
        config.validate()?;
        let window = config.request_window;
        Ok(Self {
            config,
            total_sessions: AtomicU64::new(0),
            peak_sessions: AtomicU64::new(0),
            active_requests: AtomicU64::new(0),
            peak_active_requests: AtomicU64::new(0),
            live: Mutex::new(HashMap::new()),
            inflight: Mutex::new(HashMap::new()),
            history: Mutex::new(VecDeque::with_capacity(window)),
        })
    }

    fn with_inflight(&self, request: RequestId, f: impl FnOnce(&mut RequestData)) {
        let mut inflight = self.inflight.lock();
        match inflight.get_mut(&request) {
            Some(record) => f(record),
            None => debug!(%request, "notification for unknown request dropped"),
        }
    }

    fn record_change(&self, request: RequestId, kind: ChangeKind, value: &StoreObject) {
        self.with_inflight(request, |record| {
            record.add_entry(format!("{} {}", kind, value));
        });
    }
}

impl RequestLogger for InMemoryRequestLogger {
    fn total_created_sessions(&self) -> u64 {
        self.total_sessions.load(Ordering::Relaxed)
    }

    fn peak_sessions(&self) -> u64 {
        self.peak_sessions.load(Ordering::Relaxed)
    }

    fn current_active_requests(&self) -> u64 {
        self.active_requests.load(Ordering::Relaxed)
    }

    fn peak_active_requests(&self) -> u64 {
        self.peak_active_requests.load(Ordering::Relaxed)
    }

    fn requests(&self) -> Vec<RequestData> {
        self.history.lock().iter().rev().cloned().collect()
    }

    fn live_sessions(&self) -> Vec<SessionData> {
        let mut sessions: Vec<SessionData> = self.live.lock().values().cloned().collect();
        sessions.sort_by(|a, b| b.last_active_at.cmp(&a.last_active_at));
        sessions
    }

    fn session_created(&self, session_id: &str) {
        let mut live = self.live.lock();
        if live.contains_key(session_id) {
            debug!(session_id, "duplicate session create ignored");
            return;
        }
        live.insert(session_id.to_string(), SessionData::new(session_id));
        self.total_sessions.fetch_add(1, Ordering::Relaxed);
        self.peak_sessions
            .fetch_max(live.len() as u64, Ordering::Relaxed);
        debug!(session_id, "session created");
    }

    fn session_destroyed(&self, session_id: &str) {
        if self.live.lock().remove(session_id).is_some() {
            debug!(session_id, "session destroyed");
        }
    }

    fn request_started(&self) -> RequestId {
        let id = RequestId::new();
        let active = self.active_requests.fetch_add(1, Ordering::Relaxed) + 1;
        self.peak_active_requests
            .fetch_max(active, Ordering::Relaxed);
        self.inflight.lock().insert(id, RequestData::new(id));
        id
    }

    fn request_completed(&self, request: RequestId, time_taken: Duration) {
        let removed = self.inflight.lock().remove(&request);
        let Some(mut record) = removed else {
            debug!(%request, "completion for unknown request dropped");
            return;
        };

        record.set_time_taken(time_taken);
        // Snapshot before this request is subtracted, so a lone request
        // reports itself.
        record.active_requests = self.active_requests.load(Ordering::Relaxed);
        self.active_requests.fetch_sub(1, Ordering::Relaxed);

        if let Some(session_id) = record.session_id.clone() {
            let mut live = self.live.lock();
            if let Some(session) = live.get_mut(&session_id) {
                session.record_request(record.time_taken_ms);
                session.session_size_bytes = record.session_size_bytes;
                if record.session_info.is_some() {
                    session.session_info = record.session_info.clone();
                }
            }
        }

        let mut history = self.history.lock();
        while history.len() >= self.config.request_window {
            history.pop_front();
        }
        history.push_back(record);
    }

    fn bind_session(
        &self,
        request: RequestId,
        session_id: &str,
        session_size_bytes: u64,
        info: Option<SessionInfo>,
    ) {
        self.with_inflight(request, |record| {
            record.session_id = Some(session_id.to_string());
            record.session_size_bytes = session_size_bytes;
            record.session_info = info;
        });
    }

    fn object_created(&self, request: RequestId, value: &StoreObject) {
        self.record_change(request, ChangeKind::Created, value);
    }

    fn object_updated(&self, request: RequestId, value: &StoreObject) {
        self.record_change(request, ChangeKind::Updated, value);
    }

    fn object_removed(&self, request: RequestId, value: &StoreObject) {
        self.record_change(request, ChangeKind::Removed, value);
    }

    fn log_event_target(&self, request: RequestId, target: &str) {
        self.with_inflight(request, |record| record.set_event_target(target));
    }

    fn log_response_target(&self, request: RequestId, target: &str) {
        self.with_inflight(request, |record| record.set_response_target(target));
    }
}
