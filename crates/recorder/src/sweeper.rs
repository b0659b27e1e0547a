//! Background sweeper destroying idle sessions.
//!
//! Hosts that never hear about session invalidation (a client that simply
//! goes away) would otherwise grow the live-session table without bound.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::interval;
use tracing::{debug, info};

use lookout_core::session::SESSION_IDLE_TIMEOUT_MINUTES;

use crate::logger::RequestLogger;

/// Sweeper configuration.
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How often to scan for idle sessions
    pub interval: Duration,
    /// Idle time after which a session is destroyed
    pub idle_timeout: chrono::Duration,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(60),
            idle_timeout: chrono::Duration::minutes(SESSION_IDLE_TIMEOUT_MINUTES),
        }
    }
}

/// Destroys live sessions that have been idle past the timeout.
pub struct SessionSweeper {
    logger: Arc<dyn RequestLogger>,
    config: SweeperConfig,
}

impl SessionSweeper {
    pub fn new(logger: Arc<dyn RequestLogger>, config: SweeperConfig) -> Self {
        Self { logger, config }
    }

    /// Starts the periodic sweep task.
    pub fn start(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval(self.config.interval);
            loop {
                ticker.tick().await;
                let destroyed = self.sweep_at(Utc::now());
                if destroyed > 0 {
                    info!(destroyed, "idle sessions destroyed");
                }
            }
        })
    }

    /// One sweep pass as of `now`. Returns the number of sessions destroyed.
    pub fn sweep_at(&self, now: DateTime<Utc>) -> usize {
        let mut destroyed = 0;
        for session in self.logger.live_sessions() {
            if session.idle_for(now) > self.config.idle_timeout {
                debug!(session_id = %session.session_id, "destroying idle session");
                self.logger.session_destroyed(&session.session_id);
                destroyed += 1;
            }
        }
        destroyed
    }
}
