//! Lookout request telemetry service.
//!
//! Records per-request and per-session telemetry for every handled request
//! and serves the bounded history, live sessions, and aggregate counters to
//! a monitoring viewer over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::info;

use api::{router, AppState};
use recorder::{
    InMemoryRequestLogger, NullRequestLogger, RecorderConfig, RequestLogger, SessionSweeper,
    SweeperConfig,
};
use telemetry::init_tracing_from_env;

/// Application configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct Config {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,

    /// Disable to serve the viewer without recording anything
    #[serde(default = "default_true")]
    recording: bool,

    /// Completed requests retained in memory
    #[serde(default = "default_request_window")]
    request_window: usize,

    /// Seconds between idle-session sweeps
    #[serde(default = "default_sweep_interval_secs")]
    sweep_interval_secs: u64,

    /// Minutes of inactivity before a session is destroyed
    #[serde(default = "default_session_idle_minutes")]
    session_idle_minutes: i64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

fn default_request_window() -> usize {
    lookout_core::limits::DEFAULT_REQUEST_WINDOW
}

fn default_sweep_interval_secs() -> u64 {
    60
}

fn default_session_idle_minutes() -> i64 {
    lookout_core::session::SESSION_IDLE_TIMEOUT_MINUTES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            recording: default_true(),
            request_window: default_request_window(),
            sweep_interval_secs: default_sweep_interval_secs(),
            session_idle_minutes: default_session_idle_minutes(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing_from_env();

    info!("Starting lookout v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;

    let logger: Arc<dyn RequestLogger> = if config.recording {
        Arc::new(
            InMemoryRequestLogger::new(RecorderConfig {
                request_window: config.request_window,
            })
            .context("Invalid recorder configuration")?,
        )
    } else {
        info!("Recording disabled, serving viewer only");
        Arc::new(NullRequestLogger)
    };

    // Destroy sessions the host never invalidates
    let sweeper = SessionSweeper::new(
        logger.clone(),
        SweeperConfig {
            interval: Duration::from_secs(config.sweep_interval_secs),
            idle_timeout: chrono::Duration::minutes(config.session_idle_minutes),
        },
    );
    let _sweeper_handle = sweeper.start();
    info!(
        interval_secs = config.sweep_interval_secs,
        idle_minutes = config.session_idle_minutes,
        "Session sweeper started"
    );

    let state = AppState::new(logger);
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid server address")?;

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutdown complete");
    Ok(())
}

/// Load configuration from files and environment.
fn load_config() -> Result<Config> {
    let config = config::Config::builder()
        // Start with defaults
        .add_source(config::Config::try_from(&Config::default())?)
        // Load from config file if exists
        .add_source(
            config::File::with_name("config/default")
                .required(false)
                .format(config::FileFormat::Toml),
        )
        // Override with environment variables
        .add_source(
            config::Environment::default()
                .separator("__")
                .prefix("LOOKOUT")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    config
        .try_deserialize()
        .context("Failed to deserialize configuration")
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            info!("Received terminate signal");
        }
    }
}
