//! Dashboard Logger
//!
//! Operator-facing diagnostic channel. Installs a global `tracing`
//! subscriber that prints every event (browser console on wasm, stderr
//! natively) and keeps the most recent ones in a circular buffer that the
//! application and tests can inspect.
//!
//! ```ignore
//! let diagnostics = dashboard_logger::init_logger("QrDashboard", 200)?;
//! tracing::error!("failed to load");
//! assert_eq!(diagnostics.errors().len(), 1);
//! ```

mod buffer;
mod console;

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

pub use buffer::{DiagnosticLog, DiagnosticRecord, RingBufferLayer};

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("diagnostic buffer capacity must be at least 1")]
    ZeroCapacity,

    #[error("a global logger is already installed: {0}")]
    AlreadyInstalled(#[from] TryInitError),
}

/// Install the global subscriber. Call once at startup.
pub fn init_logger(app_name: &str, capacity: usize) -> Result<DiagnosticLog, LoggerError> {
    let log = DiagnosticLog::with_capacity(capacity)?;
    let max_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    tracing_subscriber::registry()
        .with(max_level)
        .with(log.layer())
        .with(console::fmt_layer())
        .try_init()?;

    tracing::info!(app = app_name, capacity, "diagnostic logger initialized");
    Ok(log)
}
