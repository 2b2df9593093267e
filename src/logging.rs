//! Logging initialization.
//!
//! Filter directives come from the `FLEETDASH_LOG` environment variable,
//! falling back to the configured `[logging].level`.
//!
//! ```bash
//! FLEETDASH_LOG=debug fleetdash layout show
//! FLEETDASH_LOG=fleet_dashboard::layout=trace,warn fleetdash tui
//! ```
//!
//! CLI commands log to stderr. The TUI owns the terminal, so it logs to the
//! configured file or nowhere.

use crate::config::LogLevel;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "FLEETDASH_LOG";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error.
    Stderr,
    /// Appended to a file.
    File(PathBuf),
    /// Dropped.
    Discard,
}

impl LogTarget {
    /// Picks the target for a configured `file` and whether the terminal is
    /// taken over by the TUI.
    pub fn select(file: Option<PathBuf>, interactive: bool) -> Self {
        match (file, interactive) {
            (Some(path), _) => LogTarget::File(path),
            (None, true) => LogTarget::Discard,
            (None, false) => LogTarget::Stderr,
        }
    }
}

/// Filter from `FLEETDASH_LOG`, else `level`.
pub fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level.as_directive()))
}

/// Installs the global subscriber.
///
/// Fails only when a log file cannot be opened. A second call is a no-op.
pub fn init(level: LogLevel, target: LogTarget) -> io::Result<()> {
    let builder = fmt().with_env_filter(env_filter(level)).with_target(false);
    let installed = match target {
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Discard => builder.with_writer(io::sink).try_init(),
    };
    if installed.is_err() {
        tracing::debug!("log subscriber already installed");
    }
    Ok(())
}
