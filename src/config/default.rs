//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()`
//! and functions to write it to the XDG config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Fleet Dashboard Configuration
#
# All values shown below are the built-in defaults.
# Location: $XDG_CONFIG_HOME/fleet-dashboard/config.toml

# ==============================================================================
# Dashboard
# ==============================================================================

[dashboard]

# Grid columns at full terminal width.
# Narrow terminals use fewer: one column below 60 cells, at most two below 100.
columns = 4

# Terminal rows per grid row. Tall widgets span two grid rows.
# Minimum: 3
row_height = 7

# Redraw interval as a human-readable duration.
# Examples: "250ms", "500ms", "1s"
tick_rate = "250ms"

# Where the dashboard layout is saved after every change.
# Empty: $XDG_DATA_HOME/fleet-dashboard/layout.json
layout_file = ""

# Fleet data as a JSON document (drivers, vehicles, bookings, activity).
# Empty: a generated sample dataset.
data_file = ""

# ==============================================================================
# Logging
# ==============================================================================

[logging]

# Verbosity when FLEETDASH_LOG is not set.
# Options: "error", "warn", "info", "debug", "trace"
level = "info"

# Log file. Empty: stderr for CLI commands; the TUI discards logs.
file = ""

# ==============================================================================
# Widget catalog
# ==============================================================================

# Entries listed here replace the built-in catalog offered by the
# "Add widget" picker. Ids must be unique.
#
# [[catalog.widgets]]
# id = "stat-gross"
# type = "stat-card"
# title = "Gross Bookings"
# width = "small"       # small | medium | large | full
# height = "small"      # small | large
# isVisible = true
"#;

/// Creates (or force-overwrites) the default config file at the XDG path.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
/// - Returns the path where the config was written.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();
    create_default_config_at(&path, force)?;
    Ok(path)
}

/// Same as [`create_default_config`] for an explicit `path`.
pub fn create_default_config_at(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(path)?;
    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}

/// Writes the default template to `path`, creating parent dirs and setting 0600 permissions.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        xdg::ensure_dir(parent).map_err(write_error)?;
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_error)?;
    }

    Ok(())
}
