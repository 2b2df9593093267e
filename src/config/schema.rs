//! TOML configuration schema types.
//!
//! Every struct is `#[serde(default)]`, so a partial or empty file is valid.
//! Durations are humantime strings (`"250ms"`, `"1s"`) parsed on access.
//! Empty path strings mean "use the platform default".

use crate::config::error::ConfigError;
use crate::config::xdg;
use crate::layout::{CatalogEntry, CatalogError, WidgetCatalog};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Smallest row height that still fits a border and one line of content.
pub const MIN_ROW_HEIGHT: u16 = 3;

/// Root configuration.
///
/// ```toml
/// [dashboard]
/// [logging]
/// [catalog]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Grid and data sources.
    pub dashboard: DashboardConfig,
    /// Log verbosity and destination.
    pub logging: LoggingConfig,
    /// Optional catalog override.
    pub catalog: CatalogConfig,
}

impl Config {
    /// The widget catalog: the override when non-empty, else the built-in one.
    pub fn catalog(&self) -> Result<WidgetCatalog, CatalogError> {
        if self.catalog.widgets.is_empty() {
            Ok(WidgetCatalog::builtin())
        } else {
            WidgetCatalog::from_entries(self.catalog.widgets.clone())
        }
    }

    /// Checks values that parse but are unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dashboard.tick_rate()?.is_zero() {
            return Err(ConfigError::OutOfRange {
                field: "dashboard.tick_rate",
                message: "must be greater than zero".to_string(),
            });
        }
        if self.dashboard.columns == 0 {
            return Err(ConfigError::OutOfRange {
                field: "dashboard.columns",
                message: "must be at least 1".to_string(),
            });
        }
        if self.dashboard.row_height < MIN_ROW_HEIGHT {
            return Err(ConfigError::OutOfRange {
                field: "dashboard.row_height",
                message: format!("must be at least {MIN_ROW_HEIGHT}"),
            });
        }
        self.catalog()?;
        Ok(())
    }
}

/// `[dashboard]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Grid columns at full terminal width.
    pub columns: u16,
    /// Terminal rows per grid row.
    pub row_height: u16,
    /// Redraw interval as a humantime string.
    pub tick_rate: String,
    /// Saved layout location; empty for `$XDG_DATA_HOME/fleet-dashboard/layout.json`.
    pub layout_file: String,
    /// Fleet data JSON; empty for the built-in sample.
    pub data_file: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            columns: 4,
            row_height: 7,
            tick_rate: "250ms".to_string(),
            layout_file: String::new(),
            data_file: String::new(),
        }
    }
}

impl DashboardConfig {
    /// Parsed [`tick_rate`](Self::tick_rate).
    pub fn tick_rate(&self) -> Result<Duration, ConfigError> {
        humantime::parse_duration(&self.tick_rate).map_err(|e| ConfigError::InvalidDuration {
            field: "dashboard.tick_rate",
            value: self.tick_rate.clone(),
            message: e.to_string(),
        })
    }

    /// Where the layout is saved.
    pub fn layout_path(&self) -> PathBuf {
        if self.layout_file.is_empty() {
            xdg::layout_path()
        } else {
            xdg::expand_tilde(&self.layout_file)
        }
    }

    /// Fleet data file, or `None` for the built-in sample.
    pub fn data_path(&self) -> Option<PathBuf> {
        (!self.data_file.is_empty()).then(|| xdg::expand_tilde(&self.data_file))
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Verbosity used when `FLEETDASH_LOG` is unset.
    pub level: LogLevel,
    /// Log file; empty for stderr (CLI) or nowhere (TUI).
    pub file: String,
}

impl LoggingConfig {
    /// Log file, or `None` when unset.
    pub fn file_path(&self) -> Option<PathBuf> {
        (!self.file.is_empty()).then(|| xdg::expand_tilde(&self.file))
    }
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages.
    #[default]
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// `EnvFilter` directive for this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// `[catalog]` section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Replacement catalog entries, in picker order.
    pub widgets: Vec<CatalogEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{WidgetType, WidgetWidth};

    #[test]
    fn parse_valid_config_all_fields() {
        let toml_str = r#"
[dashboard]
columns = 3
row_height = 9
tick_rate = "1s"
layout_file = "/tmp/layout.json"
data_file = "/tmp/fleet.json"

[logging]
level = "debug"
file = "/var/log/fleetdash.log"

[[catalog.widgets]]
id = "gross"
type = "stat-card"
title = "Gross"
width = "small"

[[catalog.widgets]]
id = "trend"
type = "bookings-trend"
title = "Trend"
width = "large"
height = "large"
"#;
        let config: Config = toml::from_str(toml_str).expect("valid TOML should parse");
        assert_eq!(config.dashboard.columns, 3);
        assert_eq!(config.dashboard.row_height, 9);
        assert_eq!(config.dashboard.tick_rate().expect("valid"), Duration::from_secs(1));
        assert_eq!(config.dashboard.layout_path(), PathBuf::from("/tmp/layout.json"));
        assert_eq!(config.dashboard.data_path(), Some(PathBuf::from("/tmp/fleet.json")));
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(
            config.logging.file_path(),
            Some(PathBuf::from("/var/log/fleetdash.log"))
        );
        assert_eq!(config.catalog.widgets.len(), 2);
        assert!(config.catalog.widgets[0].is_visible, "isVisible defaults to true");

        let catalog = config.catalog().expect("valid catalog");
        assert_eq!(catalog.entries().len(), 2);
        assert_eq!(
            catalog.get("trend").map(|e| e.width),
            Some(WidgetWidth::Large)
        );
    }

    #[test]
    fn parse_empty_string_uses_all_defaults() {
        let config: Config = toml::from_str("").expect("empty string should parse");
        assert_eq!(config, Config::default());
        assert_eq!(config.dashboard.columns, 4);
        assert_eq!(config.dashboard.row_height, 7);
        assert_eq!(
            config.dashboard.tick_rate().expect("default parses"),
            Duration::from_millis(250)
        );
        assert_eq!(config.dashboard.data_path(), None);
        assert_eq!(config.logging.file_path(), None);
    }

    #[test]
    fn parse_unknown_fields_are_ignored() {
        let toml_str = r#"
unknown_key = "hello"

[dashboard]
future_field = 42
"#;
        let config: Config = toml::from_str(toml_str).expect("unknown fields should be ignored");
        assert_eq!(config.dashboard.columns, 4);
    }

    #[test]
    fn empty_catalog_override_uses_builtin() {
        let config = Config::default();
        assert_eq!(config.catalog().expect("builtin"), WidgetCatalog::builtin());
    }

    #[test]
    fn unknown_widget_type_in_override_is_kept() {
        let toml_str = r#"
[[catalog.widgets]]
id = "odd"
type = "frobnicate"
title = "Odd"
width = "medium"
"#;
        let config: Config = toml::from_str(toml_str).expect("should parse");
        assert_eq!(
            config.catalog.widgets[0].widget_type,
            WidgetType::Other("frobnicate".to_string())
        );
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.dashboard.tick_rate = "soon".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDuration { field: "dashboard.tick_rate", .. })
        ));

        let mut config = Config::default();
        config.dashboard.columns = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "dashboard.columns", .. })
        ));

        let mut config = Config::default();
        config.dashboard.row_height = 2;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "dashboard.row_height", .. })
        ));
    }

    #[test]
    fn validate_rejects_zero_tick_rate() {
        for zero in ["0s", "0ms"] {
            let mut config = Config::default();
            config.dashboard.tick_rate = zero.to_string();
            let err = config.validate().expect_err("zero tick rate");
            assert!(matches!(
                err,
                ConfigError::OutOfRange { field: "dashboard.tick_rate", .. }
            ));
            assert!(err.to_string().contains("greater than zero"));
        }

        let mut config = Config::default();
        config.dashboard.tick_rate = "1ms".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_catalog_ids() {
        let toml_str = r#"
[[catalog.widgets]]
id = "same"
type = "stat-card"
title = "One"
width = "small"

[[catalog.widgets]]
id = "same"
type = "stat-card"
title = "Two"
width = "small"
"#;
        let config: Config = toml::from_str(toml_str).expect("should parse");
        match config.validate() {
            Err(ConfigError::Catalog(CatalogError::DuplicateId { id })) => assert_eq!(id, "same"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn log_level_parsing() {
        for (raw, level) in [
            ("error", LogLevel::Error),
            ("warn", LogLevel::Warn),
            ("info", LogLevel::Info),
            ("debug", LogLevel::Debug),
            ("trace", LogLevel::Trace),
        ] {
            let config: LoggingConfig =
                toml::from_str(&format!("level = \"{raw}\"")).expect("valid level");
            assert_eq!(config.level, level);
            assert_eq!(level.as_directive(), raw);
        }
        assert!(toml::from_str::<LoggingConfig>("level = \"loud\"").is_err());
    }
}
