//! TOML configuration: schema, loading, the default template and
//! platform paths.

/// Default configuration template and file creation.
pub mod default;

/// Configuration error types.
pub mod error;

/// Configuration file loader.
pub mod loader;

/// TOML configuration schema types.
pub mod schema;

/// XDG Base Directory path resolution utilities.
pub mod xdg;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{CatalogConfig, Config, DashboardConfig, LogLevel, LoggingConfig};

/// Runs `f` with environment variables temporarily set, then restores them.
///
/// Callers must be `#[serial]`.
#[cfg(test)]
pub(crate) fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
    let originals: Vec<_> = vars
        .iter()
        .map(|(k, _)| (*k, std::env::var(k).ok()))
        .collect();

    for (k, v) in vars {
        match v {
            Some(val) => std::env::set_var(k, val),
            None => std::env::remove_var(k),
        }
    }

    f();

    for (k, original) in &originals {
        match original {
            Some(val) => std::env::set_var(k, val),
            None => std::env::remove_var(k),
        }
    }
}
