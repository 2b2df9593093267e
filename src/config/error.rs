//! Configuration error types for loading and parsing TOML config files.

use crate::layout::CatalogError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading, validating or writing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read configuration file: {path}")]
    ReadError {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("Invalid configuration at {path}:{line}:{column}: {message}")]
    ParseError {
        /// Path to the file containing the error.
        path: PathBuf,
        /// One-based line index of the error (0 if unknown).
        line: usize,
        /// One-based column index of the error (0 if unknown).
        column: usize,
        /// Human-readable description of the parse failure.
        message: String,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {path}")]
    NotFound {
        /// Path that was requested but does not exist.
        path: PathBuf,
    },

    /// A configuration file already exists at the target path.
    #[error("Configuration file already exists: {path} (use --force to overwrite)")]
    AlreadyExists {
        /// Path where the file already exists.
        path: PathBuf,
    },

    /// Failed to write a configuration file to disk.
    #[error("Failed to write configuration file: {path}")]
    WriteError {
        /// Path to the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A duration field is not a valid humantime string.
    #[error("Invalid duration for `{field}`: {value:?} ({message})")]
    InvalidDuration {
        /// Dotted field name, e.g. `dashboard.tick_rate`.
        field: &'static str,
        /// Offending value.
        value: String,
        /// Parser message.
        message: String,
    },

    /// A numeric field is outside its allowed range.
    #[error("Invalid value for `{field}`: {message}")]
    OutOfRange {
        /// Dotted field name.
        field: &'static str,
        /// What is allowed.
        message: String,
    },

    /// The `[catalog]` override is not a valid catalog.
    #[error("Invalid widget catalog: {0}")]
    Catalog(#[from] CatalogError),
}
