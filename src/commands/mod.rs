//! Command implementations for the `fleetdash` CLI.
//!
//! Organized by subcommand:
//! - `layout` - inspect and edit the saved layout
//! - `ask` - one-shot command palette queries
//! - `config` - configuration file management
//! - `tui` - the interactive dashboard

pub(crate) mod ask;
pub(crate) mod config;
pub(crate) mod layout;
pub(crate) mod tui;

pub(crate) use ask::*;
pub(crate) use config::*;
pub(crate) use layout::*;
pub(crate) use tui::*;

use chrono::NaiveDateTime;
use fleet_dashboard::config::{Config, ConfigError, ConfigLoader};
use fleet_dashboard::fleet::{sample, FleetDataError, FleetRepository, FleetSnapshot};
use fleet_dashboard::layout::{CatalogError, DashboardController, EditError, LayoutStore, LayoutStoreError};
use fleet_dashboard::logging::{self, LogTarget};
use std::path::PathBuf;
use thiserror::Error;

/// Anything a command can fail with.
#[derive(Error, Debug)]
pub(crate) enum CommandError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Layout error: {0}")]
    Store(#[from] LayoutStoreError),
    #[error("Error: {0}")]
    Edit(#[from] EditError),
    #[error("Fleet data error: {0}")]
    Fleet(#[from] FleetDataError),
    #[error("Error: no widget '{0}' in the layout")]
    NoSuchWidget(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads and validates the configuration, then installs logging.
///
/// `interactive` commands keep stderr clean and log to the configured
/// file only.
pub(crate) fn load_config(interactive: bool) -> Result<Config, CommandError> {
    let config = ConfigLoader::load_default()?;
    config.validate()?;
    let target = LogTarget::select(config.logging.file_path(), interactive);
    logging::init(config.logging.level, target)?;
    Ok(config)
}

/// Local wall-clock time, as seen by widgets and the palette.
pub(crate) fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Fleet data from `--data`, else `[dashboard].data_file`, else the
/// built-in sample.
pub(crate) fn open_fleet(
    data: Option<PathBuf>,
    config: &Config,
    now: NaiveDateTime,
) -> Result<Box<dyn FleetRepository>, FleetDataError> {
    match data.or_else(|| config.dashboard.data_path()) {
        Some(path) => {
            tracing::debug!("Loading fleet data from {:?}", path);
            Ok(Box::new(FleetSnapshot::load(&path)?))
        }
        None => Ok(Box::new(sample::sample_at(now))),
    }
}

/// Layout store at `--layout`, else the configured location.
pub(crate) fn open_store(layout: Option<PathBuf>, config: &Config) -> LayoutStore {
    LayoutStore::new(layout.unwrap_or_else(|| config.dashboard.layout_path()))
}

/// A viewing-mode controller over the stored layout that saves every change.
pub(crate) fn open_controller(
    store: &LayoutStore,
    config: &Config,
) -> Result<DashboardController, CommandError> {
    let catalog = config.catalog()?;
    let layout = store.load_or_default(&catalog)?;
    Ok(DashboardController::new(
        layout,
        catalog,
        store.autosave_callback(),
    ))
}
