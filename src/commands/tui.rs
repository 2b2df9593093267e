//! `fleetdash tui` - the interactive dashboard.

use super::{now, open_controller, open_fleet, open_store, CommandError};
use fleet_dashboard::config::Config;
use fleet_dashboard::tui::{App, ViewSettings};
use fleet_dashboard::widgets::WidgetRegistry;
use std::path::PathBuf;

/// Builds the app from config and runs it on a fresh tokio runtime.
pub(crate) fn run_tui_command(
    layout: Option<PathBuf>,
    data: Option<PathBuf>,
    config: &Config,
) -> Result<(), CommandError> {
    let store = open_store(layout, config);
    let controller = open_controller(&store, config)?;
    let fleet = open_fleet(data, config, now())?;
    let settings = ViewSettings {
        columns: config.dashboard.columns,
        row_height: config.dashboard.row_height,
        tick_rate: config.dashboard.tick_rate()?,
    };
    tracing::info!("Starting TUI with layout {:?}", store.path());

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let mut app = App::new(controller, WidgetRegistry::new(), fleet, settings);
        app.run().await
    })?;
    Ok(())
}
