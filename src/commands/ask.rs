//! `fleetdash ask` - answers one palette query and exits.

use super::{now, open_fleet, CommandError};
use fleet_dashboard::config::Config;
use fleet_dashboard::palette;
use std::path::PathBuf;

/// Joins `words` into a query and prints the palette's answer.
pub(crate) fn run_ask_command(
    words: &[String],
    data: Option<PathBuf>,
    config: &Config,
) -> Result<(), CommandError> {
    let query = words.join(" ");
    let now = now();
    let fleet = open_fleet(data, config, now)?;
    let response = palette::respond(&query, fleet.as_ref(), now);
    tracing::debug!(intent = ?response.intent, "answered palette query");
    print!("{response}");
    Ok(())
}
