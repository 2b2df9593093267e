//! `fleetdash config` subcommands.

use super::CommandError;
use fleet_dashboard::config::{default, xdg, ConfigLoader};

/// One `config` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigOp {
    Init { force: bool },
    Path,
    Validate,
}

pub(crate) fn run_config_command(op: ConfigOp) -> Result<(), CommandError> {
    match op {
        ConfigOp::Init { force } => {
            let path = default::create_default_config(force)?;
            println!("Created configuration at {}", path.display());
        }
        ConfigOp::Path => println!("{}", xdg::config_path().display()),
        ConfigOp::Validate => {
            let config = ConfigLoader::load_default()?;
            config.validate()?;
            let catalog = config.catalog()?;
            println!("Configuration is valid");
            println!(
                "  grid: {} columns, row height {}, tick {}",
                config.dashboard.columns, config.dashboard.row_height, config.dashboard.tick_rate
            );
            println!("  layout: {}", config.dashboard.layout_path().display());
            match config.dashboard.data_path() {
                Some(path) => println!("  fleet data: {}", path.display()),
                None => println!("  fleet data: built-in sample"),
            }
            println!("  catalog: {} widgets", catalog.entries().len());
        }
    }
    Ok(())
}
