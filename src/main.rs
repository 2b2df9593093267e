//! Fleet Dashboard - CLI entry point
//!
//! Launches the interactive dashboard or runs one-shot layout, palette and
//! configuration commands against the same saved layout.

mod commands;

use clap::{Parser, Subcommand};
use commands::{
    load_config, run_ask_command, run_config_command, run_layout_command, run_tui_command,
    CommandError, ConfigOp, LayoutOp,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Customizable back-office dashboard for private-hire fleets
#[derive(Parser)]
#[command(name = "fleetdash")]
#[command(version, about = "Customizable back-office dashboard for private-hire fleets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the fleetdash CLI
#[derive(Subcommand)]
enum Commands {
    /// Launch the terminal dashboard
    Tui {
        /// Layout file (defaults to [dashboard].layout_file or the XDG data dir)
        #[arg(long)]
        layout: Option<PathBuf>,
        /// Fleet data JSON file (defaults to the built-in sample)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Inspect or edit the saved dashboard layout
    Layout {
        /// Layout file (defaults to [dashboard].layout_file or the XDG data dir)
        #[arg(long, global = true)]
        layout: Option<PathBuf>,
        #[command(subcommand)]
        action: LayoutAction,
    },

    /// Ask the command palette a question about the fleet
    Ask {
        /// Free-text query, e.g. "how many drivers are online"
        #[arg(required = true)]
        query: Vec<String>,
        /// Fleet data JSON file (defaults to the built-in sample)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `layout` subcommand.
#[derive(Subcommand)]
enum LayoutAction {
    /// Print the layout in display order
    Show,
    /// List catalog widgets not on the dashboard
    Available,
    /// Add a widget from the catalog
    Add {
        /// Catalog entry id
        catalog_id: String,
    },
    /// Remove a widget (refused while it is locked)
    Remove {
        /// Widget id
        id: String,
    },
    /// Show or hide a widget
    ToggleVisibility {
        /// Widget id
        id: String,
    },
    /// Lock or unlock a widget
    ToggleLock {
        /// Widget id
        id: String,
    },
    /// Delete the saved layout so the default is used again
    Reset,
}

impl From<LayoutAction> for LayoutOp {
    fn from(action: LayoutAction) -> Self {
        match action {
            LayoutAction::Show => LayoutOp::Show,
            LayoutAction::Available => LayoutOp::Available,
            LayoutAction::Add { catalog_id } => LayoutOp::Add(catalog_id),
            LayoutAction::Remove { id } => LayoutOp::Remove(id),
            LayoutAction::ToggleVisibility { id } => LayoutOp::ToggleVisibility(id),
            LayoutAction::ToggleLock { id } => LayoutOp::ToggleLock(id),
            LayoutAction::Reset => LayoutOp::Reset,
        }
    }
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

impl From<ConfigAction> for ConfigOp {
    fn from(action: ConfigAction) -> Self {
        match action {
            ConfigAction::Init { force } => ConfigOp::Init { force },
            ConfigAction::Path => ConfigOp::Path,
            ConfigAction::Validate => ConfigOp::Validate,
        }
    }
}

fn run(command: Commands) -> Result<(), CommandError> {
    match command {
        // Config commands must work even when the config file is broken.
        Commands::Config { action } => run_config_command(action.into()),
        Commands::Tui { layout, data } => {
            let config = load_config(true)?;
            run_tui_command(layout, data, &config)
        }
        Commands::Layout { layout, action } => {
            let config = load_config(false)?;
            run_layout_command(action.into(), layout, &config)
        }
        Commands::Ask { query, data } => {
            let config = load_config(false)?;
            run_ask_command(&query, data, &config)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
