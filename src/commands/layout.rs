//! `fleetdash layout` subcommands.
//!
//! Each edit enters edit mode, applies one mutation through the
//! controller and relies on the store's autosave callback to persist it.

use super::{open_controller, open_store, CommandError};
use fleet_dashboard::config::Config;
use fleet_dashboard::layout::{DashboardController, DashboardLayout, Widget};
use std::path::PathBuf;

/// One `layout` operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LayoutOp {
    Show,
    Available,
    Add(String),
    Remove(String),
    ToggleVisibility(String),
    ToggleLock(String),
    Reset,
}

/// Runs `op` against the layout at `layout` (or the configured path).
pub(crate) fn run_layout_command(
    op: LayoutOp,
    layout: Option<PathBuf>,
    config: &Config,
) -> Result<(), CommandError> {
    let store = open_store(layout, config);
    // Reset never loads the saved document, so it also recovers from a corrupt one.
    let open = || open_controller(&store, config);
    match op {
        LayoutOp::Show => {
            let controller = open()?;
            print!("{}", format_layout(controller.layout()));
        }
        LayoutOp::Available => {
            let controller = open()?;
            let available = controller.available();
            if available.is_empty() {
                println!("Every catalog widget is already on the dashboard");
            }
            for entry in available {
                println!("{:<24} {:<18} {}", entry.id, entry.widget_type.as_str(), entry.title);
            }
        }
        LayoutOp::Add(catalog_id) => {
            let mut controller = open()?;
            controller.customize();
            let id = controller.add(&catalog_id)?;
            println!("Added {id}");
        }
        LayoutOp::Remove(id) => {
            let mut controller = open()?;
            require_widget(&controller, &id)?;
            controller.customize();
            controller.remove(&id)?;
            println!("Removed {id}");
        }
        LayoutOp::ToggleVisibility(id) => {
            let mut controller = open()?;
            require_widget(&controller, &id)?;
            controller.customize();
            controller.toggle_visibility(&id)?;
            let state = match controller.layout().get(&id) {
                Some(w) if w.is_visible => "visible",
                _ => "hidden",
            };
            println!("{id} is now {state}");
        }
        LayoutOp::ToggleLock(id) => {
            let mut controller = open()?;
            require_widget(&controller, &id)?;
            controller.customize();
            controller.toggle_lock(&id)?;
            let state = match controller.layout().get(&id) {
                Some(w) if w.is_locked => "locked",
                _ => "unlocked",
            };
            println!("{id} is now {state}");
        }
        LayoutOp::Reset => {
            store.clear()?;
            println!("Layout reset to default ({})", store.path().display());
        }
    }
    Ok(())
}

/// The engine ignores unknown ids; the CLI reports them instead of
/// silently succeeding.
fn require_widget(controller: &DashboardController, id: &str) -> Result<(), CommandError> {
    if controller.layout().contains(id) {
        Ok(())
    } else {
        Err(CommandError::NoSuchWidget(id.to_string()))
    }
}

fn format_widget(widget: &Widget) -> String {
    let mut flags = vec![if widget.is_visible { "visible" } else { "hidden" }];
    if widget.is_locked {
        flags.push("locked");
    }
    format!(
        "{:<28} {:<18} {:<6} {:<6} {:<22} {}",
        widget.id,
        widget.widget_type.as_str(),
        widget.width.as_str(),
        widget.height.as_str(),
        widget.title,
        flags.join(",")
    )
}

/// Table of `layout` in display order, one widget per line.
pub(crate) fn format_layout(layout: &DashboardLayout) -> String {
    if layout.is_empty() {
        return "(empty layout)\n".to_string();
    }
    let mut out = format!(
        "{:<28} {:<18} {:<6} {:<6} {:<22} {}\n",
        "ID", "TYPE", "WIDTH", "HEIGHT", "TITLE", "STATE"
    );
    for widget in &layout.widgets {
        out.push_str(&format_widget(widget));
        out.push('\n');
    }
    out
}
