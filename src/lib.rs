//! Fleet dashboard library
//!
//! A customizable back-office dashboard for private-hire fleet operators.
//! The user picks widgets from a catalog, toggles their visibility, locks
//! them, removes them and adds them back; the resulting layout is
//! persisted by the host and drawn in the terminal.
//!
//! The layout engine in [`layout`] is pure: every mutation takes a layout
//! and returns a new one. The [`layout::DashboardController`] owns the live
//! layout and edit mode and reports every change through a callback, which
//! the binary wires to a [`layout::LayoutStore`].

/// Configuration file management
pub mod config;

/// Grid placement and render dispatch
pub mod dashboard;

/// Read-only fleet data handed to widgets
pub mod fleet;

/// Widget model, catalog, pure edit operations and persistence
pub mod layout;

/// Tracing subscriber setup
pub mod logging;

/// Keyword-matched command palette
pub mod palette;

/// Terminal user interface
pub mod tui;

/// Widget renderers
pub mod widgets;

pub use layout::{
    CatalogEntry, DashboardController, DashboardLayout, EditMode, Widget, WidgetCatalog,
    WidgetHeight, WidgetType, WidgetWidth,
};
