//! Terminal user interface for the fleet dashboard.
//!
//! Built on ratatui and crossterm. The [`app::App`] owns the dashboard
//! controller and the injected fleet data; [`event`] turns key presses into
//! actions and [`ui`] draws each frame.

pub mod app;
pub mod event;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::{App, Dialog, ViewSettings};
