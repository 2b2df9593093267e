//! Customizable dashboard layout.
//!
//! A layout is an ordered list of widgets. The [`catalog`] lists what can
//! be added, the [`engine`] applies pure mutations, [`span`] maps size
//! tiers to grid spans, and the [`controller`] is the host-side owner that
//! gates mutations on [`EditMode`] and reports every new layout.

pub mod catalog;
pub mod controller;
pub mod edit_mode;
pub mod engine;
pub mod model;
pub mod span;
pub mod store;

pub use catalog::{CatalogEntry, CatalogError, WidgetCatalog};
pub use controller::{DashboardController, EditError, LayoutChangeCallback};
pub use edit_mode::EditMode;
pub use engine::{is_renderable, IdSuffixSource, TimestampSuffix};
pub use model::{DashboardLayout, Widget, WidgetHeight, WidgetType, WidgetWidth};
pub use span::{span_classes, ColumnSpan, GridSpan};
pub use store::{LayoutStore, LayoutStoreError};
