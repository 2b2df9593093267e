//! Host-side owner of the live layout and edit mode.
//!
//! The controller is what the TUI and CLI talk to. It keeps the current
//! layout, the edit mode and the catalog, runs the pure engine operations,
//! and hands every resulting layout to the change callback. What the
//! callback does with it (save to disk, discard) is up to the host.

use super::catalog::{CatalogEntry, WidgetCatalog};
use super::edit_mode::EditMode;
use super::engine::{self, IdSuffixSource, TimestampSuffix};
use super::model::{DashboardLayout, Widget};
use thiserror::Error;

/// Reasons the controller refuses a mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Structural changes need edit mode.
    #[error("dashboard is not in edit mode; customize it first")]
    NotEditing,
    /// Locked widgets cannot be removed.
    #[error("widget '{id}' is locked; unlock it before removing")]
    Locked {
        /// Id of the locked widget.
        id: String,
    },
    /// The requested catalog entry does not exist.
    #[error("no catalog entry named '{id}'")]
    UnknownCatalogEntry {
        /// Requested catalog id.
        id: String,
    },
}

/// Callback invoked with the new layout after every accepted mutation.
pub type LayoutChangeCallback = Box<dyn FnMut(&DashboardLayout) + Send>;

/// Live dashboard state: layout, edit mode and catalog.
pub struct DashboardController {
    layout: DashboardLayout,
    mode: EditMode,
    catalog: WidgetCatalog,
    suffix: Box<dyn IdSuffixSource + Send>,
    on_layout_change: LayoutChangeCallback,
}

impl std::fmt::Debug for DashboardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardController")
            .field("layout", &self.layout)
            .field("mode", &self.mode)
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

impl DashboardController {
    /// Creates a controller in viewing mode.
    pub fn new(
        layout: DashboardLayout,
        catalog: WidgetCatalog,
        on_layout_change: LayoutChangeCallback,
    ) -> Self {
        Self {
            layout,
            mode: EditMode::Viewing,
            catalog,
            suffix: Box::new(TimestampSuffix),
            on_layout_change,
        }
    }

    /// Replaces the id suffix source used by [`add`](Self::add).
    pub fn with_suffix_source(mut self, suffix: impl IdSuffixSource + Send + 'static) -> Self {
        self.suffix = Box::new(suffix);
        self
    }

    /// Current layout.
    pub fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    /// Current edit mode.
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Catalog used for [`available`](Self::available) and [`add`](Self::add).
    pub fn catalog(&self) -> &WidgetCatalog {
        &self.catalog
    }

    /// Enters edit mode.
    pub fn customize(&mut self) {
        self.mode = self.mode.customize();
        tracing::debug!("entered edit mode");
    }

    /// Leaves edit mode.
    pub fn done_editing(&mut self) {
        self.mode = self.mode.done_editing();
        tracing::debug!("left edit mode");
    }

    /// Sets the edit mode directly.
    pub fn set_edit_mode(&mut self, is_edit_mode: bool) {
        self.mode = EditMode::from(is_edit_mode);
    }

    /// Catalog entries not yet placed.
    pub fn available(&self) -> Vec<&CatalogEntry> {
        self.catalog.available_widgets(&self.layout)
    }

    /// Widgets drawn in the current mode, in display order.
    pub fn renderable(&self) -> impl Iterator<Item = &Widget> {
        let mode = self.mode;
        self.layout
            .widgets
            .iter()
            .filter(move |w| engine::is_renderable(w, mode))
    }

    /// Flips visibility of `widget_id`. Absent ids are a no-op.
    pub fn toggle_visibility(&mut self, widget_id: &str) -> Result<(), EditError> {
        self.ensure_editing()?;
        let next = engine::toggle_visibility(&self.layout, widget_id);
        tracing::debug!(widget_id, "toggled visibility");
        self.commit(next);
        Ok(())
    }

    /// Flips the lock flag of `widget_id`. Absent ids are a no-op.
    pub fn toggle_lock(&mut self, widget_id: &str) -> Result<(), EditError> {
        self.ensure_editing()?;
        let next = engine::toggle_lock(&self.layout, widget_id);
        tracing::debug!(widget_id, "toggled lock");
        self.commit(next);
        Ok(())
    }

    /// Removes `widget_id`. Absent ids are a no-op; locked widgets are refused.
    pub fn remove(&mut self, widget_id: &str) -> Result<(), EditError> {
        self.ensure_editing()?;
        if self.layout.get(widget_id).is_some_and(|w| w.is_locked) {
            return Err(EditError::Locked {
                id: widget_id.to_string(),
            });
        }
        let next = engine::remove(&self.layout, widget_id);
        tracing::debug!(widget_id, "removed widget");
        self.commit(next);
        Ok(())
    }

    /// Adds a widget from the catalog entry `catalog_id`, returning the new widget id.
    pub fn add(&mut self, catalog_id: &str) -> Result<String, EditError> {
        self.ensure_editing()?;
        let entry = self
            .catalog
            .get(catalog_id)
            .ok_or_else(|| EditError::UnknownCatalogEntry {
                id: catalog_id.to_string(),
            })?;
        let next = engine::add(&self.layout, entry, self.suffix.as_ref());
        let new_id = next
            .widgets
            .last()
            .map(|w| w.id.clone())
            .unwrap_or_default();
        tracing::debug!(catalog_id, widget_id = %new_id, "added widget");
        self.commit(next);
        Ok(new_id)
    }

    /// Replaces the whole layout (e.g. "reset to default").
    pub fn replace_layout(&mut self, layout: DashboardLayout) -> Result<(), EditError> {
        self.ensure_editing()?;
        self.commit(layout);
        Ok(())
    }

    fn ensure_editing(&self) -> Result<(), EditError> {
        if self.mode.is_editing() {
            Ok(())
        } else {
            Err(EditError::NotEditing)
        }
    }

    fn commit(&mut self, next: DashboardLayout) {
        self.layout = next;
        (self.on_layout_change)(&self.layout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::model::tests::widget;
    use crate::layout::model::{WidgetType, WidgetWidth};
    use std::sync::{Arc, Mutex};

    type Changes = Arc<Mutex<Vec<DashboardLayout>>>;

    fn controller(layout: DashboardLayout) -> (DashboardController, Changes) {
        let changes: Changes = Arc::default();
        let sink = Arc::clone(&changes);
        let ctl = DashboardController::new(
            layout,
            WidgetCatalog::builtin(),
            Box::new(move |l| sink.lock().expect("lock").push(l.clone())),
        )
        .with_suffix_source(|| 100_u64);
        (ctl, changes)
    }

    fn two_widgets() -> DashboardLayout {
        let mut locked = widget("locked", WidgetType::DriverStatus, WidgetWidth::Medium);
        locked.is_locked = true;
        DashboardLayout::new(vec![
            widget("stat-gross", WidgetType::StatCard, WidgetWidth::Small),
            locked,
        ])
    }

    #[test]
    fn mutations_require_edit_mode() {
        let (mut ctl, changes) = controller(two_widgets());
        assert_eq!(ctl.toggle_visibility("stat-gross"), Err(EditError::NotEditing));
        assert_eq!(ctl.toggle_lock("stat-gross"), Err(EditError::NotEditing));
        assert_eq!(ctl.remove("stat-gross"), Err(EditError::NotEditing));
        assert_eq!(ctl.add("stat-jobs"), Err(EditError::NotEditing));
        assert!(changes.lock().expect("lock").is_empty());
        assert_eq!(ctl.layout(), &two_widgets());
    }

    #[test]
    fn every_accepted_mutation_fires_callback() {
        let (mut ctl, changes) = controller(two_widgets());
        ctl.customize();
        ctl.toggle_visibility("stat-gross").expect("editing");
        ctl.toggle_lock("stat-gross").expect("editing");
        ctl.toggle_lock("stat-gross").expect("editing");
        ctl.remove("stat-gross").expect("editing");
        let changes = changes.lock().expect("lock");
        assert_eq!(changes.len(), 4);
        assert_eq!(changes.last(), Some(ctl.layout()));
        assert!(!ctl.layout().contains("stat-gross"));
    }

    #[test]
    fn absent_ids_still_report_unchanged_layout() {
        let (mut ctl, changes) = controller(two_widgets());
        ctl.customize();
        ctl.remove("missing").expect("no-op");
        assert_eq!(ctl.layout(), &two_widgets());
        assert_eq!(changes.lock().expect("lock").as_slice(), &[two_widgets()]);
    }

    #[test]
    fn locked_widget_cannot_be_removed() {
        let (mut ctl, _) = controller(two_widgets());
        ctl.customize();
        assert_eq!(
            ctl.remove("locked"),
            Err(EditError::Locked {
                id: "locked".into()
            })
        );
        ctl.toggle_lock("locked").expect("editing");
        ctl.remove("locked").expect("unlocked now");
        assert!(!ctl.layout().contains("locked"));
    }

    #[test]
    fn add_uses_catalog_and_returns_new_id() {
        let (mut ctl, _) = controller(DashboardLayout::default());
        ctl.customize();
        let id = ctl.add("stat-gross").expect("known entry");
        assert_eq!(id, "stat-gross-100");
        assert_eq!(ctl.layout().len(), 1);
        assert_eq!(
            ctl.add("nope"),
            Err(EditError::UnknownCatalogEntry { id: "nope".into() })
        );
    }

    #[test]
    fn available_tracks_layout() {
        let (mut ctl, _) = controller(two_widgets());
        assert!(!ctl.available().iter().any(|e| e.id == "stat-gross"));
        ctl.customize();
        ctl.remove("stat-gross").expect("editing");
        assert!(ctl.available().iter().any(|e| e.id == "stat-gross"));
    }

    #[test]
    fn renderable_depends_on_mode() {
        let (mut ctl, _) = controller(two_widgets());
        ctl.customize();
        ctl.toggle_visibility("stat-gross").expect("editing");
        assert_eq!(ctl.renderable().count(), 2);
        ctl.done_editing();
        let ids: Vec<&str> = ctl.renderable().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["locked"]);
    }

    #[test]
    fn set_edit_mode_mirrors_bool() {
        let (mut ctl, _) = controller(two_widgets());
        ctl.set_edit_mode(true);
        assert!(ctl.mode().is_editing());
        ctl.set_edit_mode(false);
        assert_eq!(ctl.mode(), EditMode::Viewing);
    }

    #[test]
    fn replace_layout_commits() {
        let (mut ctl, changes) = controller(two_widgets());
        ctl.customize();
        ctl.replace_layout(DashboardLayout::default()).expect("editing");
        assert!(ctl.layout().is_empty());
        assert_eq!(changes.lock().expect("lock").len(), 1);
    }
}
