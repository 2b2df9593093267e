//! Pure layout mutations and render eligibility.
//!
//! Every operation takes the current layout by reference and returns a new
//! layout value; the input is never modified. Operations on an id that is
//! not placed return an equal copy of the input.

use super::catalog::CatalogEntry;
use super::edit_mode::EditMode;
use super::model::{DashboardLayout, Widget};
use chrono::Utc;

/// Source of the numeric token appended to catalog ids on add.
pub trait IdSuffixSource {
    /// Returns the next candidate token.
    fn next_suffix(&self) -> u64;
}

/// Milliseconds since the Unix epoch.
///
/// Adds are user-paced; [`add`] still bumps the token when two adds land
/// in the same millisecond.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampSuffix;

impl IdSuffixSource for TimestampSuffix {
    fn next_suffix(&self) -> u64 {
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
    }
}

impl<F: Fn() -> u64> IdSuffixSource for F {
    fn next_suffix(&self) -> u64 {
        self()
    }
}

/// Applies `f` to the widget with `widget_id`, leaving the rest untouched.
fn map_widget(
    layout: &DashboardLayout,
    widget_id: &str,
    f: impl Fn(&mut Widget),
) -> DashboardLayout {
    let widgets = layout
        .widgets
        .iter()
        .map(|w| {
            let mut w = w.clone();
            if w.id == widget_id {
                f(&mut w);
            }
            w
        })
        .collect();
    DashboardLayout::new(widgets)
}

/// Flips `is_visible` on the matching widget.
pub fn toggle_visibility(layout: &DashboardLayout, widget_id: &str) -> DashboardLayout {
    map_widget(layout, widget_id, |w| w.is_visible = !w.is_visible)
}

/// Flips `is_locked` on the matching widget.
pub fn toggle_lock(layout: &DashboardLayout, widget_id: &str) -> DashboardLayout {
    map_widget(layout, widget_id, |w| w.is_locked = !w.is_locked)
}

/// Drops the matching widget.
pub fn remove(layout: &DashboardLayout, widget_id: &str) -> DashboardLayout {
    DashboardLayout::new(
        layout
            .widgets
            .iter()
            .filter(|w| w.id != widget_id)
            .cloned()
            .collect(),
    )
}

/// Appends a visible widget built from `entry` with a fresh id.
///
/// The id is `<catalog id>-<token>`; the token starts at the value from
/// `suffix` and is incremented until the id is not placed in `layout`.
pub fn add(
    layout: &DashboardLayout,
    entry: &CatalogEntry,
    suffix: &dyn IdSuffixSource,
) -> DashboardLayout {
    let mut token = suffix.next_suffix();
    let id = loop {
        let candidate = format!("{}-{}", entry.id, token);
        if !layout.contains(&candidate) {
            break candidate;
        }
        token = token.wrapping_add(1);
    };

    let mut widget = entry.to_widget_with_id(id);
    widget.is_visible = true;

    let mut widgets = layout.widgets.clone();
    widgets.push(widget);
    DashboardLayout::new(widgets)
}

/// Whether the widget is drawn at all in the given mode.
pub fn is_renderable(widget: &Widget, mode: EditMode) -> bool {
    widget.is_visible || mode.is_editing()
}
