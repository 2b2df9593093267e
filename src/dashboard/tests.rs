use super::*;
use crate::fleet::FleetSnapshot;
use crate::layout::{WidgetHeight, WidgetType, WidgetWidth};
use crate::tui::test_utils::{find_row_with_text, render_to_buffer, row_text};
use ratatui::text::Text;
use std::sync::{Arc, Mutex};

fn tile(id: &str, widget_type: WidgetType, width: WidgetWidth) -> Widget {
    Widget {
        id: id.to_string(),
        widget_type,
        title: format!("Tile {id}"),
        is_visible: true,
        is_locked: false,
        width,
        height: WidgetHeight::Small,
    }
}

fn now() -> chrono::NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2026, 3, 14)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid date")
}

/// Registry whose renderers record the ids they were asked to draw.
fn recording_registry(types: &[WidgetType]) -> (WidgetRegistry, Arc<Mutex<Vec<String>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut registry = WidgetRegistry::empty();
    for ty in types {
        let calls = Arc::clone(&calls);
        registry.register_fn(ty.clone(), move |w, _ctx| {
            calls.lock().expect("lock").push(w.id.clone());
            Text::raw(format!("body of {}", w.id))
        });
    }
    (registry, calls)
}

fn draw(
    layout: &DashboardLayout,
    registry: &WidgetRegistry,
    mode: EditMode,
    width: u16,
    height: u16,
) -> (ratatui::buffer::Buffer, RenderReport) {
    let fleet = FleetSnapshot::default();
    let context = WidgetContext::new(&fleet, now());
    let view = DashboardView {
        layout,
        registry,
        context: &context,
        mode,
        selected: None,
        columns: DEFAULT_COLUMNS,
        row_height: DEFAULT_ROW_HEIGHT,
        scroll_rows: 0,
    };
    let mut report = RenderReport::default();
    let buffer = render_to_buffer(width, height, |frame| {
        let area = frame.area();
        report = render_dashboard(frame, area, &view);
    });
    (buffer, report)
}

#[test]
fn every_renderable_widget_drawn_once_in_layout_order() {
    let layout = DashboardLayout::new(vec![
        tile("c", WidgetType::StatCard, WidgetWidth::Small),
        tile("a", WidgetType::DriverStatus, WidgetWidth::Large),
        tile("b", WidgetType::StatCard, WidgetWidth::Small),
    ]);
    let (registry, calls) = recording_registry(&[WidgetType::StatCard, WidgetType::DriverStatus]);
    let (buffer, report) = draw(&layout, &registry, EditMode::Viewing, 120, 40);

    assert_eq!(*calls.lock().expect("lock"), vec!["c", "a", "b"]);
    assert_eq!(report.rendered, vec!["c", "a", "b"]);
    assert!(report.placeholders.is_empty());
    for id in ["c", "a", "b"] {
        assert!(
            find_row_with_text(&buffer, &format!("body of {id}")).is_some(),
            "tile {id} should be drawn"
        );
    }
}

#[test]
fn hidden_widget_skipped_outside_edit_mode() {
    let mut hidden = tile("x", WidgetType::StatCard, WidgetWidth::Small);
    hidden.is_visible = false;
    let layout = DashboardLayout::new(vec![
        hidden,
        tile("y", WidgetType::StatCard, WidgetWidth::Small),
    ]);
    let (registry, calls) = recording_registry(&[WidgetType::StatCard]);
    let (buffer, report) = draw(&layout, &registry, EditMode::Viewing, 120, 20);

    assert_eq!(*calls.lock().expect("lock"), vec!["y"]);
    assert_eq!(report.rendered, vec!["y"]);
    assert!(find_row_with_text(&buffer, "Tile x").is_none());
}

#[test]
fn hidden_widget_drawn_dimmed_in_edit_mode() {
    let mut hidden = tile("x", WidgetType::StatCard, WidgetWidth::Small);
    hidden.is_visible = false;
    let layout = DashboardLayout::new(vec![hidden]);
    let (registry, _) = recording_registry(&[WidgetType::StatCard]);
    let (buffer, report) = draw(&layout, &registry, EditMode::Editing, 120, 20);

    assert_eq!(report.rendered, vec!["x"]);
    let title_row = find_row_with_text(&buffer, "Tile x").expect("tile drawn");
    assert!(row_text(&buffer, title_row).contains("(hidden)"));
    assert!(row_text(&buffer, title_row).contains('┄'), "dashed frame");
    let body_row = find_row_with_text(&buffer, "body of x").expect("body drawn");
    let col = row_text(&buffer, body_row)
        .chars()
        .position(|c| c == 'b')
        .expect("body text") as u16;
    let cell = buffer.cell((col, body_row)).expect("cell exists");
    assert!(cell.modifier.contains(Modifier::DIM));
}

#[test]
fn unknown_type_uses_placeholder_without_affecting_others() {
    let layout = DashboardLayout::new(vec![
        tile("weird", WidgetType::Other("frobnicate".into()), WidgetWidth::Medium),
        tile("ok", WidgetType::StatCard, WidgetWidth::Small),
    ]);
    let (registry, calls) = recording_registry(&[WidgetType::StatCard]);
    let (buffer, report) = draw(&layout, &registry, EditMode::Viewing, 120, 20);

    assert_eq!(report.rendered, vec!["weird", "ok"]);
    assert_eq!(report.placeholders, vec!["weird"]);
    assert_eq!(*calls.lock().expect("lock"), vec!["ok"]);
    assert!(find_row_with_text(&buffer, "Not yet implemented").is_some());
    assert!(find_row_with_text(&buffer, "body of ok").is_some());
}

#[test]
fn locked_marker_only_in_edit_mode() {
    let mut locked = tile("l", WidgetType::StatCard, WidgetWidth::Small);
    locked.is_locked = true;
    let layout = DashboardLayout::new(vec![locked]);
    let (registry, _) = recording_registry(&[WidgetType::StatCard]);

    let (viewing, _) = draw(&layout, &registry, EditMode::Viewing, 120, 20);
    assert!(find_row_with_text(&viewing, "[locked]").is_none());
    let (editing, _) = draw(&layout, &registry, EditMode::Editing, 120, 20);
    assert!(find_row_with_text(&editing, "[locked]").is_some());
}

#[test]
fn tiles_below_viewport_are_reported_clipped() {
    let layout = DashboardLayout::new(
        (0..4)
            .map(|i| tile(&format!("f{i}"), WidgetType::StatCard, WidgetWidth::Full))
            .collect(),
    );
    let (registry, calls) = recording_registry(&[WidgetType::StatCard]);
    // Two grid rows of 7 fit in 14 lines.
    let (_, report) = draw(&layout, &registry, EditMode::Viewing, 120, 14);

    assert_eq!(report.rendered, vec!["f0", "f1"]);
    assert_eq!(report.clipped, vec!["f2", "f3"]);
    assert_eq!(report.total_rows, 4);
    assert_eq!(calls.lock().expect("lock").len(), 2, "clipped tiles are not rendered");
}

#[test]
fn narrow_terminal_collapses_to_one_column() {
    let layout = DashboardLayout::new(vec![
        tile("a", WidgetType::StatCard, WidgetWidth::Large),
        tile("b", WidgetType::StatCard, WidgetWidth::Small),
    ]);
    let (registry, _) = recording_registry(&[WidgetType::StatCard]);
    let (_, report) = draw(&layout, &registry, EditMode::Viewing, 50, 40);
    assert_eq!(report.columns, 1);
    assert_eq!(report.total_rows, 2);
}

#[test]
fn renderable_widgets_follows_mode() {
    let mut hidden = tile("h", WidgetType::StatCard, WidgetWidth::Small);
    hidden.is_visible = false;
    let layout = DashboardLayout::new(vec![
        tile("v", WidgetType::StatCard, WidgetWidth::Small),
        hidden,
    ]);
    assert_eq!(renderable_widgets(&layout, EditMode::Viewing).len(), 1);
    assert_eq!(renderable_widgets(&layout, EditMode::Editing).len(), 2);
}
