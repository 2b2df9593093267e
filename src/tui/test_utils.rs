//! Shared test utilities for TUI testing with ratatui TestBackend.
//!
//! Provides helpers for creating test terminals, extracting buffer content,
//! asserting colors, and building an [`App`] over the sample fleet.

#![cfg(test)]

use crate::fleet::sample::sample_at;
use crate::layout::{DashboardController, WidgetCatalog};
use crate::tui::app::{App, ViewSettings};
use crate::widgets::WidgetRegistry;
use chrono::{NaiveDate, NaiveDateTime};
use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Frame, Terminal};

/// Creates a Terminal with TestBackend at the specified dimensions.
pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("failed to create test terminal")
}

/// Runs `draw` against a fresh test terminal and returns the resulting buffer.
pub fn render_to_buffer<F>(width: u16, height: u16, draw: F) -> Buffer
where
    F: FnOnce(&mut Frame),
{
    let mut terminal = test_terminal(width, height);
    terminal.draw(draw).expect("draw failed");
    terminal.backend().buffer().clone()
}

/// Renders the full TUI screen for `app`.
pub fn render_app_to_buffer(app: &mut App, width: u16, height: u16) -> Buffer {
    render_to_buffer(width, height, |frame| crate::tui::ui::render(frame, app))
}

/// Extracts all text from a specific row in the buffer as a single String.
pub fn row_text(buffer: &Buffer, row: u16) -> String {
    let area = buffer.area();
    if row >= area.height {
        return String::new();
    }
    (0..area.width)
        .map(|col| {
            buffer
                .cell((col, row))
                .map(|cell| cell.symbol())
                .unwrap_or(" ")
        })
        .collect()
}

/// Checks if a specific row contains the given substring.
pub fn row_contains(buffer: &Buffer, row: u16, text: &str) -> bool {
    row_text(buffer, row).contains(text)
}

/// Finds the first row index that contains the given text, or None if not found.
pub fn find_row_with_text(buffer: &Buffer, text: &str) -> Option<u16> {
    (0..buffer.area().height).find(|&row| row_contains(buffer, row, text))
}

/// Asserts that the cell at (col, row) has the specified foreground color.
pub fn assert_fg_color(buffer: &Buffer, col: u16, row: u16, color: Color) {
    let cell = buffer
        .cell((col, row))
        .unwrap_or_else(|| panic!("cell at ({}, {}) does not exist", col, row));
    assert_eq!(
        cell.fg, color,
        "expected fg color {:?} at ({}, {}), got {:?}",
        color, col, row, cell.fg
    );
}

/// Checks that the first character of `text` in `row` has foreground `color`.
///
/// Columns are counted in cells, so box-drawing characters before `text`
/// do not shift the position.
pub fn assert_text_fg_in_row(buffer: &Buffer, row: u16, text: &str, color: Color) {
    let row_string = row_text(buffer, row);
    let byte = row_string
        .find(text)
        .unwrap_or_else(|| panic!("text '{}' not found in row {}: '{}'", text, row, row_string));
    let col = row_string[..byte].chars().count();
    assert_fg_color(buffer, col as u16, row, color);
}

/// Fixed clock used by TUI tests: Saturday 2026-03-14 18:30.
pub fn test_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 14)
        .and_then(|d| d.and_hms_opt(18, 30, 0))
        .expect("valid date")
}

/// An app showing the default layout over the sample fleet, with a
/// pinned clock and a change callback that discards layouts.
pub fn make_app() -> App {
    let catalog = WidgetCatalog::builtin();
    let layout = catalog.default_layout();
    let controller = DashboardController::new(layout, catalog, Box::new(|_| {}));
    App::new(
        controller,
        WidgetRegistry::new(),
        Box::new(sample_at(test_now())),
        ViewSettings::default(),
    )
    .with_fixed_now(test_now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_row_text_extracts_row_content() {
        let buffer = render_to_buffer(20, 5, |frame| {
            frame.render_widget(Paragraph::new("Hello World"), frame.area());
        });
        assert!(row_text(&buffer, 0).contains("Hello World"));
        assert_eq!(row_text(&buffer, 9), "");
    }

    #[test]
    fn test_find_row_with_text_returns_row_index() {
        let buffer = render_to_buffer(40, 10, |frame| {
            frame.render_widget(Paragraph::new("First Line\nTarget Row"), frame.area());
        });
        assert_eq!(find_row_with_text(&buffer, "Target Row"), Some(1));
        assert_eq!(find_row_with_text(&buffer, "Missing"), None);
    }

    #[test]
    fn test_text_fg_counts_cells_not_bytes() {
        use ratatui::style::Style;
        use ratatui::text::{Line, Span};
        let buffer = render_to_buffer(20, 1, |frame| {
            let line = Line::from(vec![
                Span::raw("││"),
                Span::styled("ok", Style::default().fg(Color::Green)),
            ]);
            frame.render_widget(Paragraph::new(line), frame.area());
        });
        assert_text_fg_in_row(&buffer, 0, "ok", Color::Green);
    }

    #[test]
    fn test_make_app_uses_default_layout() {
        let app = make_app();
        assert_eq!(app.controller.layout(), &WidgetCatalog::builtin().default_layout());
        assert_eq!(app.now(), test_now());
    }
}
