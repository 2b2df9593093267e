//! Top-level rendering for the TUI: header, dashboard grid, footer and
//! any open dialog.

use crate::dashboard::{render_dashboard, DashboardView};
use crate::tui::app::{App, Dialog};
use crate::widgets::WidgetContext;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Header text displayed at the top of the dashboard.
const HEADER_TEXT: &str = "Fleet Dashboard";

/// Key hints while viewing.
const FOOTER_VIEWING: &str = "[j/k] Select  [e] Customize  [/] Ask  [PgUp/PgDn] Scroll  [q] Quit";

/// Key hints while editing.
const FOOTER_EDITING: &str =
    "[v] Show/hide  [l] Lock  [d] Remove  [a] Add widget  [e/Esc] Done  [q] Quit";

/// Version string shown in the header (right-aligned).
const VERSION_TEXT: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Renders the whole screen and records the grid report on `app`.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(1),    // grid
            Constraint::Length(1), // footer
        ])
        .split(area);

    frame.render_widget(Paragraph::new(header_line(app, chunks[0].width)), chunks[0]);

    let now = app.now();
    let selected = app.selected_id();
    let context = WidgetContext::new(app.fleet(), now);
    let view = DashboardView {
        layout: app.controller.layout(),
        registry: &app.registry,
        context: &context,
        mode: app.mode(),
        selected: selected.as_deref(),
        columns: app.settings.columns,
        row_height: app.settings.row_height,
        scroll_rows: app.scroll_rows,
    };
    let report = render_dashboard(frame, chunks[1], &view);
    if !report.clipped.is_empty() {
        tracing::trace!(clipped = ?report.clipped, "widgets outside viewport");
    }
    app.last_report = report;

    frame.render_widget(Paragraph::new(footer_line(app)), chunks[2]);

    match &app.dialog {
        Some(Dialog::ConfirmRemove { title, .. }) => render_confirm_remove(frame, area, title),
        Some(Dialog::AddWidget { cursor }) => render_add_picker(frame, area, app, *cursor),
        Some(Dialog::Palette { input, response }) => {
            render_palette(frame, area, input, response.as_ref())
        }
        None => {}
    }
}

fn header_line(app: &App, width: u16) -> Line<'static> {
    let (badge, badge_style) = if app.mode().is_editing() {
        (
            " EDITING ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (" VIEWING ", Style::default().fg(Color::DarkGray))
    };
    let date = app.now().format("%a %d %b %H:%M").to_string();
    let right = format!("{date}  {VERSION_TEXT}");
    let used = HEADER_TEXT.len() + 1 + badge.len() + right.len();
    let padding = (width as usize).saturating_sub(used);

    Line::from(vec![
        Span::styled(HEADER_TEXT, Style::default().fg(Color::Cyan)),
        Span::raw(" "),
        Span::styled(badge, badge_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(right, Style::default().fg(Color::DarkGray)),
    ])
}

fn footer_line(app: &App) -> Line<'static> {
    if let Some((message, _)) = &app.status_message {
        return Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }
    let hints = if app.mode().is_editing() {
        FOOTER_EDITING
    } else {
        FOOTER_VIEWING
    };
    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];
    if !app.last_report.clipped.is_empty() {
        spans.push(Span::styled(
            format!("  +{} below", app.last_report.clipped.len()),
            Style::default().fg(Color::Cyan),
        ));
    }
    Line::from(spans)
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn dialog_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(format!(" {title} "))
}

fn render_confirm_remove(frame: &mut Frame, area: Rect, title: &str) {
    let rect = centered_rect(area, 48, 5);
    let body = vec![
        Line::from(format!("Remove '{title}' from the dashboard?")),
        Line::from(Span::styled(
            "[y] Remove  [n] Cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(body)
            .wrap(Wrap { trim: true })
            .block(dialog_block("Confirm")),
        rect,
    );
}

fn render_add_picker(frame: &mut Frame, area: Rect, app: &App, cursor: usize) {
    let available = app.available();
    let height = (available.len() as u16).saturating_add(3).min(area.height);
    let rect = centered_rect(area, 56, height);
    let items: Vec<ListItem> = available
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let marker = if i == cursor { "> " } else { "  " };
            let style = if i == cursor {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker}{}", entry.title), style),
                Span::styled(
                    format!("  {} / {}", entry.widget_type, entry.id),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();
    frame.render_widget(Clear, rect);
    frame.render_widget(
        List::new(items).block(dialog_block("Add widget  [Enter] Add  [Esc] Close")),
        rect,
    );
}

fn render_palette(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    response: Option<&crate::palette::PaletteResponse>,
) {
    let mut lines = vec![Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::raw(input.to_string()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ])];
    match response {
        Some(response) => {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                response.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.extend(response.lines.iter().map(|l| Line::raw(l.clone())));
        }
        None => lines.push(Line::from(Span::styled(
            "Ask about drivers, bookings, revenue or utilization",
            Style::default().fg(Color::DarkGray),
        ))),
    }
    let height = (lines.len() as u16).saturating_add(2);
    let rect = centered_rect(area, 64, height);
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(dialog_block("Ask  [Enter] Submit  [Esc] Close")),
        rect,
    );
}
