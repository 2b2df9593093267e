//! Dashboard compositing: places renderable widgets on a grid and draws
//! each one through the widget registry.
//!
//! Every renderable widget (visible, or any widget while editing) is drawn
//! exactly once per pass, in layout order. Hidden widgets in edit mode get
//! a dashed, dimmed frame; the selected widget gets a highlighted frame.

pub mod grid;

use crate::layout::{is_renderable, span_classes, DashboardLayout, EditMode, Widget};
use crate::widgets::{WidgetContext, WidgetRegistry};
use grid::{cell_rect, effective_columns, place, rows_used, TileSpan};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Terminal rows per grid row unless configured otherwise.
pub const DEFAULT_ROW_HEIGHT: u16 = 7;
/// Grid columns at full width unless configured otherwise.
pub const DEFAULT_COLUMNS: u16 = 4;

/// Frame drawn around hidden widgets while editing.
pub const DASHED: border::Set = border::Set {
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
    vertical_left: "┆",
    vertical_right: "┆",
    horizontal_top: "┄",
    horizontal_bottom: "┄",
};

/// Everything one render pass needs.
pub struct DashboardView<'a> {
    /// Layout to draw.
    pub layout: &'a DashboardLayout,
    /// Renderer lookup table.
    pub registry: &'a WidgetRegistry,
    /// Data passed through to renderers.
    pub context: &'a WidgetContext<'a>,
    /// Current edit mode.
    pub mode: EditMode,
    /// Id of the selected widget, highlighted when present.
    pub selected: Option<&'a str>,
    /// Grid columns at full width.
    pub columns: u16,
    /// Terminal rows per grid row.
    pub row_height: u16,
    /// Grid rows scrolled off the top.
    pub scroll_rows: u16,
}

/// What a render pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Ids of widgets drawn, in draw order.
    pub rendered: Vec<String>,
    /// Ids drawn with the placeholder body.
    pub placeholders: Vec<String>,
    /// Ids renderable but outside the viewport.
    pub clipped: Vec<String>,
    /// Grid rows the layout occupies.
    pub total_rows: u16,
    /// Column count used for this area.
    pub columns: u16,
}

/// Widgets drawn in `mode`, in layout order.
pub fn renderable_widgets(layout: &DashboardLayout, mode: EditMode) -> Vec<&Widget> {
    layout
        .widgets
        .iter()
        .filter(|w| is_renderable(w, mode))
        .collect()
}

/// Draws the dashboard grid into `area`.
pub fn render_dashboard(frame: &mut Frame, area: Rect, view: &DashboardView<'_>) -> RenderReport {
    let widgets = renderable_widgets(view.layout, view.mode);
    let columns = effective_columns(area.width, view.columns);
    let spans: Vec<TileSpan> = widgets
        .iter()
        .map(|w| {
            let span = span_classes(w);
            TileSpan {
                columns: span.columns.resolve(columns),
                rows: span.rows,
            }
        })
        .collect();
    let placements = place(&spans, columns);

    let mut report = RenderReport {
        total_rows: rows_used(&placements),
        columns,
        ..RenderReport::default()
    };

    for (widget, placement) in widgets.iter().zip(&placements) {
        let Some(rect) = cell_rect(placement, area, columns, view.row_height, view.scroll_rows)
        else {
            report.clipped.push(widget.id.clone());
            continue;
        };
        let rendered = view.registry.render(widget, view.context);
        let selected = view.selected == Some(widget.id.as_str());
        let block = tile_block(widget, view.mode, selected);

        let mut body = Paragraph::new(rendered.text).wrap(Wrap { trim: false });
        if !widget.is_visible {
            body = body.style(Style::default().add_modifier(Modifier::DIM));
        }
        frame.render_widget(body.block(block), rect);

        if rendered.placeholder {
            report.placeholders.push(widget.id.clone());
        }
        report.rendered.push(widget.id.clone());
    }
    report
}

/// Frame and title for one tile.
fn tile_block(widget: &Widget, mode: EditMode, selected: bool) -> Block<'static> {
    let mut title = vec![Span::styled(
        format!(" {} ", widget.title),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if mode.is_editing() {
        if widget.is_locked {
            title.push(Span::styled("[locked] ", Style::default().fg(Color::Magenta)));
        }
        if !widget.is_visible {
            title.push(Span::styled("(hidden) ", Style::default().fg(Color::DarkGray)));
        }
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title));
    if !widget.is_visible {
        block = block
            .border_set(DASHED)
            .border_style(Style::default().fg(Color::DarkGray));
    } else if mode.is_editing() {
        block = block.border_style(Style::default().fg(Color::Gray));
    }
    if selected {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }
    block
}

#[cfg(test)]
mod tests;
