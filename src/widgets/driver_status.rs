//! Driver counts per duty status.

use super::{WidgetContext, WidgetRenderer};
use crate::fleet::metrics::drivers_by_status;
use crate::fleet::DriverStatus;
use crate::layout::Widget;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

/// Renderer for `driver-status` widgets.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriverStatusRenderer;

/// Display color for a driver status.
pub fn status_color(status: DriverStatus) -> Color {
    match status {
        DriverStatus::Available => Color::Green,
        DriverStatus::OnJob => Color::Yellow,
        DriverStatus::OnBreak => Color::Blue,
        DriverStatus::Offline => Color::DarkGray,
    }
}

impl WidgetRenderer for DriverStatusRenderer {
    fn render(&self, _widget: &Widget, context: &WidgetContext<'_>) -> Text<'static> {
        let lines: Vec<Line<'static>> = drivers_by_status(context.fleet)
            .into_iter()
            .map(|(status, count)| {
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(status_color(status))),
                    Span::raw(format!("{:<10}", status.label())),
                    Span::raw(format!("{count:>3}")),
                ])
            })
            .collect();
        Text::from(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::sample::sample_at;
    use crate::layout::WidgetType;
    use crate::widgets::tests::{make_widget, now, text_of};

    #[test]
    fn lists_every_status_with_counts() {
        let fleet = sample_at(now());
        let ctx = WidgetContext::new(&fleet, now());
        let body = text_of(
            &DriverStatusRenderer.render(&make_widget("d", WidgetType::DriverStatus), &ctx),
        );
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "● Available   2");
        assert_eq!(lines[1], "● On job      3");
        assert_eq!(lines[3], "● Offline     2");
    }

    #[test]
    fn dot_uses_status_color() {
        let fleet = sample_at(now());
        let ctx = WidgetContext::new(&fleet, now());
        let text = DriverStatusRenderer.render(&make_widget("d", WidgetType::DriverStatus), &ctx);
        assert_eq!(text.lines[0].spans[0].style.fg, Some(Color::Green));
    }
}
