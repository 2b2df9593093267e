//! Bookings per day as horizontal bars.

use super::{bar, WidgetContext, WidgetRenderer};
use crate::fleet::metrics::bookings_per_day;
use crate::layout::Widget;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

/// Days shown, ending today.
const TREND_DAYS: u32 = 7;
/// Width of the longest bar.
const BAR_WIDTH: usize = 20;

/// Renderer for `bookings-trend` widgets.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingsTrendRenderer;

impl WidgetRenderer for BookingsTrendRenderer {
    fn render(&self, _widget: &Widget, context: &WidgetContext<'_>) -> Text<'static> {
        let series = bookings_per_day(context.fleet, context.now.date(), TREND_DAYS);
        let peak = series.iter().map(|(_, n)| *n).max().unwrap_or(0);
        let lines: Vec<Line<'static>> = series
            .into_iter()
            .map(|(day, count)| {
                let filled = if peak == 0 {
                    0
                } else {
                    (count * BAR_WIDTH).div_ceil(peak)
                };
                Line::from(vec![
                    Span::styled(
                        format!("{} ", day.format("%a")),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(bar(filled, BAR_WIDTH), Style::default().fg(Color::Cyan)),
                    Span::raw(format!(" {count:>3}")),
                ])
            })
            .collect();
        Text::from(lines)
    }
}
