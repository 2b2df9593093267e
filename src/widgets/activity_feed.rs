//! Most recent entries of the activity log.

use super::{WidgetContext, WidgetRenderer};
use crate::layout::Widget;
use chrono::NaiveDateTime;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

/// Entries shown per tile.
const MAX_ENTRIES: usize = 6;

/// Renderer for `activity-feed` widgets.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityFeedRenderer;

/// Compact "time ago" label: `now`, `5m`, `3h`, `2d`.
pub fn format_ago(at: NaiveDateTime, now: NaiveDateTime) -> String {
    let minutes = (now - at).num_minutes();
    match minutes {
        m if m < 1 => "now".to_string(),
        m if m < 60 => format!("{m}m"),
        m if m < 60 * 24 => format!("{}h", m / 60),
        m => format!("{}d", m / (60 * 24)),
    }
}

impl WidgetRenderer for ActivityFeedRenderer {
    fn render(&self, _widget: &Widget, context: &WidgetContext<'_>) -> Text<'static> {
        let events = context.fleet.activity();
        if events.is_empty() {
            return Text::from(Span::styled(
                "No recent activity",
                Style::default().fg(Color::DarkGray),
            ));
        }
        let lines: Vec<Line<'static>> = events
            .iter()
            .take(MAX_ENTRIES)
            .map(|event| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>4} ", format_ago(event.at, context.now)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(event.message.clone()),
                ])
            })
            .collect();
        Text::from(lines)
    }
}
