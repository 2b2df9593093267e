//! Headline number tiles.
//!
//! One widget type covers several metrics; the metric is picked from the
//! widget's catalog id (`stat-gross`, `stat-jobs`, ...), so copies added at
//! runtime show the same figure as the catalog entry they came from.

use super::{WidgetContext, WidgetRenderer};
use crate::fleet::metrics::{
    commission_pence, drivers_on_shift, format_pence, gross_fares_pence, jobs_on,
};
use crate::layout::Widget;
use chrono::Duration;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// Renderer for `stat-card` widgets.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatCardRenderer;

/// A computed headline value with a comparison line.
struct Stat {
    value: String,
    detail: String,
}

fn compute(catalog_id: &str, ctx: &WidgetContext<'_>) -> Option<Stat> {
    let today = ctx.now.date();
    let yesterday = today - Duration::days(1);
    let fleet = ctx.fleet;
    let stat = match catalog_id {
        "stat-gross" => Stat {
            value: format_pence(gross_fares_pence(fleet, today)),
            detail: format!(
                "{} yesterday",
                format_pence(gross_fares_pence(fleet, yesterday))
            ),
        },
        "stat-jobs" => Stat {
            value: jobs_on(fleet, today).to_string(),
            detail: format!("{} yesterday", jobs_on(fleet, yesterday)),
        },
        "stat-drivers" => Stat {
            value: drivers_on_shift(fleet).to_string(),
            detail: format!("of {} drivers", fleet.drivers().len()),
        },
        "stat-commission" => Stat {
            value: format_pence(commission_pence(fleet, today)),
            detail: format!("at {:.1}%", f64::from(fleet.commission_bps()) / 100.0),
        },
        _ => return None,
    };
    Some(stat)
}

impl WidgetRenderer for StatCardRenderer {
    fn render(&self, widget: &Widget, context: &WidgetContext<'_>) -> Text<'static> {
        match compute(widget.catalog_id(), context) {
            Some(stat) => Text::from(vec![
                Line::from(Span::styled(
                    stat.value,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(stat.detail, Style::default().fg(Color::DarkGray))),
            ]),
            None => Text::from(vec![
                Line::from("—"),
                Line::from(Span::styled(
                    format!("no metric for '{}'", widget.catalog_id()),
                    Style::default().fg(Color::DarkGray),
                )),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::sample::sample_at;
    use crate::layout::WidgetType;
    use crate::widgets::tests::{make_widget, now, text_of};

    fn render(id: &str) -> String {
        let fleet = sample_at(now());
        let ctx = WidgetContext::new(&fleet, now());
        text_of(&StatCardRenderer.render(&make_widget(id, WidgetType::StatCard), &ctx))
    }

    #[test]
    fn gross_shows_pounds() {
        let body = render("stat-gross");
        assert!(body.starts_with('£'), "got: {body}");
        assert!(body.contains("yesterday"));
    }

    #[test]
    fn drivers_shows_on_shift_of_total() {
        // Sample data: 6 of 8 drivers logged in.
        assert_eq!(render("stat-drivers"), "6\nof 8 drivers");
    }

    #[test]
    fn commission_shows_rate() {
        assert!(render("stat-commission").contains("at 15.0%"));
    }

    #[test]
    fn suffixed_copy_shows_same_metric() {
        assert_eq!(render("stat-jobs"), render("stat-jobs-1700000000000"));
    }

    #[test]
    fn unknown_metric_shows_dash() {
        let body = render("stat-mystery");
        assert!(body.starts_with('—'));
        assert!(body.contains("stat-mystery"));
    }
}
