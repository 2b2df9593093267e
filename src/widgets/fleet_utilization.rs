//! Share of active vehicles currently on a job.

use super::{bar, WidgetContext, WidgetRenderer};
use crate::fleet::metrics::fleet_utilization;
use crate::fleet::VehicleStatus;
use crate::layout::Widget;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

const GAUGE_WIDTH: usize = 24;

/// Renderer for `fleet-utilization` widgets.
#[derive(Debug, Clone, Copy, Default)]
pub struct FleetUtilizationRenderer;

/// Gauge color by load: green under half, yellow under 85%, red above.
fn gauge_color(ratio: f64) -> Color {
    if ratio < 0.5 {
        Color::Green
    } else if ratio < 0.85 {
        Color::Yellow
    } else {
        Color::Red
    }
}

impl WidgetRenderer for FleetUtilizationRenderer {
    fn render(&self, _widget: &Widget, context: &WidgetContext<'_>) -> Text<'static> {
        let Some(ratio) = fleet_utilization(context.fleet) else {
            return Text::from(Span::styled(
                "No active vehicles",
                Style::default().fg(Color::DarkGray),
            ));
        };
        let vehicles = context.fleet.vehicles();
        let active = vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Active)
            .count();
        let off_road = vehicles.len() - active;
        let filled = (ratio * GAUGE_WIDTH as f64).round() as usize;

        Text::from(vec![
            Line::from(vec![
                Span::styled(
                    format!("{:>3.0}% ", ratio * 100.0),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    bar(filled, GAUGE_WIDTH),
                    Style::default().fg(gauge_color(ratio)),
                ),
            ]),
            Line::from(Span::styled(
                format!("{active} active, {off_road} off the road"),
                Style::default().fg(Color::DarkGray),
            )),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::sample::sample_at;
    use crate::fleet::FleetSnapshot;
    use crate::layout::WidgetType;
    use crate::widgets::tests::{make_widget, now, text_of};

    #[test]
    fn sample_fleet_gauge() {
        let fleet = sample_at(now());
        let ctx = WidgetContext::new(&fleet, now());
        let body = text_of(
            &FleetUtilizationRenderer.render(&make_widget("u", WidgetType::FleetUtilization), &ctx),
        );
        // 3 drivers on a job across 6 active vehicles.
        assert!(body.starts_with(" 50% "), "got: {body}");
        assert!(body.contains("6 active, 2 off the road"));
    }

    #[test]
    fn no_vehicles_message() {
        let fleet = FleetSnapshot::default();
        let ctx = WidgetContext::new(&fleet, now());
        let body = text_of(
            &FleetUtilizationRenderer.render(&make_widget("u", WidgetType::FleetUtilization), &ctx),
        );
        assert_eq!(body, "No active vehicles");
    }

    #[test]
    fn gauge_colors() {
        assert_eq!(gauge_color(0.1), Color::Green);
        assert_eq!(gauge_color(0.6), Color::Yellow);
        assert_eq!(gauge_color(0.9), Color::Red);
    }
}
