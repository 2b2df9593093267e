//! Completed fares split by payment method.

use super::{WidgetContext, WidgetRenderer};
use crate::fleet::metrics::{format_pence, payment_breakdown, percent_of};
use crate::layout::Widget;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

/// Renderer for `payment-breakdown` widgets.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentBreakdownRenderer;

impl WidgetRenderer for PaymentBreakdownRenderer {
    fn render(&self, _widget: &Widget, context: &WidgetContext<'_>) -> Text<'static> {
        let rows = payment_breakdown(context.fleet);
        let total = rows
            .iter()
            .fold(0u64, |sum, (_, pence)| sum.saturating_add(*pence));
        let lines: Vec<Line<'static>> = rows
            .into_iter()
            .map(|(method, pence)| {
                let share = percent_of(pence, total);
                Line::from(vec![
                    Span::styled(format!("{:<8}", method.label()), Style::default().fg(Color::Gray)),
                    Span::raw(format!("{:>12}", format_pence(pence))),
                    Span::styled(format!(" {share:>3}%"), Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect();
        Text::from(lines)
    }
}
