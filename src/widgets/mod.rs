//! Widget renderers for the dashboard grid.
//!
//! Each widget type is drawn by a [`WidgetRenderer`] registered in a
//! [`WidgetRegistry`]. Renderers receive the widget's own fields plus a
//! [`WidgetContext`] carrying the injected fleet data, and return styled
//! ratatui [`Text`] that the dashboard places inside the tile.
//!
//! Types without a registered renderer (including type strings outside the
//! known set) are drawn by a placeholder, so one unknown tile never takes
//! the rest of the dashboard down.
//!
//! # Example
//!
//! ```
//! use fleet_dashboard::fleet::FleetSnapshot;
//! use fleet_dashboard::layout::{WidgetCatalog, WidgetType};
//! use fleet_dashboard::widgets::{WidgetContext, WidgetRegistry};
//!
//! let registry = WidgetRegistry::new();
//! assert!(registry.is_registered(&WidgetType::StatCard));
//!
//! let fleet = FleetSnapshot::default();
//! let ctx = WidgetContext::new(&fleet, chrono::Local::now().naive_local());
//! let widget = WidgetCatalog::builtin().get("stat-gross").unwrap().to_widget();
//! let rendered = registry.render(&widget, &ctx);
//! assert!(!rendered.placeholder);
//! ```

pub mod activity_feed;
pub mod bookings_trend;
pub mod context;
pub mod driver_status;
pub mod fleet_utilization;
pub mod payment_breakdown;
pub mod stat_card;

pub use context::WidgetContext;

use crate::layout::{Widget, WidgetType};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use std::collections::HashMap;

/// Draws the content of one widget type.
///
/// Renderers must be thread-safe (`Send + Sync`) and must not assume they
/// are called more than once per render pass.
pub trait WidgetRenderer: Send + Sync {
    /// Produces the tile body for `widget`.
    fn render(&self, widget: &Widget, context: &WidgetContext<'_>) -> Text<'static>;
}

/// Adapter turning a closure into a [`WidgetRenderer`].
struct FnRenderer<F>(F);

impl<F> WidgetRenderer for FnRenderer<F>
where
    F: Fn(&Widget, &WidgetContext<'_>) -> Text<'static> + Send + Sync,
{
    fn render(&self, widget: &Widget, context: &WidgetContext<'_>) -> Text<'static> {
        (self.0)(widget, context)
    }
}

/// Result of rendering one widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// Tile body.
    pub text: Text<'static>,
    /// `true` when the placeholder stood in for a missing renderer.
    pub placeholder: bool,
}

/// Registration table from widget type to renderer.
pub struct WidgetRegistry {
    renderers: HashMap<WidgetType, Box<dyn WidgetRenderer>>,
}

impl WidgetRegistry {
    /// Creates a registry with the built-in renderers:
    /// - `stat-card`
    /// - `bookings-trend`
    /// - `driver-status`
    /// - `activity-feed`
    /// - `fleet-utilization`
    /// - `payment-breakdown`
    pub fn new() -> Self {
        let mut reg = Self::empty();
        reg.register(WidgetType::StatCard, stat_card::StatCardRenderer);
        reg.register(WidgetType::BookingsTrend, bookings_trend::BookingsTrendRenderer);
        reg.register(WidgetType::DriverStatus, driver_status::DriverStatusRenderer);
        reg.register(WidgetType::ActivityFeed, activity_feed::ActivityFeedRenderer);
        reg.register(
            WidgetType::FleetUtilization,
            fleet_utilization::FleetUtilizationRenderer,
        );
        reg.register(
            WidgetType::PaymentBreakdown,
            payment_breakdown::PaymentBreakdownRenderer,
        );
        reg
    }

    /// Creates a registry with no renderers; every widget gets the placeholder.
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Registers a renderer for `widget_type`, replacing any previous one.
    pub fn register(&mut self, widget_type: WidgetType, renderer: impl WidgetRenderer + 'static) {
        self.renderers.insert(widget_type, Box::new(renderer));
    }

    /// Registers a closure as the renderer for `widget_type`.
    pub fn register_fn<F>(&mut self, widget_type: WidgetType, render: F)
    where
        F: Fn(&Widget, &WidgetContext<'_>) -> Text<'static> + Send + Sync + 'static,
    {
        self.register(widget_type, FnRenderer(render));
    }

    /// Returns `true` if `widget_type` has a renderer.
    pub fn is_registered(&self, widget_type: &WidgetType) -> bool {
        self.renderers.contains_key(widget_type)
    }

    /// Registered widget types. The order is not guaranteed.
    pub fn registered_types(&self) -> Vec<&WidgetType> {
        self.renderers.keys().collect()
    }

    /// Renders `widget` with its registered renderer, or the placeholder.
    pub fn render(&self, widget: &Widget, context: &WidgetContext<'_>) -> Rendered {
        match self.renderers.get(&widget.widget_type) {
            Some(renderer) => Rendered {
                text: renderer.render(widget, context),
                placeholder: false,
            },
            None => {
                tracing::debug!(
                    widget_id = %widget.id,
                    widget_type = %widget.widget_type,
                    "no renderer registered, drawing placeholder"
                );
                Rendered {
                    text: placeholder(widget),
                    placeholder: true,
                }
            }
        }
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WidgetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetRegistry")
            .field("types", &self.registered_types())
            .finish()
    }
}

/// Neutral body for widgets without a renderer.
pub fn placeholder(widget: &Widget) -> Text<'static> {
    let muted = Style::default().fg(Color::DarkGray);
    Text::from(vec![
        Line::from(Span::styled("Not yet implemented", muted.add_modifier(Modifier::ITALIC))),
        Line::from(Span::styled(format!("type: {}", widget.widget_type), muted)),
    ])
}

/// Dim label followed by a bold value, the common "stat" line.
pub(crate) fn label_value(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<10}"), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
    ])
}

/// A horizontal bar of `filled` blocks padded with light shade to `width`.
pub(crate) fn bar(filled: usize, width: usize) -> String {
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
