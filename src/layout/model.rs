//! Layout document types.
//!
//! A [`DashboardLayout`] is the persisted document: an ordered list of
//! [`Widget`] tiles. Field names serialize in camelCase so that a layout
//! written by the dashboard host reads the same as the document the web
//! front-end stored (`isVisible`, `isLocked`, `type`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of content a widget shows.
///
/// The known kinds form a closed set. A layout document may still carry a
/// type string the dashboard does not know; it is kept verbatim in
/// [`WidgetType::Other`] so the document round-trips and the tile renders
/// as a placeholder instead of failing the whole layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WidgetType {
    /// Single headline number (gross fares, jobs today, ...).
    StatCard,
    /// Bookings per day over the recent window.
    BookingsTrend,
    /// Driver counts per duty status.
    DriverStatus,
    /// Most recent operational events.
    ActivityFeed,
    /// Per-driver performance table.
    DriverMetrics,
    /// Share of bookings taken without a dispatcher.
    AutomationBreakdown,
    /// Call handling figures for office staff.
    CallStaffMetrics,
    /// Fares split by payment method.
    PaymentBreakdown,
    /// Operator commission split.
    CommissionBreakdown,
    /// Share of active vehicles currently on a job.
    FleetUtilization,
    /// Account customer dispatch totals.
    AccountDispatchSummary,
    /// Canned operational insights.
    AiInsights,
    /// A type string outside the known set.
    Other(String),
}

impl WidgetType {
    /// Every known widget type, in catalog order.
    pub const KNOWN: [WidgetType; 12] = [
        WidgetType::StatCard,
        WidgetType::BookingsTrend,
        WidgetType::DriverStatus,
        WidgetType::ActivityFeed,
        WidgetType::DriverMetrics,
        WidgetType::AutomationBreakdown,
        WidgetType::CallStaffMetrics,
        WidgetType::PaymentBreakdown,
        WidgetType::CommissionBreakdown,
        WidgetType::FleetUtilization,
        WidgetType::AccountDispatchSummary,
        WidgetType::AiInsights,
    ];

    /// Returns the kebab-case wire name of this type.
    pub fn as_str(&self) -> &str {
        match self {
            WidgetType::StatCard => "stat-card",
            WidgetType::BookingsTrend => "bookings-trend",
            WidgetType::DriverStatus => "driver-status",
            WidgetType::ActivityFeed => "activity-feed",
            WidgetType::DriverMetrics => "driver-metrics",
            WidgetType::AutomationBreakdown => "automation-breakdown",
            WidgetType::CallStaffMetrics => "call-staff-metrics",
            WidgetType::PaymentBreakdown => "payment-breakdown",
            WidgetType::CommissionBreakdown => "commission-breakdown",
            WidgetType::FleetUtilization => "fleet-utilization",
            WidgetType::AccountDispatchSummary => "account-dispatch-summary",
            WidgetType::AiInsights => "ai-insights",
            WidgetType::Other(name) => name,
        }
    }

    /// Returns `true` for types outside the known set.
    pub fn is_unknown(&self) -> bool {
        matches!(self, WidgetType::Other(_))
    }
}

impl From<String> for WidgetType {
    fn from(value: String) -> Self {
        WidgetType::KNOWN
            .iter()
            .find(|known| known.as_str() == value)
            .cloned()
            .unwrap_or(WidgetType::Other(value))
    }
}

impl From<WidgetType> for String {
    fn from(value: WidgetType) -> Self {
        match value {
            WidgetType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for WidgetType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(WidgetType::from(s.to_string()))
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal size tier of a widget.
///
/// The discriminants index the span table in [`crate::layout::span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetWidth {
    /// One column.
    Small = 0,
    /// One column (wider at the web breakpoint, same span here).
    Medium = 1,
    /// Two columns.
    Large = 2,
    /// Every column of the grid.
    Full = 3,
}

impl WidgetWidth {
    /// Kebab-case name, as stored in the layout document.
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetWidth::Small => "small",
            WidgetWidth::Medium => "medium",
            WidgetWidth::Large => "large",
            WidgetWidth::Full => "full",
        }
    }
}

/// Vertical size tier of a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetHeight {
    /// One grid row.
    #[default]
    Small = 0,
    /// Two grid rows.
    Large = 1,
}

impl WidgetHeight {
    /// Kebab-case name, as stored in the layout document.
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetHeight::Small => "small",
            WidgetHeight::Large => "large",
        }
    }
}

/// One placed dashboard tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    /// Identifier, unique within a layout.
    pub id: String,
    /// Content kind, resolved to a renderer at draw time.
    #[serde(rename = "type")]
    pub widget_type: WidgetType,
    /// Display label.
    pub title: String,
    /// Hidden widgets are skipped entirely outside edit mode.
    pub is_visible: bool,
    /// Advisory lock flag.
    #[serde(default)]
    pub is_locked: bool,
    /// Column span tier.
    pub width: WidgetWidth,
    /// Row span tier.
    #[serde(default)]
    pub height: WidgetHeight,
}

impl Widget {
    /// Returns the catalog id this widget was created from.
    ///
    /// Widgets added at runtime carry a `-<digits>` suffix after their
    /// catalog id (`stat-gross-1739212345678`); placed defaults use the
    /// catalog id directly. The suffix is stripped when present, which is
    /// why catalog ids themselves may not end in `-<digits>`.
    pub fn catalog_id(&self) -> &str {
        instance_base(&self.id).unwrap_or(&self.id)
    }
}

/// The part of `id` before a trailing `-<digits>` instance suffix, if any.
pub(crate) fn instance_base(id: &str) -> Option<&str> {
    match id.rsplit_once('-') {
        Some((base, suffix))
            if !base.is_empty()
                && !suffix.is_empty()
                && suffix.bytes().all(|b| b.is_ascii_digit()) =>
        {
            Some(base)
        }
        _ => None,
    }
}

/// The persisted layout document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardLayout {
    /// Widgets in display order.
    pub widgets: Vec<Widget>,
}

impl DashboardLayout {
    /// Creates a layout from widgets in display order.
    pub fn new(widgets: Vec<Widget>) -> Self {
        Self { widgets }
    }

    /// Returns the widget with the given id, if placed.
    pub fn get(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// Returns `true` if a widget with the given id is placed.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterates over widget ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.widgets.iter().map(|w| w.id.as_str())
    }

    /// Number of placed widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Returns `true` when no widget is placed.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn widget(id: &str, widget_type: WidgetType, width: WidgetWidth) -> Widget {
        Widget {
            id: id.to_string(),
            widget_type,
            title: id.to_uppercase(),
            is_visible: true,
            is_locked: false,
            width,
            height: WidgetHeight::Small,
        }
    }

    #[test]
    fn widget_type_parses_known_names() {
        for known in WidgetType::KNOWN.iter() {
            let parsed: WidgetType = known.as_str().parse().expect("infallible");
            assert_eq!(&parsed, known);
            assert!(!parsed.is_unknown());
        }
    }

    #[test]
    fn widget_type_keeps_unknown_name() {
        let parsed: WidgetType = "frobnicate".parse().expect("infallible");
        assert_eq!(parsed, WidgetType::Other("frobnicate".to_string()));
        assert!(parsed.is_unknown());
        assert_eq!(parsed.to_string(), "frobnicate");
    }

    #[test]
    fn widget_deserializes_from_camel_case_document() {
        let json = r#"{
            "id": "stat-gross",
            "type": "stat-card",
            "title": "Gross Bookings",
            "isVisible": false,
            "width": "small"
        }"#;
        let w: Widget = serde_json::from_str(json).expect("valid widget json");
        assert_eq!(w.widget_type, WidgetType::StatCard);
        assert!(!w.is_visible);
        assert!(!w.is_locked, "isLocked defaults to false");
        assert_eq!(w.height, WidgetHeight::Small, "height defaults to small");
    }

    #[test]
    fn widget_serializes_unknown_type_verbatim() {
        let w = widget("x", WidgetType::Other("frobnicate".into()), WidgetWidth::Full);
        let json = serde_json::to_value(&w).expect("serializable");
        assert_eq!(json["type"], "frobnicate");
        assert_eq!(json["isVisible"], true);
        assert_eq!(json["width"], "full");
    }

    #[test]
    fn tier_names_match_document_form() {
        for width in [WidgetWidth::Small, WidgetWidth::Medium, WidgetWidth::Large, WidgetWidth::Full] {
            let json = serde_json::to_value(width).expect("serializable");
            assert_eq!(json, width.as_str());
        }
        for height in [WidgetHeight::Small, WidgetHeight::Large] {
            let json = serde_json::to_value(height).expect("serializable");
            assert_eq!(json, height.as_str());
        }
    }

    #[test]
    fn catalog_id_strips_numeric_suffix() {
        let w = widget("stat-gross-1739212345678", WidgetType::StatCard, WidgetWidth::Small);
        assert_eq!(w.catalog_id(), "stat-gross");
    }

    #[test]
    fn catalog_id_keeps_plain_ids() {
        let plain = widget("stat-gross", WidgetType::StatCard, WidgetWidth::Small);
        assert_eq!(plain.catalog_id(), "stat-gross");
        let mixed = widget("stat-24h", WidgetType::StatCard, WidgetWidth::Small);
        assert_eq!(mixed.catalog_id(), "stat-24h");
        let bare = widget("-123", WidgetType::StatCard, WidgetWidth::Small);
        assert_eq!(bare.catalog_id(), "-123");
    }

    #[test]
    fn layout_lookup_helpers() {
        let layout = DashboardLayout::new(vec![
            widget("a", WidgetType::StatCard, WidgetWidth::Small),
            widget("b", WidgetType::ActivityFeed, WidgetWidth::Medium),
        ]);
        assert_eq!(layout.len(), 2);
        assert!(layout.contains("b"));
        assert!(!layout.contains("c"));
        assert_eq!(layout.ids().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(DashboardLayout::default().is_empty());
    }
}
