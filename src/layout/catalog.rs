//! Widget catalog: the definitions a user can add to a layout.

use super::model::{
    instance_base, DashboardLayout, Widget, WidgetHeight, WidgetType, WidgetWidth,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised when building a catalog from external configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// Two entries share an id.
    #[error("duplicate catalog entry id '{id}'")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },
    /// An entry has an empty id.
    #[error("catalog entry with title '{title}' has an empty id")]
    EmptyId {
        /// Title of the offending entry.
        title: String,
    },
    /// An id ends in `-<digits>`, the suffix reserved for added copies.
    #[error("catalog entry id '{id}' must not end in '-<digits>'")]
    NumericSuffix {
        /// The offending id.
        id: String,
    },
}

/// One widget definition offered by the "Add Widget" picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Catalog id; also the id of the widget when placed by default.
    pub id: String,
    /// Content kind.
    #[serde(rename = "type")]
    pub widget_type: WidgetType,
    /// Display label.
    pub title: String,
    /// Visibility when placed in a default layout.
    #[serde(default = "default_visible")]
    pub is_visible: bool,
    /// Default width tier.
    pub width: WidgetWidth,
    /// Default height tier.
    #[serde(default)]
    pub height: WidgetHeight,
}

fn default_visible() -> bool {
    true
}

impl CatalogEntry {
    fn new(id: &str, widget_type: WidgetType, title: &str, width: WidgetWidth) -> Self {
        Self {
            id: id.to_string(),
            widget_type,
            title: title.to_string(),
            is_visible: true,
            width,
            height: WidgetHeight::Small,
        }
    }

    fn tall(mut self) -> Self {
        self.height = WidgetHeight::Large;
        self
    }

    fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }

    /// Builds the widget placed for this entry in a default layout.
    pub fn to_widget(&self) -> Widget {
        self.to_widget_with_id(self.id.clone())
    }

    pub(crate) fn to_widget_with_id(&self, id: String) -> Widget {
        Widget {
            id,
            widget_type: self.widget_type.clone(),
            title: self.title.clone(),
            is_visible: self.is_visible,
            is_locked: false,
            width: self.width,
            height: self.height,
        }
    }
}

/// Catalog ids placed by [`WidgetCatalog::default_layout`], in display order.
const DEFAULT_LAYOUT_IDS: &[&str] = &[
    "stat-gross",
    "stat-jobs",
    "stat-drivers",
    "stat-commission",
    "bookings-trend",
    "driver-status",
    "activity-feed",
    "fleet-utilization",
    "payment-breakdown",
];

/// Ordered, read-only set of widget definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetCatalog {
    entries: Vec<CatalogEntry>,
}

impl WidgetCatalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        use WidgetType::*;
        use WidgetWidth::*;
        let entries = vec![
            CatalogEntry::new("stat-gross", StatCard, "Gross Bookings", Small),
            CatalogEntry::new("stat-jobs", StatCard, "Jobs Today", Small),
            CatalogEntry::new("stat-drivers", StatCard, "Drivers On Shift", Small),
            CatalogEntry::new("stat-commission", StatCard, "Net Commission", Small),
            CatalogEntry::new("bookings-trend", BookingsTrend, "Bookings Trend", Large).tall(),
            CatalogEntry::new("driver-status", DriverStatus, "Driver Status", Medium).tall(),
            CatalogEntry::new("activity-feed", ActivityFeed, "Recent Activity", Medium).tall(),
            CatalogEntry::new("driver-metrics", DriverMetrics, "Driver Performance", Large),
            CatalogEntry::new(
                "automation-breakdown",
                AutomationBreakdown,
                "Automation Breakdown",
                Medium,
            ),
            CatalogEntry::new("call-staff-metrics", CallStaffMetrics, "Call Staff Metrics", Medium),
            CatalogEntry::new("payment-breakdown", PaymentBreakdown, "Payment Methods", Medium),
            CatalogEntry::new(
                "commission-breakdown",
                CommissionBreakdown,
                "Commission Breakdown",
                Medium,
            ),
            CatalogEntry::new("fleet-utilization", FleetUtilization, "Fleet Utilization", Large),
            CatalogEntry::new(
                "account-dispatch-summary",
                AccountDispatchSummary,
                "Account Dispatch Summary",
                Full,
            ),
            CatalogEntry::new("ai-insights", AiInsights, "AI Insights", Full).hidden(),
        ];
        Self { entries }
    }

    /// Builds a catalog from externally supplied entries.
    ///
    /// Ids must be non-empty and unique; catalog order is entry order.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.id.is_empty() {
                return Err(CatalogError::EmptyId {
                    title: entry.title.clone(),
                });
            }
            if instance_base(&entry.id).is_some() {
                return Err(CatalogError::NumericSuffix {
                    id: entry.id.clone(),
                });
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: entry.id.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Looks up an entry by catalog id.
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries whose id is not placed in `layout`, in catalog order.
    pub fn available_widgets(&self, layout: &DashboardLayout) -> Vec<&CatalogEntry> {
        let placed: HashSet<&str> = layout.ids().collect();
        self.entries
            .iter()
            .filter(|entry| !placed.contains(entry.id.as_str()))
            .collect()
    }

    /// The layout a new dashboard starts with.
    ///
    /// Uses the built-in default arrangement for ids this catalog knows,
    /// or every catalog entry when none of them are present (a fully
    /// custom catalog).
    pub fn default_layout(&self) -> DashboardLayout {
        let widgets: Vec<Widget> = DEFAULT_LAYOUT_IDS
            .iter()
            .filter_map(|id| self.get(id))
            .map(CatalogEntry::to_widget)
            .collect();
        if widgets.is_empty() {
            return DashboardLayout::new(self.entries.iter().map(CatalogEntry::to_widget).collect());
        }
        DashboardLayout::new(widgets)
    }
}

impl Default for WidgetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
