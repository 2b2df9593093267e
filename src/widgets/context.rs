//! Shared state passed to widget renderers.

use crate::fleet::FleetRepository;
use chrono::NaiveDateTime;

/// Everything a renderer may read besides the widget itself.
///
/// All data is borrowed; the context is rebuilt on every render pass.
pub struct WidgetContext<'a> {
    /// Injected fleet datasets.
    pub fleet: &'a dyn FleetRepository,
    /// Wall-clock time of this render pass (operator local time).
    pub now: NaiveDateTime,
}

impl<'a> WidgetContext<'a> {
    /// Creates a context over `fleet` at `now`.
    pub fn new(fleet: &'a dyn FleetRepository, now: NaiveDateTime) -> Self {
        Self { fleet, now }
    }
}

impl std::fmt::Debug for WidgetContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetContext")
            .field("drivers", &self.fleet.drivers().len())
            .field("bookings", &self.fleet.bookings().len())
            .field("now", &self.now)
            .finish()
    }
}
