//! Figures derived from a [`FleetRepository`].

use super::{BookingStatus, DriverStatus, FleetRepository, PaymentMethod, VehicleStatus};
use chrono::{Duration, NaiveDate};
use std::collections::HashSet;

/// Sum of fares for completed and in-progress bookings on `day`, in pence.
pub fn gross_fares_pence(repo: &dyn FleetRepository, day: NaiveDate) -> u64 {
    repo.bookings()
        .iter()
        .filter(|b| b.pickup_at.date() == day)
        .filter(|b| matches!(b.status, BookingStatus::Completed | BookingStatus::InProgress))
        .fold(0u64, |sum, b| sum.saturating_add(b.fare_pence))
}

/// Operator commission on [`gross_fares_pence`] for `day`, in pence.
///
/// Saturates at `u64::MAX` instead of overflowing.
pub fn commission_pence(repo: &dyn FleetRepository, day: NaiveDate) -> u64 {
    let gross = u128::from(gross_fares_pence(repo, day));
    let commission = gross * u128::from(repo.commission_bps()) / 10_000;
    u64::try_from(commission).unwrap_or(u64::MAX)
}

/// `part` as a whole percentage of `total`, 0 when `total` is 0.
pub fn percent_of(part: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    let share = u128::from(part) * 100 / u128::from(total);
    u64::try_from(share).unwrap_or(u64::MAX)
}

/// Bookings on `day` that were not cancelled.
pub fn jobs_on(repo: &dyn FleetRepository, day: NaiveDate) -> usize {
    repo.bookings()
        .iter()
        .filter(|b| b.pickup_at.date() == day && b.status != BookingStatus::Cancelled)
        .count()
}

/// Number of drivers per status, in [`DriverStatus::ALL`] order.
pub fn drivers_by_status(repo: &dyn FleetRepository) -> Vec<(DriverStatus, usize)> {
    DriverStatus::ALL
        .iter()
        .map(|&status| {
            let count = repo.drivers().iter().filter(|d| d.status == status).count();
            (status, count)
        })
        .collect()
}

/// Drivers currently logged in.
pub fn drivers_on_shift(repo: &dyn FleetRepository) -> usize {
    repo.drivers()
        .iter()
        .filter(|d| d.status.is_on_shift())
        .count()
}

/// Non-cancelled bookings per day for the `days` days ending on `last_day`,
/// oldest first.
pub fn bookings_per_day(
    repo: &dyn FleetRepository,
    last_day: NaiveDate,
    days: u32,
) -> Vec<(NaiveDate, usize)> {
    (0..i64::from(days))
        .rev()
        .map(|back| {
            let day = last_day - Duration::days(back);
            (day, jobs_on(repo, day))
        })
        .collect()
}

/// Share of active vehicles assigned to a driver on a job, as a fraction.
///
/// Returns `None` when there are no active vehicles.
pub fn fleet_utilization(repo: &dyn FleetRepository) -> Option<f64> {
    let active: HashSet<&str> = repo
        .vehicles()
        .iter()
        .filter(|v| v.status == VehicleStatus::Active)
        .map(|v| v.id.as_str())
        .collect();
    if active.is_empty() {
        return None;
    }
    let busy = repo
        .drivers()
        .iter()
        .filter(|d| d.status == DriverStatus::OnJob)
        .filter_map(|d| d.vehicle_id.as_deref())
        .filter(|v| active.contains(v))
        .collect::<HashSet<_>>()
        .len();
    Some(busy as f64 / active.len() as f64)
}

/// Completed fares per payment method, in [`PaymentMethod::ALL`] order.
pub fn payment_breakdown(repo: &dyn FleetRepository) -> Vec<(PaymentMethod, u64)> {
    PaymentMethod::ALL
        .iter()
        .map(|&method| {
            let total = repo
                .bookings()
                .iter()
                .filter(|b| b.payment == method && b.status == BookingStatus::Completed)
                .fold(0u64, |sum, b| sum.saturating_add(b.fare_pence));
            (method, total)
        })
        .collect()
}

/// Formats pence as pounds, e.g. `£1,234.50`.
pub fn format_pence(pence: u64) -> String {
    let pounds = (pence / 100).to_string();
    let mut grouped = String::with_capacity(pounds.len() + pounds.len() / 3);
    for (i, ch) in pounds.chars().enumerate() {
        if i > 0 && (pounds.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("£{grouped}.{:02}", pence % 100)
}
