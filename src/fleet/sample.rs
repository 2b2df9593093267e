//! Built-in demo dataset used when no data file is configured.

use super::{
    ActivityEvent, Booking, BookingSource, BookingStatus, Driver, DriverStatus, FleetSnapshot,
    PaymentMethod, Vehicle, VehicleStatus,
};
use chrono::{Duration, NaiveDateTime};

const DRIVERS: &[(&str, &str, DriverStatus, Option<&str>, f32)] = &[
    ("drv-01", "Amara Okafor", DriverStatus::OnJob, Some("veh-01"), 4.9),
    ("drv-02", "Tomasz Nowak", DriverStatus::Available, Some("veh-02"), 4.7),
    ("drv-03", "Priya Shah", DriverStatus::OnJob, Some("veh-03"), 4.8),
    ("drv-04", "Liam Byrne", DriverStatus::OnBreak, Some("veh-04"), 4.5),
    ("drv-05", "Yusuf Demir", DriverStatus::Available, Some("veh-05"), 4.6),
    ("drv-06", "Grace Mensah", DriverStatus::Offline, None, 4.9),
    ("drv-07", "Marco Rossi", DriverStatus::OnJob, Some("veh-07"), 4.4),
    ("drv-08", "Hannah Lee", DriverStatus::Offline, None, 4.8),
];

const VEHICLES: &[(&str, &str, &str, VehicleStatus)] = &[
    ("veh-01", "LK21 ABX", "Toyota Corolla Hybrid", VehicleStatus::Active),
    ("veh-02", "LM70 KTZ", "Skoda Octavia", VehicleStatus::Active),
    ("veh-03", "LR22 PNE", "Toyota Prius+", VehicleStatus::Active),
    ("veh-04", "LB19 HWD", "Ford Galaxy", VehicleStatus::Active),
    ("veh-05", "LC23 MRV", "Kia Niro EV", VehicleStatus::Active),
    ("veh-06", "LD68 SJO", "Mercedes Vito", VehicleStatus::Maintenance),
    ("veh-07", "LE72 YTA", "Toyota Corolla Hybrid", VehicleStatus::Active),
    ("veh-08", "LF17 UCB", "Skoda Superb", VehicleStatus::Inactive),
];

const PAYMENTS: [PaymentMethod; 5] = [
    PaymentMethod::Card,
    PaymentMethod::Cash,
    PaymentMethod::Card,
    PaymentMethod::Account,
    PaymentMethod::Card,
];

const SOURCES: [BookingSource; 4] = [
    BookingSource::App,
    BookingSource::Phone,
    BookingSource::Automated,
    BookingSource::Web,
];

const ACCOUNTS: [&str; 2] = ["Harbour Hotel", "St Anne's Clinic"];

/// Builds the demo dataset with timestamps relative to `now`.
///
/// Bookings cover the seven days up to and including `now`'s date, with a
/// few in-progress and scheduled jobs on the current day. The output is
/// deterministic for a given `now`.
pub fn sample_at(now: NaiveDateTime) -> FleetSnapshot {
    let drivers = DRIVERS
        .iter()
        .map(|&(id, name, status, vehicle, rating)| Driver {
            id: id.to_string(),
            name: name.to_string(),
            status,
            vehicle_id: vehicle.map(String::from),
            rating,
        })
        .collect();

    let vehicles = VEHICLES
        .iter()
        .map(|&(id, registration, model, status)| Vehicle {
            id: id.to_string(),
            registration: registration.to_string(),
            model: model.to_string(),
            status,
        })
        .collect();

    let mut bookings = Vec::new();
    let mut seq = 0usize;
    for days_ago in (0..7i64).rev() {
        // Weekday-ish shape: busier towards the end of the week.
        let per_day = 6 + ((7 - days_ago) as usize * 3) % 11;
        for slot in 0..per_day {
            seq += 1;
            let pickup_at = now - Duration::days(days_ago) - Duration::minutes(25 * slot as i64);
            let payment = PAYMENTS[seq % PAYMENTS.len()];
            let status = match (days_ago, slot) {
                (0, 0) | (0, 1) => BookingStatus::InProgress,
                (_, s) if s % 9 == 8 => BookingStatus::Cancelled,
                _ => BookingStatus::Completed,
            };
            let driver = &DRIVERS[seq % DRIVERS.len()];
            bookings.push(Booking {
                id: format!("BK-{:05}", 10_000 + seq),
                pickup_at,
                fare_pence: 850 + (seq as u64 * 137) % 2_400,
                payment,
                status,
                source: SOURCES[seq % SOURCES.len()],
                driver_id: Some(driver.0.to_string()),
                account: (payment == PaymentMethod::Account)
                    .then(|| ACCOUNTS[seq % ACCOUNTS.len()].to_string()),
            });
        }
    }
    for ahead in 1..=3i64 {
        seq += 1;
        bookings.push(Booking {
            id: format!("BK-{:05}", 10_000 + seq),
            pickup_at: now + Duration::minutes(40 * ahead),
            fare_pence: 1_500 + ahead as u64 * 220,
            payment: PaymentMethod::Account,
            status: BookingStatus::Scheduled,
            source: BookingSource::Phone,
            driver_id: None,
            account: Some(ACCOUNTS[ahead as usize % ACCOUNTS.len()].to_string()),
        });
    }

    let activity = [
        (2, "Amara Okafor picked up BK-10071 at King's Cross"),
        (6, "Automated line booked airport run for 06:15 tomorrow"),
        (11, "Liam Byrne started a break"),
        (18, "Invoice INV-2041 sent to Harbour Hotel"),
        (27, "Tomasz Nowak completed BK-10066"),
        (45, "LD68 SJO booked in for service"),
    ]
    .into_iter()
    .map(|(minutes_ago, message)| ActivityEvent {
        at: now - Duration::minutes(minutes_ago),
        message: message.to_string(),
    })
    .collect();

    FleetSnapshot {
        drivers,
        vehicles,
        bookings,
        activity,
        commission_bps: 1_500,
    }
}
