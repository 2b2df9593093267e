//! Fleet data handed to widget renderers.
//!
//! Renderers never reach for global data. They receive a
//! [`FleetRepository`] through the widget context, which the host builds
//! from a JSON file or from the built-in [`sample`] dataset.

pub mod metrics;
pub mod sample;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading a fleet data file.
#[derive(Error, Debug)]
pub enum FleetDataError {
    /// The file could not be read.
    #[error("Failed to read fleet data file: {path}")]
    Read {
        /// Data file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid fleet snapshot.
    #[error("Invalid fleet data at {path}: {source}")]
    Parse {
        /// Data file path.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The commission rate is above 100%.
    #[error("Invalid fleet data at {path}: commissionBps {bps} exceeds {MAX_COMMISSION_BPS}")]
    CommissionOutOfRange {
        /// Data file path.
        path: PathBuf,
        /// Rate found in the file.
        bps: u32,
    },
}

/// Highest accepted commission rate, 100% in basis points.
pub const MAX_COMMISSION_BPS: u32 = 10_000;

/// Duty status of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriverStatus {
    /// Logged in and waiting for work.
    Available,
    /// Carrying out a booking.
    OnJob,
    /// Logged in but paused.
    OnBreak,
    /// Not logged in.
    Offline,
}

impl DriverStatus {
    /// All statuses in display order.
    pub const ALL: [DriverStatus; 4] = [
        DriverStatus::Available,
        DriverStatus::OnJob,
        DriverStatus::OnBreak,
        DriverStatus::Offline,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            DriverStatus::Available => "Available",
            DriverStatus::OnJob => "On job",
            DriverStatus::OnBreak => "On break",
            DriverStatus::Offline => "Offline",
        }
    }

    /// Returns `true` when the driver is logged in.
    pub fn is_on_shift(self) -> bool {
        !matches!(self, DriverStatus::Offline)
    }
}

/// A licensed driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    /// Driver id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Current duty status.
    pub status: DriverStatus,
    /// Vehicle assigned for the shift.
    #[serde(default)]
    pub vehicle_id: Option<String>,
    /// Average passenger rating out of 5.
    #[serde(default)]
    pub rating: f32,
}

/// Roadworthiness state of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleStatus {
    /// Licensed and usable.
    Active,
    /// Off the road for servicing.
    Maintenance,
    /// Not in use.
    Inactive,
}

/// A licensed vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Vehicle id.
    pub id: String,
    /// Registration plate.
    pub registration: String,
    /// Make and model.
    pub model: String,
    /// Current state.
    pub status: VehicleStatus,
}

/// How a booking is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    /// Paid to the driver in cash.
    Cash,
    /// Card in the vehicle or in-app.
    Card,
    /// Invoiced to an account customer.
    Account,
}

impl PaymentMethod {
    /// All methods in display order.
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Cash,
        PaymentMethod::Card,
        PaymentMethod::Account,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Account => "Account",
        }
    }
}

/// Lifecycle state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    /// Waiting for its pickup time.
    Scheduled,
    /// Driver dispatched or passenger on board.
    InProgress,
    /// Finished and chargeable.
    Completed,
    /// Called off.
    Cancelled,
}

/// Channel a booking came in through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingSource {
    /// Taken by call staff.
    Phone,
    /// Passenger app.
    App,
    /// Web booking form.
    Web,
    /// Automated phone line.
    Automated,
}

/// A single passenger booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Booking reference.
    pub id: String,
    /// Pickup time (operator local time).
    pub pickup_at: NaiveDateTime,
    /// Fare in pence.
    pub fare_pence: u64,
    /// Payment method.
    pub payment: PaymentMethod,
    /// Lifecycle state.
    pub status: BookingStatus,
    /// Booking channel.
    pub source: BookingSource,
    /// Assigned driver, if dispatched.
    #[serde(default)]
    pub driver_id: Option<String>,
    /// Account customer, for account bookings.
    #[serde(default)]
    pub account: Option<String>,
}

/// An entry in the operations activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// When it happened.
    pub at: NaiveDateTime,
    /// What happened.
    pub message: String,
}

/// Read-only access to fleet datasets.
pub trait FleetRepository: Send + Sync {
    /// All drivers.
    fn drivers(&self) -> &[Driver];
    /// All vehicles.
    fn vehicles(&self) -> &[Vehicle];
    /// All bookings.
    fn bookings(&self) -> &[Booking];
    /// Activity log, newest first.
    fn activity(&self) -> &[ActivityEvent];
    /// Operator commission rate in basis points (1500 = 15%).
    fn commission_bps(&self) -> u32;
}

/// In-memory fleet data, serializable as a JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FleetSnapshot {
    /// Drivers.
    pub drivers: Vec<Driver>,
    /// Vehicles.
    pub vehicles: Vec<Vehicle>,
    /// Bookings.
    pub bookings: Vec<Booking>,
    /// Activity log, newest first.
    pub activity: Vec<ActivityEvent>,
    /// Commission rate in basis points.
    pub commission_bps: u32,
}

impl FleetSnapshot {
    /// Loads a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self, FleetDataError> {
        let content = fs::read_to_string(path).map_err(|e| FleetDataError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut snapshot: FleetSnapshot =
            serde_json::from_str(&content).map_err(|e| FleetDataError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;
        if snapshot.commission_bps > MAX_COMMISSION_BPS {
            return Err(FleetDataError::CommissionOutOfRange {
                path: path.to_path_buf(),
                bps: snapshot.commission_bps,
            });
        }
        snapshot.activity.sort_by(|a, b| b.at.cmp(&a.at));
        tracing::debug!(
            drivers = snapshot.drivers.len(),
            bookings = snapshot.bookings.len(),
            "loaded fleet data from {:?}",
            path
        );
        Ok(snapshot)
    }
}

impl FleetRepository for FleetSnapshot {
    fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    fn activity(&self) -> &[ActivityEvent] {
        &self.activity
    }

    fn commission_bps(&self) -> u32 {
        self.commission_bps
    }
}
