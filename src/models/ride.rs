// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Active ride and archived receipt records.

use serde::{Deserialize, Serialize};

use crate::models::Vehicle;

/// The account's active rental. At most one exists per account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    /// Snapshot of the rented vehicle
    pub vehicle: Vehicle,
    /// Ride start, whole-second epoch timestamp
    pub started_at: i64,
    /// Ride start in display form ("d/m HH:MM")
    pub started_display: String,
}

/// Archived summary of a completed ride. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Snapshot of the vehicle as rented
    pub vehicle: Vehicle,
    /// Ride start in display form
    pub ride_date: String,
    /// Total driven time ("HH:MM:SS")
    pub elapsed_display: String,
    /// Final cost including the boarding fee (minor units)
    pub total: i64,
    /// Completion, whole-second epoch timestamp
    pub completed_at: i64,
}

/// Derived view of the active ride, recomputed on every billing tick.
#[derive(Debug, Clone, Serialize)]
pub struct RideSnapshot {
    pub brand: String,
    pub plate: String,
    pub picture_url: String,
    pub started_display: String,
    pub elapsed_seconds: i64,
    /// "Time: HH:MM:SS"
    pub elapsed_display: String,
    pub price_display: String,
    pub running_total: i64,
    /// "Total: 44kr.-"
    pub total_display: String,
}

/// Receipt view including the thank-you fields the receipt dialog shows.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptSnapshot {
    pub user_display_name: String,
    pub brand: String,
    pub plate: String,
    pub picture_url: String,
    pub ride_date: String,
    /// "Time driven: HH:MM:SS"
    pub elapsed_display: String,
    pub total: i64,
    pub total_display: String,
}

impl Receipt {
    /// Build the rendering view for this receipt.
    pub fn snapshot(&self, user_display_name: &str, currency: &str) -> ReceiptSnapshot {
        ReceiptSnapshot {
            user_display_name: user_display_name.to_string(),
            brand: self.vehicle.brand.clone(),
            plate: self.vehicle.plate.clone(),
            picture_url: self.vehicle.picture_url.clone(),
            ride_date: self.ride_date.clone(),
            elapsed_display: self.elapsed_display.clone(),
            total: self.total,
            total_display: format!("Total: {}{}", self.total, currency),
        }
    }
}
