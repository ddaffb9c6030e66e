// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Future-dated reservations with a countdown to their scheduled start.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Vehicle;
use crate::time_utils;

/// A claim on a vehicle at a future wall-clock time.
///
/// Identity is the generated `id`; the (date, hour, minute) slot is an
/// attribute. The slot is naive local time, no timezone is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Generated identifier
    pub id: Uuid,
    /// Snapshot of the reserved vehicle
    pub vehicle: Vehicle,
    /// Scheduled date
    pub date: NaiveDate,
    /// Scheduled hour (0-23)
    pub hour: u32,
    /// Scheduled minute (0-59)
    pub minute: u32,
    /// When the reservation was made, whole-second epoch timestamp
    pub reserved_at: i64,
}

impl Reservation {
    pub fn new(vehicle: Vehicle, date: NaiveDate, hour: u32, minute: u32, now: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            vehicle,
            date,
            hour,
            minute,
            reserved_at: now,
        }
    }

    /// Scheduled start as naive local time. `None` for an out-of-range
    /// slot (e.g. hour 24), which the hook layer rejects before storing.
    pub fn target_datetime(&self) -> Option<NaiveDateTime> {
        self.date.and_hms_opt(self.hour, self.minute, 0)
    }

    /// True when another reservation occupies the same slot.
    pub fn same_slot(&self, date: NaiveDate, hour: u32, minute: u32) -> bool {
        self.date == date && self.hour == hour && self.minute == minute
    }

    /// Slot display, "YYYY-MM-DD-HH:MM".
    pub fn slot_display(&self) -> String {
        time_utils::format_slot(self.date, self.hour, self.minute)
    }

    /// Rendering view with the countdown computed against `now_local`.
    pub fn snapshot(&self, now_local: NaiveDateTime, currency: &str) -> ReservationSnapshot {
        let remaining_seconds = self
            .target_datetime()
            .map(|target| (target - now_local).num_seconds())
            .unwrap_or(0);

        ReservationSnapshot {
            id: self.id,
            brand: self.vehicle.brand.clone(),
            plate: self.vehicle.plate.clone(),
            picture_url: self.vehicle.picture_url.clone(),
            charge_level: self.vehicle.charge_level.clone(),
            price_display: self.vehicle.price_display(currency),
            slot_display: self.slot_display(),
            remaining_seconds,
            remaining_display: time_utils::format_hms(remaining_seconds),
        }
    }
}

/// Derived view of a reservation, recomputed on every countdown tick.
#[derive(Debug, Clone, Serialize)]
pub struct ReservationSnapshot {
    pub id: Uuid,
    pub brand: String,
    pub plate: String,
    pub picture_url: String,
    pub charge_level: String,
    pub price_display: String,
    /// "Reserved time: YYYY-MM-DD-HH:MM" without the label
    pub slot_display: String,
    /// Seconds until the scheduled start; negative when overdue
    pub remaining_seconds: i64,
    pub remaining_display: String,
}
