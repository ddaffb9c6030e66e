// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reservation registry: future-dated vehicle claims with countdowns.
//!
//! Reservations are identified by a generated id; the (date, hour,
//! minute) slot is a plain attribute but must be unique within an
//! account, so double-booking the same minute is rejected up front.

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::clock::Clock;
use crate::error::{AppError, Result};
use crate::models::{Account, Reservation, Vehicle};
use crate::services::session;

const SLOT_TAKEN_MESSAGE: &str = "You already have a reservation for that time";

/// Create a reservation for `vehicle` at the given wall-clock slot.
///
/// Rejects an out-of-range time and a slot already held by another
/// reservation. The new reservation is stored most-recent-first.
pub fn reserve(
    account: &mut Account,
    vehicle: Vehicle,
    date: NaiveDate,
    hour: u32,
    minute: u32,
    clock: &dyn Clock,
) -> Result<Uuid> {
    check_slot(account, None, date, hour, minute)?;

    let reservation = Reservation::new(vehicle, date, hour, minute, clock.now_epoch());
    let id = reservation.id;

    tracing::info!(
        user = %account.user_id,
        reservation = %id,
        slot = %reservation.slot_display(),
        "Reservation created"
    );
    account.reservations.insert(0, reservation);
    Ok(id)
}

/// Cancel the reservation with `id`, returning the removed record.
pub fn cancel(account: &mut Account, id: Uuid) -> Result<Reservation> {
    let reservation = account
        .take_reservation(id)
        .ok_or_else(|| AppError::NotFound(format!("reservation {}", id)))?;

    tracing::info!(user = %account.user_id, reservation = %id, "Reservation cancelled");
    Ok(reservation)
}

/// Replace the slot of the reservation with `id`. The countdown restarts
/// because it is derived from the slot.
pub fn edit(
    account: &mut Account,
    id: Uuid,
    date: NaiveDate,
    hour: u32,
    minute: u32,
) -> Result<()> {
    check_slot(account, Some(id), date, hour, minute)?;

    let reservation = account
        .reservation_mut(id)
        .ok_or_else(|| AppError::NotFound(format!("reservation {}", id)))?;

    reservation.date = date;
    reservation.hour = hour;
    reservation.minute = minute;

    tracing::info!(
        user = %account.user_id,
        reservation = %id,
        slot = %crate::time_utils::format_slot(date, hour, minute),
        "Reservation rescheduled"
    );
    Ok(())
}

/// Convert the reservation with `id` into an active ride.
///
/// Valid only while idle; the active-ride guard runs before the
/// reservation is touched, so a conflict leaves it in place.
pub fn start_now(account: &mut Account, id: Uuid, clock: &dyn Clock) -> Result<()> {
    if account.has_active_ride() {
        return Err(AppError::Conflict(session::RIDE_ACTIVE_MESSAGE.to_string()));
    }

    let reservation = account
        .take_reservation(id)
        .ok_or_else(|| AppError::NotFound(format!("reservation {}", id)))?;

    tracing::info!(user = %account.user_id, reservation = %id, "Reservation started now");
    session::start_ride(account, reservation.vehicle, clock)
}

/// Seconds until the scheduled start; negative when overdue.
pub fn remaining_seconds(reservation: &Reservation, now_local: NaiveDateTime) -> i64 {
    reservation
        .target_datetime()
        .map(|target| (target - now_local).num_seconds())
        .unwrap_or(0)
}

/// Remove the reservation with `id` if its countdown has crossed zero.
///
/// Returns whether a reservation was removed; a second call for the same
/// id removes nothing, so expiry is idempotent. The active ride is never
/// touched.
pub fn expire(account: &mut Account, id: Uuid, now_local: NaiveDateTime) -> bool {
    let due = account
        .reservation(id)
        .is_some_and(|r| remaining_seconds(r, now_local) <= 0);
    if !due {
        return false;
    }

    account.take_reservation(id);
    tracing::info!(user = %account.user_id, reservation = %id, "Reservation expired");
    true
}

/// Sweep out every reservation whose scheduled time has passed.
/// Used when an account is re-loaded after the countdown timers were
/// down (e.g. a fresh sign-in).
pub fn expire_due(account: &mut Account, now_local: NaiveDateTime) -> Vec<Reservation> {
    let due_ids: Vec<Uuid> = account
        .reservations
        .iter()
        .filter(|r| remaining_seconds(r, now_local) <= 0)
        .map(|r| r.id)
        .collect();

    due_ids
        .into_iter()
        .filter_map(|id| {
            let removed = account.take_reservation(id);
            if removed.is_some() {
                tracing::info!(user = %account.user_id, reservation = %id, "Reservation expired");
            }
            removed
        })
        .collect()
}

/// Reject an invalid time and a slot another reservation already holds.
/// `skip` excludes the reservation being edited from the duplicate check.
fn check_slot(
    account: &Account,
    skip: Option<Uuid>,
    date: NaiveDate,
    hour: u32,
    minute: u32,
) -> Result<()> {
    if date.and_hms_opt(hour, minute, 0).is_none() {
        return Err(AppError::Validation(format!(
            "invalid reservation time {:02}:{:02}",
            hour, minute
        )));
    }

    let taken = account
        .reservations
        .iter()
        .filter(|r| Some(r.id) != skip)
        .any(|r| r.same_slot(date, hour, minute));
    if taken {
        return Err(AppError::Conflict(SLOT_TAKEN_MESSAGE.to_string()));
    }

    Ok(())
}
