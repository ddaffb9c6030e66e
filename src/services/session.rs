// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ride session state machine.
//!
//! An account is either idle or has exactly one active ride. Starting a
//! ride records the start time; the billing tick derives elapsed time and
//! running cost without mutating anything; ending a ride archives a
//! receipt, debits the balance and returns the account to idle.

use crate::clock::Clock;
use crate::error::{AppError, Result};
use crate::models::{Account, Receipt, Ride, RideSnapshot, Vehicle};
use crate::services::billing;
use crate::time_utils;

/// Guard message shown when renting while a ride is active.
pub(crate) const RIDE_ACTIVE_MESSAGE: &str = "Please end your current ride before starting a new";

/// Start a ride with `vehicle`.
///
/// Fails with a conflict when a ride is already active; the existing ride
/// is left untouched.
pub fn start_ride(account: &mut Account, vehicle: Vehicle, clock: &dyn Clock) -> Result<()> {
    if account.has_active_ride() {
        return Err(AppError::Conflict(RIDE_ACTIVE_MESSAGE.to_string()));
    }

    let now = clock.now_epoch();
    let ride = Ride {
        started_display: time_utils::format_ride_date(clock.now_local()),
        vehicle,
        started_at: now,
    };

    tracing::info!(
        user = %account.user_id,
        vehicle = %ride.vehicle.id,
        started_at = now,
        "Ride started"
    );
    account.current_ride = Some(ride);
    Ok(())
}

/// The billing tick: derive elapsed time and running total for the active
/// ride. Does not change state; `None` when idle.
pub fn ride_snapshot(account: &Account, now: i64, currency: &str) -> Option<RideSnapshot> {
    let ride = account.current_ride.as_ref()?;
    let elapsed = billing::elapsed_seconds(now, ride.started_at);
    let total = billing::cost(elapsed / 60, ride.vehicle.price_per_minute);

    Some(RideSnapshot {
        brand: ride.vehicle.brand.clone(),
        plate: ride.vehicle.plate.clone(),
        picture_url: ride.vehicle.picture_url.clone(),
        started_display: ride.started_display.clone(),
        elapsed_seconds: elapsed,
        elapsed_display: format!("Time: {}", time_utils::format_hms(elapsed)),
        price_display: ride.vehicle.price_display(currency),
        running_total: total,
        total_display: format!("Total: {}{}", total, currency),
    })
}

/// End the active ride.
///
/// Archives a receipt at the front of the history, debits the total from
/// the balance and clears the ride. A call with no active ride is a
/// no-op returning `None`.
pub fn end_ride(account: &mut Account, clock: &dyn Clock) -> Option<Receipt> {
    let ride = account.current_ride.take()?;

    let now = clock.now_epoch();
    let elapsed = billing::elapsed_seconds(now, ride.started_at);
    let total = billing::cost(elapsed / 60, ride.vehicle.price_per_minute);

    let receipt = Receipt {
        ride_date: ride.started_display.clone(),
        elapsed_display: time_utils::format_hms(elapsed),
        total,
        completed_at: now,
        vehicle: ride.vehicle,
    };

    account.history.insert(0, receipt.clone());
    account.balance -= total;

    tracing::info!(
        user = %account.user_id,
        total,
        balance = account.balance,
        "Ride ended"
    );
    Some(receipt)
}
