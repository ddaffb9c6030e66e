// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! UI event hooks.
//!
//! One function per user action in the rendering layer. Every hook is a
//! synchronous read-modify-write of the signed-in user's whole account
//! record: resolve the user, load the account, apply the change, store
//! the account back, then arm or cancel timers as needed. Guard errors
//! carry the message the UI shows in its alert dialog.

use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::{self, AuthUser};
use crate::error::{AppError, Result};
use crate::models::{Account, CardInput, CardSnapshot, ReceiptSnapshot, ReservationSnapshot, RideSnapshot};
use crate::services::{reservation, scheduler, session};
use crate::services::scheduler::UiEvent;
use crate::AppState;

/// Profile page view.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSnapshot {
    pub display_name: String,
    pub email: String,
    pub phone: String,
    pub balance: i64,
    /// "Current balance: 0kr.-"
    pub balance_display: String,
}

fn profile_snapshot(account: &Account, currency: &str) -> ProfileSnapshot {
    ProfileSnapshot {
        display_name: account.display_name.clone(),
        email: account.email.clone(),
        phone: account.phone.clone(),
        balance: account.balance,
        balance_display: format!("Current balance: {}{}", account.balance, currency),
    }
}

/// Load the account for `user`, creating a fresh one on first sign-in.
fn load_account(state: &AppState, user: &AuthUser) -> Result<Account> {
    if let Some(account) = state.store.get(&user.id)? {
        return Ok(account);
    }

    let account = Account::new(user, &state.config.fallback_phone);
    state.store.put(&user.id, &account)?;
    tracing::info!(user = %user.id, "Account created");
    Ok(account)
}

/// Resolve the signed-in user and their account, or fail the action.
fn current_account(state: &AppState) -> Result<(AuthUser, Account)> {
    let user = auth::require_user(state.auth.as_ref())?;
    let account = load_account(state, &user)?;
    Ok((user, account))
}

// ─── Auth State ──────────────────────────────────────────────

/// Auth-state subscription callback.
///
/// On sign-in: lazily create the account, sweep reservations that came
/// due while no timers were running, and re-arm the timers for whatever
/// is live in the record. On sign-out: cancel every outstanding timer.
pub fn on_auth_state_changed(state: &Arc<AppState>) -> Result<Option<ProfileSnapshot>> {
    let Some(user) = state.auth.current_user() else {
        state.timers.cancel_all();
        tracing::info!("Signed out, timers cancelled");
        return Ok(None);
    };

    let mut account = load_account(state, &user)?;

    let expired = reservation::expire_due(&mut account, state.clock.now_local());
    if !expired.is_empty() {
        state.store.put(&user.id, &account)?;
        for removed in &expired {
            state.emit(UiEvent::ReservationExpired {
                user_id: user.id.clone(),
                reservation_id: removed.id,
            });
        }
    }

    if account.has_active_ride() {
        scheduler::arm_ride_ticker(state, &user.id);
    }
    for res in &account.reservations {
        scheduler::arm_countdown(state, &user.id, res.id);
    }

    Ok(Some(profile_snapshot(&account, &state.config.currency)))
}

// ─── Rides ───────────────────────────────────────────────────

/// Rent a vehicle right away.
pub fn on_rent_clicked(state: &Arc<AppState>, vehicle_id: &str) -> Result<RideSnapshot> {
    let (user, mut account) = current_account(state)?;
    let vehicle = state
        .catalog
        .get(vehicle_id)
        .ok_or_else(|| AppError::NotFound(format!("vehicle {}", vehicle_id)))?
        .clone();

    session::start_ride(&mut account, vehicle, state.clock.as_ref())?;
    state.store.put(&user.id, &account)?;
    scheduler::arm_ride_ticker(state, &user.id);

    session::ride_snapshot(&account, state.clock.now_epoch(), &state.config.currency)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("ride missing right after start")))
}

/// End the active ride. `None` when there was nothing to end.
pub fn on_end_ride_clicked(state: &Arc<AppState>) -> Result<Option<ReceiptSnapshot>> {
    let (user, mut account) = current_account(state)?;

    let receipt = session::end_ride(&mut account, state.clock.as_ref());
    state.timers.cancel_ride_ticker(&user.id);

    let Some(receipt) = receipt else {
        return Ok(None);
    };

    state.store.put(&user.id, &account)?;
    Ok(Some(
        receipt.snapshot(&account.display_name, &state.config.currency),
    ))
}

/// The active ride, recomputed for rendering.
pub fn current_ride(state: &AppState) -> Result<Option<RideSnapshot>> {
    let (_, account) = current_account(state)?;
    Ok(session::ride_snapshot(
        &account,
        state.clock.now_epoch(),
        &state.config.currency,
    ))
}

/// Completed rides, most recent first.
pub fn ride_history(state: &AppState) -> Result<Vec<ReceiptSnapshot>> {
    let (_, account) = current_account(state)?;
    Ok(account
        .history
        .iter()
        .map(|r| r.snapshot(&account.display_name, &state.config.currency))
        .collect())
}

// ─── Reservations ────────────────────────────────────────────

/// Reserve a vehicle for a future wall-clock slot.
pub fn on_reserve_clicked(
    state: &Arc<AppState>,
    vehicle_id: &str,
    date: NaiveDate,
    hour: u32,
    minute: u32,
) -> Result<ReservationSnapshot> {
    let (user, mut account) = current_account(state)?;
    let vehicle = state
        .catalog
        .get(vehicle_id)
        .ok_or_else(|| AppError::NotFound(format!("vehicle {}", vehicle_id)))?
        .clone();

    let id = reservation::reserve(
        &mut account,
        vehicle,
        date,
        hour,
        minute,
        state.clock.as_ref(),
    )?;
    state.store.put(&user.id, &account)?;
    scheduler::arm_countdown(state, &user.id, id);

    account
        .reservation(id)
        .map(|r| r.snapshot(state.clock.now_local(), &state.config.currency))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("reservation missing right after insert")))
}

/// Start a reserved ride now instead of waiting for the slot.
pub fn on_start_now_clicked(state: &Arc<AppState>, reservation_id: Uuid) -> Result<RideSnapshot> {
    let (user, mut account) = current_account(state)?;

    reservation::start_now(&mut account, reservation_id, state.clock.as_ref())?;
    state.timers.cancel_countdown(reservation_id);
    state.store.put(&user.id, &account)?;
    scheduler::arm_ride_ticker(state, &user.id);

    session::ride_snapshot(&account, state.clock.now_epoch(), &state.config.currency)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("ride missing right after start")))
}

/// Cancel a reservation.
pub fn on_cancel_reservation_clicked(state: &Arc<AppState>, reservation_id: Uuid) -> Result<()> {
    let (user, mut account) = current_account(state)?;

    reservation::cancel(&mut account, reservation_id)?;
    state.timers.cancel_countdown(reservation_id);
    state.store.put(&user.id, &account)?;
    Ok(())
}

/// Move a reservation to a new slot and restart its countdown.
pub fn on_edit_reservation_saved(
    state: &Arc<AppState>,
    reservation_id: Uuid,
    date: NaiveDate,
    hour: u32,
    minute: u32,
) -> Result<ReservationSnapshot> {
    let (user, mut account) = current_account(state)?;

    reservation::edit(&mut account, reservation_id, date, hour, minute)?;
    state.store.put(&user.id, &account)?;
    scheduler::arm_countdown(state, &user.id, reservation_id);

    account
        .reservation(reservation_id)
        .map(|r| r.snapshot(state.clock.now_local(), &state.config.currency))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("reservation missing right after edit")))
}

/// Open reservations with live countdowns, most recent first.
pub fn reservations(state: &AppState) -> Result<Vec<ReservationSnapshot>> {
    let (_, account) = current_account(state)?;
    let now_local = state.clock.now_local();
    Ok(account
        .reservations
        .iter()
        .map(|r| r.snapshot(now_local, &state.config.currency))
        .collect())
}

// ─── Cards & Balance ─────────────────────────────────────────

/// Add a payment card from the card form.
pub fn on_add_card_clicked(state: &AppState, input: CardInput) -> Result<CardSnapshot> {
    let (user, mut account) = current_account(state)?;

    let card = input.into_card()?;
    let snapshot = card.snapshot();
    account.cards.insert(0, card);
    state.store.put(&user.id, &account)?;

    tracing::info!(user = %user.id, "Card added");
    Ok(snapshot)
}

/// Remove the card with the given number.
pub fn on_remove_card_clicked(state: &AppState, number: &str) -> Result<()> {
    let (user, mut account) = current_account(state)?;

    let index = account
        .cards
        .iter()
        .position(|c| c.number == number)
        .ok_or_else(|| AppError::NotFound("card".to_string()))?;
    account.cards.remove(index);
    state.store.put(&user.id, &account)?;

    tracing::info!(user = %user.id, "Card removed");
    Ok(())
}

/// Stored cards, masked for rendering, most recent first.
pub fn cards(state: &AppState) -> Result<Vec<CardSnapshot>> {
    let (_, account) = current_account(state)?;
    Ok(account.cards.iter().map(|c| c.snapshot()).collect())
}

/// Masked card lines for the top-up dialog's payment source list.
pub fn saved_card_choices(state: &AppState) -> Result<Vec<String>> {
    let (_, account) = current_account(state)?;
    Ok(account.cards.iter().map(|c| c.snapshot().masked).collect())
}

/// Apply a balance top-up from the amount field. Returns the new balance.
pub fn on_balance_update_confirmed(state: &AppState, amount: &str) -> Result<i64> {
    let (user, mut account) = current_account(state)?;

    let amount: i64 = amount
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("'{}' is not a valid amount", amount)))?;

    account.balance += amount;
    state.store.put(&user.id, &account)?;

    tracing::info!(user = %user.id, amount, balance = account.balance, "Balance updated");
    Ok(account.balance)
}

// ─── Profile ─────────────────────────────────────────────────

/// Save profile edits. Empty fields keep their stored value.
pub fn on_profile_saved(
    state: &AppState,
    display_name: &str,
    email: &str,
    phone: &str,
) -> Result<ProfileSnapshot> {
    let (user, mut account) = current_account(state)?;

    if !display_name.is_empty() && display_name != account.display_name {
        account.display_name = display_name.to_string();
    }
    if !email.is_empty() && email != account.email {
        account.email = email.to_string();
    }
    if !phone.is_empty() && phone != account.phone {
        account.phone = phone.to_string();
    }
    state.store.put(&user.id, &account)?;

    Ok(profile_snapshot(&account, &state.config.currency))
}

/// Profile page data for the signed-in user.
pub fn profile(state: &AppState) -> Result<ProfileSnapshot> {
    let (_, account) = current_account(state)?;
    Ok(profile_snapshot(&account, &state.config.currency))
}
