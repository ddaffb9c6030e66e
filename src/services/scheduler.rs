// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Cancellable timers for ride billing ticks and reservation countdowns.
//!
//! Each active ride gets exactly one ticker task and each reservation
//! exactly one countdown task, owned by the `TimerRegistry`. Arming a
//! timer replaces (and thereby aborts) any previous task for the same
//! key; every terminal transition cancels its timer through the
//! registry. A task that fires after its state is gone observes that and
//! stops, so a stale fire can never revive cleared state.

use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use uuid::Uuid;

use crate::models::RideSnapshot;
use crate::services::{reservation, session};
use crate::AppState;

/// Events pushed to rendering observers.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// The active ride's elapsed time and running total were recomputed.
    RideTick {
        user_id: String,
        snapshot: RideSnapshot,
    },
    /// A reservation's countdown was recomputed.
    ReservationTick {
        user_id: String,
        reservation_id: Uuid,
        remaining_seconds: i64,
    },
    /// A reservation's countdown crossed zero and it was removed.
    ReservationExpired {
        user_id: String,
        reservation_id: Uuid,
    },
}

/// Owned handle to a scheduled task. Dropping it aborts the task.
#[derive(Debug)]
pub struct TaskHandle {
    inner: JoinHandle<()>,
}

impl TaskHandle {
    fn new(inner: JoinHandle<()>) -> Self {
        Self { inner }
    }

    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.inner.abort();
    }
}

#[derive(Debug)]
struct CountdownEntry {
    user_id: String,
    handle: TaskHandle,
}

/// Registry of outstanding timers.
///
/// A task that ran to completion leaves an inert handle behind; the next
/// arm or cancel for the same key clears it.
#[derive(Debug, Default)]
pub struct TimerRegistry {
    ride_tickers: DashMap<String, TaskHandle>,
    countdowns: DashMap<Uuid, CountdownEntry>,
}

impl TimerRegistry {
    /// Abort the ride ticker for `user_id`, if any.
    pub fn cancel_ride_ticker(&self, user_id: &str) {
        self.ride_tickers.remove(user_id);
    }

    /// Abort the countdown watcher for `reservation_id`, if any.
    pub fn cancel_countdown(&self, reservation_id: Uuid) {
        self.countdowns.remove(&reservation_id);
    }

    /// Abort every timer belonging to `user_id`.
    pub fn cancel_all_for_user(&self, user_id: &str) {
        self.ride_tickers.remove(user_id);
        self.countdowns.retain(|_, entry| entry.user_id != user_id);
    }

    /// Abort every outstanding timer.
    pub fn cancel_all(&self) {
        self.ride_tickers.clear();
        self.countdowns.clear();
    }

    /// Ride tickers whose task has not finished.
    pub fn live_ride_tickers(&self) -> usize {
        self.ride_tickers
            .iter()
            .filter(|e| !e.value().is_finished())
            .count()
    }

    /// Countdown watchers whose task has not finished.
    pub fn live_countdowns(&self) -> usize {
        self.countdowns
            .iter()
            .filter(|e| !e.value().handle.is_finished())
            .count()
    }
}

/// Start (or restart) the billing ticker for `user_id`'s active ride.
pub fn arm_ride_ticker(state: &Arc<AppState>, user_id: &str) {
    let task = tokio::spawn(ride_ticker_loop(state.clone(), user_id.to_string()));
    state
        .timers
        .ride_tickers
        .insert(user_id.to_string(), TaskHandle::new(task));
}

async fn ride_ticker_loop(state: Arc<AppState>, user_id: String) {
    let mut interval = tokio::time::interval(Duration::from_millis(state.config.ride_tick_ms));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let account = match state.store.get(&user_id) {
            Ok(Some(account)) => account,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(user = %user_id, error = %e, "Ride ticker failed to load account");
                break;
            }
        };

        let Some(snapshot) =
            session::ride_snapshot(&account, state.clock.now_epoch(), &state.config.currency)
        else {
            tracing::debug!(user = %user_id, "Ride ticker fired with no active ride, stopping");
            break;
        };

        state.emit(UiEvent::RideTick {
            user_id: user_id.clone(),
            snapshot,
        });
    }
}

/// Start (or restart) the countdown watcher for one reservation.
pub fn arm_countdown(state: &Arc<AppState>, user_id: &str, reservation_id: Uuid) {
    let task = tokio::spawn(countdown_loop(
        state.clone(),
        user_id.to_string(),
        reservation_id,
    ));
    state.timers.countdowns.insert(
        reservation_id,
        CountdownEntry {
            user_id: user_id.to_string(),
            handle: TaskHandle::new(task),
        },
    );
}

async fn countdown_loop(state: Arc<AppState>, user_id: String, reservation_id: Uuid) {
    let mut interval = tokio::time::interval(Duration::from_millis(state.config.countdown_tick_ms));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let mut account = match state.store.get(&user_id) {
            Ok(Some(account)) => account,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(user = %user_id, error = %e, "Countdown failed to load account");
                break;
            }
        };

        let Some(reservation) = account.reservation(reservation_id) else {
            // Cancelled or converted to a ride since the last tick.
            tracing::debug!(reservation = %reservation_id, "Countdown target gone, stopping");
            break;
        };

        let remaining = reservation::remaining_seconds(reservation, state.clock.now_local());
        if remaining > 0 {
            state.emit(UiEvent::ReservationTick {
                user_id: user_id.clone(),
                reservation_id,
                remaining_seconds: remaining,
            });
            continue;
        }

        if reservation::expire(&mut account, reservation_id, state.clock.now_local()) {
            match state.store.put(&user_id, &account) {
                Ok(()) => state.emit(UiEvent::ReservationExpired {
                    user_id: user_id.clone(),
                    reservation_id,
                }),
                Err(e) => {
                    tracing::warn!(
                        reservation = %reservation_id,
                        error = %e,
                        "Failed to store expired reservation removal"
                    );
                }
            }
        }
        break;
    }
}
