// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Clock seam so billing and countdown math can run against simulated time.

use chrono::NaiveDateTime;
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of "now" for billing and reservation countdowns.
///
/// Epoch seconds drive elapsed-time billing; naive local time drives
/// reservation slots, which are wall-clock values with no timezone.
pub trait Clock: Send + Sync {
    /// Current time as whole-second epoch timestamp.
    fn now_epoch(&self) -> i64;

    /// Current local wall-clock time.
    fn now_local(&self) -> NaiveDateTime;
}

/// Real system clock.
#[derive(Debug, Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }

    fn now_local(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Manually advanced clock for tests.
///
/// Local time is derived from the epoch value in UTC so that epoch and
/// wall-clock stay consistent when a test advances time.
#[derive(Debug)]
pub struct ManualClock {
    epoch: AtomicI64,
}

impl ManualClock {
    pub fn new(epoch: i64) -> Self {
        Self {
            epoch: AtomicI64::new(epoch),
        }
    }

    /// Move the clock forward by `seconds`.
    pub fn advance(&self, seconds: i64) {
        self.epoch.fetch_add(seconds, Ordering::SeqCst);
    }

    pub fn set(&self, epoch: i64) {
        self.epoch.store(epoch, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_epoch(&self) -> i64 {
        self.epoch.load(Ordering::SeqCst)
    }

    fn now_local(&self) -> NaiveDateTime {
        chrono::DateTime::from_timestamp(self.now_epoch(), 0)
            .map(|dt| dt.naive_utc())
            .unwrap_or_default()
    }
}
