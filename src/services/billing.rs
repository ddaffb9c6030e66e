// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Elapsed-time billing.
//!
//! A ride costs its per-minute rate for every *whole* elapsed minute,
//! plus a fixed boarding fee charged regardless of duration.

/// Fixed boarding charge added to every ride total (minor units).
pub const FLAT_FEE: i64 = 4;

/// Total cost for a ride: `elapsed_minutes * rate + FLAT_FEE`.
pub fn cost(elapsed_minutes: i64, rate_per_minute: i64) -> i64 {
    elapsed_minutes * rate_per_minute + FLAT_FEE
}

/// Whole seconds elapsed between two epoch timestamps.
///
/// A start time in the future (clock skew between tabs or suspend/resume)
/// clamps to zero instead of producing a negative bill.
pub fn elapsed_seconds(now: i64, started_at: i64) -> i64 {
    let diff = now - started_at;
    if diff < 0 {
        tracing::warn!(now, started_at, "Ride start is in the future, clamping elapsed time");
        return 0;
    }
    diff
}

/// Whole minutes elapsed between two epoch timestamps (floored).
pub fn elapsed_minutes(now: i64, started_at: i64) -> i64 {
    elapsed_seconds(now, started_at) / 60
}

/// Running total for a ride that started at `started_at`.
pub fn running_total(now: i64, started_at: i64, rate_per_minute: i64) -> i64 {
    cost(elapsed_minutes(now, started_at), rate_per_minute)
}
