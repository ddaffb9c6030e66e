// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time display formatting.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Format a duration in whole seconds as "HH:MM:SS".
pub fn format_hms(total_seconds: i64) -> String {
    let secs = total_seconds.max(0);
    let h = secs / 3600;
    let m = (secs / 60) % 60;
    let s = secs % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

/// Format a ride start time as "d/m HH:MM" (day and month unpadded).
pub fn format_ride_date(dt: NaiveDateTime) -> String {
    format!(
        "{}/{} {:02}:{:02}",
        dt.day(),
        dt.month(),
        dt.hour(),
        dt.minute()
    )
}

/// Format a reservation slot as "YYYY-MM-DD-HH:MM".
pub fn format_slot(date: NaiveDate, hour: u32, minute: u32) -> String {
    format!("{}-{:02}:{:02}", date.format("%Y-%m-%d"), hour, minute)
}
