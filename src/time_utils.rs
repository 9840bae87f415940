// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Datelike, Local, Utc};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format a timestamp as "<Month> <Day>" in the user's local time zone.
pub fn format_month_day(date: DateTime<Utc>) -> String {
    let local = date.with_timezone(&Local);
    // month0() is always in 0..12
    format!("{} {}", MONTHS[local.month0() as usize], local.day())
}
