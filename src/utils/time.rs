//! Time utilities: parsing HH:MM:SS, seconds since midnight, formatting seconds.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S").ok()
}

/// Like [`parse_time`] but reports the offending input.
pub fn parse_clock(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn seconds_since_midnight(t: NaiveTime) -> i64 {
    t.num_seconds_from_midnight() as i64
}

/// Seconds between two clock times of the same day. Negative when `end`
/// precedes `start`.
pub fn interval(start: NaiveTime, end: NaiveTime) -> i64 {
    seconds_since_midnight(end) - seconds_since_midnight(start)
}

/// `3723` → `"01:02:03"`. Hours are not wrapped at 24.
pub fn format_seconds(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    format!("{}{:02}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}
