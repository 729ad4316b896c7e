//! Grouping of one user's presence samples into weekday and month buckets.
//!
//! Buckets are Monday-first. Values inside a bucket follow date order.

use crate::models::UserPresence;
use crate::utils::date::month_key;
use crate::utils::time::{interval, seconds_since_midnight};
use chrono::Datelike;
use std::collections::BTreeMap;

pub const DAYS_IN_WEEK: usize = 7;

/// Start and end seconds-since-midnight collected for one weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartEnd {
    pub starts: Vec<i64>,
    pub ends: Vec<i64>,
}

/// Presence intervals (seconds) grouped by weekday.
pub fn group_by_weekday(items: &UserPresence) -> [Vec<i64>; DAYS_IN_WEEK] {
    let mut result: [Vec<i64>; DAYS_IN_WEEK] = Default::default();
    for (date, entry) in items {
        let day = date.weekday().num_days_from_monday() as usize;
        result[day].push(interval(entry.start, entry.end));
    }
    result
}

/// Start and end times grouped by weekday.
pub fn group_by_start_end(items: &UserPresence) -> [StartEnd; DAYS_IN_WEEK] {
    let mut result: [StartEnd; DAYS_IN_WEEK] = Default::default();
    for (date, entry) in items {
        let bucket = &mut result[date.weekday().num_days_from_monday() as usize];
        bucket.starts.push(seconds_since_midnight(entry.start));
        bucket.ends.push(seconds_since_midnight(entry.end));
    }
    result
}

/// Total presence per month, keyed `YYYY.MM` (keys sort chronologically).
pub fn group_by_months(items: &UserPresence) -> BTreeMap<String, i64> {
    let mut result = BTreeMap::new();
    for (date, entry) in items {
        *result.entry(month_key(*date)).or_insert(0) += interval(entry.start, entry.end);
    }
    result
}

/// Arithmetic mean; zero for an empty slice.
pub fn mean(items: &[i64]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    items.iter().sum::<i64>() as f64 / items.len() as f64
}
