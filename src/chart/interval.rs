//! Seconds offsets to chart date/time values.
//!
//! Chart libraries only format `datetime` columns, so durations and clock
//! times are shifted onto a fixed reference day. Nothing is clamped: offsets
//! of a day or more land on later calendar days.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// 1901-02-01, the day a `Date(1, 1, 1)` lands on in the dashboard scripts.
const REFERENCE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1901, 2, 1) {
    Some(d) => d,
    None => panic!("invalid reference date"),
};

pub fn reference() -> NaiveDateTime {
    REFERENCE_DATE.and_time(NaiveTime::MIN)
}

/// Reference midnight plus `seconds`. `None` only when the result leaves
/// chrono's representable range.
pub fn parse_interval(seconds: i64) -> Option<NaiveDateTime> {
    reference().checked_add_signed(TimeDelta::try_seconds(seconds)?)
}

/// Same as [`parse_interval`] with millisecond precision.
pub fn parse_interval_millis(millis: i64) -> Option<NaiveDateTime> {
    reference().checked_add_signed(TimeDelta::try_milliseconds(millis)?)
}

/// Fractional seconds (e.g. a mean) truncated to whole milliseconds.
pub fn parse_fractional_interval(seconds: f64) -> Option<NaiveDateTime> {
    if !seconds.is_finite() {
        return None;
    }
    parse_interval_millis((seconds * 1000.0).trunc() as i64)
}
