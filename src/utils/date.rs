use chrono::{Datelike, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Month bucket label used by the monthly statistics, e.g. `2013.09`.
pub fn month_key(d: NaiveDate) -> String {
    format!("{:04}.{:02}", d.year(), d.month())
}
