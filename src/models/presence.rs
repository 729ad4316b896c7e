use super::user::UserId;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::collections::BTreeMap;

/// One day of presence for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresenceEntry {
    pub start: NaiveTime, // ⇔ csv column 3 ("HH:MM:SS")
    pub end: NaiveTime,   // ⇔ csv column 4 ("HH:MM:SS")
}

impl PresenceEntry {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }
}

/// All samples of a single user, ordered by date.
pub type UserPresence = BTreeMap<NaiveDate, PresenceEntry>;

/// Samples of every user found in the presence file.
pub type PresenceData = BTreeMap<UserId, UserPresence>;
