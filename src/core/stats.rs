//! Endpoint-shaped statistics for one user.
//!
//! Each report serializes exactly as its API endpoint answers: an array of
//! rows (optionally led by a header row) or the sentinel `0` when the user
//! has no presence samples.

use crate::core::calculator::{group_by_months, group_by_start_end, group_by_weekday, mean};
use crate::models::{ChartKind, PresenceData, UserId, UserPresence};
use crate::utils::format_seconds;
use chrono::Weekday;
use serde::ser::{SerializeSeq, SerializeTuple};
use serde::{Serialize, Serializer};

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub trait StatRow {
    /// Row cells as text. With `human`, second counts are shown as `HH:MM:SS`.
    fn cells(&self, human: bool) -> Vec<String>;
}

/// `["Mon", 30047.5]`, or `["Mon", 0]` for a weekday without samples
#[derive(Debug, Clone, PartialEq)]
pub struct MeanTimeRow {
    pub weekday: Weekday,
    pub mean_seconds: Option<f64>,
}

/// `["Mon", 120180]` or `["2013.09", 120180]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalRow {
    pub label: String,
    pub seconds: i64,
}

/// `["Mon", 33134.0, 57257.0]`
#[derive(Debug, Clone, PartialEq)]
pub struct StartEndRow {
    pub weekday: Weekday,
    pub mean_start: Option<f64>,
    pub mean_end: Option<f64>,
}

/// Mean of a bucket: a float, or the integer `0` when the bucket is empty.
struct MeanCell(Option<f64>);

impl Serialize for MeanCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(m) => serializer.serialize_f64(m),
            None => serializer.serialize_u8(0),
        }
    }
}

fn bucket_mean(items: &[i64]) -> Option<f64> {
    (!items.is_empty()).then(|| mean(items))
}

impl Serialize for MeanTimeRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut t = serializer.serialize_tuple(2)?;
        t.serialize_element(&self.weekday.to_string())?;
        t.serialize_element(&MeanCell(self.mean_seconds))?;
        t.end()
    }
}

impl Serialize for TotalRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut t = serializer.serialize_tuple(2)?;
        t.serialize_element(&self.label)?;
        t.serialize_element(&self.seconds)?;
        t.end()
    }
}

impl Serialize for StartEndRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut t = serializer.serialize_tuple(3)?;
        t.serialize_element(&self.weekday.to_string())?;
        t.serialize_element(&MeanCell(self.mean_start))?;
        t.serialize_element(&MeanCell(self.mean_end))?;
        t.end()
    }
}

fn fractional(secs: Option<f64>, human: bool) -> String {
    match secs {
        Some(s) if human => format_seconds(s.trunc() as i64),
        Some(s) => s.to_string(),
        None if human => format_seconds(0),
        None => "0".to_string(),
    }
}

impl StatRow for MeanTimeRow {
    fn cells(&self, human: bool) -> Vec<String> {
        vec![self.weekday.to_string(), fractional(self.mean_seconds, human)]
    }
}

impl StatRow for TotalRow {
    fn cells(&self, human: bool) -> Vec<String> {
        let value = if human {
            format_seconds(self.seconds)
        } else {
            self.seconds.to_string()
        };
        vec![self.label.clone(), value]
    }
}

impl StatRow for StartEndRow {
    fn cells(&self, human: bool) -> Vec<String> {
        vec![
            self.weekday.to_string(),
            fractional(self.mean_start, human),
            fractional(self.mean_end, human),
        ]
    }
}

/// Rows of one statistic, or nothing to show.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsPayload<R> {
    NoData,
    Rows {
        header: Option<[&'static str; 2]>,
        rows: Vec<R>,
    },
}

impl<R: Serialize> Serialize for StatsPayload<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StatsPayload::NoData => serializer.serialize_u8(0),
            StatsPayload::Rows { header, rows } => {
                let len = rows.len() + usize::from(header.is_some());
                let mut seq = serializer.serialize_seq(Some(len))?;
                if let Some(h) = header {
                    seq.serialize_element(h)?;
                }
                for row in rows {
                    seq.serialize_element(row)?;
                }
                seq.end()
            }
        }
    }
}

impl<R: StatRow> StatsPayload<R> {
    pub fn is_empty(&self) -> bool {
        match self {
            StatsPayload::NoData => true,
            StatsPayload::Rows { rows, .. } => rows.is_empty(),
        }
    }

    fn cell_rows(&self, human: bool) -> Vec<Vec<String>> {
        match self {
            StatsPayload::NoData => Vec::new(),
            StatsPayload::Rows { rows, .. } => rows.iter().map(|r| r.cells(human)).collect(),
        }
    }
}

/// One computed statistic, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    MeanTimeWeekday(StatsPayload<MeanTimeRow>),
    PresenceWeekday(StatsPayload<TotalRow>),
    PresenceStartEnd(StatsPayload<StartEndRow>),
    MonthlyPresence(StatsPayload<TotalRow>),
}

impl Report {
    /// Compute the statistic `kind` for `user`. Users without samples give
    /// the no-data payload.
    pub fn build(kind: ChartKind, data: &PresenceData, user: UserId) -> Self {
        let items = data.get(&user);
        match kind {
            ChartKind::MeanTimeWeekday => Report::MeanTimeWeekday(with_items(items, mean_time_weekday)),
            ChartKind::PresenceWeekday => Report::PresenceWeekday(with_items(items, presence_weekday)),
            ChartKind::PresenceStartEnd => Report::PresenceStartEnd(with_items(items, presence_start_end)),
            ChartKind::MonthlyPresence => Report::MonthlyPresence(with_items(items, monthly_presence)),
        }
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            Report::MeanTimeWeekday(_) => ChartKind::MeanTimeWeekday,
            Report::PresenceWeekday(_) => ChartKind::PresenceWeekday,
            Report::PresenceStartEnd(_) => ChartKind::PresenceStartEnd,
            Report::MonthlyPresence(_) => ChartKind::MonthlyPresence,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Report::MeanTimeWeekday(p) => p.is_empty(),
            Report::PresenceWeekday(p) | Report::MonthlyPresence(p) => p.is_empty(),
            Report::PresenceStartEnd(p) => p.is_empty(),
        }
    }

    /// Column titles for table and CSV output.
    pub fn columns(&self) -> Vec<&'static str> {
        match self {
            Report::MeanTimeWeekday(_) => vec!["Weekday", "Mean time (s)"],
            Report::PresenceWeekday(_) => vec!["Weekday", "Presence (s)"],
            Report::PresenceStartEnd(_) => vec!["Weekday", "Start (s)", "End (s)"],
            Report::MonthlyPresence(_) => vec!["Month", "Presence (s)"],
        }
    }

    pub fn rows(&self, human: bool) -> Vec<Vec<String>> {
        match self {
            Report::MeanTimeWeekday(p) => p.cell_rows(human),
            Report::PresenceWeekday(p) | Report::MonthlyPresence(p) => p.cell_rows(human),
            Report::PresenceStartEnd(p) => p.cell_rows(human),
        }
    }
}

fn with_items<R>(
    items: Option<&UserPresence>,
    f: impl FnOnce(&UserPresence) -> StatsPayload<R>,
) -> StatsPayload<R> {
    match items {
        Some(items) if !items.is_empty() => f(items),
        _ => StatsPayload::NoData,
    }
}

/// Mean presence interval per weekday.
pub fn mean_time_weekday(items: &UserPresence) -> StatsPayload<MeanTimeRow> {
    let rows = WEEKDAYS
        .iter()
        .zip(group_by_weekday(items))
        .map(|(weekday, intervals)| MeanTimeRow {
            weekday: *weekday,
            mean_seconds: bucket_mean(&intervals),
        })
        .collect();
    StatsPayload::Rows { header: None, rows }
}

/// Total presence per weekday, led by a header row.
pub fn presence_weekday(items: &UserPresence) -> StatsPayload<TotalRow> {
    let rows = WEEKDAYS
        .iter()
        .zip(group_by_weekday(items))
        .map(|(weekday, intervals)| TotalRow {
            label: weekday.to_string(),
            seconds: intervals.iter().sum(),
        })
        .collect();
    StatsPayload::Rows {
        header: Some(["Weekday", "Presence (s)"]),
        rows,
    }
}

/// Mean start and mean end time per weekday.
pub fn presence_start_end(items: &UserPresence) -> StatsPayload<StartEndRow> {
    let rows = WEEKDAYS
        .iter()
        .zip(group_by_start_end(items))
        .map(|(weekday, bucket)| StartEndRow {
            weekday: *weekday,
            mean_start: bucket_mean(&bucket.starts),
            mean_end: bucket_mean(&bucket.ends),
        })
        .collect();
    StatsPayload::Rows { header: None, rows }
}

/// Total presence per month, oldest first, led by a header row.
pub fn monthly_presence(items: &UserPresence) -> StatsPayload<TotalRow> {
    let rows = group_by_months(items)
        .into_iter()
        .map(|(label, seconds)| TotalRow { label, seconds })
        .collect();
    StatsPayload::Rows {
        header: Some(["Month", "Presence (s)"]),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PresenceEntry;
    use chrono::{NaiveDate, NaiveTime};
    use serde_json::json;

    fn sample() -> PresenceData {
        let mut items = UserPresence::new();
        // Tuesday
        items.insert(
            NaiveDate::from_ymd_opt(2013, 9, 10).unwrap(),
            PresenceEntry::new(
                NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            ),
        );
        // Tuesday, next week
        items.insert(
            NaiveDate::from_ymd_opt(2013, 9, 17).unwrap(),
            PresenceEntry::new(
                NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            ),
        );
        let mut data = PresenceData::new();
        data.insert(10, items);
        data
    }

    #[test]
    fn mean_time_weekday_has_seven_rows() {
        let report = Report::build(ChartKind::MeanTimeWeekday, &sample(), 10);
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v.as_array().unwrap().len(), 7);
        assert_eq!(v[0], json!(["Mon", 0]));
        assert!(v[0][1].is_u64());
        assert_eq!(v[1], json!(["Tue", 21600.0]));
    }

    #[test]
    fn presence_weekday_is_led_by_header() {
        let report = Report::build(ChartKind::PresenceWeekday, &sample(), 10);
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v[0], json!(["Weekday", "Presence (s)"]));
        assert_eq!(v[2], json!(["Tue", 43200]));
        assert_eq!(v.as_array().unwrap().len(), 8);
    }

    #[test]
    fn start_end_reports_mean_clock_times() {
        let report = Report::build(ChartKind::PresenceStartEnd, &sample(), 10);
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v[1], json!(["Tue", 30600.0, 52200.0]));
        assert_eq!(v[6], json!(["Sun", 0, 0]));
    }

    #[test]
    fn monthly_presence_sorted_with_header() {
        let report = Report::build(ChartKind::MonthlyPresence, &sample(), 10);
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v, json!([["Month", "Presence (s)"], ["2013.09", 43200]]));
    }

    #[test]
    fn unknown_user_gives_sentinel_zero() {
        for kind in ChartKind::ALL {
            let report = Report::build(kind, &sample(), 99);
            assert!(report.is_empty());
            assert_eq!(report.kind(), kind);
            assert_eq!(serde_json::to_value(&report).unwrap(), json!(0));
        }
    }

    #[test]
    fn human_cells_format_seconds() {
        let report = Report::build(ChartKind::PresenceStartEnd, &sample(), 10);
        let rows = report.rows(true);
        assert_eq!(rows[1], vec!["Tue", "08:30:00", "14:30:00"]);
        let raw = report.rows(false);
        assert_eq!(raw[1], vec!["Tue", "30600", "52200"]);
    }
}
