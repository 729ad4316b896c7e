//! Presence CSV loader.
//!
//! Expected layout, one sample per line:
//! `user_id,YYYY-MM-DD,HH:MM:SS,HH:MM:SS`
//!
//! Lines with a different number of fields (header, footer) are ignored.
//! Lines that do not parse are skipped and reported at debug level.

use crate::errors::{AppError, AppResult};
use crate::models::{PresenceData, PresenceEntry, UserId};
use crate::utils::date::parse_date;
use crate::utils::time::parse_clock;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const FIELDS_PER_ROW: usize = 4;

/// Load presence samples from a CSV file on disk.
pub fn load_presence(path: &Path) -> AppResult<PresenceData> {
    let file = std::fs::File::open(path)?;
    let data = read_presence(file)?;
    info!(
        path = %path.display(),
        users = data.len(),
        "presence data loaded"
    );
    Ok(data)
}

/// Parse presence samples from any reader.
pub fn read_presence<R: Read>(input: R) -> AppResult<PresenceData> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut data = PresenceData::new();

    // undecodable lines are skipped like any other broken line
    for (i, record) in rdr.byte_records().enumerate() {
        let record = record?;
        if record.len() != FIELDS_PER_ROW {
            continue;
        }
        let line = record.position().map(|p| p.line()).unwrap_or(i as u64 + 1);

        let parsed = StringRecord::from_byte_record(record)
            .map_err(|e| AppError::Other(e.utf8_error().to_string()))
            .and_then(|record| parse_row(&record));

        match parsed {
            Ok((user_id, date, entry)) => {
                data.entry(user_id).or_default().insert(date, entry);
            }
            Err(e) => debug!(line, error = %e, "problem with presence line"),
        }
    }

    Ok(data)
}

fn parse_row(record: &StringRecord) -> AppResult<(UserId, NaiveDate, PresenceEntry)> {
    let raw_id = record[0].trim();
    let user_id: UserId = raw_id
        .parse()
        .map_err(|_| AppError::InvalidUserId(raw_id.to_string()))?;

    let raw_date = record[1].trim();
    let date = parse_date(raw_date).ok_or_else(|| AppError::InvalidDate(raw_date.to_string()))?;

    let start = parse_clock(record[2].trim())?;
    let end = parse_clock(record[3].trim())?;

    Ok((user_id, date, PresenceEntry::new(start, end)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    const SAMPLE: &str = "\
user_id,date,start,end
10,2013-09-10,09:39:05,17:59:52
10,2013-09-11,09:19:52,16:07:37
11,2013-09-05,10:18:36,16:41:25
11,2013-09-06,not-a-time,16:41:25
x,2013-09-06,09:00:00,16:41:25
totals,3
";

    #[test]
    fn groups_rows_by_user_and_date() {
        let data = read_presence(SAMPLE.as_bytes()).unwrap();
        assert_eq!(data.keys().copied().collect::<Vec<_>>(), vec![10, 11]);

        let day = NaiveDate::from_ymd_opt(2013, 9, 10).unwrap();
        let entry = data[&10][&day];
        assert_eq!(entry.start, NaiveTime::from_hms_opt(9, 39, 5).unwrap());
        assert_eq!(entry.end, NaiveTime::from_hms_opt(17, 59, 52).unwrap());
    }

    #[test]
    fn skips_header_footer_and_broken_lines() {
        let data = read_presence(SAMPLE.as_bytes()).unwrap();
        assert_eq!(data[&10].len(), 2);
        assert_eq!(data[&11].len(), 1);
    }

    #[test]
    fn undecodable_line_is_skipped() {
        let mut input = b"10,2013-09-10,09:39:05,17:59:52\n".to_vec();
        input.extend_from_slice(b"11,2013-09-11,09:00:00,\xff\xfe\n");
        input.extend_from_slice(b"11,2013-09-12,08:00:00,16:00:00\n");

        let data = read_presence(input.as_slice()).unwrap();
        assert_eq!(data[&10].len(), 1);
        assert_eq!(data[&11].len(), 1);
        assert!(data[&11].contains_key(&NaiveDate::from_ymd_opt(2013, 9, 12).unwrap()));
    }

    #[test]
    fn empty_input_gives_empty_data() {
        let data = read_presence("".as_bytes()).unwrap();
        assert!(data.is_empty());
    }
}
