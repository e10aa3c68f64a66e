//! Wall-clock parsing and arithmetic.
//!
//! Event times carry no timezone; they are local wall-clock values for the configured campus
//! zone. All arithmetic here clamps to a single day, `00:00:00..=23:59:59`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::ingest::IngestError;

/// Seconds from midnight of the last representable second of a day.
pub const LAST_SECOND_OF_DAY: i64 = 86_399;

/// Parses an `HH:MM:SS` or `HH:MM` wall-clock time.
///
/// # Returns
/// - `Ok(NaiveTime)` - Parsed time
/// - `Err(IngestError::InvalidTime)` - The string is not a valid wall-clock time
pub fn parse_wall_time(value: &str) -> Result<NaiveTime, IngestError> {
    let trimmed = value.trim();

    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| IngestError::InvalidTime(value.to_string()))
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, IngestError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| IngestError::InvalidDate(value.to_string()))
}

/// Parses an upstream local date-time such as `2024-09-03T09:00:00` or `2024-09-03 09:00`.
pub fn parse_wall_datetime(value: &str) -> Result<NaiveDateTime, IngestError> {
    let trimmed = value.trim();
    let (date, time) = trimmed
        .split_once('T')
        .or_else(|| trimmed.split_once(' '))
        .ok_or_else(|| IngestError::InvalidTime(value.to_string()))?;

    Ok(parse_date(date)?.and_time(parse_wall_time(time)?))
}

/// Shifts a wall-clock time by `offset_secs`, clamping the result to the same day.
pub fn offset_clamped(time: NaiveTime, offset_secs: i64) -> NaiveTime {
    let shifted =
        (i64::from(time.num_seconds_from_midnight()) + offset_secs).clamp(0, LAST_SECOND_OF_DAY);

    NaiveTime::from_num_seconds_from_midnight_opt(shifted as u32, 0).unwrap_or(time)
}

/// Signed number of seconds from `start` to `end` within one day.
pub fn seconds_between(start: NaiveTime, end: NaiveTime) -> i64 {
    i64::from(end.num_seconds_from_midnight()) - i64::from(start.num_seconds_from_midnight())
}
