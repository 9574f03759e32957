//! Time utilities: parsing HH:MM and minutes of day.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Minutes since midnight for an `HH:MM` string.
pub fn minutes_of_day(t: &str) -> Option<i64> {
    parse_time(t).map(|time| (time.hour() * 60 + time.minute()) as i64)
}

/// Normalize a user supplied time to `HH:MM`; an empty string stays empty
/// (clears the field).
pub fn normalize_time_arg(input: &str) -> AppResult<String> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }
    let t = parse_time(input).ok_or_else(|| AppError::InvalidTime(input.to_string()))?;
    Ok(t.format("%H:%M").to_string())
}
