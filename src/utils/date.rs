use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a CLI date argument, `today` when absent.
pub fn parse_date_arg(s: Option<&str>) -> AppResult<NaiveDate> {
    match s {
        Some(raw) => parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string())),
        None => Ok(today()),
    }
}

/// Comma separated list of dates, e.g. `2025-05-26,2025-06-02`.
pub fn parse_date_list(s: &str) -> AppResult<Vec<NaiveDate>> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| parse_date(p).ok_or_else(|| AppError::InvalidDate(p.to_string())))
        .collect()
}
