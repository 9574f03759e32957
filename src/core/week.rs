//! Week and period resolution: pure date arithmetic on naive local dates.

use crate::models::settings::WorkPattern;
use chrono::{Datelike, Days, NaiveDate};
use std::collections::HashSet;

pub const WEEKDAY_LABELS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

/// Monday that starts the ISO week containing `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    // Monday = 0 ... Sunday = 6
    let offset = date.weekday().num_days_from_monday();
    date - Days::new(offset as u64)
}

/// Monday through Friday of the week containing `date`.
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 5] {
    let monday = monday_of(date);
    std::array::from_fn(|i| monday + Days::new(i as u64))
}

/// Same as [`week_dates`], formatted `YYYY-MM-DD`.
pub fn week_date_keys(date: NaiveDate) -> [String; 5] {
    week_dates(date).map(|d| d.format("%Y-%m-%d").to_string())
}

/// First and last day of the weekly or fortnightly period that starts on the
/// Monday of `reference`.
pub fn period_dates(pattern: WorkPattern, reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = monday_of(reference);
    let end = start + Days::new(pattern.span_days() as u64);
    (start, end)
}

/// First Monday, from the week of `today` onwards, not already in `existing`.
pub fn next_available_monday(existing: &HashSet<NaiveDate>, today: NaiveDate) -> NaiveDate {
    let mut candidate = monday_of(today);
    while existing.contains(&candidate) {
        candidate = candidate + Days::new(7);
    }
    candidate
}

/// "YYYY-MM-DD - YYYY-MM-DD", Monday to Friday.
pub fn format_week_range(monday: NaiveDate) -> String {
    let friday = monday + Days::new(4);
    format!(
        "{} - {}",
        monday.format("%Y-%m-%d"),
        friday.format("%Y-%m-%d")
    )
}

/// Position of `date` inside its Mon-Fri week, `None` on weekends.
pub fn weekday_index(date: NaiveDate) -> Option<usize> {
    let idx = date.weekday().num_days_from_monday() as usize;
    (idx < 5).then_some(idx)
}
