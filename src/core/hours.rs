//! Hours aggregation over day records.
//!
//! Nothing in here fails: partially filled or invalid input (missing times,
//! a lone `.` in a PTO box, finish before start) contributes 0.

use crate::models::day_record::DayRecord;
use crate::models::pto::PtoInput;
use crate::utils::time::minutes_of_day;

/// Net worked minutes, clamped at 0. Missing or unparseable times give 0.
pub fn worked_minutes(record: &DayRecord) -> i64 {
    if !record.has_times() {
        return 0;
    }
    let (Some(start), Some(finish)) = (
        minutes_of_day(&record.start_time),
        minutes_of_day(&record.finish_time),
    ) else {
        return 0;
    };
    (finish - start - record.lunch_minutes as i64).max(0)
}

pub fn worked_hours(record: &DayRecord) -> f64 {
    worked_minutes(record) as f64 / 60.0
}

pub fn total_hours(records: &[DayRecord]) -> f64 {
    records.iter().map(worked_hours).sum()
}

/// PTO hours for `record`: the live override when given, otherwise the
/// stored value (current field, then legacy field).
pub fn resolve_pto(record: &DayRecord, override_input: Option<&PtoInput>) -> f64 {
    match override_input {
        Some(input) => input.hours(),
        None => record.stored_pto().map(|v| v.hours()).unwrap_or(0.0),
    }
}

/// Worked plus PTO hours for one record.
pub fn day_total(record: &DayRecord, override_input: Option<&PtoInput>) -> f64 {
    worked_hours(record) + resolve_pto(record, override_input)
}

/// Days with complete times or stored PTO; blank placeholders do not count.
pub fn days_logged(records: &[DayRecord]) -> usize {
    records
        .iter()
        .filter(|r| r.has_times() || resolve_pto(r, None) > 0.0)
        .count()
}

/// Worked + PTO across `records`. When `overrides` is supplied it is matched
/// by position and a missing slot counts as no PTO (stored fields are not
/// consulted for an actively edited week).
pub fn week_total(records: &[DayRecord], overrides: Option<&[PtoInput]>) -> f64 {
    let blank = PtoInput::default();
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let ov = overrides.map(|list| list.get(i).unwrap_or(&blank));
            day_total(record, ov)
        })
        .sum()
}

/// [`week_total`] rendered with two decimals, e.g. `"14.50"`.
pub fn week_summary(records: &[DayRecord], overrides: Option<&[PtoInput]>) -> String {
    format_hours(week_total(records, overrides))
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Records with `start <= date <= end` (string comparison on ISO dates),
/// original order preserved.
pub fn filter_by_date_range(records: &[DayRecord], start: &str, end: &str) -> Vec<DayRecord> {
    records
        .iter()
        .filter(|r| r.date.as_str() >= start && r.date.as_str() <= end)
        .cloned()
        .collect()
}
