//! Weekly/fortnightly period report against the user's settings.

use crate::core::hours::{days_logged, filter_by_date_range, resolve_pto, total_hours};
use crate::core::week::period_dates;
use crate::models::day_record::DayRecord;
use crate::models::settings::{Settings, WorkPattern};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodReport {
    pub pattern: WorkPattern,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days_logged: usize,
    pub worked_hours: f64,
    pub pto_hours: f64,
    pub total_hours: f64,
    pub target_hours: f64,
    /// `total_hours - target_hours`
    pub balance: f64,
    pub pay: Option<f64>,
}

/// Totals for the period containing `reference`. `pattern` overrides the
/// one in `settings` when given.
pub fn build_report(
    records: &[DayRecord],
    settings: &Settings,
    pattern: Option<WorkPattern>,
    reference: NaiveDate,
) -> PeriodReport {
    let pattern = pattern.unwrap_or(settings.work_pattern);
    let (start, end) = period_dates(pattern, reference);

    let in_period = filter_by_date_range(
        records,
        &start.format("%Y-%m-%d").to_string(),
        &end.format("%Y-%m-%d").to_string(),
    );

    let worked_hours = total_hours(&in_period);
    let pto_hours: f64 = in_period.iter().map(|r| resolve_pto(r, None)).sum();
    let total = worked_hours + pto_hours;

    // The target is for one whole period of the chosen pattern.
    let target_hours = settings.target_hours;

    PeriodReport {
        pattern,
        start,
        end,
        days_logged: days_logged(&in_period),
        worked_hours,
        pto_hours,
        total_hours: total,
        target_hours,
        balance: total - target_hours,
        pay: settings.hourly_rate.map(|rate| total * rate),
    }
}
