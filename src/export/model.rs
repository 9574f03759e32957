use crate::core::hours::{days_logged, format_hours, resolve_pto, worked_hours, worked_minutes};
use crate::models::day_record::DayRecord;
use crate::models::week_summary::WeekSummary;
use serde::Serialize;

/// One row per week.
#[derive(Serialize, Clone, Debug)]
pub struct WeekExport {
    pub monday: String,
    pub date_range: String,
    pub days: usize,
    pub worked_hours: String,
    pub pto_hours: String,
    pub total_hours: String,
}

impl From<&WeekSummary> for WeekExport {
    fn from(w: &WeekSummary) -> Self {
        let worked: f64 = w.entries.iter().map(worked_hours).sum();
        let pto: f64 = w.entries.iter().map(|r| resolve_pto(r, None)).sum();
        Self {
            monday: w.monday_key(),
            date_range: w.date_range.clone(),
            days: days_logged(&w.entries),
            worked_hours: format_hours(worked),
            pto_hours: format_hours(pto),
            total_hours: format_hours(w.total_hours),
        }
    }
}

/// One row per stored day.
#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub date: String,
    pub start_time: String,
    pub finish_time: String,
    pub lunch_minutes: u32,
    pub worked_minutes: i64,
    pub pto_hours: String,
    pub notes: String,
    pub tags: String,
}

impl From<&DayRecord> for DayExport {
    fn from(r: &DayRecord) -> Self {
        Self {
            date: r.date.clone(),
            start_time: r.start_time.clone(),
            finish_time: r.finish_time.clone(),
            lunch_minutes: r.lunch_minutes,
            worked_minutes: worked_minutes(r),
            pto_hours: format_hours(resolve_pto(r, None)),
            notes: r.notes.clone().unwrap_or_default(),
            tags: r.tags.as_deref().map(|t| t.join(",")).unwrap_or_default(),
        }
    }
}
