use crate::models::day_record::DayRecord;
use chrono::NaiveDate;
use serde::Serialize;

/// Aggregated hours for the Monday-Friday week anchored at `monday`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekSummary {
    pub monday: NaiveDate,
    pub date_range: String,
    pub entries: Vec<DayRecord>,
    pub total_hours: f64,
}

impl WeekSummary {
    pub fn monday_key(&self) -> String {
        self.monday.format("%Y-%m-%d").to_string()
    }
}
