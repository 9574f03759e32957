//! One calendar day of logged attendance and leave.
//!
//! The serialized shape (camelCase keys) is the persisted blob format, so
//! records written by older versions (legacy `ptoHours`, numbers stored as
//! strings) load unchanged.

use crate::models::pto::{PtoValue, parse_float};
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub id: String,
    /// `YYYY-MM-DD`, unique within the stored collection.
    pub date: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub start_time: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub finish_time: String,
    #[serde(default, deserialize_with = "minutes_or_zero")]
    pub lunch_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_time_off_hours: Option<PtoValue>,
    /// Legacy spelling of `paid_time_off_hours`, read as a fallback only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pto_hours: Option<PtoValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl DayRecord {
    /// Blank placeholder for a displayed day; the id is the date itself.
    pub fn placeholder(date: NaiveDate) -> Self {
        let key = date.format("%Y-%m-%d").to_string();
        Self {
            id: key.clone(),
            date: key,
            notes: Some(String::new()),
            ..Default::default()
        }
    }

    /// Convenience constructor used by callers that already have the values.
    pub fn with_times(date: &str, start: &str, finish: &str, lunch_minutes: u32) -> Self {
        Self {
            id: date.to_string(),
            date: date.to_string(),
            start_time: start.to_string(),
            finish_time: finish.to_string(),
            lunch_minutes,
            ..Default::default()
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// Stored PTO: the current field when present, otherwise the legacy one.
    pub fn stored_pto(&self) -> Option<&PtoValue> {
        self.paid_time_off_hours
            .as_ref()
            .or(self.pto_hours.as_ref())
    }

    pub fn has_times(&self) -> bool {
        !self.start_time.is_empty() && !self.finish_time.is_empty()
    }

    /// No times and no lunch logged.
    pub fn is_blank(&self) -> bool {
        self.start_time.is_empty() && self.finish_time.is_empty() && self.lunch_minutes == 0
    }
}

// Older versions stored `null` where the lunch box held `"."`, and could write
// fractional or textual lunch minutes. Nulls load as empty / 0, numbers are
// rounded, anything unusable is 0.

fn string_or_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMinutes {
    Number(f64),
    Text(String),
    Other(#[allow(dead_code)] IgnoredAny),
}

fn minutes_or_zero<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    let minutes = match Option::<RawMinutes>::deserialize(d)? {
        Some(RawMinutes::Number(n)) => Some(n),
        Some(RawMinutes::Text(s)) => parse_float(&s),
        Some(RawMinutes::Other(_)) | None => None,
    };
    Ok(minutes
        .filter(|m| m.is_finite() && *m > 0.0)
        .map(|m| m.round().min(u32::MAX as f64) as u32)
        .unwrap_or(0))
}
