//! Working copy of one Mon-Fri week while it is being edited.
//!
//! The draft keeps the five records together with the raw text of the lunch
//! and PTO inputs, so transient values like `"."` never reach the records
//! themselves. `finalize()` turns the draft into records ready to persist.

use crate::core::hours::week_summary;
use crate::core::week::{format_week_range, monday_of, week_dates};
use crate::models::day_record::DayRecord;
use crate::models::pto::{PtoInput, PtoValue, parse_float};
use crate::utils::formatting::lunch_minutes_to_input;
use chrono::NaiveDate;

/// Upper bound of the lunch stepper.
pub const MAX_LUNCH_STEP_MINUTES: u32 = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Start,
    Finish,
}

#[derive(Debug, Clone)]
pub struct WeekDraft {
    monday: NaiveDate,
    entries: Vec<DayRecord>,
    lunch_inputs: Vec<String>,
    pto_inputs: Vec<PtoInput>,
}

impl WeekDraft {
    /// Five blank days for the week containing `date`.
    pub fn blank(date: NaiveDate) -> Self {
        let entries = week_dates(date).map(DayRecord::placeholder).to_vec();
        Self::from_entries(monday_of(date), entries)
    }

    /// The week containing `date`, filled from `stored` where a record exists.
    pub fn load(date: NaiveDate, stored: &[DayRecord]) -> Self {
        let entries = week_dates(date)
            .iter()
            .map(|d| {
                let key = d.format("%Y-%m-%d").to_string();
                stored
                    .iter()
                    .find(|r| r.date == key)
                    .cloned()
                    .unwrap_or_else(|| DayRecord::placeholder(*d))
            })
            .collect();
        Self::from_entries(monday_of(date), entries)
    }

    fn from_entries(monday: NaiveDate, entries: Vec<DayRecord>) -> Self {
        let lunch_inputs = entries
            .iter()
            .map(|e| lunch_minutes_to_input(e.lunch_minutes))
            .collect();
        let pto_inputs = entries
            .iter()
            .map(|e| PtoInput::from(e.stored_pto()))
            .collect();
        Self {
            monday,
            entries,
            lunch_inputs,
            pto_inputs,
        }
    }

    pub fn monday(&self) -> NaiveDate {
        self.monday
    }

    pub fn date_range(&self) -> String {
        format_week_range(self.monday)
    }

    pub fn entries(&self) -> &[DayRecord] {
        &self.entries
    }

    pub fn lunch_inputs(&self) -> &[String] {
        &self.lunch_inputs
    }

    pub fn pto_inputs(&self) -> &[PtoInput] {
        &self.pto_inputs
    }

    pub fn date_keys(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.date.clone()).collect()
    }

    /// Live total with the PTO inputs overriding stored values.
    pub fn summary(&self) -> String {
        week_summary(&self.entries, Some(&self.pto_inputs))
    }

    // Out-of-range day indexes are ignored by every setter.

    pub fn set_time(&mut self, day: usize, field: TimeField, value: &str) {
        if let Some(entry) = self.entries.get_mut(day) {
            match field {
                TimeField::Start => entry.start_time = value.to_string(),
                TimeField::Finish => entry.finish_time = value.to_string(),
            }
        }
    }

    pub fn set_notes(&mut self, day: usize, notes: &str) {
        if let Some(entry) = self.entries.get_mut(day) {
            entry.notes = Some(notes.to_string());
        }
    }

    /// Comma separated tags, trimmed; an empty string clears them.
    pub fn set_tags(&mut self, day: usize, raw: &str) {
        if let Some(entry) = self.entries.get_mut(day) {
            let tags = if raw.trim().is_empty() {
                Vec::new()
            } else {
                raw.split(',').map(|t| t.trim().to_string()).collect()
            };
            entry.tags = Some(tags);
        }
    }

    /// Lunch typed as hours (`"0.5"`); blank or unparseable means no lunch.
    pub fn set_lunch_hours(&mut self, day: usize, raw: &str) {
        if day >= self.entries.len() {
            return;
        }
        let minutes = parse_float(raw)
            .filter(|h| h.is_finite() && *h > 0.0)
            .map(|h| (h * 60.0).round() as u32)
            .unwrap_or(0);
        self.entries[day].lunch_minutes = minutes;
        self.lunch_inputs[day] = raw.to_string();
    }

    /// Step the lunch duration by `delta` minutes, kept within
    /// `0..=MAX_LUNCH_STEP_MINUTES`. A lunch already above the cap is not
    /// raised further.
    pub fn adjust_lunch(&mut self, day: usize, delta: i64) {
        if day >= self.entries.len() {
            return;
        }
        let current = self.entries[day].lunch_minutes as i64;
        let stepped = if delta > 0 {
            (current + delta).min(current.max(MAX_LUNCH_STEP_MINUTES as i64))
        } else {
            (current + delta).max(0)
        };
        let minutes = stepped as u32;
        self.entries[day].lunch_minutes = minutes;
        self.lunch_inputs[day] = format!("{:.2}", minutes as f64 / 60.0);
    }

    pub fn set_pto(&mut self, day: usize, raw: &str) {
        if let Some(slot) = self.pto_inputs.get_mut(day) {
            *slot = PtoInput::new(raw);
        }
    }

    /// Blank a single day: times, lunch, notes and PTO input.
    pub fn clear_day(&mut self, day: usize) {
        if day >= self.entries.len() {
            return;
        }
        let entry = &mut self.entries[day];
        entry.start_time.clear();
        entry.finish_time.clear();
        entry.lunch_minutes = 0;
        entry.notes = Some(String::new());
        self.lunch_inputs[day].clear();
        self.pto_inputs[day] = PtoInput::default();
    }

    /// Monday is complete and every other day is still empty.
    pub fn can_fill_down(&self) -> bool {
        let Some((monday, rest)) = self.entries.split_first() else {
            return false;
        };
        monday.has_times() && rest.iter().all(DayRecord::is_blank)
    }

    /// Copy Monday's times, lunch and PTO to Tuesday-Friday. Returns false
    /// (and leaves the draft untouched) when Monday has no complete times.
    pub fn fill_down(&mut self) -> bool {
        let Some(monday) = self.entries.first().cloned() else {
            return false;
        };
        if !monday.has_times() {
            return false;
        }
        let lunch_input = self.lunch_inputs[0].clone();
        let pto_input = self.pto_inputs[0].clone();

        for day in 1..self.entries.len() {
            let entry = &mut self.entries[day];
            entry.start_time = monday.start_time.clone();
            entry.finish_time = monday.finish_time.clone();
            entry.lunch_minutes = monday.lunch_minutes;
            self.lunch_inputs[day] = lunch_input.clone();
            self.pto_inputs[day] = pto_input.clone();
        }
        true
    }

    /// Records to persist: PTO taken from the inputs into the current field,
    /// the legacy field dropped.
    pub fn finalize(&self) -> Vec<DayRecord> {
        self.entries
            .iter()
            .zip(self.pto_inputs.iter())
            .map(|(entry, input)| DayRecord {
                paid_time_off_hours: input.to_stored().map(PtoValue::Number),
                pto_hours: None,
                ..entry.clone()
            })
            .collect()
    }
}
