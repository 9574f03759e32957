//! Operations on the whole stored collection.
//!
//! The collection is read in full, changed in memory and written back in full.

use crate::core::draft::{TimeField, WeekDraft};
use crate::core::grouping::group_by_week;
use crate::core::week::{monday_of, next_available_monday, week_date_keys, weekday_index};
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::week_summary::WeekSummary;
use crate::storage::{KeyValueStore, Storage};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Field changes for a single day; `None` leaves the field as it is.
#[derive(Debug, Clone, Default)]
pub struct DayPatch {
    pub start: Option<String>,
    pub finish: Option<String>,
    pub lunch_hours: Option<String>,
    /// Minutes added to (or, when negative, taken from) the lunch break,
    /// applied after `lunch_hours`.
    pub lunch_step: Option<i64>,
    pub pto: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<String>,
}

impl DayPatch {
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
            && self.finish.is_none()
            && self.lunch_hours.is_none()
            && self.lunch_step.is_none()
            && self.pto.is_none()
            && self.notes.is_none()
            && self.tags.is_none()
    }

    fn apply(&self, draft: &mut WeekDraft, day: usize) {
        if let Some(v) = &self.start {
            draft.set_time(day, TimeField::Start, v);
        }
        if let Some(v) = &self.finish {
            draft.set_time(day, TimeField::Finish, v);
        }
        if let Some(v) = &self.lunch_hours {
            draft.set_lunch_hours(day, v);
        }
        if let Some(delta) = self.lunch_step {
            draft.adjust_lunch(day, delta);
        }
        if let Some(v) = &self.pto {
            draft.set_pto(day, v);
        }
        if let Some(v) = &self.notes {
            draft.set_notes(day, v);
        }
        if let Some(v) = &self.tags {
            draft.set_tags(day, v);
        }
    }
}

pub struct SheetLogic;

impl SheetLogic {
    /// Draft for the week containing `date`, filled from the store.
    pub fn load_week<S: KeyValueStore>(
        storage: &Storage<S>,
        date: NaiveDate,
    ) -> AppResult<WeekDraft> {
        let all = storage.get_entries()?;
        Ok(WeekDraft::load(date, &all))
    }

    pub fn summaries<S: KeyValueStore>(storage: &Storage<S>) -> AppResult<Vec<WeekSummary>> {
        Ok(group_by_week(&storage.get_entries()?))
    }

    /// Next Monday, from this week on, that has no stored week yet.
    pub fn next_free_monday<S: KeyValueStore>(
        storage: &Storage<S>,
        today: NaiveDate,
    ) -> AppResult<NaiveDate> {
        let existing: HashSet<NaiveDate> = Self::summaries(storage)?
            .into_iter()
            .map(|w| w.monday)
            .collect();
        Ok(next_available_monday(&existing, today))
    }

    /// Persist a brand new week. Refused when any of its days is stored.
    pub fn create_week<S: KeyValueStore>(
        storage: &mut Storage<S>,
        draft: &WeekDraft,
    ) -> AppResult<()> {
        let mut all = storage.get_entries()?;
        let keys = draft.date_keys();

        if all.iter().any(|r| keys.contains(&r.date)) {
            return Err(AppError::WeekExists(draft.monday().to_string()));
        }

        all.extend(draft.finalize());
        storage.save_entries(&all)?;
        storage.audit(
            "add",
            &draft.monday().to_string(),
            &format!("New week {} ({} h)", draft.date_range(), draft.summary()),
        );
        Ok(())
    }

    /// Replace the draft's five days in the store, keeping the collection
    /// sorted by date.
    pub fn save_week<S: KeyValueStore>(
        storage: &mut Storage<S>,
        draft: &WeekDraft,
    ) -> AppResult<()> {
        let keys = draft.date_keys();
        let mut all: Vec<DayRecord> = storage
            .get_entries()?
            .into_iter()
            .filter(|r| !keys.contains(&r.date))
            .collect();

        all.extend(draft.finalize());
        all.sort_by(|a, b| a.date.cmp(&b.date));

        storage.save_entries(&all)?;
        storage.audit(
            "edit",
            &draft.monday().to_string(),
            &format!("Saved week {} ({} h)", draft.date_range(), draft.summary()),
        );
        Ok(())
    }

    /// Remove every record on the five days of the week containing `date`.
    /// Returns how many records were removed.
    pub fn delete_week<S: KeyValueStore>(
        storage: &mut Storage<S>,
        date: NaiveDate,
    ) -> AppResult<usize> {
        let keys = week_date_keys(date);
        let all = storage.get_entries()?;
        let before = all.len();
        let kept: Vec<DayRecord> = all
            .into_iter()
            .filter(|r| !keys.contains(&r.date))
            .collect();
        let removed = before - kept.len();

        if removed > 0 {
            storage.save_entries(&kept)?;
            storage.audit(
                "del",
                &monday_of(date).to_string(),
                &format!("Deleted week ({} records)", removed),
            );
        }
        Ok(removed)
    }

    /// Apply `patch` to one weekday and save its week.
    pub fn upsert_day<S: KeyValueStore>(
        storage: &mut Storage<S>,
        date: NaiveDate,
        patch: &DayPatch,
    ) -> AppResult<WeekDraft> {
        let day = weekday_index(date).ok_or_else(|| AppError::NotAWeekday(date.to_string()))?;
        let mut draft = Self::load_week(storage, date)?;
        patch.apply(&mut draft, day);
        Self::save_week(storage, &draft)?;
        Ok(draft)
    }

    /// Blank one weekday and save its week.
    pub fn clear_day<S: KeyValueStore>(
        storage: &mut Storage<S>,
        date: NaiveDate,
    ) -> AppResult<WeekDraft> {
        let day = weekday_index(date).ok_or_else(|| AppError::NotAWeekday(date.to_string()))?;
        let mut draft = Self::load_week(storage, date)?;
        draft.clear_day(day);
        Self::save_week(storage, &draft)?;
        Ok(draft)
    }

    /// Copy Monday to the rest of the week and save it.
    pub fn fill_down<S: KeyValueStore>(
        storage: &mut Storage<S>,
        date: NaiveDate,
    ) -> AppResult<WeekDraft> {
        let mut draft = Self::load_week(storage, date)?;
        if !draft.fill_down() {
            return Err(AppError::NothingToFillDown(draft.monday().to_string()));
        }
        Self::save_week(storage, &draft)?;
        Ok(draft)
    }
}
