//! Weekly grouping of the stored collection and selection totals.

use crate::core::hours::week_total;
use crate::core::week::{format_week_range, monday_of};
use crate::models::day_record::DayRecord;
use crate::models::week_summary::WeekSummary;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// One summary per distinct Monday present in `records`, most recent first.
/// Totals use each record's stored PTO. Records with an unparseable date are
/// left out.
pub fn group_by_week(records: &[DayRecord]) -> Vec<WeekSummary> {
    let mut groups: BTreeMap<NaiveDate, Vec<DayRecord>> = BTreeMap::new();

    for record in records {
        if let Some(date) = record.parsed_date() {
            groups
                .entry(monday_of(date))
                .or_default()
                .push(record.clone());
        }
    }

    groups
        .into_iter()
        .rev()
        .map(|(monday, entries)| {
            let total_hours = week_total(&entries, None);
            WeekSummary {
                monday,
                date_range: format_week_range(monday),
                entries,
                total_hours,
            }
        })
        .collect()
}

/// Sum of the already computed totals of the selected weeks.
pub fn selected_total(summaries: &[WeekSummary], selected: &[NaiveDate]) -> f64 {
    summaries
        .iter()
        .filter(|w| selected.contains(&w.monday))
        .map(|w| w.total_hours)
        .sum()
}

/// Add `monday` to the selection, or remove it if already selected.
pub fn toggle_selection(selected: &mut Vec<NaiveDate>, monday: NaiveDate) {
    if let Some(pos) = selected.iter().position(|m| *m == monday) {
        selected.remove(pos);
    } else {
        selected.push(monday);
    }
}
