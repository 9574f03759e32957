use rtimesheet::core::draft::{MAX_LUNCH_STEP_MINUTES, TimeField, WeekDraft};
use rtimesheet::core::sheet::{DayPatch, SheetLogic};
use rtimesheet::errors::AppError;
use rtimesheet::models::{DayRecord, PtoValue};
use rtimesheet::storage::{MemoryStore, Storage};

mod common;
use common::{record, record_with_pto, ymd};

fn full_week(draft: &mut WeekDraft, start: &str, finish: &str, lunch: &str) {
    for day in 0..5 {
        draft.set_time(day, TimeField::Start, start);
        draft.set_time(day, TimeField::Finish, finish);
        draft.set_lunch_hours(day, lunch);
    }
}

// ---------------------------
// WeekDraft
// ---------------------------

#[test]
fn test_blank_draft_has_five_placeholders() {
    let draft = WeekDraft::blank(ymd(2025, 5, 28));
    assert_eq!(draft.monday(), ymd(2025, 5, 26));
    assert_eq!(draft.date_range(), "2025-05-26 - 2025-05-30");
    assert_eq!(draft.entries().len(), 5);

    let first = &draft.entries()[0];
    assert_eq!(first.id, "2025-05-26");
    assert_eq!(first.date, "2025-05-26");
    assert_eq!(first.start_time, "");
    assert_eq!(first.lunch_minutes, 0);
    assert_eq!(first.notes.as_deref(), Some(""));

    assert_eq!(draft.summary(), "0.00");
}

#[test]
fn test_load_fills_stored_days_and_placeholders() {
    let stored = vec![
        record("2025-05-26", "09:00", "17:00", 60),
        record_with_pto("2025-05-28", "", "", 0, 7.5),
        record("2025-06-02", "09:00", "17:00", 60),
    ];
    let draft = WeekDraft::load(ymd(2025, 5, 30), &stored);

    assert_eq!(draft.entries()[0].start_time, "09:00");
    assert!(draft.entries()[1].is_blank());
    assert_eq!(draft.pto_inputs()[2].as_str(), "7.5");
    assert_eq!(draft.lunch_inputs()[0], "1");
    assert_eq!(draft.summary(), "14.50");
}

#[test]
fn test_load_seeds_pto_input_from_legacy_field() {
    let mut legacy = record("2025-05-26", "", "", 0);
    legacy.pto_hours = Some(PtoValue::Text("4".into()));
    let draft = WeekDraft::load(ymd(2025, 5, 26), &[legacy]);
    assert_eq!(draft.pto_inputs()[0].as_str(), "4");
    assert_eq!(draft.summary(), "4.00");
}

#[test]
fn test_summary_uses_live_pto_inputs() {
    let stored = vec![record_with_pto("2025-05-26", "09:00", "17:00", 60, 8.0)];
    let mut draft = WeekDraft::load(ymd(2025, 5, 26), &stored);
    assert_eq!(draft.summary(), "15.00");

    draft.set_pto(0, ".");
    assert_eq!(draft.summary(), "7.00");

    draft.set_pto(0, "4.");
    assert_eq!(draft.summary(), "11.00");

    draft.set_pto(0, "");
    assert_eq!(draft.summary(), "7.00");
}

#[test]
fn test_set_lunch_hours() {
    let mut draft = WeekDraft::blank(ymd(2025, 5, 26));
    draft.set_time(0, TimeField::Start, "09:00");
    draft.set_time(0, TimeField::Finish, "17:30");

    draft.set_lunch_hours(0, "0.5");
    assert_eq!(draft.entries()[0].lunch_minutes, 30);
    assert_eq!(draft.lunch_inputs()[0], "0.5");
    assert_eq!(draft.summary(), "8.00");

    draft.set_lunch_hours(0, ".");
    assert_eq!(draft.entries()[0].lunch_minutes, 0);
    assert_eq!(draft.lunch_inputs()[0], ".");

    draft.set_lunch_hours(0, "abc");
    assert_eq!(draft.entries()[0].lunch_minutes, 0);
}

#[test]
fn test_adjust_lunch_never_negative() {
    let mut draft = WeekDraft::blank(ymd(2025, 5, 26));
    draft.set_lunch_hours(1, "1");
    draft.adjust_lunch(1, 15);
    assert_eq!(draft.entries()[1].lunch_minutes, 75);
    assert_eq!(draft.lunch_inputs()[1], "1.25");

    draft.adjust_lunch(1, -200);
    assert_eq!(draft.entries()[1].lunch_minutes, 0);
    assert_eq!(draft.lunch_inputs()[1], "0.00");
}

#[test]
fn test_adjust_lunch_stops_at_four_hours() {
    let mut draft = WeekDraft::blank(ymd(2025, 5, 26));
    draft.set_lunch_hours(0, "3.5");
    draft.adjust_lunch(0, 15);
    assert_eq!(draft.entries()[0].lunch_minutes, 225);
    draft.adjust_lunch(0, 30);
    assert_eq!(draft.entries()[0].lunch_minutes, MAX_LUNCH_STEP_MINUTES);
    assert_eq!(draft.lunch_inputs()[0], "4.00");
    draft.adjust_lunch(0, 15);
    assert_eq!(draft.entries()[0].lunch_minutes, 240);

    // typed values above the cap are kept, but never stepped higher
    draft.set_lunch_hours(1, "5");
    draft.adjust_lunch(1, 15);
    assert_eq!(draft.entries()[1].lunch_minutes, 300);
    draft.adjust_lunch(1, -15);
    assert_eq!(draft.entries()[1].lunch_minutes, 285);
}

#[test]
fn test_upsert_day_lunch_step() {
    let mut st = storage();
    let patch = DayPatch {
        start: Some("09:00".into()),
        finish: Some("17:00".into()),
        lunch_hours: Some("0.5".into()),
        lunch_step: Some(15),
        ..Default::default()
    };
    let draft = SheetLogic::upsert_day(&mut st, ymd(2025, 5, 26), &patch).unwrap();
    assert_eq!(draft.entries()[0].lunch_minutes, 45);
    assert_eq!(draft.summary(), "7.25");

    let shorten = DayPatch {
        lunch_step: Some(-60),
        ..Default::default()
    };
    let draft = SheetLogic::upsert_day(&mut st, ymd(2025, 5, 26), &shorten).unwrap();
    assert_eq!(draft.entries()[0].lunch_minutes, 0);
}

#[test]
fn test_out_of_range_day_is_ignored() {
    let mut draft = WeekDraft::blank(ymd(2025, 5, 26));
    draft.set_time(7, TimeField::Start, "09:00");
    draft.set_lunch_hours(9, "1");
    draft.set_pto(5, "8");
    draft.clear_day(5);
    assert_eq!(draft.summary(), "0.00");
}

#[test]
fn test_set_tags_and_notes() {
    let mut draft = WeekDraft::blank(ymd(2025, 5, 26));
    draft.set_tags(2, " client-a, review ,x");
    draft.set_notes(2, "Site visit");
    let day = &draft.entries()[2];
    assert_eq!(
        day.tags.as_deref(),
        Some(&["client-a".to_string(), "review".to_string(), "x".to_string()][..])
    );
    assert_eq!(day.notes.as_deref(), Some("Site visit"));

    draft.set_tags(2, "  ");
    assert_eq!(draft.entries()[2].tags.as_deref(), Some(&[][..]));
}

#[test]
fn test_clear_day() {
    let mut draft = WeekDraft::blank(ymd(2025, 5, 26));
    full_week(&mut draft, "09:00", "17:00", "1");
    draft.set_pto(3, "2");
    draft.set_notes(3, "dentist");

    draft.clear_day(3);
    let day = &draft.entries()[3];
    assert!(day.is_blank());
    assert_eq!(day.notes.as_deref(), Some(""));
    assert!(draft.pto_inputs()[3].is_blank());
    assert_eq!(draft.lunch_inputs()[3], "");
    assert_eq!(draft.summary(), "28.00");
}

#[test]
fn test_fill_down_copies_monday() {
    let mut draft = WeekDraft::blank(ymd(2025, 5, 26));
    draft.set_time(0, TimeField::Start, "09:00");
    draft.set_time(0, TimeField::Finish, "17:30");
    draft.set_lunch_hours(0, "1");
    draft.set_pto(0, "0.5");

    assert!(draft.can_fill_down());
    assert!(draft.fill_down());
    assert!(!draft.can_fill_down());

    for day in draft.entries() {
        assert_eq!(day.start_time, "09:00");
        assert_eq!(day.finish_time, "17:30");
        assert_eq!(day.lunch_minutes, 60);
    }
    assert!(draft.lunch_inputs().iter().all(|l| l == "1"));
    assert!(draft.pto_inputs().iter().all(|p| p.as_str() == "0.5"));
    assert_eq!(draft.summary(), "40.00");
}

#[test]
fn test_fill_down_refused_without_monday_times() {
    let mut draft = WeekDraft::blank(ymd(2025, 5, 26));
    draft.set_time(0, TimeField::Start, "09:00");
    draft.set_time(1, TimeField::Start, "08:00");

    assert!(!draft.can_fill_down());
    assert!(!draft.fill_down());
    assert_eq!(draft.entries()[1].start_time, "08:00");
    assert_eq!(draft.entries()[2].start_time, "");
}

#[test]
fn test_finalize_moves_pto_to_current_field() {
    let mut legacy = record("2025-05-26", "09:00", "17:00", 60);
    legacy.pto_hours = Some(PtoValue::Number(2.0));
    let mut draft = WeekDraft::load(ymd(2025, 5, 26), &[legacy]);
    draft.set_pto(1, "3.5");
    draft.set_pto(2, ".");
    draft.set_pto(3, "-1");

    let out = draft.finalize();
    assert_eq!(out.len(), 5);
    assert_eq!(out[0].paid_time_off_hours, Some(PtoValue::Number(2.0)));
    assert!(out.iter().all(|r| r.pto_hours.is_none()));
    assert_eq!(out[1].paid_time_off_hours, Some(PtoValue::Number(3.5)));
    assert_eq!(out[2].paid_time_off_hours, None);
    assert_eq!(out[3].paid_time_off_hours, None);
}

#[test]
fn test_finalize_clearing_pto_removes_legacy_value() {
    let mut legacy = record("2025-05-26", "", "", 0);
    legacy.pto_hours = Some(PtoValue::Number(8.0));
    let mut draft = WeekDraft::load(ymd(2025, 5, 26), &[legacy]);
    draft.set_pto(0, "");

    let out = draft.finalize();
    assert_eq!(out[0].paid_time_off_hours, None);
    assert_eq!(out[0].pto_hours, None);
}

// ---------------------------
// SheetLogic over an in-memory store
// ---------------------------

fn storage() -> Storage<MemoryStore> {
    Storage::new(MemoryStore::new())
}

#[test]
fn test_create_week_and_reload() {
    let mut st = storage();
    let mut draft = WeekDraft::blank(ymd(2025, 5, 26));
    full_week(&mut draft, "09:00", "17:30", "1");
    SheetLogic::create_week(&mut st, &draft).unwrap();

    let entries = st.get_entries().unwrap();
    assert_eq!(entries.len(), 5);

    let reloaded = SheetLogic::load_week(&st, ymd(2025, 5, 29)).unwrap();
    assert_eq!(reloaded.summary(), "37.50");
    assert_eq!(st.inner().writes(), 1);
}

#[test]
fn test_create_week_rejects_existing_dates() {
    let mut st = storage();
    st.save_entries(&[record("2025-05-28", "09:00", "17:00", 0)])
        .unwrap();

    let draft = WeekDraft::blank(ymd(2025, 5, 26));
    let err = SheetLogic::create_week(&mut st, &draft).unwrap_err();
    assert!(matches!(err, AppError::WeekExists(ref m) if m == "2025-05-26"));
    assert_eq!(st.get_entries().unwrap().len(), 1);
}

#[test]
fn test_save_week_replaces_days_and_sorts() {
    let mut st = storage();
    st.save_entries(&[
        record("2025-06-02", "09:00", "17:00", 60),
        record("2025-05-27", "08:00", "12:00", 0),
        record("2025-05-19", "09:00", "17:00", 60),
    ])
    .unwrap();

    let mut draft = SheetLogic::load_week(&st, ymd(2025, 5, 26)).unwrap();
    draft.set_time(1, TimeField::Finish, "16:00");
    SheetLogic::save_week(&mut st, &draft).unwrap();

    let entries = st.get_entries().unwrap();
    let dates: Vec<&str> = entries.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(
        dates,
        [
            "2025-05-19",
            "2025-05-26",
            "2025-05-27",
            "2025-05-28",
            "2025-05-29",
            "2025-05-30",
            "2025-06-02"
        ]
    );
    let tuesday = entries.iter().find(|r| r.date == "2025-05-27").unwrap();
    assert_eq!(tuesday.finish_time, "16:00");
}

#[test]
fn test_delete_week() {
    let mut st = storage();
    st.save_entries(&[
        record("2025-05-26", "09:00", "17:00", 60),
        record("2025-05-30", "09:00", "17:00", 60),
        record("2025-06-02", "09:00", "17:00", 60),
    ])
    .unwrap();

    assert_eq!(SheetLogic::delete_week(&mut st, ymd(2025, 5, 28)).unwrap(), 2);
    let entries = st.get_entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].date, "2025-06-02");

    let writes = st.inner().writes();
    assert_eq!(SheetLogic::delete_week(&mut st, ymd(2025, 5, 28)).unwrap(), 0);
    assert_eq!(st.inner().writes(), writes);
}

#[test]
fn test_upsert_day() {
    let mut st = storage();
    let patch = DayPatch {
        start: Some("09:00".into()),
        finish: Some("17:00".into()),
        lunch_hours: Some("1".into()),
        pto: Some("0.5".into()),
        ..Default::default()
    };
    assert!(!patch.is_empty());

    let draft = SheetLogic::upsert_day(&mut st, ymd(2025, 5, 27), &patch).unwrap();
    assert_eq!(draft.summary(), "7.50");

    let entries = st.get_entries().unwrap();
    assert_eq!(entries.len(), 5);
    let day = entries.iter().find(|r| r.date == "2025-05-27").unwrap();
    assert_eq!(day.lunch_minutes, 60);
    assert_eq!(day.paid_time_off_hours, Some(PtoValue::Number(0.5)));
}

#[test]
fn test_upsert_day_rejects_weekend() {
    let mut st = storage();
    let patch = DayPatch {
        start: Some("09:00".into()),
        ..Default::default()
    };
    let err = SheetLogic::upsert_day(&mut st, ymd(2025, 5, 31), &patch).unwrap_err();
    assert!(matches!(err, AppError::NotAWeekday(_)));
    assert_eq!(st.inner().writes(), 0);
}

#[test]
fn test_clear_day_in_store() {
    let mut st = storage();
    st.save_entries(&[
        record_with_pto("2025-05-26", "09:00", "17:00", 60, 1.0),
        record("2025-05-27", "09:00", "17:00", 60),
    ])
    .unwrap();

    let draft = SheetLogic::clear_day(&mut st, ymd(2025, 5, 26)).unwrap();
    assert_eq!(draft.summary(), "7.00");

    let entries = st.get_entries().unwrap();
    let monday = entries.iter().find(|r| r.date == "2025-05-26").unwrap();
    assert!(monday.is_blank());
    assert_eq!(monday.paid_time_off_hours, None);
}

#[test]
fn test_fill_down_in_store() {
    let mut st = storage();
    st.save_entries(&[record("2025-05-26", "09:00", "17:30", 60)])
        .unwrap();

    let draft = SheetLogic::fill_down(&mut st, ymd(2025, 5, 29)).unwrap();
    assert_eq!(draft.summary(), "37.50");
    assert_eq!(st.get_entries().unwrap().len(), 5);
}

#[test]
fn test_fill_down_in_store_without_monday() {
    let mut st = storage();
    let err = SheetLogic::fill_down(&mut st, ymd(2025, 5, 29)).unwrap_err();
    assert!(matches!(err, AppError::NothingToFillDown(_)));
}

#[test]
fn test_next_free_monday() {
    let mut st = storage();
    let today = ymd(2025, 5, 28);
    assert_eq!(SheetLogic::next_free_monday(&st, today).unwrap(), ymd(2025, 5, 26));

    let entries: Vec<DayRecord> = ["2025-05-26", "2025-06-03"]
        .iter()
        .map(|d| record(d, "09:00", "17:00", 0))
        .collect();
    st.save_entries(&entries).unwrap();
    assert_eq!(SheetLogic::next_free_monday(&st, today).unwrap(), ymd(2025, 6, 9));
}

#[test]
fn test_summaries() {
    let mut st = storage();
    assert!(SheetLogic::summaries(&st).unwrap().is_empty());

    st.save_entries(&[
        record("2025-05-19", "09:00", "17:00", 60),
        record("2025-05-26", "09:00", "17:00", 60),
    ])
    .unwrap();
    let weeks = SheetLogic::summaries(&st).unwrap();
    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks[0].monday_key(), "2025-05-26");
}
