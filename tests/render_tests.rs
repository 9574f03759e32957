use rtimesheet::config::Config;
use rtimesheet::core::draft::{TimeField, WeekDraft};
use rtimesheet::core::grouping::group_by_week;
use rtimesheet::core::hours::days_logged;
use rtimesheet::models::DayRecord;
use rtimesheet::ui::render::{render_week, render_week_list};
use rtimesheet::utils::colors::GREY;
use rtimesheet::utils::formatting::strip_ansi;

mod common;
use common::{record, record_with_pto, ymd};

fn one_logged_day() -> Vec<DayRecord> {
    let mut week = WeekDraft::blank(ymd(2025, 5, 26));
    week.set_time(0, TimeField::Start, "09:00");
    week.set_time(0, TimeField::Finish, "17:00");
    week.finalize()
}

#[test]
fn test_days_logged_ignores_placeholders() {
    assert_eq!(days_logged(&one_logged_day()), 1);

    let entries = vec![
        record("2025-05-26", "09:00", "", 0),
        record_with_pto("2025-05-27", "", "", 0, 7.5),
        record("2025-05-28", "", "", 0),
    ];
    assert_eq!(days_logged(&entries), 1);
}

#[test]
fn test_week_list_days_column_counts_logged_days() {
    let weeks = group_by_week(&one_logged_day());
    assert_eq!(weeks[0].entries.len(), 5);

    let out = strip_ansi(&render_week_list(&weeks, &[], 0.0, &Config::default()));
    let row = out
        .lines()
        .find(|l| l.contains("2025-05-26 - 2025-05-30"))
        .unwrap();
    let after_range = row.split("2025-05-30").nth(1).unwrap();
    assert_eq!(after_range.split_whitespace().next(), Some("1"));
}

#[test]
fn test_week_placeholders_are_muted_and_aligned() {
    let mut draft = WeekDraft::blank(ymd(2025, 5, 26));
    draft.set_time(0, TimeField::Start, "09:00");
    draft.set_time(0, TimeField::Finish, "17:00");

    let raw = render_week(&draft, &Config::default());
    assert!(raw.contains(&format!("{}--:--", GREY)));

    let plain = strip_ansi(&raw);
    let lines: Vec<&str> = plain.lines().collect();
    let header = lines.iter().find(|l| l.starts_with("Day")).unwrap();
    let monday = lines.iter().find(|l| l.starts_with("Mon")).unwrap();
    let tuesday = lines.iter().find(|l| l.starts_with("Tue")).unwrap();

    let start_col = header.find("Start").unwrap();
    assert_eq!(monday.find("09:00"), Some(start_col));
    assert_eq!(tuesday.find("--:--"), Some(start_col));

    let end_col = header.find("End").unwrap();
    assert_eq!(monday.find("17:00"), Some(end_col));
    assert_eq!(tuesday[end_col..].find("--:--"), Some(0));
}
