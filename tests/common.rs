#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimesheet::models::DayRecord;
use rtimesheet::models::PtoValue;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add two full weeks (7.5 h per day).
pub fn init_db_with_data(db_path: &str) {
    rts()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for week in ["2025-05-19", "2025-05-26"] {
        rts()
            .args([
                "--db", db_path, "week", "new", week, "--in", "09:00", "--out", "17:30", "--lunch",
                "1",
            ])
            .assert()
            .success();
    }
}

pub fn record(date: &str, start: &str, finish: &str, lunch: u32) -> DayRecord {
    DayRecord::with_times(date, start, finish, lunch)
}

pub fn record_with_pto(date: &str, start: &str, finish: &str, lunch: u32, pto: f64) -> DayRecord {
    DayRecord {
        paid_time_off_hours: Some(PtoValue::Number(pto)),
        ..record(date, start, finish, lunch)
    }
}

pub fn ymd(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
