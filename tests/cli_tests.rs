use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, rts, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rts()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_week_new_prints_total() {
    let db_path = setup_test_db("cli_week_new");
    rts()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rts()
        .args([
            "--db", &db_path, "week", "new", "2025-05-28", "--in", "09:00", "--out", "17:30",
            "--lunch", "1",
        ])
        .assert()
        .success()
        .stdout(contains("New week created: 2025-05-26 - 2025-05-30"))
        .stdout(contains("Total: 37.50 hours"));
}

#[test]
fn test_week_new_twice_fails() {
    let db_path = setup_test_db("cli_week_twice");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "week", "new", "2025-05-21"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_week_show() {
    let db_path = setup_test_db("cli_week_show");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "week", "show", "2025-05-22"])
        .assert()
        .success()
        .stdout(contains("Week 2025-05-19 - 2025-05-23"))
        .stdout(contains("Total: 37.50 hours"));
}

#[test]
fn test_add_single_day() {
    let db_path = setup_test_db("cli_add");
    init_db_with_data(&db_path);

    rts()
        .args([
            "--db", &db_path, "add", "2025-06-02", "--in", "09:00", "--out", "17:00", "--lunch",
            "1",
        ])
        .assert()
        .success()
        .stdout(contains("Saved 2025-06-02"))
        .stdout(contains("Total: 7.00 hours"));

    rts()
        .args(["--db", &db_path, "add", "2025-06-03", "--pto", "7.5"])
        .assert()
        .success()
        .stdout(contains("Total: 14.50 hours"));
}

#[test]
fn test_add_lunch_step() {
    let db_path = setup_test_db("cli_add_lunch_step");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "add", "2025-05-19", "--lunch-step", "-30"])
        .assert()
        .success()
        .stdout(contains("Total: 38.00 hours"));

    rts()
        .args(["--db", &db_path, "add", "2025-05-19", "--lunch-step", "600"])
        .assert()
        .success()
        .stdout(contains("Total: 34.50 hours"));
}

#[test]
fn test_add_weekend_rejected() {
    let db_path = setup_test_db("cli_add_weekend");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "add", "2025-05-31", "--in", "09:00"])
        .assert()
        .failure()
        .stderr(contains("not a weekday"));
}

#[test]
fn test_add_invalid_input_rejected() {
    let db_path = setup_test_db("cli_add_invalid");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "add", "2025-13-01", "--in", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    rts()
        .args(["--db", &db_path, "add", "2025-06-02", "--in", "25:99"])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));
}

#[test]
fn test_list_with_selection_total() {
    let db_path = setup_test_db("cli_list");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-05-26 - 2025-05-30"))
        .stdout(contains("2025-05-19 - 2025-05-23"));

    rts()
        .args(["--db", &db_path, "list", "--select", "2025-05-19,2025-05-28"])
        .assert()
        .success()
        .stdout(contains("Total (selected): 75.00 h"));
}

#[test]
fn test_del_week() {
    let db_path = setup_test_db("cli_del_week");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "del", "2025-05-20", "--week", "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted (5 days)"));

    rts()
        .args(["--db", &db_path, "list", "-s", "2025-05-26"])
        .assert()
        .success()
        .stdout(contains("Total (selected): 37.50 h"))
        .stdout(contains("2025-05-19").not());
}

#[test]
fn test_del_single_day() {
    let db_path = setup_test_db("cli_del_day");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "del", "2025-05-27", "-y"])
        .assert()
        .success()
        .stdout(contains("2025-05-27 has been cleared"));

    rts()
        .args(["--db", &db_path, "week", "show", "2025-05-26"])
        .assert()
        .success()
        .stdout(contains("Total: 30.00 hours"));
}

#[test]
fn test_fill_down() {
    let db_path = setup_test_db("cli_fill_down");
    init_db_with_data(&db_path);

    rts()
        .args([
            "--db", &db_path, "add", "2025-06-09", "--in", "08:00", "--out", "16:00", "--lunch",
            "0.5",
        ])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "week", "fill-down", "2025-06-11"])
        .assert()
        .success()
        .stdout(contains("Total: 37.50 hours"));

    rts()
        .args(["--db", &db_path, "week", "fill-down", "2025-06-16"])
        .assert()
        .failure()
        .stderr(contains("no complete start/finish"));
}

#[test]
fn test_period_report() {
    let db_path = setup_test_db("cli_period");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "period", "--date", "2025-05-28"])
        .assert()
        .success()
        .stdout(contains("weekly period 2025-05-26 → 2025-06-01"))
        .stdout(contains("Total       : 37.50 h"));

    rts()
        .args([
            "--db",
            &db_path,
            "settings",
            "--pattern",
            "fortnightly",
            "--target",
            "70",
        ])
        .assert()
        .success()
        .stdout(contains("fortnightly"));

    rts()
        .args(["--db", &db_path, "period", "-d", "2025-05-19"])
        .assert()
        .success()
        .stdout(contains("fortnightly period 2025-05-19 → 2025-06-01"))
        .stdout(contains("Total       : 75.00 h"))
        .stdout(contains("+5.00 h"));
}

#[test]
fn test_settings_rejects_negative_target() {
    let db_path = setup_test_db("cli_settings_negative");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "settings", "--target=-3"])
        .assert()
        .failure()
        .stderr(contains("Invalid hours value"));
}

#[test]
fn test_export_csv_weeks() {
    let db_path = setup_test_db("cli_export_csv");
    let out = temp_out("cli_export_csv", "csv");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("export completed"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("monday,date_range,days,worked_hours,pto_hours,total_hours"));
    assert!(content.contains("2025-05-26,2025-05-26 - 2025-05-30,5,37.50,0.00,37.50"));
}

#[test]
fn test_export_json_days() {
    let db_path = setup_test_db("cli_export_json");
    let out = temp_out("cli_export_json", "json");
    init_db_with_data(&db_path);

    rts()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--days", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0]["date"], "2025-05-19");
    assert_eq!(rows[0]["worked_minutes"], 450);
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("cli_backup");
    let out = temp_out("cli_backup", "sqlite");
    let zip = temp_out("cli_backup", "zip");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress", "--force"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&zip).exists());
}

#[test]
fn test_log_print() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "add", "2025-05-19", "--notes", "kickoff"])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("New week 2025-05-19 - 2025-05-23"))
        .stdout(contains("Saved week 2025-05-19 - 2025-05-23"));
}

#[test]
#[cfg(unix)]
fn test_config_theme_keeps_configured_database() {
    let mut home = std::env::temp_dir();
    home.push("cli_theme_home_rtimesheet");
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).unwrap();
    let other_db = setup_test_db("cli_theme_other");

    rts().env("HOME", &home).arg("init").assert().success();

    let conf = home.join(".rtimesheet").join("rtimesheet.conf");
    let default_db = home.join(".rtimesheet").join("rtimesheet.sqlite");

    rts()
        .env("HOME", &home)
        .args(["--db", &other_db, "config", "--theme", "dark"])
        .assert()
        .success()
        .stdout(contains("Theme set to Dark"));

    let content = fs::read_to_string(&conf).unwrap();
    assert!(content.contains("theme: dark"));
    assert!(content.contains(&default_db.to_string_lossy().to_string()));
    assert!(!content.contains(&other_db));
}
