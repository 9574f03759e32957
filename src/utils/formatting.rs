//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

pub fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ansi regex"));
    re.replace_all(s, "").into_owned()
}

/// Terminal width of `s`, color codes not counted.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Pad to a display width; color codes do not count towards it.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = visible_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Fractional hours as `7.50 h`, signed on request.
pub fn hours2readable(hours: f64, want_sign: bool) -> String {
    if want_sign && hours > 0.0 {
        format!("+{:.2} h", hours)
    } else {
        format!("{:.2} h", hours)
    }
}

/// Lunch minutes shown as hours the way the editing inputs hold them
/// (`60` → `"1"`, `30` → `"0.5"`, `0` → `""`).
pub fn lunch_minutes_to_input(minutes: u32) -> String {
    if minutes == 0 {
        String::new()
    } else {
        format!("{}", minutes as f64 / 60.0)
    }
}
