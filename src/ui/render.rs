//! Text rendering of weeks, week lists and period reports.
//!
//! Every function takes the `Config` it renders for; the theme and table
//! separator come from there.

use crate::config::Config;
use crate::core::draft::WeekDraft;
use crate::core::hours::{days_logged, format_hours, resolve_pto, worked_hours, worked_minutes};
use crate::core::period::PeriodReport;
use crate::core::week::WEEKDAY_LABELS;
use crate::models::week_summary::WeekSummary;
use crate::utils::colors::{Palette, RESET};
use crate::utils::formatting::{hours2readable, mins2readable};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

const NOTES_WIDTH: usize = 32;

/// Greyed-out placeholder for an empty cell.
fn placeholder(palette: &Palette, text: &str) -> String {
    format!("{}{}{}", palette.muted, text, RESET)
}

fn time_or_placeholder(palette: &Palette, s: &str) -> String {
    if s.is_empty() { placeholder(palette, "--:--") } else { s.to_string() }
}

/// The five days of a draft with per-day hours and the live total.
pub fn render_week(draft: &WeekDraft, cfg: &Config) -> String {
    let palette = Palette::for_theme(cfg.theme);
    let mut table = Table::new(vec![
        Column::new("Day", 3),
        Column::new("Date", 10),
        Column::new("Start", 5),
        Column::new("End", 5),
        Column::new("Lunch", 5),
        Column::new("PTO", 5),
        Column::new("Worked", 8),
        Column::new("Notes", 5),
    ]);

    for (idx, entry) in draft.entries().iter().enumerate() {
        let label = if cfg.show_weekday {
            WEEKDAY_LABELS[idx].to_string()
        } else {
            format!("{}", idx + 1)
        };
        let lunch = if entry.lunch_minutes == 0 {
            placeholder(&palette, "-")
        } else {
            mins2readable(entry.lunch_minutes as i64, false, true)
        };
        let pto = draft.pto_inputs()[idx].as_str();
        let worked = if entry.has_times() {
            mins2readable(worked_minutes(entry), false, false)
        } else {
            placeholder(&palette, "-")
        };
        let notes = entry.notes.as_deref().unwrap_or("");
        let wrapped = textwrap::wrap(notes, NOTES_WIDTH);
        let first_line = wrapped.first().map(|l| l.to_string()).unwrap_or_default();

        table.add_row(vec![
            label,
            entry.date.clone(),
            time_or_placeholder(&palette, &entry.start_time),
            time_or_placeholder(&palette, &entry.finish_time),
            lunch,
            if pto.is_empty() { placeholder(&palette, "-") } else { pto.to_string() },
            worked,
            first_line,
        ]);
        for extra in wrapped.iter().skip(1) {
            table.add_row(vec![
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                extra.to_string(),
            ]);
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{}Week {}{}\n\n",
        palette.heading,
        draft.date_range(),
        RESET
    ));
    out.push_str(&table.render(cfg.separator()));
    out.push_str(&format!(
        "\n{}Total: {} hours{}\n",
        palette.accent,
        draft.summary(),
        RESET
    ));
    out
}

/// Week list, most recent first, with the selected-weeks total when a
/// selection was given.
pub fn render_week_list(
    summaries: &[WeekSummary],
    selected: &[NaiveDate],
    selected_total: f64,
    cfg: &Config,
) -> String {
    let palette = Palette::for_theme(cfg.theme);
    let mut table = Table::new(vec![
        Column::new("Sel", 3),
        Column::new("Week", 23),
        Column::new("Days", 4),
        Column::new("Worked", 8),
        Column::new("PTO", 6),
        Column::new("Total", 8),
    ]);

    for week in summaries {
        let worked: f64 = week.entries.iter().map(worked_hours).sum();
        let pto: f64 = week.entries.iter().map(|r| resolve_pto(r, None)).sum();
        let mark = if selected.contains(&week.monday) { "[x]" } else { "[ ]" };
        table.add_row(vec![
            mark.to_string(),
            week.date_range.clone(),
            days_logged(&week.entries).to_string(),
            format_hours(worked),
            format_hours(pto),
            format_hours(week.total_hours),
        ]);
    }

    let mut out = table.render(cfg.separator());
    if !selected.is_empty() {
        out.push_str(&format!(
            "\n{}Total (selected): {} h{}\n",
            palette.accent,
            format_hours(selected_total),
            RESET
        ));
    }
    out
}

pub fn render_period(report: &PeriodReport, cfg: &Config) -> String {
    let palette = Palette::for_theme(cfg.theme);
    let mut out = String::new();

    out.push_str(&format!(
        "{}{} period {} → {}{}\n",
        palette.heading,
        report.pattern.as_str(),
        report.start,
        report.end,
        RESET
    ));
    out.push_str(&format!("• Days logged : {}\n", report.days_logged));
    out.push_str(&format!("• Worked      : {}\n", hours2readable(report.worked_hours, false)));
    out.push_str(&format!("• PTO         : {}\n", hours2readable(report.pto_hours, false)));
    out.push_str(&format!("• Total       : {}\n", hours2readable(report.total_hours, false)));
    out.push_str(&format!("• Target      : {}\n", hours2readable(report.target_hours, false)));
    out.push_str(&format!(
        "• Balance     : {}{}{}\n",
        palette.for_balance(report.balance),
        hours2readable(report.balance, true),
        RESET
    ));
    if let Some(pay) = report.pay {
        out.push_str(&format!("• Pay         : {:.2}\n", pay));
    }
    out
}
