use crate::db::log::{LogRow, load_log};
use crate::errors::AppResult;
use ansi_term::Colour;
use crate::utils::formatting::visible_width;
use rusqlite::Connection;
use unicode_width::UnicodeWidthStr;

const OP_MAX_WIDTH: usize = 60;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "settings" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Aligned, colored lines for every row of the internal log.
    pub fn render(rows: &[LogRow]) -> Vec<String> {
        if rows.is_empty() {
            return Vec::new();
        }

        let op_target = |r: &LogRow| {
            if r.target.is_empty() {
                r.operation.clone()
            } else {
                format!("{} ({})", r.operation, r.target)
            }
        };

        let op_w = rows
            .iter()
            .map(|r| UnicodeWidthStr::width(op_target(r).as_str()))
            .max()
            .unwrap_or(10)
            .min(OP_MAX_WIDTH);
        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);

        let dates: Vec<String> = rows
            .iter()
            .map(|r| {
                chrono::DateTime::parse_from_rfc3339(&r.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| r.date.clone())
            })
            .collect();
        let date_w = dates.iter().map(|d| d.len()).max().unwrap_or(10);

        rows.iter()
            .zip(dates.iter())
            .map(|(row, date)| {
                let color = color_for_operation(&row.operation);
                let visible = op_target(row);
                let visible = if visible.chars().count() > OP_MAX_WIDTH {
                    let mut s: String = visible.chars().take(OP_MAX_WIDTH - 3).collect();
                    s.push_str("...");
                    s
                } else {
                    visible
                };

                // only the operation word is colored
                let colored = match visible.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                    None => color.paint(visible.as_str()).to_string(),
                };
                let shown = visible_width(&colored);
                let padding = " ".repeat(op_w.saturating_sub(shown));

                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    row.id,
                    date,
                    colored,
                    padding,
                    row.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }

    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let rows = load_log(conn)?;
        if rows.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }
        println!("📜 Internal log:\n");
        for line in Self::render(&rows) {
            println!("{}", line);
        }
        Ok(())
    }
}
