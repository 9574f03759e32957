use crate::cli::commands::open_storage;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sheet::SheetLogic;
use crate::core::week::format_week_range;
use crate::core::week::monday_of;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        week,
        yes,
    } = cmd
    {
        let d = parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        let prompt = if *week {
            format!(
                "Delete ALL days of week {}? This action is irreversible.",
                format_week_range(monday_of(d))
            )
        } else {
            format!("Clear every field of {}?", d)
        };

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut storage = open_storage(cfg)?;

        if *week {
            let removed = SheetLogic::delete_week(&mut storage, d)?;
            if removed == 0 {
                info(format!("No stored days in week {}", format_week_range(monday_of(d))));
            } else {
                success(format!(
                    "Week {} deleted ({} days).",
                    format_week_range(monday_of(d)),
                    removed
                ));
            }
        } else {
            SheetLogic::clear_day(&mut storage, d)?;
            success(format!("{} has been cleared.", d));
        }
    }

    Ok(())
}
