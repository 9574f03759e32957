use crate::cli::commands::open_storage;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sheet::{DayPatch, SheetLogic};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::ui::render::render_week;
use crate::utils::date::parse_date;
use crate::utils::time::normalize_time_arg;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        finish,
        lunch,
        lunch_step,
        pto,
        notes,
        tags,
    } = cmd
    {
        let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;

        let patch = DayPatch {
            start: start.as_deref().map(normalize_time_arg).transpose()?,
            finish: finish.as_deref().map(normalize_time_arg).transpose()?,
            lunch_hours: lunch.clone(),
            lunch_step: *lunch_step,
            pto: pto.clone(),
            notes: notes.clone(),
            tags: tags.clone(),
        };

        if patch.is_empty() {
            warning("Nothing to change: pass at least one of --in, --out, --lunch, --lunch-step, --pto, --notes, --tags.");
            return Ok(());
        }

        let mut storage = open_storage(cfg)?;
        let draft = SheetLogic::upsert_day(&mut storage, d, &patch)?;

        success(format!("Saved {}", d));
        println!();
        print!("{}", render_week(&draft, cfg));
    }

    Ok(())
}
