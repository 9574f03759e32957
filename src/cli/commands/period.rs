use crate::cli::commands::open_storage;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::period::build_report;
use crate::errors::AppResult;
use crate::ui::render::render_period;
use crate::utils::date::parse_date_arg;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Period { date, pattern } = cmd {
        let reference = parse_date_arg(date.as_deref())?;
        let storage = open_storage(cfg)?;
        let settings = storage.get_settings()?.unwrap_or_default();
        let entries = storage.get_entries()?;

        let report = build_report(&entries, &settings, *pattern, reference);
        print!("{}", render_period(&report, cfg));
    }

    Ok(())
}
