use crate::cli::commands::open_storage;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grouping::selected_total;
use crate::core::sheet::SheetLogic;
use crate::core::week::monday_of;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::ui::render::render_week_list;
use crate::utils::date::parse_date_list;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { select } = cmd {
        let storage = open_storage(cfg)?;
        let summaries = SheetLogic::summaries(&storage)?;

        if summaries.is_empty() {
            info("No weeks stored yet.");
            return Ok(());
        }

        let mut selected = Vec::new();
        if let Some(s) = select {
            for d in parse_date_list(s)? {
                let monday = monday_of(d);
                if !selected.contains(&monday) {
                    selected.push(monday);
                }
            }
        }

        let total = selected_total(&summaries, &selected);

        header("Weeks");
        print!("{}", render_week_list(&summaries, &selected, total, cfg));
    }

    Ok(())
}
