use crate::cli::commands::open_storage;
use crate::cli::parser::{Commands, WeekAction};
use crate::config::Config;
use crate::core::draft::{TimeField, WeekDraft};
use crate::core::sheet::SheetLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::render::render_week;
use crate::utils::date::{parse_date_arg, today};
use crate::utils::time::normalize_time_arg;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { action } = cmd {
        match action {
            WeekAction::New {
                date,
                start,
                finish,
                lunch,
                pto,
            } => {
                let mut storage = open_storage(cfg)?;
                let anchor = match date {
                    Some(_) => parse_date_arg(date.as_deref())?,
                    None => SheetLogic::next_free_monday(&storage, today())?,
                };

                let start = start.as_deref().map(normalize_time_arg).transpose()?;
                let finish = finish.as_deref().map(normalize_time_arg).transpose()?;

                let mut draft = WeekDraft::blank(anchor);
                for day in 0..5 {
                    if let Some(v) = &start {
                        draft.set_time(day, TimeField::Start, v);
                    }
                    if let Some(v) = &finish {
                        draft.set_time(day, TimeField::Finish, v);
                    }
                    if let Some(v) = lunch {
                        draft.set_lunch_hours(day, v);
                    }
                    if let Some(v) = pto {
                        draft.set_pto(day, v);
                    }
                }

                SheetLogic::create_week(&mut storage, &draft)?;
                success(format!("New week created: {}", draft.date_range()));
                println!();
                print!("{}", render_week(&draft, cfg));
            }

            WeekAction::Show { date } => {
                let d = parse_date_arg(date.as_deref())?;
                let storage = open_storage(cfg)?;
                let draft = SheetLogic::load_week(&storage, d)?;
                print!("{}", render_week(&draft, cfg));
            }

            WeekAction::FillDown { date } => {
                let d = parse_date_arg(Some(date.as_str()))?;
                let mut storage = open_storage(cfg)?;
                let draft = SheetLogic::fill_down(&mut storage, d)?;
                success(format!("Copied Monday to the rest of {}", draft.date_range()));
                println!();
                print!("{}", render_week(&draft, cfg));
            }

            WeekAction::Next => {
                let storage = open_storage(cfg)?;
                let monday = SheetLogic::next_free_monday(&storage, today())?;
                info(format!("Next available week starts {}", monday));
            }
        }
    }

    Ok(())
}
