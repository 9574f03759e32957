use crate::cli::commands::open_storage;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        pattern,
        target,
        rate,
        clear_rate,
    } = cmd
    {
        let mut storage = open_storage(cfg)?;
        let stored = storage.get_settings()?;
        let changing = pattern.is_some() || target.is_some() || rate.is_some() || *clear_rate;

        if !changing {
            match stored {
                Some(s) => print_settings(&s),
                None => info("No settings saved yet (defaults apply: weekly, 37.50 h)."),
            }
            return Ok(());
        }

        for (name, value) in [("target", target), ("rate", rate)] {
            if let Some(v) = value
                && (!v.is_finite() || *v < 0.0)
            {
                return Err(AppError::InvalidHours(format!("{name}={v}")));
            }
        }

        let mut settings = stored.unwrap_or_default();
        if let Some(p) = pattern {
            settings.work_pattern = *p;
        }
        if let Some(t) = target {
            settings.target_hours = *t;
        }
        if let Some(r) = rate {
            settings.hourly_rate = Some(*r);
        }
        if *clear_rate {
            settings.hourly_rate = None;
        }

        storage.save_settings(&settings)?;
        storage.audit(
            "settings",
            settings.work_pattern.as_str(),
            &format!("Target {:.2} h", settings.target_hours),
        );
        success("Settings saved.");
        print_settings(&settings);
    }

    Ok(())
}

fn print_settings(s: &crate::models::settings::Settings) {
    println!("• Work pattern : {}", s.work_pattern.as_str());
    println!("• Target hours : {:.2}", s.target_hours);
    match s.hourly_rate {
        Some(r) => println!("• Hourly rate  : {:.2}", r),
        None => println!("• Hourly rate  : -"),
    }
}
