use crate::cli::commands::open_storage;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        days,
        force,
    } = cmd
    {
        let storage = open_storage(cfg)?;
        ExportLogic::export(&storage, format, file, *days, *force)?;
    }

    Ok(())
}
