pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod period;
pub mod settings;
pub mod week;

use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::{SqliteStore, Storage};

/// Storage over the configured database, migrations applied.
pub(crate) fn open_storage(cfg: &Config) -> AppResult<Storage<SqliteStore>> {
    Ok(Storage::new(SqliteStore::open(&cfg.database)?))
}
