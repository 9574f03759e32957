use crate::db::{kv, log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::storage::KeyValueStore;
use rusqlite::Connection;

/// Blobs kept in the `store` table of the application database.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open `path`, running pending migrations first.
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self::new(DbPool::open_ready(path)?))
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl KeyValueStore for SqliteStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        kv::get_value(&self.pool.conn, key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        kv::set_value(&self.pool.conn, key, value)
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        kv::remove_value(&self.pool.conn, key)
    }

    fn audit(&self, operation: &str, target: &str, message: &str) {
        log::ttlog_quiet(&self.pool.conn, operation, target, message);
    }
}
