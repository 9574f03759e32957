use crate::db::kv;
use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use crate::storage::ENTRIES_KEY;
use rusqlite::Connection;

/// Bring the schema up to date and make sure the entries blob exists.
/// Returns `true` when the blob had to be created (a fresh database).
pub fn init_db(conn: &Connection) -> AppResult<bool> {
    run_pending_migrations(conn)?;

    if kv::get_value(conn, ENTRIES_KEY)?.is_some() {
        return Ok(false);
    }
    kv::set_value(conn, ENTRIES_KEY, "[]")?;
    Ok(true)
}
