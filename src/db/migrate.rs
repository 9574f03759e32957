use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};
use serde_json::Value;

const ENTRIES_KEY: &str = "time_entries";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `store` table exists.
fn store_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='store'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the key-value `store` table.
fn create_store_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS store (
            key         TEXT PRIMARY KEY,
            value       TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Move legacy `ptoHours` values into `paidTimeOffHours` inside the stored
/// entries blob. Records that already carry `paidTimeOffHours` keep it and
/// simply lose the legacy key.
fn migrate_legacy_pto_field(conn: &Connection) -> Result<()> {
    let version = "20251020_0001_legacy_pto_field";

    if is_applied(conn, version)? {
        return Ok(());
    }

    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM store WHERE key = ?1",
            [ENTRIES_KEY],
            |row| row.get(0),
        )
        .optional()?;

    let mut moved = 0usize;

    if let Some(raw) = raw {
        let Ok(mut doc) = serde_json::from_str::<Value>(&raw) else {
            warning("Stored entries are not valid JSON, legacy PTO migration skipped.");
            return Ok(());
        };

        if let Some(items) = doc.as_array_mut() {
            for item in items.iter_mut().filter_map(Value::as_object_mut) {
                let Some(legacy) = item.remove("ptoHours") else {
                    continue;
                };
                let current_missing = item
                    .get("paidTimeOffHours")
                    .is_none_or(Value::is_null);
                if current_missing && !legacy.is_null() {
                    item.insert("paidTimeOffHours".to_string(), legacy);
                    moved += 1;
                }
            }
        }

        if moved > 0 {
            conn.execute(
                "UPDATE store SET value = ?1, updated_at = datetime('now') WHERE key = ?2",
                [doc.to_string().as_str(), ENTRIES_KEY],
            )?;
        }
    }

    mark_applied(
        conn,
        version,
        &format!("Moved {} legacy ptoHours values to paidTimeOffHours", moved),
    )?;

    if moved > 0 {
        success(format!(
            "Migration applied: {} → {} records moved to paidTimeOffHours",
            version, moved
        ));
    }

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called from db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Key-value store
    if !store_table_exists(conn)? {
        create_store_table(conn)?;
        success("Created store table.");
    }

    // 3) Data migrations
    migrate_legacy_pto_field(conn)?;

    Ok(())
}
