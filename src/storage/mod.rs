//! Storage collaborator: two JSON blobs in a flat key-value store.
//!
//! `time_entries` holds the whole `DayRecord` collection and is always read
//! and written in full; `settings` holds the `Settings` object.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use crate::models::day_record::DayRecord;
use crate::models::settings::Settings;

pub const ENTRIES_KEY: &str = "time_entries";
pub const SETTINGS_KEY: &str = "settings";

/// Minimal string key-value interface the blobs are kept in.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove_item(&mut self, key: &str) -> AppResult<()>;

    /// Record an audit line for a successful mutation. Stores without an
    /// audit trail ignore it.
    fn audit(&self, _operation: &str, _target: &str, _message: &str) {}
}

pub struct Storage<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Storage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Whole collection; empty when nothing was stored yet.
    pub fn get_entries(&self) -> AppResult<Vec<DayRecord>> {
        match self.store.get_item(ENTRIES_KEY)? {
            Some(data) if !data.trim().is_empty() => Ok(serde_json::from_str(&data)?),
            _ => Ok(Vec::new()),
        }
    }

    /// Replace the whole collection.
    pub fn save_entries(&mut self, entries: &[DayRecord]) -> AppResult<()> {
        let data = serde_json::to_string(entries)?;
        self.store.set_item(ENTRIES_KEY, &data)
    }

    /// `None` when settings were never saved.
    pub fn get_settings(&self) -> AppResult<Option<Settings>> {
        match self.store.get_item(SETTINGS_KEY)? {
            Some(data) if !data.trim().is_empty() => Ok(Some(serde_json::from_str(&data)?)),
            _ => Ok(None),
        }
    }

    pub fn save_settings(&mut self, settings: &Settings) -> AppResult<()> {
        let data = serde_json::to_string(settings)?;
        self.store.set_item(SETTINGS_KEY, &data)
    }

    pub fn clear_settings(&mut self) -> AppResult<()> {
        self.store.remove_item(SETTINGS_KEY)
    }

    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        self.store.audit(operation, target, message);
    }
}
