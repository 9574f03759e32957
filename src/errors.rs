//! Unified application error type.
//! The storage, config, export and CLI layers return AppError; the
//! calculation core never fails and degrades bad input to zero instead.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Corrupted stored data: {0}")]
    Serialization(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid hours value: {0}")]
    InvalidHours(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("{0} is not a weekday (Mon-Fri)")]
    NotAWeekday(String),

    #[error("A week starting {0} already exists")]
    WeekExists(String),

    #[error("Monday of week {0} has no complete start/finish times to copy")]
    NothingToFillDown(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export / backup errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(#[from] csv::Error),

    #[error("Backup error: {0}")]
    Backup(#[from] zip::result::ZipError),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
