use crate::core::grouping::group_by_week;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::{DayExport, WeekExport};
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::storage::{KeyValueStore, Storage};
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Export week summaries (or, with `days`, the stored day records) to
    /// `file`. Returns the number of rows written.
    pub fn export<S: KeyValueStore>(
        storage: &Storage<S>,
        format: &ExportFormat,
        file: &str,
        days: bool,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let entries = storage.get_entries()?;

        let count = if days {
            let mut rows: Vec<DayExport> = entries.iter().map(DayExport::from).collect();
            rows.sort_by(|a, b| a.date.cmp(&b.date));
            match format {
                ExportFormat::Csv => csv::write_csv(&path, &rows)?,
                ExportFormat::Json => json::write_json(&path, &rows)?,
            }
            rows.len()
        } else {
            let rows: Vec<WeekExport> = group_by_week(&entries)
                .iter()
                .map(WeekExport::from)
                .collect();
            match format {
                ExportFormat::Csv => csv::write_csv(&path, &rows)?,
                ExportFormat::Json => json::write_json(&path, &rows)?,
            }
            rows.len()
        };

        let label = format!(
            "{} {}",
            format.as_str().to_uppercase(),
            if days { "days" } else { "weeks" }
        );
        notify_export_success(&label, &path);
        storage.audit(
            "export",
            &path.to_string_lossy(),
            &format!("{} rows exported as {}", count, format.as_str()),
        );
        Ok(count)
    }
}
