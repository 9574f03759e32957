use crate::errors::AppResult;
use csv::Writer;
use serde::Serialize;
use std::path::Path;

/// Write serializable rows as CSV; the header comes from the field names.
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
