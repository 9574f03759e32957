use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::ask_confirmation;
use crate::utils::path::expand_tilde;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, zipping it when `compress`.
    /// Returns the path written, or `None` when the user declined to
    /// overwrite an existing file.
    pub fn backup(
        db_path: &str,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(db_path);
        let dest = expand_tilde(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.clone()
        };

        if final_target.exists()
            && !force
            && !ask_confirmation(&format!(
                "The file '{}' already exists. Overwrite it?",
                final_target.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        let final_path = if compress {
            compress_into(src, &final_target)?
        } else {
            fs::copy(src, &dest)?;
            dest
        };

        success(format!("Backup created: {}", final_path.display()));

        match Connection::open(src) {
            Ok(conn) => ttlog_quiet(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            ),
            Err(e) => warning(format!("Failed to write internal log: {}", e)),
        }

        Ok(Some(final_path))
    }
}

/// Write `src` into a new zip archive at `zip_path`.
fn compress_into(src: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "rtimesheet.sqlite".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish()?;

    Ok(zip_path.to_path_buf())
}
