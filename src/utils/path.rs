//! Path helpers for user supplied file names.

use std::path::{Path, PathBuf};

/// Expand a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// `name` as given when absolute (after `~` expansion), otherwise inside `base`.
pub fn resolve_in(base: &Path, name: &str) -> PathBuf {
    let p = expand_tilde(name);
    if p.is_absolute() { p } else { base.join(p) }
}
