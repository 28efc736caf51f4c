//! Path utilities: expand `~`, resolve relative paths against a base dir.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `~/x` → `$HOME/x`, absolute paths unchanged, anything else joined to `base`.
pub fn resolve_path(path: &str, base: &Path) -> PathBuf {
    let p = expand_tilde(path.trim());
    if p.is_absolute() { p } else { base.join(p) }
}
