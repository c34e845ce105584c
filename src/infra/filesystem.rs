//! Filesystem helpers
//!
//! Path expansion and directory creation shared by the config loader and
//! the tasks store.

use std::io;
use std::path::{Path, PathBuf};

/// Expand a leading `~` to the current user's home directory
///
/// Paths without a leading `~`, and `~user` forms, are returned unchanged.
/// If the home directory cannot be determined the path is left as is.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// Create the parent directory of `path` if it is missing
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
