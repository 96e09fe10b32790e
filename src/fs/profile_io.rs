//! Reading profiles and the non-atomic write paths.

use crate::error::{MergeError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Read a profile file as UTF-8 text.
pub fn read_profile<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| {
        MergeError::Io(format!(
            "failed to read profile '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Truncate and rewrite `path` directly.
pub fn write_in_place<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, content).map_err(|e| {
        MergeError::Io(format!(
            "failed to write profile '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Path of the backup kept for `path`: the same name with `.bak` appended.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}

/// Copy `path` to its backup location, overwriting an older backup.
pub fn backup_file<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let backup = backup_path(path);
    fs::copy(path, &backup).map_err(|e| {
        MergeError::Io(format!(
            "failed to back up '{}' to '{}': {}",
            path.display(),
            backup.display(),
            e
        ))
    })?;
    Ok(backup)
}
