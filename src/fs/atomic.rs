//! Atomic profile writes.
//!
//! All atomic writes follow this pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename the temporary file over the target
//!
//! The temporary file lives next to the target (`.{filename}.tmp`) so the
//! rename stays on one filesystem. When the target already exists its
//! permissions are applied to the temporary file before any content is
//! written, so a private profile never becomes readable by others. On failure it is removed; after a crash it
//! may remain, but the target always holds either the old or the new profile.

use crate::error::{MergeError, Result};
use std::fs::{self, File, Permissions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file.
///
/// Missing parent directories are created, so `--output` may point into a
/// fresh build directory.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            MergeError::Io(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = generate_temp_path(path)?;

    // Keep the mode of the file being replaced; new files get the defaults.
    let permissions = fs::metadata(path).ok().map(|m| m.permissions());

    write_and_sync(&temp_path, content, permissions)?;

    atomic_replace(&temp_path, path)?;

    Ok(())
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Generate a temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            MergeError::Io(format!("invalid profile path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

/// Write content to a file and sync to disk.
fn write_and_sync(path: &Path, content: &[u8], permissions: Option<Permissions>) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        MergeError::Io(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    if let Some(permissions) = permissions {
        file.set_permissions(permissions).map_err(|e| {
            let _ = fs::remove_file(path);
            MergeError::Io(format!(
                "failed to set permissions on temporary file '{}': {}",
                path.display(),
                e
            ))
        })?;
    }

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        MergeError::Io(format!("failed to write to temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        MergeError::Io(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

/// Replace `target` with `source`.
///
/// `fs::rename` replaces an existing destination on every supported platform.
fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        MergeError::Io(format!(
            "failed to atomically replace '{}': {}",
            target.display(),
            e
        ))
    })?;

    // Persist the directory entry as well.
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}
