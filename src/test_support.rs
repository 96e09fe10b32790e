use std::path::PathBuf;
use tempfile::TempDir;

/// Write `content` to a profile file inside a fresh temp dir.
///
/// The `TempDir` must be kept alive for as long as the path is used.
pub(crate) fn write_profile(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}

pub(crate) fn read(path: &std::path::Path) -> String {
    std::fs::read_to_string(path).unwrap()
}
