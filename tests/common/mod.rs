use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `content` to `name` inside a fresh temp directory. Keep the
/// returned directory guard alive for as long as the path is used.
pub fn write_data_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}
