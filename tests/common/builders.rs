//! Test builders for golden-file directories.
//!
//! These panic on I/O failure rather than returning `Result`; they exist to
//! keep harness bodies short.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

// ---------------------------------------------------------------------------
// GoldenDir
// ---------------------------------------------------------------------------

/// A temporary directory of golden files, removed on drop.
///
/// ```rust
/// let dir = GoldenDir::new().with_file("record.golden.json", "{}");
/// let path = dir.path("record.golden.json");
/// ```
pub struct GoldenDir {
    dir: TempDir,
}

impl GoldenDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Write `contents` to `name` (relative to the directory root), creating
    /// parent directories as needed.
    pub fn with_file(self, name: &str, contents: impl AsRef<[u8]>) -> Self {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        fs::write(&path, contents).expect("failed to write golden file");
        self
    }

    /// Absolute path of `name` inside the directory. The file need not exist.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Current contents of `name`.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("failed to read golden file")
    }
}

impl Default for GoldenDir {
    fn default() -> Self {
        Self::new()
    }
}
