//! Reference store: reads and writes golden file bytes.
//!
//! Writes create every missing parent directory first and overwrite the file
//! unconditionally. On unix, new directories and new files are created with
//! mode `0777` before the umask; an existing file keeps its mode.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{GoldenError, Result};

/// Make `path` absolute against the working directory. No filesystem access
/// beyond reading the working directory; the file need not exist.
pub fn resolve(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    std::path::absolute(path).map_err(|source| GoldenError::Io {
        op: "resolve absolute path of",
        path: path.to_path_buf(),
        source,
    })
}

/// Read the golden file at `path`.
pub fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => GoldenError::NotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => GoldenError::Io {
            op: "read golden file",
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Write `bytes` to `path`, creating parent directories as needed.
pub fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dirs(parent).map_err(|source| GoldenError::Io {
            op: "create directory (and potential parent dirs) for golden file",
            path: parent.to_path_buf(),
            source,
        })?;
    }
    write_file(path, bytes).map_err(|source| GoldenError::Io {
        op: "update golden file",
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "golden file written");
    Ok(())
}

#[cfg(unix)]
fn create_dirs(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new().recursive(true).mode(0o777).create(dir)
}

#[cfg(not(unix))]
fn create_dirs(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o777)
        .open(path)?
        .write_all(bytes)
}

#[cfg(not(unix))]
fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    fs::write(path, bytes)
}
