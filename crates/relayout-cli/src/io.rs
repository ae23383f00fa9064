//! Atomic file I/O for the transformed document

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::error::{CliError, Result};

/// Read a document as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}

/// Write content atomically with locking.
///
/// Uses write-to-temp-then-rename in the target's directory, so the final
/// rename never crosses filesystems and a crash mid-write leaves the
/// original document intact. An advisory lock guards the temp file against
/// concurrent writers.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| CliError::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| CliError::LockFailed {
        path: path.to_path_buf(),
    })?;

    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| CliError::io(&temp_path, e))?;
    temp_file
        .sync_all()
        .map_err(|e| CliError::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| CliError::LockFailed {
        path: path.to_path_buf(),
    })?;

    fs::rename(&temp_path, path).map_err(|e| CliError::io(path, e))?;

    Ok(())
}
