//! Timestamped config backup, taken before any destructive write.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

/// Copy the document to `<path>.bk-<timestamp>` alongside the original.
///
/// The apply path must call this before mutating the document; a failed
/// backup aborts the run with nothing written.
pub fn backup_config(path: &Path) -> Result<PathBuf> {
    let stamp = Local::now().format("%Y-%m-%dT%H:%M:%S");
    let backup = PathBuf::from(format!("{}.bk-{stamp}", path.display()));
    fs::copy(path, &backup).with_context(|| {
        format!(
            "failed to back up {} to {}",
            path.display(),
            backup.display()
        )
    })?;
    Ok(backup)
}
