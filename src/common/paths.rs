//! Path checking and directory management.

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Ensure a directory exists, creating it (and parents) if necessary.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Ensure all parent directories of a file exist.
///
/// If the path has no parent, does nothing (doesn't error).
pub fn ensure_parent_exists(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
