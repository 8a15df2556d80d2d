//! Clean command - removes the release directory.

use anyhow::{Context, Result};
use std::fs;

use crate::config::Config;

/// Execute the clean command.
pub fn cmd_clean(config: &Config) -> Result<()> {
    if !config.release_dir.exists() {
        println!("Nothing to clean ({} does not exist).", config.release_dir.display());
        return Ok(());
    }

    println!("Removing {}...", config.release_dir.display());
    fs::remove_dir_all(&config.release_dir)
        .with_context(|| format!("Failed to remove {}", config.release_dir.display()))?;
    println!("Done.");
    Ok(())
}
