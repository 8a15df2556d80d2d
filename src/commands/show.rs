//! Show command - displays information.

use anyhow::Result;
use walkdir::WalkDir;

use crate::config::Config;

/// Show target for the show command.
pub enum ShowTarget {
    /// Show configuration
    Config,
    /// List exported release bundles
    Releases,
}

/// Execute the show command.
pub fn cmd_show(config: &Config, target: ShowTarget) -> Result<()> {
    match target {
        ShowTarget::Config => {
            config.print();
        }
        ShowTarget::Releases => {
            if !config.release_dir.is_dir() {
                println!("No releases yet ({} does not exist).", config.release_dir.display());
                return Ok(());
            }

            println!("Releases in {}:", config.release_dir.display());
            for entry in WalkDir::new(&config.release_dir)
                .min_depth(1)
                .sort_by_file_name()
            {
                let entry = entry?;
                let rel = entry.path().strip_prefix(&config.release_dir).unwrap_or(entry.path());
                if entry.file_type().is_dir() {
                    println!("  {}/", rel.display());
                } else {
                    let size = entry.metadata()?.len();
                    println!("    {:40} {:.1} KB", rel.display().to_string(), size as f64 / 1024.0);
                }
            }
        }
    }
    Ok(())
}
