//! Export command - runs the release packaging pipeline.

use anyhow::Result;

use crate::config::Config;
use crate::manifest::ARTIFACTS;
use crate::{export, instructions, metadata, version};

/// Execute the export command.
///
/// Exit is 0 whenever the pipeline completes, however many artifacts
/// were skipped; only the pre-condition check (no build directory or no
/// firmware image) errors out.
pub fn cmd_export(config: &Config, explicit_version: Option<&str>) -> Result<()> {
    let version = version::resolve(explicit_version);
    let meta = metadata::read(&config.build_dir);

    println!("\n{}", "=".repeat(60));
    println!("  Exporting Firmware - {}", meta.project);
    println!("  Version: {}", version);
    println!("{}\n", "=".repeat(60));

    let outcome = export::export(config, &version)?;

    let document = instructions::render(&meta, &outcome, &instructions::export_timestamp());
    instructions::write(&outcome.release_dir, &document)?;
    println!("\n  ✓ Flash info: {}", instructions::FLASH_INFO_FILE);

    let summary = outcome.summary();
    println!("\n{}", "=".repeat(60));
    println!("  Export complete! Files saved to:");
    println!("  {}", outcome.release_dir.display());
    println!(
        "  {} of {} artifacts exported ({} skipped)",
        summary.exported,
        ARTIFACTS.len(),
        summary.skipped
    );
    println!("{}\n", "=".repeat(60));

    Ok(())
}
