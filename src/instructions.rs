//! Flashing-instructions document (flash_info.txt).
//!
//! The flash offsets are a static convention for the target's known
//! partition layout; they are not read from the exported partition
//! table. The document always lists the full recipe so existing tooling
//! that greps for the three write_flash lines keeps working, but entries
//! whose artifact was skipped are annotated rather than silently listed.

use anyhow::{Context, Result};
use chrono::Local;
use std::path::Path;

use crate::common::write_file_with_dirs;
use crate::export::ExportOutcome;
use crate::manifest::versioned_name;
use crate::metadata::BuildMetadata;

/// File name of the generated document inside the release bundle.
pub const FLASH_INFO_FILE: &str = "flash_info.txt";

/// One line of the flashing recipe.
#[derive(Debug, Clone, Copy)]
pub struct FlashTarget {
    /// Flash memory offset.
    pub offset: u32,
    /// Manifest destination base name flashed at that offset.
    pub dest: &'static str,
}

/// Fixed flash layout of the target device, in flashing order.
pub const FLASH_LAYOUT: &[FlashTarget] = &[
    FlashTarget {
        offset: 0x0,
        dest: "bootloader.bin",
    },
    FlashTarget {
        offset: 0x8000,
        dest: "partition-table.bin",
    },
    FlashTarget {
        offset: 0x20000,
        dest: "firmware.bin",
    },
];

/// Render the flashing-instructions document.
///
/// Pure: `exported_at` is the preformatted export timestamp so callers
/// (and tests) control the clock.
pub fn render(meta: &BuildMetadata, outcome: &ExportOutcome, exported_at: &str) -> String {
    let version = &outcome.version;
    let mut doc = String::new();

    doc.push_str("Firmware Export Info\n");
    doc.push_str(&"=".repeat(40));
    doc.push_str("\n\n");
    doc.push_str(&format!("Project: {}\n", meta.project));
    doc.push_str(&format!("Version: {}\n", version));
    doc.push_str(&format!("Target: {}\n", meta.target));
    doc.push_str(&format!("IDF Version: {}\n", meta.idf_version));
    doc.push_str(&format!("Export Date: {}\n\n", exported_at));

    doc.push_str("Flash Commands:\n");
    doc.push_str("--------------\n");
    doc.push_str("Full Flash:\n");
    doc.push_str(
        "  esptool.py -p COMx -b 460800 --before default_reset --after hard_reset write_flash\n",
    );
    for target in FLASH_LAYOUT {
        doc.push_str(&format!(
            "    {:#x} {}{}\n",
            target.offset,
            versioned_name(target.dest, version),
            if outcome.was_exported(target.dest) {
                ""
            } else {
                "  (not exported)"
            }
        ));
    }
    doc.push('\n');

    doc.push_str("OTA Update (via web interface):\n");
    match &outcome.ota {
        Some(ota) => {
            doc.push_str(&format!("  Upload: {}\n", ota.file_name));
            doc.push_str(&format!("  SHA256: {}\n", ota.sha256));
        }
        None => {
            doc.push_str("  (OTA image not available in this bundle)\n");
        }
    }

    doc
}

/// Write the document into the release bundle.
pub fn write(release_dir: &Path, document: &str) -> Result<()> {
    let path = release_dir.join(FLASH_INFO_FILE);
    write_file_with_dirs(&path, document)
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Export timestamp in the document's `YYYY-MM-DD HH:MM:SS` format.
pub fn export_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
