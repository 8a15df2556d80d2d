//! The artifact manifest: which build outputs go into a release bundle.
//!
//! The manifest is fixed configuration, not discovered at runtime.
//! Entries missing from the build directory are valid and are simply
//! skipped by the exporter. Order matters: consumers (the flashing
//! recipe in particular) rely on it.

/// One expected build artifact.
#[derive(Debug, Clone, Copy)]
pub struct ManifestEntry {
    /// Path relative to the build directory.
    pub source: &'static str,
    /// Base name in the release bundle (before versioning).
    pub dest: &'static str,
}

/// Main firmware image produced by idf.py, relative to the build dir.
/// Its presence is the precondition for any export, and it doubles as
/// the source of the OTA update image.
pub const MAIN_FIRMWARE: &str = "AS608-ESP32s3.bin";

/// Expected build artifacts, in release-bundle order.
pub const ARTIFACTS: &[ManifestEntry] = &[
    ManifestEntry {
        source: "AS608-ESP32s3.bin",
        dest: "firmware.bin",
    },
    ManifestEntry {
        source: "bootloader/bootloader.bin",
        dest: "bootloader.bin",
    },
    ManifestEntry {
        source: "partition_table/partition-table.bin",
        dest: "partition-table.bin",
    },
    // Initial OTA selection data; only present on OTA-enabled builds.
    ManifestEntry {
        source: "ota_data_initial.bin",
        dest: "ota_data_initial.bin",
    },
];

/// Embed the version into a destination base name, before the extension:
/// `firmware.bin` + `2.1.0` -> `firmware_v2.1.0.bin`.
/// Names without an extension get a plain `_v<version>` suffix.
pub fn versioned_name(dest: &str, version: &str) -> String {
    match dest.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{}_v{}.{}", stem, version, ext),
        _ => format!("{}_v{}", dest, version),
    }
}
