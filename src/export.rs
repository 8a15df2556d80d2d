//! Export pipeline - copies build artifacts into a versioned release bundle.
//!
//! One fatal path only: the build directory or main firmware image being
//! absent aborts before anything is written. Everything after that is
//! per-entry tolerant - a missing or uncopyable artifact is recorded as a
//! skip and the run continues.

use anyhow::{bail, Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::ensure_dir_exists;
use crate::config::Config;
use crate::manifest::{versioned_name, ManifestEntry, ARTIFACTS, MAIN_FIRMWARE};

/// A manifest entry that made it into the release bundle.
#[derive(Debug, Clone)]
pub struct ExportedArtifact {
    /// Declared destination base name (e.g. "firmware.bin").
    pub dest: String,
    /// Versioned file name actually written (e.g. "firmware_v2.1.0.bin").
    pub file_name: String,
    /// Size in bytes of the written copy.
    pub size: u64,
}

/// A manifest entry that was not exported.
#[derive(Debug, Clone)]
pub struct SkippedArtifact {
    /// Declared destination base name.
    pub dest: String,
    /// Why it was skipped ("source not found", or a copy error).
    pub reason: String,
}

/// The derived OTA update image.
#[derive(Debug, Clone)]
pub struct OtaArtifact {
    /// Versioned file name (e.g. "ota_update_v2.1.0.bin").
    pub file_name: String,
    /// Size in bytes.
    pub size: u64,
    /// SHA-256 of the image, hex encoded.
    pub sha256: String,
}

/// Exported/skipped counts for the exit-status decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub exported: usize,
    pub skipped: usize,
}

/// Everything a single export run produced.
#[derive(Debug)]
pub struct ExportOutcome {
    /// Resolved version token.
    pub version: String,
    /// Release bundle directory (release/v<version>).
    pub release_dir: PathBuf,
    /// Manifest entries copied, in manifest order.
    pub exported: Vec<ExportedArtifact>,
    /// Manifest entries skipped, in manifest order.
    pub skipped: Vec<SkippedArtifact>,
    /// Derived OTA image, if the main firmware was present.
    pub ota: Option<OtaArtifact>,
}

impl ExportOutcome {
    /// Whether a given destination base name was actually exported.
    pub fn was_exported(&self, dest: &str) -> bool {
        self.exported.iter().any(|a| a.dest == dest)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            exported: self.exported.len(),
            skipped: self.skipped.len(),
        }
    }
}

/// Fatal pre-condition: the build directory and the main firmware image
/// must exist before any export is attempted.
pub fn check_build(config: &Config) -> Result<()> {
    if !config.build_dir.is_dir() {
        bail!(
            "Build directory not found at {}.\n\
             Run 'idf.py build' first.",
            config.build_dir.display()
        );
    }

    let main_bin = config.build_dir.join(MAIN_FIRMWARE);
    if !main_bin.exists() {
        bail!(
            "Firmware binary not found at {}.\n\
             Run 'idf.py build' first.",
            main_bin.display()
        );
    }

    Ok(())
}

/// Export the build into `release/v<version>/`.
///
/// Copies every manifest entry whose source exists, then derives the OTA
/// update image from the main firmware. Returns the full outcome; the
/// only error path is the pre-condition check.
pub fn export(config: &Config, version: &str) -> Result<ExportOutcome> {
    check_build(config)?;

    let release_dir = config.release_dir.join(format!("v{}", version));
    ensure_dir_exists(&release_dir)?;

    let mut exported = Vec::new();
    let mut skipped = Vec::new();

    for entry in ARTIFACTS {
        match export_entry(config, entry, version, &release_dir) {
            EntryResult::Exported(artifact) => {
                println!(
                    "  ✓ {:30} -> {} ({:.1} KB)",
                    entry.dest,
                    artifact.file_name,
                    artifact.size as f64 / 1024.0
                );
                exported.push(artifact);
            }
            EntryResult::Skipped(skip) => {
                println!("  ✗ {:30} ({})", entry.source, skip.reason);
                skipped.push(skip);
            }
        }
    }

    let ota = match derive_ota(config, version, &release_dir) {
        Ok(Some(ota)) => {
            println!(
                "\n  ✓ OTA update file: {} ({:.1} KB)",
                ota.file_name,
                ota.size as f64 / 1024.0
            );
            Some(ota)
        }
        Ok(None) => None,
        Err(e) => {
            eprintln!("  [WARN] OTA image not derived: {:#}", e);
            None
        }
    };

    Ok(ExportOutcome {
        version: version.to_string(),
        release_dir,
        exported,
        skipped,
        ota,
    })
}

enum EntryResult {
    Exported(ExportedArtifact),
    Skipped(SkippedArtifact),
}

fn export_entry(
    config: &Config,
    entry: &ManifestEntry,
    version: &str,
    release_dir: &Path,
) -> EntryResult {
    let src = config.build_dir.join(entry.source);
    if !src.exists() {
        return EntryResult::Skipped(SkippedArtifact {
            dest: entry.dest.to_string(),
            reason: "source not found".to_string(),
        });
    }

    let file_name = versioned_name(entry.dest, version);
    let dst = release_dir.join(&file_name);

    match fs::copy(&src, &dst) {
        Ok(size) => EntryResult::Exported(ExportedArtifact {
            dest: entry.dest.to_string(),
            file_name,
            size,
        }),
        // An I/O failure on one artifact must not abort the run.
        Err(e) => EntryResult::Skipped(SkippedArtifact {
            dest: entry.dest.to_string(),
            reason: format!("copy failed: {}", e),
        }),
    }
}

/// Derive the single-file OTA update image from the main firmware.
///
/// Independent of the manifest loop: it reads the main firmware source
/// directly, and is silently skipped if that image is absent (which the
/// pre-condition check rules out in practice).
fn derive_ota(config: &Config, version: &str, release_dir: &Path) -> Result<Option<OtaArtifact>> {
    let src = config.build_dir.join(MAIN_FIRMWARE);
    if !src.exists() {
        return Ok(None);
    }

    let file_name = versioned_name("ota_update.bin", version);
    let dst = release_dir.join(&file_name);
    let size = fs::copy(&src, &dst)
        .with_context(|| format!("Failed to write OTA image {}", dst.display()))?;
    let sha256 = sha256_file(&dst)?;

    Ok(Some(OtaArtifact {
        file_name,
        size,
        sha256,
    }))
}

/// SHA-256 of a file, hex encoded.
fn sha256_file(path: &Path) -> Result<String> {
    let mut file = fs::File::open(path)
        .with_context(|| format!("Failed to open {} for hashing", path.display()))?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher)
        .with_context(|| format!("Failed to hash {}", path.display()))?;
    Ok(format!("{:x}", hasher.finalize()))
}
