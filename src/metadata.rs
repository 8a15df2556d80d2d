//! Build metadata extraction from ESP-IDF's project_description.json.
//!
//! Reading metadata is best-effort enrichment: a missing or malformed
//! file falls back to the built-in defaults and never fails the export.

use serde::Deserialize;
use std::path::Path;

/// Default project name when the build carries no metadata.
pub const DEFAULT_PROJECT: &str = "AS608-ESP32s3";

/// Default target chip.
pub const DEFAULT_TARGET: &str = "esp32s3";

/// File written by idf.py into the build directory.
pub const PROJECT_DESCRIPTION_FILE: &str = "project_description.json";

/// Identity of the build being exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMetadata {
    /// Project name (e.g. "AS608-ESP32s3")
    pub project: String,
    /// Target chip identifier (e.g. "esp32s3")
    pub target: String,
    /// ESP-IDF toolchain version, or "unknown"
    pub idf_version: String,
}

impl Default for BuildMetadata {
    fn default() -> Self {
        Self {
            project: DEFAULT_PROJECT.to_string(),
            target: DEFAULT_TARGET.to_string(),
            idf_version: "unknown".to_string(),
        }
    }
}

/// Subset of project_description.json we care about.
#[derive(Debug, Deserialize)]
struct ProjectDescription {
    project_name: Option<String>,
    idf_ver: Option<String>,
    target: Option<String>,
}

/// Read build metadata from the build directory.
///
/// Any failure (file missing, unreadable, malformed JSON) yields the
/// defaults; this function never errors.
pub fn read(build_dir: &Path) -> BuildMetadata {
    let mut meta = BuildMetadata::default();

    let desc_path = build_dir.join(PROJECT_DESCRIPTION_FILE);
    let Ok(raw) = std::fs::read_to_string(&desc_path) else {
        return meta;
    };
    let Ok(desc) = serde_json::from_str::<ProjectDescription>(&raw) else {
        return meta;
    };

    if let Some(project) = desc.project_name {
        meta.project = project;
    }
    if let Some(idf_ver) = desc.idf_ver {
        meta.idf_version = idf_ver;
    }
    if let Some(target) = desc.target {
        meta.target = target;
    }

    meta
}
