//! Configuration management for fwexport.
//!
//! Reads configuration from the environment (a `.env` file, if present,
//! is loaded by main before this runs). Paths are resolved against the
//! project base directory so the tool can run from anywhere inside it.

use std::path::{Path, PathBuf};

/// Default build output directory, relative to the project root.
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Default release root, relative to the project root.
pub const DEFAULT_RELEASE_DIR: &str = "release";

/// fwexport configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Project base directory (where idf.py runs).
    pub base_dir: PathBuf,
    /// Build output directory (default: build)
    pub build_dir: PathBuf,
    /// Release root directory (default: release)
    pub release_dir: PathBuf,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Recognized variables:
    /// - `FWEXPORT_BUILD_DIR` - build output directory
    /// - `FWEXPORT_RELEASE_DIR` - release root
    ///
    /// Relative paths are resolved against `base_dir`.
    pub fn load(base_dir: &Path) -> Self {
        let build_dir = path_from_env(base_dir, "FWEXPORT_BUILD_DIR", DEFAULT_BUILD_DIR);
        let release_dir = path_from_env(base_dir, "FWEXPORT_RELEASE_DIR", DEFAULT_RELEASE_DIR);

        Self {
            base_dir: base_dir.to_path_buf(),
            build_dir,
            release_dir,
        }
    }

    /// Check if a build output directory is present.
    pub fn has_build_output(&self) -> bool {
        self.build_dir.is_dir()
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  FWEXPORT_BUILD_DIR: {}", self.build_dir.display());
        println!("  FWEXPORT_RELEASE_DIR: {}", self.release_dir.display());
        if self.has_build_output() {
            println!("  Build output: FOUND");
        } else {
            println!("  Build output: NOT FOUND (run 'idf.py build' first)");
        }
    }
}

fn path_from_env(base_dir: &Path, var: &str, default: &str) -> PathBuf {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    let path = PathBuf::from(raw);
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}
