//! Shared test utilities for fwexport tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment simulating a firmware project directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Project base directory
    pub base_dir: PathBuf,
    /// Build output directory (source of artifacts)
    pub build_dir: PathBuf,
    /// Release root (export destination)
    pub release_dir: PathBuf,
}

impl TestEnv {
    /// Create a new test environment. The build directory is NOT created;
    /// call `create_full_build` / `create_minimal_build` or make it by hand.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let build_dir = base_dir.join("build");
        let release_dir = base_dir.join("release");

        Self {
            _temp_dir: temp_dir,
            base_dir,
            build_dir,
            release_dir,
        }
    }

    /// Build a Config pointing at this environment.
    pub fn config(&self) -> fwexport::config::Config {
        fwexport::config::Config {
            base_dir: self.base_dir.clone(),
            build_dir: self.build_dir.clone(),
            release_dir: self.release_dir.clone(),
        }
    }

    /// Write one build output file (path relative to the build dir).
    pub fn write_build_file(&self, rel: &str, content: &[u8]) {
        let path = self.build_dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create build subdir");
        fs::write(&path, content).expect("Failed to write build file");
    }
}

/// Create a complete mock build: firmware, bootloader, partition table
/// and OTA seed data.
pub fn create_full_build(env: &TestEnv) {
    env.write_build_file("AS608-ESP32s3.bin", &[0xE9; 2048]);
    env.write_build_file("bootloader/bootloader.bin", &[0x01; 512]);
    env.write_build_file("partition_table/partition-table.bin", &[0x02; 256]);
    env.write_build_file("ota_data_initial.bin", &[0xFF; 32]);
}

/// Create a build containing only the main firmware image.
pub fn create_minimal_build(env: &TestEnv) {
    env.write_build_file("AS608-ESP32s3.bin", &[0xE9; 1024]);
}

/// Assert a file exists.
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "Expected file to exist: {}", path.display());
}

/// Assert a file does not exist.
pub fn assert_not_exists(path: &Path) {
    assert!(!path.exists(), "Expected no file at: {}", path.display());
}

/// Assert a file contains the given needle.
pub fn assert_file_contains(path: &Path, needle: &str) {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    assert!(
        content.contains(needle),
        "Expected {} to contain {:?}.\nActual content:\n{}",
        path.display(),
        needle,
        content
    );
}
