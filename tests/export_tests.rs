//! Integration tests for the export pipeline.
//!
//! These drive the full pipeline (pre-condition check, export loop, OTA
//! derivation, instructions document) against mock build trees.

mod helpers;

use helpers::{
    assert_file_contains, assert_file_exists, assert_not_exists, create_full_build,
    create_minimal_build, TestEnv,
};
use fwexport::export::{self, check_build};
use fwexport::instructions;
use fwexport::manifest::ARTIFACTS;
use fwexport::metadata;
use std::fs;

// =============================================================================
// Pre-condition check (the only fatal path)
// =============================================================================

#[test]
fn test_missing_build_dir_aborts() {
    let env = TestEnv::new();

    let err = export::export(&env.config(), "1.0.0").unwrap_err();
    assert!(err.to_string().contains("Build directory not found"));
    assert_not_exists(&env.release_dir);
}

#[test]
fn test_missing_firmware_aborts_without_writing() {
    let env = TestEnv::new();
    // Build dir exists but holds everything except the main image
    env.write_build_file("bootloader/bootloader.bin", &[0x01; 512]);

    let err = export::export(&env.config(), "1.0.0").unwrap_err();
    assert!(err.to_string().contains("Firmware binary not found"));
    assert_not_exists(&env.release_dir);
}

#[test]
fn test_check_build_passes_on_minimal_build() {
    let env = TestEnv::new();
    create_minimal_build(&env);
    check_build(&env.config()).unwrap();
}

// =============================================================================
// Export loop
// =============================================================================

#[test]
fn test_full_build_exports_everything() {
    let env = TestEnv::new();
    create_full_build(&env);

    let outcome = export::export(&env.config(), "2.1.0").unwrap();

    assert_eq!(outcome.exported.len(), ARTIFACTS.len());
    assert_eq!(outcome.skipped.len(), 0);

    let bundle = env.release_dir.join("v2.1.0");
    assert_file_exists(&bundle.join("firmware_v2.1.0.bin"));
    assert_file_exists(&bundle.join("bootloader_v2.1.0.bin"));
    assert_file_exists(&bundle.join("partition-table_v2.1.0.bin"));
    assert_file_exists(&bundle.join("ota_data_initial_v2.1.0.bin"));
    assert_file_exists(&bundle.join("ota_update_v2.1.0.bin"));
}

#[test]
fn test_release_bundle_holds_exactly_the_present_subset() {
    let env = TestEnv::new();
    create_minimal_build(&env);

    let outcome = export::export(&env.config(), "2.1.0").unwrap();
    let document = instructions::render(
        &metadata::read(&env.build_dir),
        &outcome,
        "2026-01-01 00:00:00",
    );
    instructions::write(&outcome.release_dir, &document).unwrap();

    let mut names: Vec<String> = fs::read_dir(&outcome.release_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        ["firmware_v2.1.0.bin", "flash_info.txt", "ota_update_v2.1.0.bin"]
    );
}

#[test]
fn test_exported_plus_skipped_equals_manifest() {
    let env = TestEnv::new();
    create_minimal_build(&env);
    env.write_build_file("partition_table/partition-table.bin", &[0x02; 256]);

    let outcome = export::export(&env.config(), "1.0.0").unwrap();
    let summary = outcome.summary();

    assert_eq!(summary.exported, 2);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.exported + summary.skipped, ARTIFACTS.len());
    for skip in &outcome.skipped {
        assert_eq!(skip.reason, "source not found");
    }
}

#[test]
fn test_copy_failure_recorded_as_skip() {
    let env = TestEnv::new();
    create_minimal_build(&env);
    // A directory where the bootloader image is expected: the source
    // exists, but copying it fails
    fs::create_dir_all(env.build_dir.join("bootloader/bootloader.bin")).unwrap();

    let outcome = export::export(&env.config(), "1.0.0").unwrap();

    let summary = outcome.summary();
    assert_eq!(summary.exported + summary.skipped, ARTIFACTS.len());

    let skip = outcome
        .skipped
        .iter()
        .find(|s| s.dest == "bootloader.bin")
        .expect("uncopyable entry should be recorded as a skip");
    assert!(skip.reason.starts_with("copy failed"), "{}", skip.reason);
    // The failed entry never lands in the bundle
    assert_not_exists(&outcome.release_dir.join("bootloader_v1.0.0.bin"));
    // And the rest of the run is unaffected
    assert_file_exists(&outcome.release_dir.join("firmware_v1.0.0.bin"));
}

#[test]
fn test_explicit_version_fixes_release_path() {
    let env = TestEnv::new();
    create_minimal_build(&env);

    let outcome = export::export(&env.config(), "1.0.0").unwrap();
    assert_eq!(outcome.release_dir, env.release_dir.join("v1.0.0"));
}

#[test]
fn test_version_embedded_exactly_once() {
    let env = TestEnv::new();
    create_full_build(&env);

    let outcome = export::export(&env.config(), "9.9").unwrap();
    for artifact in &outcome.exported {
        assert_eq!(artifact.file_name.matches("_v9.9").count(), 1, "{}", artifact.file_name);
    }
}

#[test]
fn test_copy_sizes_preserved() {
    let env = TestEnv::new();
    create_full_build(&env);

    let outcome = export::export(&env.config(), "1.0.0").unwrap();
    let by_dest = |dest: &str| {
        outcome
            .exported
            .iter()
            .find(|a| a.dest == dest)
            .unwrap_or_else(|| panic!("{} not exported", dest))
            .size
    };
    assert_eq!(by_dest("firmware.bin"), 2048);
    assert_eq!(by_dest("bootloader.bin"), 512);
    assert_eq!(by_dest("partition-table.bin"), 256);
}

// =============================================================================
// Derived OTA artifact
// =============================================================================

#[test]
fn test_ota_image_copies_main_firmware() {
    let env = TestEnv::new();
    create_minimal_build(&env);

    let outcome = export::export(&env.config(), "2.1.0").unwrap();
    let ota = outcome.ota.as_ref().expect("OTA image should exist");
    assert_eq!(ota.file_name, "ota_update_v2.1.0.bin");
    assert_eq!(ota.size, 1024);
    assert_eq!(ota.sha256.len(), 64);

    let ota_bytes = fs::read(outcome.release_dir.join(&ota.file_name)).unwrap();
    let fw_bytes = fs::read(env.build_dir.join("AS608-ESP32s3.bin")).unwrap();
    assert_eq!(ota_bytes, fw_bytes);
}

// =============================================================================
// End-to-end bundles
// =============================================================================

#[test]
fn test_end_to_end_minimal_bundle() {
    let env = TestEnv::new();
    create_minimal_build(&env); // single 1024-byte firmware image

    let config = env.config();
    let meta = metadata::read(&config.build_dir);
    let outcome = export::export(&config, "2.1.0").unwrap();
    let document = instructions::render(&meta, &outcome, "2026-08-29 12:00:00");
    instructions::write(&outcome.release_dir, &document).unwrap();

    let bundle = env.release_dir.join("v2.1.0");
    assert_eq!(fs::metadata(bundle.join("firmware_v2.1.0.bin")).unwrap().len(), 1024);
    assert_eq!(fs::metadata(bundle.join("ota_update_v2.1.0.bin")).unwrap().len(), 1024);

    let flash_info = bundle.join("flash_info.txt");
    assert_file_exists(&flash_info);
    assert_file_contains(&flash_info, "2.1.0");
    assert_file_contains(&flash_info, "0x0 ");
    assert_file_contains(&flash_info, "0x8000 ");
    assert_file_contains(&flash_info, "0x20000 ");
}

#[test]
fn test_document_lists_all_recipe_names_despite_skips() {
    let env = TestEnv::new();
    create_minimal_build(&env); // bootloader + partition table absent

    let config = env.config();
    let outcome = export::export(&config, "3.0.0").unwrap();
    let document = instructions::render(
        &metadata::read(&config.build_dir),
        &outcome,
        "2026-08-29 12:00:00",
    );
    instructions::write(&outcome.release_dir, &document).unwrap();

    let flash_info = outcome.release_dir.join("flash_info.txt");
    assert_file_contains(&flash_info, "bootloader_v3.0.0.bin");
    assert_file_contains(&flash_info, "partition-table_v3.0.0.bin");
    assert_file_contains(&flash_info, "firmware_v3.0.0.bin");
    // Skipped entries are annotated, not silently listed
    assert_file_contains(&flash_info, "bootloader_v3.0.0.bin  (not exported)");
    assert_file_contains(&flash_info, "partition-table_v3.0.0.bin  (not exported)");
}

#[test]
fn test_metadata_flows_into_document() {
    let env = TestEnv::new();
    create_minimal_build(&env);
    env.write_build_file(
        "project_description.json",
        br#"{"project_name": "doorlock", "idf_ver": "v5.2.1"}"#,
    );

    let config = env.config();
    let meta = metadata::read(&config.build_dir);
    let outcome = export::export(&config, "1.0.0").unwrap();
    let document = instructions::render(&meta, &outcome, "2026-08-29 12:00:00");

    assert!(document.contains("Project: doorlock"));
    assert!(document.contains("IDF Version: v5.2.1"));
    assert!(document.contains("Target: esp32s3"));
    assert!(document.contains("SHA256: "));
}

#[test]
fn test_second_export_same_version_overwrites() {
    let env = TestEnv::new();
    create_minimal_build(&env);

    export::export(&env.config(), "1.0.0").unwrap();
    // Rebuild with different content, re-export same version
    env.write_build_file("AS608-ESP32s3.bin", &[0xAA; 4096]);
    let outcome = export::export(&env.config(), "1.0.0").unwrap();

    let fw = outcome.release_dir.join("firmware_v1.0.0.bin");
    assert_eq!(fs::metadata(&fw).unwrap().len(), 4096);
}
