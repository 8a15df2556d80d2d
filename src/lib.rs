//! fwexport library exports for testing.
//!
//! The binary in main.rs is a thin CLI over these modules; integration
//! tests drive the export pipeline through this interface.

pub mod audio;
pub mod common;
pub mod config;
pub mod export;
pub mod instructions;
pub mod manifest;
pub mod metadata;
pub mod process;
pub mod version;
