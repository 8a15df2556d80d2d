//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `export` - Package the current build into a release bundle
//! - `convert` - Convert audio files to raw PCM
//! - `show` - Display information
//! - `clean` - Remove the release directory

pub mod clean;
pub mod convert;
pub mod export;
pub mod show;

pub use clean::cmd_clean;
pub use convert::cmd_convert;
pub use export::cmd_export;
pub use show::cmd_show;
