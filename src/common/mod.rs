//! Shared utilities across fwexport modules.

pub mod files;
pub mod paths;

pub use files::write_file_with_dirs;
pub use paths::{ensure_dir_exists, ensure_parent_exists};
