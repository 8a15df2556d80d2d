//! Release version resolution.

use chrono::Local;

/// Resolve the release version token.
///
/// An explicit version is used verbatim - it is not validated or
/// normalized, and it ends up in file and directory names as-is.
/// Without one, a timestamp token is synthesized at second resolution;
/// the fixed-width `YYYYMMDD_HHMMSS` format makes successive tokens
/// sort lexicographically in time order.
pub fn resolve(explicit: Option<&str>) -> String {
    match explicit {
        Some(version) => version.to_string(),
        None => Local::now().format("%Y%m%d_%H%M%S").to_string(),
    }
}
