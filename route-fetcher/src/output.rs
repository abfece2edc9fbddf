//! On-disk route record layout.
//!
//! Records land at `<base>/<route_type_dir>/<route_name>.json`, one
//! file per route, grouped by transit mode.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{RouteRecord, RouteType};

/// Errors when writing a route record to disk.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// Filesystem operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record serialization failed
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The output path for one route.
pub fn route_path(base: &Path, route_type: RouteType, route_name: &str) -> PathBuf {
    base.join(route_type.dir_name())
        .join(format!("{route_name}.json"))
}

/// Write a route record, creating the type directory on demand.
///
/// Returns the path written to.
pub fn write_route_record(
    base: &Path,
    route_type: RouteType,
    record: &RouteRecord,
) -> Result<PathBuf, OutputError> {
    let path = route_path(base, route_type, &record.name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string(record)?;
    fs::write(&path, json)?;

    Ok(path)
}
