//! Lookup of named database resources on disk.

use crate::error::{CollisionError, CollisionResult};
use std::path::{Path, PathBuf};

/// Environment variable pointing at the data directory.
pub const DATA_DIR_ENV: &str = "CT_DATA_DIRECTORY";

/// Data directory used when [`DATA_DIR_ENV`] is unset.
pub const DEFAULT_DATA_DIR: &str = "data";

const EXTENSIONS: [&str; 2] = ["yaml", "json"];

/// Directory holding resource categories.
pub fn data_directory() -> PathBuf {
    std::env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Resolve `name` within `category` under the default data directory.
///
/// An existing file path is returned unchanged; otherwise
/// `<data_dir>/<category>/<name>.yaml` then `.json` are tried.
pub fn resource_path(name: &str, category: &'static str) -> CollisionResult<PathBuf> {
    resource_path_in(&data_directory(), name, category)
}

pub fn resource_path_in(
    data_dir: &Path,
    name: &str,
    category: &'static str,
) -> CollisionResult<PathBuf> {
    let direct = Path::new(name);
    if direct.is_file() {
        return Ok(direct.to_path_buf());
    }

    let dir = data_dir.join(category);
    let candidates: Vec<PathBuf> = EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{name}.{ext}")))
        .collect();

    candidates
        .iter()
        .find(|p| p.is_file())
        .cloned()
        .ok_or_else(|| CollisionError::ResourceNotFound {
            name: name.to_string(),
            category,
            searched: candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
}
