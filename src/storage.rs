//! Data directory resolution and small JSON file helpers.

use color_eyre::{eyre::WrapErr, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the platform data dir.
const APP_DIR: &str = "edux";

/// Fallback when the platform has no data dir.
const FALLBACK_DIR: &str = ".edux";

/// Resolve the data directory without touching the filesystem.
///
/// An explicit override wins; otherwise `<data_local_dir>/edux`, or `./.edux`
/// when the platform does not expose one.
pub fn resolve_data_dir(override_dir: Option<&Path>) -> PathBuf {
    match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_DIR)),
    }
}

/// Create the data directory if needed and return it.
pub fn ensure_data_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("Failed to create data directory {}", dir.display()))?;
    }
    Ok(dir.to_path_buf())
}

/// Write `value` as pretty JSON, creating the parent directory first.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_data_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(value).wrap_err("Failed to serialize JSON")?;
    fs::write(path, json).wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Read JSON from `path`. A missing file is `Ok(None)`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let json =
        fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    let value = serde_json::from_str(&json)
        .wrap_err_with(|| format!("Failed to deserialize {}", path.display()))?;
    Ok(Some(value))
}
