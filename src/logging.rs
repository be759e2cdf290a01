//! File-backed tracing setup.
//!
//! The TUI owns stdout, so log lines go to `<data_dir>/edux.log`.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "EDUX_LOG";

/// Filter used when `EDUX_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "edux=info";

pub const LOG_FILE: &str = "edux.log";

pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILE)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Returns the log file path, or `None` when the file could not be opened
/// or a subscriber was already installed. Either way the app keeps running.
pub fn init_logging(data_dir: &Path) -> Option<PathBuf> {
    crate::storage::ensure_data_dir(data_dir).ok()?;
    let path = log_path(data_dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok()?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), path = %path.display(), "logging initialised");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_is_inside_data_dir() {
        let path = log_path(Path::new("/data/edux"));
        assert_eq!(path, PathBuf::from("/data/edux/edux.log"));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
