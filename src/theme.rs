//! Light/dark theme flag with a JSON round-trip.
//!
//! Stored under the fixed key `theme-storage` as `{"theme":"light"|"dark"}`.
//! Read once on boot, written on every toggle, last write wins.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::storage::{load_json, save_json};

/// Fixed storage key; the file is `<data_dir>/theme-storage.json`.
pub const STORAGE_KEY: &str = "theme-storage";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct ThemeRecord {
    theme: Theme,
}

/// Where the theme is persisted. A store without a path keeps it in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeStore {
    path: Option<PathBuf>,
}

impl ThemeStore {
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: Some(Self::path_in(data_dir)),
        }
    }

    pub fn in_memory() -> Self {
        Self { path: None }
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(format!("{STORAGE_KEY}.json"))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Stored theme, or the default when missing or unreadable.
    pub fn load(&self) -> Theme {
        let Some(path) = self.path.as_deref() else {
            return Theme::default();
        };
        match load_json::<ThemeRecord>(path) {
            Ok(Some(record)) => record.theme,
            Ok(None) => Theme::default(),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "unreadable theme storage, using default");
                Theme::default()
            }
        }
    }

    /// Persist `theme`. Failures are logged and otherwise ignored.
    pub fn save(&self, theme: Theme) -> bool {
        let Some(path) = self.path.as_deref() else {
            return true;
        };
        match save_json(path, &ThemeRecord { theme }) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to persist theme");
                false
            }
        }
    }
}

/// The current theme plus where it lives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeState {
    theme: Theme,
    store: ThemeStore,
}

impl ThemeState {
    /// Read the stored theme.
    pub fn load(store: ThemeStore) -> Self {
        let theme = store.load();
        tracing::debug!(theme = %theme, "theme loaded");
        Self { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    /// Flip light/dark and write it through.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.save(theme);
        tracing::info!(theme = %theme, "theme changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&ThemeRecord { theme: Theme::Dark }).unwrap();
        assert_eq!(json, r#"{"theme":"dark"}"#);
    }

    #[test]
    fn test_toggle_in_memory() {
        let mut state = ThemeState::load(ThemeStore::in_memory());
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.toggle(), Theme::Dark);
        assert!(state.is_dark());
        assert_eq!(state.toggle(), Theme::Light);
    }

    #[test]
    fn test_path_uses_storage_key() {
        let path = ThemeStore::path_in(Path::new("/data"));
        assert_eq!(path, PathBuf::from("/data/theme-storage.json"));
    }
}
