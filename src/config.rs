//! Shell configuration.
//!
//! Defaults, then environment, then CLI flags, each layer overriding the last.
//!
//! # Example
//!
//! ```
//! use edux::app::ShellMode;
//! use edux::config::ShellConfig;
//!
//! let config = ShellConfig::default()
//!     .with_initial_mode(ShellMode::Landing)
//!     .with_preserve_course_depth(true);
//! assert_eq!(config.initial_mode, ShellMode::Landing);
//! ```

use std::path::PathBuf;

use crate::app::ShellMode;
use crate::storage::resolve_data_dir;
use crate::theme::ThemeStore;

pub const ENV_START: &str = "EDUX_START";
pub const ENV_PRESERVE_COURSES: &str = "EDUX_PRESERVE_COURSES";
pub const ENV_DATA_DIR: &str = "EDUX_DATA_DIR";

/// An environment variable whose value was not understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedVar {
    pub name: &'static str,
    pub value: String,
}

impl RejectedVar {
    pub fn log(&self) {
        tracing::warn!(value = %self.value, "ignoring unknown {}", self.name);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Mode shown on cold start (default: main)
    pub initial_mode: ShellMode,
    /// Keep the course-exploration stack when leaving the Courses tab
    pub preserve_course_depth: bool,
    /// Override for the theme file and log location
    pub data_dir: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            initial_mode: ShellMode::Main,
            preserve_course_depth: false,
            data_dir: None,
        }
    }
}

impl ShellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_mode(mut self, mode: ShellMode) -> Self {
        self.initial_mode = mode;
        self
    }

    pub fn with_preserve_course_depth(mut self, preserve: bool) -> Self {
        self.preserve_course_depth = preserve;
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Defaults overridden by `EDUX_START`, `EDUX_PRESERVE_COURSES` and
    /// `EDUX_DATA_DIR`. Unrecognised values are ignored with a warning.
    pub fn from_env() -> Self {
        let (config, rejected) = Self::read_env();
        for entry in &rejected {
            entry.log();
        }
        config
    }

    /// Like [`ShellConfig::from_env`], but hands back the ignored values
    /// instead of logging them, for callers that read the environment
    /// before a subscriber exists.
    pub fn read_env() -> (Self, Vec<RejectedVar>) {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> (Self, Vec<RejectedVar>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut rejected = Vec::new();

        if let Some(value) = lookup(ENV_START) {
            match ShellMode::from_name(&value) {
                Some(mode) => config.initial_mode = mode,
                None => rejected.push(RejectedVar {
                    name: ENV_START,
                    value,
                }),
            }
        }
        if let Some(value) = lookup(ENV_PRESERVE_COURSES) {
            config.preserve_course_depth = parse_flag(&value);
        }
        if let Some(value) = lookup(ENV_DATA_DIR) {
            if !value.trim().is_empty() {
                config.data_dir = Some(PathBuf::from(value));
            }
        }
        (config, rejected)
    }

    /// The directory holding persisted state.
    pub fn resolved_data_dir(&self) -> PathBuf {
        resolve_data_dir(self.data_dir.as_deref())
    }

    pub fn theme_path(&self) -> PathBuf {
        ThemeStore::path_in(&self.resolved_data_dir())
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.initial_mode, ShellMode::Main);
        assert!(!config.preserve_course_depth);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let config = ShellConfig::new()
            .with_initial_mode(ShellMode::Onboarding)
            .with_data_dir("/tmp/edux");
        assert_eq!(config.initial_mode, ShellMode::Onboarding);
        assert_eq!(config.resolved_data_dir(), PathBuf::from("/tmp/edux"));
        assert_eq!(config.theme_path(), PathBuf::from("/tmp/edux/theme-storage.json"));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("nope"));
    }

    #[test]
    fn test_unknown_start_is_returned_not_applied() {
        let (config, rejected) = ShellConfig::from_lookup(|name| match name {
            ENV_START => Some("sideways".to_string()),
            ENV_PRESERVE_COURSES => Some("1".to_string()),
            _ => None,
        });
        assert_eq!(config.initial_mode, ShellMode::Main);
        assert!(config.preserve_course_depth);
        assert_eq!(
            rejected,
            vec![RejectedVar {
                name: ENV_START,
                value: "sideways".to_string()
            }]
        );
    }

    #[test]
    fn test_known_start_has_no_rejections() {
        let (config, rejected) = ShellConfig::from_lookup(|name| {
            (name == ENV_START).then(|| "landing".to_string())
        });
        assert_eq!(config.initial_mode, ShellMode::Landing);
        assert!(rejected.is_empty());
    }
}
