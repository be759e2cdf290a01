//! Theme persistence and environment configuration.

use std::fs;

use edux::app::{App, ShellMode};
use edux::config::{ShellConfig, ENV_DATA_DIR, ENV_PRESERVE_COURSES, ENV_START};
use edux::theme::{Theme, ThemeState, ThemeStore, STORAGE_KEY};
use serial_test::serial;
use tempfile::TempDir;

struct EnvGuard {
    keys: Vec<&'static str>,
}

impl EnvGuard {
    fn set(vars: &[(&'static str, &str)]) -> Self {
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        Self {
            keys: vars.iter().map(|(k, _)| *k).collect(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            std::env::remove_var(key);
        }
    }
}

#[test]
fn test_theme_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let mut state = ThemeState::load(ThemeStore::in_dir(dir.path()));
    assert_eq!(state.theme(), Theme::Light);

    state.toggle();
    let path = ThemeStore::path_in(dir.path());
    assert!(path.ends_with(format!("{STORAGE_KEY}.json")));
    let json = fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"dark\""));

    let reloaded = ThemeState::load(ThemeStore::in_dir(dir.path()));
    assert_eq!(reloaded.theme(), Theme::Dark);
}

#[test]
fn test_corrupt_theme_file_falls_back() {
    let dir = TempDir::new().unwrap();
    fs::write(ThemeStore::path_in(dir.path()), "{not json").unwrap();

    let state = ThemeState::load(ThemeStore::in_dir(dir.path()));
    assert_eq!(state.theme(), Theme::Light);
}

#[test]
fn test_app_loads_theme_from_data_dir() {
    let dir = TempDir::new().unwrap();
    ThemeStore::in_dir(dir.path()).save(Theme::Dark);

    let app = App::new(ShellConfig::new().with_data_dir(dir.path()));
    assert!(app.theme.is_dark());
}

#[test]
#[serial]
fn test_config_from_env() {
    let dir = TempDir::new().unwrap();
    let dir_str = dir.path().to_string_lossy().to_string();
    let _guard = EnvGuard::set(&[
        (ENV_START, "landing"),
        (ENV_PRESERVE_COURSES, "yes"),
        (ENV_DATA_DIR, &dir_str),
    ]);

    let config = ShellConfig::from_env();
    assert_eq!(config.initial_mode, ShellMode::Landing);
    assert!(config.preserve_course_depth);
    assert_eq!(config.resolved_data_dir(), dir.path());
    assert_eq!(config.theme_path(), ThemeStore::path_in(dir.path()));
}

#[test]
#[serial]
fn test_unknown_env_values_keep_defaults() {
    let _guard = EnvGuard::set(&[(ENV_START, "sideways"), (ENV_PRESERVE_COURSES, "0")]);

    let config = ShellConfig::from_env();
    assert_eq!(config.initial_mode, ShellMode::Main);
    assert!(!config.preserve_course_depth);
}
