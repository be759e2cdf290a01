//! Command-line argument parsing.

use std::path::PathBuf;

use crate::app::ShellMode;
use crate::config::ShellConfig;

/// Flags that adjust the TUI run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub initial_mode: Option<ShellMode>,
    pub keep_course_depth: bool,
    pub data_dir: Option<PathBuf>,
}

impl RunOptions {
    /// Layer these flags over `config`.
    pub fn apply(&self, mut config: ShellConfig) -> ShellConfig {
        if let Some(mode) = self.initial_mode {
            config = config.with_initial_mode(mode);
        }
        if self.keep_course_depth {
            config = config.with_preserve_course_depth(true);
        }
        if let Some(dir) = &self.data_dir {
            config = config.with_data_dir(dir.clone());
        }
        config
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui(RunOptions),
    /// Unusable arguments; the message says why
    Invalid(String),
}

/// Parse command-line arguments, program name first.
///
/// # Examples
///
/// ```
/// use edux::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["edux".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--landing" => options.initial_mode = Some(ShellMode::Landing),
            "--onboarding" => options.initial_mode = Some(ShellMode::Onboarding),
            "--keep-course-depth" => options.keep_course_depth = true,
            "--data-dir" => match args.next() {
                Some(dir) => options.data_dir = Some(PathBuf::from(dir)),
                None => return CliCommand::Invalid("--data-dir requires a path".to_string()),
            },
            other => {
                if let Some(dir) = other.strip_prefix("--data-dir=") {
                    options.data_dir = Some(PathBuf::from(dir));
                } else {
                    return CliCommand::Invalid(format!("unknown argument: {other}"));
                }
            }
        }
    }
    CliCommand::RunTui(options)
}

pub const USAGE: &str = "\
Usage: edux [OPTIONS]

Options:
  --landing             Start on the landing screen
  --onboarding          Start in onboarding
  --keep-course-depth   Keep course navigation when switching tabs
  --data-dir <PATH>     Directory for theme storage and logs
  -h, --help            Print help
  -V, --version         Print version

Environment:
  EDUX_START              landing | onboarding | main
  EDUX_PRESERVE_COURSES   1 to keep course navigation between tabs
  EDUX_DATA_DIR           Same as --data-dir
  EDUX_LOG                tracing filter (default: edux=info)";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["edux".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::RunTui(RunOptions::default()));
    }

    #[test]
    fn test_parse_run_options() {
        let CliCommand::RunTui(options) =
            parse(&["--landing", "--keep-course-depth", "--data-dir", "/tmp/x"])
        else {
            panic!("expected RunTui");
        };
        assert_eq!(options.initial_mode, Some(ShellMode::Landing));
        assert!(options.keep_course_depth);
        assert_eq!(options.data_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_parse_data_dir_equals_form() {
        let CliCommand::RunTui(options) = parse(&["--data-dir=/var/edux"]) else {
            panic!("expected RunTui");
        };
        assert_eq!(options.data_dir, Some(PathBuf::from("/var/edux")));
    }

    #[test]
    fn test_missing_data_dir_value() {
        assert!(matches!(parse(&["--data-dir"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert!(matches!(parse(&["--unknown"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_options_override_config() {
        let options = RunOptions {
            initial_mode: Some(ShellMode::Onboarding),
            keep_course_depth: true,
            data_dir: None,
        };
        let config = options.apply(ShellConfig::default());
        assert_eq!(config.initial_mode, ShellMode::Onboarding);
        assert!(config.preserve_course_depth);
    }
}
