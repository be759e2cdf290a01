//! Command-line interface.
//!
//! Called early in `main`, before the terminal is touched:
//!
//! ```ignore
//! use edux::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! let options = match run_cli_command(command) {
//!     Ok(options) => options,
//!     Err(message) => {
//!         eprintln!("error: {message}");
//!         std::process::exit(2);
//!     }
//! };
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions, USAGE};
pub use version::{handle_help_command, handle_version_command, VERSION};

/// Handle informational commands.
///
/// `Version` and `Help` print and exit. `RunTui` hands back its options;
/// `Invalid` hands back the message for the caller to report.
pub fn run_cli_command(command: CliCommand) -> Result<RunOptions, String> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::RunTui(options) => Ok(options),
        CliCommand::Invalid(message) => Err(message),
    }
}
