//! Command-line interface.
//!
//! Parsed before the TUI starts so `--version` and `--help` never touch the
//! terminal:
//!
//! ```ignore
//! match parse_args(std::env::args()) {
//!     CliCommand::Version => handle_version_command(),
//!     CliCommand::Help => handle_help_command(),
//!     CliCommand::RunTui(options) => { /* start the console */ }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, CliOptions, USAGE};
pub use version::{handle_version_command, VERSION};

/// Print usage and exit successfully.
pub fn handle_help_command() -> ! {
    println!("{}", USAGE);
    std::process::exit(0)
}
