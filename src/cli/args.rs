//! Command-line argument parsing.

pub const USAGE: &str = "\
Usage: cybersec [OPTIONS]

Terminal console for the CyberSec AI Agent API.

Options:
  --api-url <URL>  Base URL of the API (overrides CYBERSEC_API_URL)
  -V, --version    Print version
  -h, --help       Print help

Environment:
  CYBERSEC_API_URL     Base URL of the API (default http://127.0.0.1:4943)
  CYBERSEC_LOCAL_TIME  Show log timestamps in local time when set to 1
  CYBERSEC_LOG         Log filter, e.g. debug or cybersec_console=trace";

/// Options that shape the TUI session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub api_url: Option<String>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Version,
    Help,
    /// Run the TUI application (default)
    RunTui(CliOptions),
}

/// Parse command-line arguments. The first item is the program name.
///
/// Unknown arguments are ignored. `--api-url` accepts both
/// `--api-url URL` and `--api-url=URL`; a trailing `--api-url` with no value
/// is ignored.
///
/// ```
/// use cybersec_console::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["cybersec".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--api-url" => {
                if let Some(url) = args.next() {
                    options.api_url = Some(url);
                }
            }
            other => {
                if let Some(url) = other.strip_prefix("--api-url=") {
                    options.api_url = Some(url.to_string());
                }
            }
        }
    }
    CliCommand::RunTui(options)
}
