//! File-backed tracing setup.
//!
//! The terminal belongs to the TUI, so log output goes to
//! `<data_local_dir>/cybersec-console/cybersec.log`. The filter comes from
//! `CYBERSEC_LOG` (falling back to `info`).

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub const ENV_LOG_FILTER: &str = "CYBERSEC_LOG";

/// Location of the log file, if a data directory exists on this platform.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("cybersec-console").join("cybersec.log"))
}

fn build_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Returns the log path on success.
///
/// Failure to create the file leaves logging disabled; the app still runs.
pub fn init() -> Option<PathBuf> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return None;
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "cybersec-console started");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name() {
        if let Some(path) = log_file_path() {
            assert!(path.ends_with("cybersec-console/cybersec.log"));
        }
    }
}
