//! Runtime configuration.
//!
//! Built from defaults, then the environment, then command-line overrides.
//! Nothing is read from or written to disk.

use crate::api::DEFAULT_API_BASE_URL;

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "CYBERSEC_API_URL";
/// Set to `1` or `true` to render log timestamps in local time.
pub const ENV_LOCAL_TIME: &str = "CYBERSEC_LOCAL_TIME";

/// Application configuration.
///
/// # Example
///
/// ```
/// use cybersec_console::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_api_url("http://localhost:9000")
///     .with_local_time(true);
/// assert_eq!(config.api_url, "http://localhost:9000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL the `/api/...` paths are appended to
    pub api_url: String,
    /// Render timestamps in the local timezone instead of UTC
    pub local_time: bool,
    /// Event loop tick in milliseconds (spinner animation)
    pub tick_rate_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_BASE_URL.to_string(),
            local_time: false,
            tick_rate_ms: 100,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_local_time(mut self, local_time: bool) -> Self {
        self.local_time = local_time;
        self
    }

    pub fn with_tick_rate_ms(mut self, tick_rate_ms: u64) -> Self {
        self.tick_rate_ms = tick_rate_ms.max(1);
        self
    }

    /// Defaults overlaid with `CYBERSEC_API_URL` and `CYBERSEC_LOCAL_TIME`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.trim().is_empty() {
                config = config.with_api_url(url.trim());
            }
        }

        if let Ok(value) = std::env::var(ENV_LOCAL_TIME) {
            config = config.with_local_time(matches!(value.as_str(), "1" | "true" | "yes"));
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, "http://127.0.0.1:4943");
        assert!(!config.local_time);
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::new()
            .with_api_url("http://example.test")
            .with_local_time(true)
            .with_tick_rate_ms(0);
        assert_eq!(config.api_url, "http://example.test");
        assert!(config.local_time);
        assert_eq!(config.tick_rate_ms, 1);
    }
}
