//! Environment-driven configuration. Tests touching process env run
//! serially.

use cybersec_console::config::{AppConfig, ENV_API_URL, ENV_LOCAL_TIME};
use serial_test::serial;

fn clear_env() {
    std::env::remove_var(ENV_API_URL);
    std::env::remove_var(ENV_LOCAL_TIME);
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    assert_eq!(AppConfig::from_env(), AppConfig::default());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    std::env::set_var(ENV_API_URL, " http://10.1.1.1:8080 ");
    std::env::set_var(ENV_LOCAL_TIME, "1");

    let config = AppConfig::from_env();
    assert_eq!(config.api_url, "http://10.1.1.1:8080");
    assert!(config.local_time);
    clear_env();
}

#[test]
#[serial]
fn test_blank_api_url_is_ignored() {
    clear_env();
    std::env::set_var(ENV_API_URL, "   ");
    std::env::set_var(ENV_LOCAL_TIME, "no");

    let config = AppConfig::from_env();
    assert_eq!(config.api_url, AppConfig::default().api_url);
    assert!(!config.local_time);
    clear_env();
}

#[test]
#[serial]
fn test_cli_override_wins_over_env() {
    clear_env();
    std::env::set_var(ENV_API_URL, "http://from-env:1");

    let config = AppConfig::from_env().with_api_url("http://from-cli:2");
    assert_eq!(config.api_url, "http://from-cli:2");
    clear_env();
}
