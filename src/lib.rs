//! CyberSec console - a terminal client for the CyberSec AI Agent API.
//!
//! Three screens (threat detection, port scanning, security logs) each send
//! one HTTP request per submission and render the JSON result. This library
//! exposes the modules for the binary and for integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
