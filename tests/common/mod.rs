//! Common fixtures and helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use ratatui::{backend::TestBackend, Terminal};

use cybersec_console::adapters::{MockHttpClient, MockResponse};
use cybersec_console::api::ApiClient;
use cybersec_console::app::App;
use cybersec_console::config::AppConfig;
use cybersec_console::models::{SecurityLogEntry, ThreatFinding};
use cybersec_console::traits::Response;
use cybersec_console::ui;

/// Base URL used with [`MockHttpClient`].
pub const MOCK_BASE: &str = "http://mock.api";

pub fn phishing_finding() -> ThreatFinding {
    ThreatFinding::new("phishing", "scam", 0.92)
}

pub fn phishing_json() -> serde_json::Value {
    serde_json::json!([{"details": "phishing", "category": "scam", "confidence": 0.92}])
}

/// Three entries in response order, newest last.
pub fn sample_logs_json() -> serde_json::Value {
    serde_json::json!([
        {
            "timestamp": 1_704_067_200_000_000_000u64,
            "event_type": "LOGIN_FAILED",
            "severity": "HIGH",
            "details": "5 failed attempts for admin"
        },
        {
            "timestamp": 1_704_067_260_000_000_000u64,
            "event_type": "PORT_SCAN",
            "severity": "MEDIUM",
            "details": "sequential scan from 10.0.0.66"
        },
        {
            "timestamp": 1_704_067_320_000_000_000u64,
            "event_type": "THREAT_DETECTED",
            "severity": "CRITICAL",
            "details": "phishing message quarantined"
        }
    ])
}

pub fn sample_logs() -> Vec<SecurityLogEntry> {
    serde_json::from_value(sample_logs_json()).unwrap()
}

/// `count` info entries one minute apart, details `EVT00`, `EVT01`, ...
pub fn numbered_logs(count: usize) -> Vec<SecurityLogEntry> {
    (0..count)
        .map(|i| SecurityLogEntry {
            timestamp: 1_704_067_200_000_000_000 + i as u64 * 60_000_000_000,
            event_type: "AUDIT".to_string(),
            severity: "INFO".to_string(),
            details: format!("EVT{:02}", i),
        })
        .collect()
}

pub fn json_response(value: serde_json::Value) -> MockResponse {
    MockResponse::Success(Response::json_ok(&value))
}

/// App wired to a mock transport at [`MOCK_BASE`].
pub fn app_with_mock(mock: &MockHttpClient) -> App {
    let client = ApiClient::with_http(MOCK_BASE, Arc::new(mock.clone()));
    App::with_client(AppConfig::default().with_api_url(MOCK_BASE), Arc::new(client))
}

/// App talking over reqwest to `uri` (typically a wiremock server).
pub fn app_for_server(uri: &str) -> App {
    App::new(AppConfig::default().with_api_url(uri))
}

/// Receive `count` completions and apply them in arrival order.
pub async fn settle(app: &mut App, count: usize) {
    let mut rx = app.message_rx.take().expect("receiver already taken");
    for _ in 0..count {
        let message = tokio::time::timeout(Duration::from_secs(10), rx.recv())
            .await
            .expect("timed out waiting for a completion")
            .expect("message channel closed");
        app.handle_message(message);
    }
    app.message_rx = Some(rx);
}

/// Render the app into a test buffer, one string per row.
pub fn render_rows(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

pub fn render_text(app: &App, width: u16, height: u16) -> String {
    render_rows(app, width, height).join("\n")
}

/// Rows containing `needle`, in top-to-bottom order.
pub fn rows_containing(rows: &[String], needle: &str) -> Vec<String> {
    rows.iter().filter(|r| r.contains(needle)).cloned().collect()
}
