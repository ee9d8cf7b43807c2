//! Rendering tests using ratatui's TestBackend.

mod common;

use common::{
    app_with_mock, json_response, numbered_logs, phishing_json, render_rows, render_text,
    rows_containing, sample_logs, settle, MOCK_BASE,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use cybersec_console::adapters::{MockHttpClient, MockResponse};
use cybersec_console::app::{App, Screen};
use cybersec_console::config::AppConfig;
use cybersec_console::models::{PortScanResult, ThreatFinding};
use cybersec_console::traits::HttpError;
use cybersec_console::ui::result_titles;
use cybersec_console::view_state::ThreatField;

const WIDTH: u16 = 110;
const HEIGHT: u16 = 32;

fn has_any_result_area(text: &str) -> bool {
    [result_titles::THREATS, result_titles::PORT_SCAN, result_titles::LOGS]
        .iter()
        .any(|title| text.contains(title))
}

#[test]
fn test_empty_state_has_no_result_area_on_any_screen() {
    let mut app = App::new(AppConfig::default());
    for screen in Screen::ALL {
        app.set_screen(screen);
        let text = render_text(&app, WIDTH, HEIGHT);
        assert!(!has_any_result_area(&text), "{:?} rendered a result area", screen);
    }
}

#[tokio::test]
async fn test_literal_threat_example() {
    let mock = MockHttpClient::new();
    mock.set_response(
        &format!("{}/api/detect_threats", MOCK_BASE),
        json_response(phishing_json()),
    );

    let mut app = app_with_mock(&mock);
    app.threats.set_pending(ThreatField::Text, "free money now");
    app.submit_threat_detection();
    settle(&mut app, 1).await;

    let rows = render_rows(&app, WIDTH, HEIGHT);
    let lines = rows_containing(&rows, "| Category:");
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("phishing | Category: scam | Confidence: 0.92"));
}

#[test]
fn test_threat_listing_length_and_order() {
    let mut app = App::new(AppConfig::default());
    app.threats.set_result(vec![
        ThreatFinding::new("first-finding", "spam", 0.3),
        ThreatFinding::new("second-finding", "scam", 0.6),
        ThreatFinding::new("third-finding", "malware", 0.9),
    ]);

    let rows = render_rows(&app, WIDTH, HEIGHT);
    let lines = rows_containing(&rows, "| Category:");
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("first-finding"));
    assert!(lines[1].contains("second-finding"));
    assert!(lines[2].contains("third-finding"));
}

#[test]
fn test_empty_lists_show_no_result_area() {
    let mut app = App::new(AppConfig::default());
    app.threats.set_result(vec![]);
    app.logs.set_result(vec![]);

    assert!(!has_any_result_area(&render_text(&app, WIDTH, HEIGHT)));
    app.set_screen(Screen::SecurityLogs);
    assert!(!has_any_result_area(&render_text(&app, WIDTH, HEIGHT)));
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_long_log_listing_scrolls_to_last_entry() {
    let mut app = App::new(AppConfig::default());
    app.set_screen(Screen::SecurityLogs);
    app.logs.set_result(numbered_logs(40));

    let rows = render_rows(&app, WIDTH, HEIGHT);
    assert_eq!(rows_containing(&rows, "EVT00").len(), 1);
    assert!(rows_containing(&rows, "EVT39").is_empty());
    assert!(render_text(&app, WIDTH, HEIGHT).contains("of 40"));

    press(&mut app, KeyCode::PageDown);
    press(&mut app, KeyCode::PageDown);
    let rows = render_rows(&app, WIDTH, HEIGHT);
    assert_eq!(rows_containing(&rows, "EVT39").len(), 1);
    assert!(rows_containing(&rows, "EVT00").is_empty());

    // Entries stay in response order while scrolled
    let visible = rows_containing(&rows, "AUDIT - INFO");
    assert!(visible.last().unwrap().contains("EVT39"));

    press(&mut app, KeyCode::Home);
    let rows = render_rows(&app, WIDTH, HEIGHT);
    assert_eq!(rows_containing(&rows, "EVT00").len(), 1);
    assert!(rows_containing(&rows, "EVT39").is_empty());
}

#[test]
fn test_end_key_shows_last_entry_and_new_result_starts_at_top() {
    let mut app = App::new(AppConfig::default());
    app.set_screen(Screen::SecurityLogs);
    app.logs.set_result(numbered_logs(40));
    render_rows(&app, WIDTH, HEIGHT);

    press(&mut app, KeyCode::End);
    assert!(!rows_containing(&render_rows(&app, WIDTH, HEIGHT), "EVT39").is_empty());

    app.logs.set_result(numbered_logs(40));
    let rows = render_rows(&app, WIDTH, HEIGHT);
    assert!(!rows_containing(&rows, "EVT00").is_empty());
    assert!(rows_containing(&rows, "EVT39").is_empty());
}

#[test]
fn test_scan_messages() {
    let mut app = App::new(AppConfig::default());
    app.set_screen(Screen::PortScan);

    app.port_scan.set_result(PortScanResult { port: 22, open: true });
    assert!(render_text(&app, WIDTH, HEIGHT).contains("Port 22 is open"));

    app.port_scan.set_result(PortScanResult { port: 23, open: false });
    let text = render_text(&app, WIDTH, HEIGHT);
    assert!(text.contains("Port 23 is closed"));
    assert!(!text.contains("Port 22"));
}

#[test]
fn test_one_log_line_per_entry() {
    let mut app = App::new(AppConfig::default());
    app.set_screen(Screen::SecurityLogs);
    app.logs.set_result(sample_logs());

    let rows = render_rows(&app, WIDTH, HEIGHT);
    let lines = rows_containing(&rows, "[2024-01-01 00:0");
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("[2024-01-01 00:00:00] LOGIN_FAILED - HIGH: 5 failed attempts for admin"));
    assert!(lines[1].contains("[2024-01-01 00:01:00] PORT_SCAN - MEDIUM"));
    assert!(lines[2].contains("[2024-01-01 00:02:00] THREAT_DETECTED - CRITICAL"));
}

#[test]
fn test_port_inputs_render_draft_values() {
    let mut app = App::new(AppConfig::default());
    app.set_screen(Screen::PortScan);

    let text = render_text(&app, WIDTH, HEIGHT);
    assert!(text.contains("IP address"));
    assert!(text.contains("80"));
}

#[tokio::test]
async fn test_failure_message_is_rendered() {
    let mock = MockHttpClient::new();
    mock.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
        "refused".to_string(),
    )));

    let mut app = app_with_mock(&mock);
    app.set_screen(Screen::PortScan);
    app.submit_port_scan();
    settle(&mut app, 1).await;

    let expected = app.port_scan.status().error().unwrap().user_message();
    let text = render_text(&app, WIDTH, HEIGHT);
    assert!(text.contains(&expected));
    assert!(!has_any_result_area(&text));
}

#[test]
fn test_pending_shows_spinner_label() {
    let mut app = App::new(AppConfig::default());
    app.set_screen(Screen::SecurityLogs);
    let _ = app.logs.begin_request();

    assert!(render_text(&app, WIDTH, HEIGHT).contains("Fetching logs..."));
}

#[test]
fn test_compact_terminal_uses_short_tab_labels() {
    let app = App::new(AppConfig::default());
    let rows = render_rows(&app, 70, 20);
    let tab_row = &rows[1];
    assert!(!tab_row.contains("Threat Detection"));
    assert!(tab_row.contains("Threats"));
    assert!(tab_row.contains("Ports"));
}
