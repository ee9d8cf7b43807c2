//! Text formatting for API results.
//!
//! Pure functions so they can be tested and benchmarked without a terminal.

use chrono::{DateTime, Local, Utc};

use crate::models::{PortScanResult, SecurityLogEntry, ThreatFinding};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `"<details> | Category: <category> | Confidence: <confidence>"`
pub fn format_threat_line(finding: &ThreatFinding) -> String {
    format!(
        "{} | Category: {} | Confidence: {}",
        finding.details, finding.category, finding.confidence
    )
}

pub fn format_scan_message(result: &PortScanResult) -> String {
    let state = if result.open { "open" } else { "closed" };
    format!("Port {} is {}", result.port, state)
}

/// Render a nanosecond timestamp as wall-clock time.
///
/// Falls back to the raw value if chrono cannot represent it.
pub fn format_log_time(entry: &SecurityLogEntry, local_time: bool) -> String {
    let Some(utc) = DateTime::<Utc>::from_timestamp_millis(entry.timestamp_millis()) else {
        return entry.timestamp.to_string();
    };
    if local_time {
        utc.with_timezone(&Local).format(TIME_FORMAT).to_string()
    } else {
        utc.format(TIME_FORMAT).to_string()
    }
}

/// `"[<time>] <event_type> - <severity>: <details>"`
pub fn format_log_line(entry: &SecurityLogEntry, local_time: bool) -> String {
    format!(
        "[{}] {} - {}: {}",
        format_log_time(entry, local_time),
        entry.event_type,
        entry.severity,
        entry.details
    )
}

/// One line per finding, in response order.
pub fn threat_lines(findings: &[ThreatFinding]) -> Vec<String> {
    findings.iter().map(format_threat_line).collect()
}

/// One line per entry, in response order.
pub fn log_lines(entries: &[SecurityLogEntry], local_time: bool) -> Vec<String> {
    entries
        .iter()
        .map(|entry| format_log_line(entry, local_time))
        .collect()
}
