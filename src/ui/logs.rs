//! Security log panel.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::components::{render_result_area, render_status_indicator};
use super::format::format_log_line;
use super::panel_chunks;
use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_WARN};
use crate::models::SecurityLogEntry;
use crate::view_state::LogsScreen;

pub const RESULT_TITLE: &str = "Log Entries";

fn severity_style(severity: &str) -> Style {
    match severity.to_ascii_lowercase().as_str() {
        "critical" => Style::default().fg(COLOR_ERROR),
        "high" | "warning" | "warn" => Style::default().fg(COLOR_WARN),
        _ => Style::default(),
    }
}

fn log_line(entry: &SecurityLogEntry, local_time: bool) -> Line<'static> {
    Line::from(Span::styled(
        format_log_line(entry, local_time),
        severity_style(&entry.severity),
    ))
}

pub fn render_logs_panel(
    frame: &mut Frame,
    area: Rect,
    screen: &LogsScreen,
    local_time: bool,
    tick: u64,
) {
    let status = render_status_indicator(screen.status(), "Fetching logs...", tick);
    let chunks = panel_chunks(area, 2, status.len() as u16);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "  Press Enter to fetch security logs",
            Style::default().fg(COLOR_DIM),
        ))),
        chunks[0],
    );
    frame.render_widget(Paragraph::new(status), chunks[1]);

    if let Some(entries) = screen.result().filter(|e| !e.is_empty()) {
        let lines = entries.iter().map(|e| log_line(e, local_time)).collect();
        render_result_area(frame, chunks[2], RESULT_TITLE, lines, screen.scroll());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_style_is_case_insensitive() {
        assert_eq!(severity_style("HIGH"), Style::default().fg(COLOR_WARN));
        assert_eq!(severity_style("Critical"), Style::default().fg(COLOR_ERROR));
        assert_eq!(severity_style("low"), Style::default());
    }
}
