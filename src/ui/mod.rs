//! UI rendering for the CyberSec console.
//!
//! Layout, top to bottom:
//! - Header with the product title
//! - Tab row, one tab per feature screen
//! - The current screen's panel (inputs, request status, result area)
//! - Status bar with API reachability and key hints
//!
//! Rendering is a pure function of [`App`]: nothing here mutates state.
//! All render functions receive a [`LayoutContext`] for responsive sizing.

pub mod components;
pub mod format;
mod layout;
mod logs;
mod port_scan;
mod theme;
mod threats;

pub use layout::{breakpoints, LayoutContext};
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_INPUT_BG, COLOR_OK,
    COLOR_PENDING, COLOR_WARN,
};

/// Titles of the per-screen result boxes.
pub mod result_titles {
    pub use super::logs::RESULT_TITLE as LOGS;
    pub use super::port_scan::RESULT_TITLE as PORT_SCAN;
    pub use super::threats::RESULT_TITLE as THREATS;
}

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Screen};
use components::{render_tab_selector, TabItem};

const APP_TITLE: &str = "CyberSec AI Agent";

/// Split a panel into input rows, status rows and the result area.
pub(crate) fn panel_chunks(area: Rect, input_height: u16, status_height: u16) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(input_height),
        Constraint::Length(status_height),
        Constraint::Min(0),
    ])
    .areas(area)
}

fn render_header(frame: &mut Frame, area: Rect, ctx: &LayoutContext) {
    let mut spans = vec![Span::styled(
        format!(" {}", APP_TITLE),
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    if !ctx.is_compact() {
        spans.push(Span::styled(
            "  threat detection, port scanning, security logs",
            Style::default().fg(COLOR_DIM),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn connection_span(status: Option<bool>) -> Span<'static> {
    match status {
        Some(true) => Span::styled("● API online", Style::default().fg(COLOR_OK)),
        Some(false) => Span::styled("● API offline", Style::default().fg(COLOR_ERROR)),
        None => Span::styled("○ checking API", Style::default().fg(COLOR_DIM)),
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let dim = Style::default().fg(COLOR_DIM);
    let mut spans = vec![Span::raw(" "), connection_span(app.connection_status)];
    if !ctx.is_compact() {
        spans.push(Span::styled(format!("  {}", app.config.api_url), dim));
    }
    let hints = if ctx.is_extra_small() {
        "  Tab Enter Esc"
    } else {
        "  Tab: switch  Enter: submit  PgUp/PgDn: scroll  Ctrl+L: clear  Esc: quit"
    };
    spans.push(Span::styled(hints, dim));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the whole UI for the current state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);

    let [header, tabs, body, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header, &ctx);

    let items: Vec<TabItem> = Screen::ALL.iter().copied().map(TabItem::from).collect();
    frame.render_widget(
        Paragraph::new(render_tab_selector(&items, app.screen.index(), &ctx)),
        tabs,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", app.screen.title()),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(body);
    frame.render_widget(block, body);

    match app.screen {
        Screen::ThreatDetection => {
            threats::render_threat_panel(frame, inner, &app.threats, app.tick_count, &ctx)
        }
        Screen::PortScan => port_scan::render_port_scan_panel(
            frame,
            inner,
            &app.port_scan,
            app.port_focus,
            app.tick_count,
            &ctx,
        ),
        Screen::SecurityLogs => logs::render_logs_panel(
            frame,
            inner,
            &app.logs,
            app.config.local_time,
            app.tick_count,
        ),
    }

    render_status_bar(frame, status, app, &ctx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::models::{PortScanResult, ThreatFinding};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_render_shows_title_and_tabs() {
        let app = App::new(AppConfig::default());
        let content = draw(&app, 100, 30);
        assert!(content.contains(APP_TITLE));
        assert!(content.contains("Port Scanner"));
        assert!(content.contains("checking API"));
    }

    #[test]
    fn test_no_result_area_before_submission() {
        let mut app = App::new(AppConfig::default());
        for screen in Screen::ALL {
            app.set_screen(screen);
            let content = draw(&app, 100, 30);
            assert!(!content.contains(result_titles::THREATS));
            assert!(!content.contains(result_titles::PORT_SCAN));
            assert!(!content.contains(result_titles::LOGS));
        }
    }

    #[test]
    fn test_result_area_appears_with_result() {
        let mut app = App::new(AppConfig::default());
        app.threats.set_result(vec![ThreatFinding::new("phishing", "scam", 0.92)]);
        let content = draw(&app, 100, 30);
        assert!(content.contains(result_titles::THREATS));
        assert!(content.contains("phishing | Category: scam | Confidence: 0.92"));
    }

    #[test]
    fn test_port_scan_result_rendered() {
        let mut app = App::new(AppConfig::default());
        app.set_screen(Screen::PortScan);
        app.port_scan.set_result(PortScanResult { port: 443, open: true });
        let content = draw(&app, 100, 30);
        assert!(content.contains("Port 443 is open"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = App::new(AppConfig::default());
        app.port_scan.set_result(PortScanResult { port: 1, open: false });
        for screen in Screen::ALL {
            app.set_screen(screen);
            let _ = draw(&app, 20, 5);
        }
    }
}
