//! Event handlers for the App.
//!
//! - [`App::handle_message`] applies request completions to the stores
//! - [`App::handle_key_event`] maps key presses to edits and actions
//! - [`App::handle_paste`] inserts bracketed-paste text into the focused field

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use super::{App, AppMessage, Screen};
use crate::error::ApiError;
use crate::view_state::{
    Applied, PendingInput, PortScanInput, RequestTicket, ResultScroll, ThreatField,
};

fn log_outcome(screen: &str, ticket: RequestTicket, failure: Option<ApiError>, applied: Applied) {
    if applied == Applied::Stale {
        debug!(
            screen,
            generation = ticket.generation(),
            "dropping response superseded by a newer request"
        );
        return;
    }
    if let Some(e) = failure {
        warn!(
            screen,
            generation = ticket.generation(),
            code = e.error_code(),
            category = %e.category(),
            "request failed: {}",
            e
        );
    }
}

impl App {
    /// Apply a completion to its screen's store.
    ///
    /// Completions are applied in arrival order; the ticket check inside
    /// [`crate::view_state::ScreenState::apply`] discards any that a newer
    /// submission has overtaken.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::ThreatsDetected { ticket, result } => {
                let failure = result.as_ref().err().cloned();
                let applied = self.threats.apply(ticket, result);
                log_outcome("threats", ticket, failure, applied);
            }
            AppMessage::PortScanned { ticket, result } => {
                let failure = result.as_ref().err().cloned();
                let applied = self.port_scan.apply(ticket, result);
                log_outcome("port_scan", ticket, failure, applied);
            }
            AppMessage::SecurityLogsLoaded { ticket, result } => {
                let failure = result.as_ref().err().cloned();
                let applied = self.logs.apply(ticket, result);
                log_outcome("logs", ticket, failure, applied);
            }
            AppMessage::ConnectionStatus(healthy) => {
                info!(healthy, api_url = %self.config.api_url, "health check finished");
                self.connection_status = Some(healthy);
            }
        }
        self.mark_dirty();
    }

    /// Handle one key press.
    ///
    /// | Key | Action |
    /// |-----|--------|
    /// | `Esc`, `Ctrl+C` | quit |
    /// | `Tab` / `Shift+Tab` | next / previous screen |
    /// | `Up` / `Down` | move between IP and Port (port screen), else scroll one row |
    /// | `PgUp` / `PgDn` | scroll result by a page |
    /// | `Home` / `End` | jump to top / bottom of result |
    /// | `Enter` | submit current screen |
    /// | `Ctrl+L` | clear current screen's result |
    /// | printable, `Backspace` | edit focused field |
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('c') if ctrl => self.quit(),
            KeyCode::Char('l') if ctrl => self.clear_current_result(),
            KeyCode::Tab => self.set_screen(self.screen.next()),
            KeyCode::BackTab => self.set_screen(self.screen.prev()),
            KeyCode::Enter => {
                self.submit_current();
            }
            KeyCode::Up if self.screen == Screen::PortScan => {
                self.port_focus = PortScanInput::prev_field(self.port_focus);
                self.mark_dirty();
            }
            KeyCode::Down if self.screen == Screen::PortScan => {
                self.port_focus = PortScanInput::next_field(self.port_focus);
                self.mark_dirty();
            }
            KeyCode::Up => self.scroll_current(|s| s.scroll_up(1)),
            KeyCode::Down => self.scroll_current(|s| s.scroll_down(1)),
            KeyCode::PageUp => self.scroll_current(ResultScroll::page_up),
            KeyCode::PageDown => self.scroll_current(ResultScroll::page_down),
            KeyCode::Home => self.scroll_current(ResultScroll::to_top),
            KeyCode::End => self.scroll_current(ResultScroll::to_bottom),
            KeyCode::Backspace => {
                match self.screen {
                    Screen::ThreatDetection => self.threats.pop_char(ThreatField::Text),
                    Screen::PortScan => self.port_scan.pop_char(self.port_focus),
                    Screen::SecurityLogs => {}
                }
                self.mark_dirty();
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                match self.screen {
                    Screen::ThreatDetection => self.threats.push_char(ThreatField::Text, c),
                    Screen::PortScan => self.port_scan.push_char(self.port_focus, c),
                    Screen::SecurityLogs => {}
                }
                self.mark_dirty();
            }
            _ => {}
        }
    }

    fn scroll_current(&mut self, f: impl FnOnce(&mut ResultScroll)) {
        let scroll = self.current_scroll_mut();
        let before = scroll.offset();
        f(scroll);
        if scroll.offset() != before {
            self.mark_dirty();
        }
    }

    /// Append pasted text to the focused field. Line breaks become spaces
    /// since every field is a single line.
    pub fn handle_paste(&mut self, text: &str) {
        let text = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
        for c in text.chars() {
            match self.screen {
                Screen::ThreatDetection => self.threats.push_char(ThreatField::Text, c),
                Screen::PortScan => self.port_scan.push_char(self.port_focus, c),
                Screen::SecurityLogs => return,
            }
        }
        self.mark_dirty();
    }
}
