//! Application state and logic for the TUI.
//!
//! - [`App`] - Owns the three screen stores and the message channel
//! - [`Screen`] - Which feature tab is displayed
//! - [`AppMessage`] - Completions posted by spawned request tasks

mod actions;
mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::Screen;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::view_state::{LogsScreen, PortScanField, PortScanScreen, ThreatScreen};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Main application state.
///
/// All fields are mutated only on the event-loop task. Request tasks talk
/// back exclusively through `message_tx`.
pub struct App {
    pub config: AppConfig,
    /// Shared API client, cloned into every spawned request
    client: Arc<ApiClient>,
    /// Currently displayed screen
    pub screen: Screen,
    /// Focused field on the port-scan screen
    pub port_focus: PortScanField,
    pub threats: ThreatScreen,
    pub port_scan: PortScanScreen,
    pub logs: LogsScreen,
    /// Result of the startup health check (None until it settles)
    pub connection_status: Option<bool>,
    pub should_quit: bool,
    /// Set whenever state changes; cleared after each draw
    pub needs_redraw: bool,
    /// Incremented on every loop tick; drives the spinner
    pub tick_count: u64,
    /// Receiver taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Create an App talking to `config.api_url` over reqwest.
    pub fn new(config: AppConfig) -> Self {
        let client = Arc::new(ApiClient::new(config.api_url.clone()));
        Self::with_client(config, client)
    }

    /// Create an App with a custom client (tests inject mocks here).
    pub fn with_client(config: AppConfig, client: Arc<ApiClient>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            config,
            client,
            screen: Screen::default(),
            port_focus: PortScanField::Ip,
            threats: ThreatScreen::new(),
            port_scan: PortScanScreen::new(),
            logs: LogsScreen::new(),
            connection_status: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
        }
    }

    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance the animation tick. Only requests a redraw while a screen
    /// has a request in flight.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.any_pending() {
            self.mark_dirty();
        }
    }

    pub fn any_pending(&self) -> bool {
        self.threats.status().is_pending()
            || self.port_scan.status().is_pending()
            || self.logs.status().is_pending()
    }

    pub fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            self.screen = screen;
            self.mark_dirty();
        }
    }
}
