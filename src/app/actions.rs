//! Screen controllers.
//!
//! Each submit stamps a ticket on its screen, spawns the API call on the
//! tokio runtime and returns immediately. The spawned task only posts an
//! [`AppMessage`]; the store is updated when the event loop handles it.
//! Must be called from within a tokio runtime.

use tracing::debug;

use super::{App, AppMessage, Screen};
use crate::models::ThreatMessage;
use crate::view_state::{RequestTicket, ResultScroll};

impl App {
    /// Submit the threat text as a single `"frontend"` message.
    ///
    /// Blank text is submitted as-is.
    pub fn submit_threat_detection(&mut self) -> RequestTicket {
        let ticket = self.threats.begin_request();
        let messages = vec![ThreatMessage::from_frontend(self.threats.pending().text.clone())];
        debug!(generation = ticket.generation(), "submitting detect_threats");

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.detect_threats(&messages).await;
            let _ = tx.send(AppMessage::ThreatsDetected { ticket, result });
        });

        self.mark_dirty();
        ticket
    }

    /// Submit the current ip/port draft. Neither value is validated.
    pub fn submit_port_scan(&mut self) -> RequestTicket {
        let ticket = self.port_scan.begin_request();
        let ip = self.port_scan.pending().ip.clone();
        let port = self.port_scan.pending().port.clone();
        debug!(generation = ticket.generation(), %ip, %port, "submitting scan_port");

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.scan_port(&ip, &port).await;
            let _ = tx.send(AppMessage::PortScanned { ticket, result });
        });

        self.mark_dirty();
        ticket
    }

    pub fn submit_security_logs(&mut self) -> RequestTicket {
        let ticket = self.logs.begin_request();
        debug!(generation = ticket.generation(), "submitting get_security_logs");

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.get_security_logs().await;
            let _ = tx.send(AppMessage::SecurityLogsLoaded { ticket, result });
        });

        self.mark_dirty();
        ticket
    }

    /// Submit whichever screen is displayed.
    pub fn submit_current(&mut self) -> RequestTicket {
        match self.screen {
            Screen::ThreatDetection => self.submit_threat_detection(),
            Screen::PortScan => self.submit_port_scan(),
            Screen::SecurityLogs => self.submit_security_logs(),
        }
    }

    pub fn clear_current_result(&mut self) {
        match self.screen {
            Screen::ThreatDetection => self.threats.clear_result(),
            Screen::PortScan => self.port_scan.clear_result(),
            Screen::SecurityLogs => self.logs.clear_result(),
        }
        self.mark_dirty();
    }

    /// Scroll position of the current screen's result area.
    pub fn current_scroll_mut(&mut self) -> &mut ResultScroll {
        match self.screen {
            Screen::ThreatDetection => self.threats.scroll_mut(),
            Screen::PortScan => self.port_scan.scroll_mut(),
            Screen::SecurityLogs => self.logs.scroll_mut(),
        }
    }

    /// Check `/health` once in the background.
    pub fn check_connection(&self) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let healthy = client.health().await;
            let _ = tx.send(AppMessage::ConnectionStatus(healthy));
        });
    }
}
