//! Type definitions for the application state.
//!
//! - [`Screen`] - Which feature tab is displayed

/// The three independent feature screens, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    ThreatDetection,
    PortScan,
    SecurityLogs,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::ThreatDetection, Screen::PortScan, Screen::SecurityLogs];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::ThreatDetection => "Threat Detection",
            Screen::PortScan => "Port Scanner",
            Screen::SecurityLogs => "Security Logs",
        }
    }

    /// Label used on narrow terminals.
    pub fn short_title(&self) -> &'static str {
        match self {
            Screen::ThreatDetection => "Threats",
            Screen::PortScan => "Ports",
            Screen::SecurityLogs => "Logs",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Screen::ThreatDetection => 0,
            Screen::PortScan => 1,
            Screen::SecurityLogs => 2,
        }
    }

    pub fn next(&self) -> Screen {
        Screen::ALL[(self.index() + 1) % Screen::ALL.len()]
    }

    pub fn prev(&self) -> Screen {
        Screen::ALL[(self.index() + Screen::ALL.len() - 1) % Screen::ALL.len()]
    }
}
