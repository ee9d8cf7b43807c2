//! Messages posted from spawned request tasks back to the event loop.

use crate::error::ApiResult;
use crate::models::{PortScanResult, SecurityLogEntry, ThreatFinding};
use crate::view_state::RequestTicket;

/// Completion of an async operation, applied on the event-loop task.
#[derive(Debug)]
pub enum AppMessage {
    /// `detect_threats` settled
    ThreatsDetected {
        ticket: RequestTicket,
        result: ApiResult<Vec<ThreatFinding>>,
    },
    /// `scan_port` settled
    PortScanned {
        ticket: RequestTicket,
        result: ApiResult<PortScanResult>,
    },
    /// `get_security_logs` settled
    SecurityLogsLoaded {
        ticket: RequestTicket,
        result: ApiResult<Vec<SecurityLogEntry>>,
    },
    /// Startup health check finished
    ConnectionStatus(bool),
}
