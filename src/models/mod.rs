//! Wire types exchanged with the CyberSec AI Agent API.
//!
//! Field names match the backend's JSON exactly; unknown fields are ignored.

mod logs;
mod scan;
mod threat;

pub use logs::SecurityLogEntry;
pub use scan::PortScanResult;
pub use threat::{ThreatFinding, ThreatMessage, FRONTEND_SOURCE};
