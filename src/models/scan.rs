use serde::{Deserialize, Serialize};

/// Response of `GET /api/scan_port`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortScanResult {
    pub port: u16,
    pub open: bool,
}
