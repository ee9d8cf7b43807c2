//! Per-screen view state.
//!
//! Each screen owns one [`ScreenState`]: the user's draft input plus the
//! latest accepted response. The renderer only ever reads these through a
//! shared reference, so every screen can be rendered and tested on its own.
//!
//! ```text
//!  keystroke ──► set_pending / push_char
//!  submit    ──► begin_request() ──► RequestTicket ──► spawned API call
//!  completion ─► apply(ticket, outcome) ──► Accepted | Stale
//!  PgUp/PgDn  ──► scroll_mut() ──► ResultScroll offset
//! ```

mod inputs;
mod screen_state;
mod scroll;

pub use inputs::{LogsInput, NoField, PendingInput, PortScanField, PortScanInput, ThreatField, ThreatInput};
pub use screen_state::{Applied, RequestStatus, RequestTicket, ScreenState};
pub use scroll::ResultScroll;

use crate::models::{PortScanResult, SecurityLogEntry, ThreatFinding};

/// Threat-detection screen: free text in, ordered findings out.
pub type ThreatScreen = ScreenState<ThreatInput, Vec<ThreatFinding>>;

/// Port-scan screen: ip and port in, a single result out.
pub type PortScanScreen = ScreenState<PortScanInput, PortScanResult>;

/// Security-log screen: no input, ordered log entries out.
pub type LogsScreen = ScreenState<LogsInput, Vec<SecurityLogEntry>>;
