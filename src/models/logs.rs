use serde::{Deserialize, Serialize};

/// One entry of `GET /api/get_security_logs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SecurityLogEntry {
    /// Nanoseconds since the Unix epoch.
    pub timestamp: u64,
    pub event_type: String,
    pub severity: String,
    pub details: String,
}

impl SecurityLogEntry {
    /// Timestamp truncated to whole milliseconds since the epoch.
    pub fn timestamp_millis(&self) -> i64 {
        (self.timestamp / 1_000_000) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_and_millis() {
        let entry: SecurityLogEntry = serde_json::from_str(
            r#"{"timestamp":1700000000123456789,"event_type":"login","details":"ok","severity":"LOW"}"#,
        )
        .unwrap();
        assert_eq!(entry.event_type, "login");
        assert_eq!(entry.timestamp_millis(), 1_700_000_000_123);
    }
}
