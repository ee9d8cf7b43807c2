use serde::{Deserialize, Serialize};

/// Source tag attached to every message typed into this client.
pub const FRONTEND_SOURCE: &str = "frontend";

/// One item of the `POST /api/detect_threats` request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThreatMessage {
    pub source: String,
    pub message: String,
}

impl ThreatMessage {
    pub fn new(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            message: message.into(),
        }
    }

    /// Wrap user-entered text with the fixed `"frontend"` source tag.
    pub fn from_frontend(message: impl Into<String>) -> Self {
        Self::new(FRONTEND_SOURCE, message)
    }
}

/// A single finding returned by the threat-detection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThreatFinding {
    pub details: String,
    pub category: String,
    pub confidence: f64,
    /// Sent by newer backends; absent on older ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_threat: Option<bool>,
}

impl ThreatFinding {
    pub fn new(details: impl Into<String>, category: impl Into<String>, confidence: f64) -> Self {
        Self {
            details: details.into(),
            category: category.into(),
            confidence,
            is_threat: None,
        }
    }
}
