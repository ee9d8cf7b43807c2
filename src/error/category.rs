//! Error category classification.

use std::fmt;

/// High-level categorization of API failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection refused, DNS failure, dropped connection.
    Network,
    /// The backend answered with an error status.
    Server,
    /// The backend answered with a body this client cannot decode.
    Client,
    /// The user's input was rejected before sending.
    User,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check that the API is running and the URL is correct.",
            ErrorCategory::Server => "Check the input and the server logs.",
            ErrorCategory::Client => "The server may be running an incompatible version.",
            ErrorCategory::User => "Correct the input and submit again.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
