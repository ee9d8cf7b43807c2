//! Errors returned by [`crate::api::ApiClient`].

use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::HttpError;

/// Result alias for API client operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single request/response round trip.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request could not be sent or no response was received.
    #[error("network error calling {endpoint}: {source}")]
    Network {
        endpoint: &'static str,
        #[source]
        source: HttpError,
    },

    /// The response body was not JSON of the expected shape.
    #[error("could not decode {endpoint} response: {message}")]
    Decode {
        endpoint: &'static str,
        message: String,
    },

    /// The server answered with a non-2xx status.
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Server {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    /// Input rejected before sending. Never produced today.
    #[error("invalid {field}: {message}")]
    Validation { field: &'static str, message: String },
}

impl ApiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Network { .. } => ErrorCategory::Network,
            ApiError::Server { .. } => ErrorCategory::Server,
            ApiError::Decode { .. } => ErrorCategory::Client,
            ApiError::Validation { .. } => ErrorCategory::User,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Network { .. } => "E_API_NETWORK",
            ApiError::Decode { .. } => "E_API_DECODE",
            ApiError::Server { .. } => "E_API_SERVER",
            ApiError::Validation { .. } => "E_API_VALIDATION",
        }
    }

    /// Message shown under the failed screen's inputs.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network { .. } => {
                "Unable to reach the API. Is the backend running?".to_string()
            }
            ApiError::Decode { .. } => {
                "Received a response the client could not understand.".to_string()
            }
            ApiError::Server { status, .. } => match *status {
                400 => "The server rejected the request as invalid.".to_string(),
                404 => "The endpoint was not found on the server.".to_string(),
                500..=599 => "The server is experiencing issues. Please try again later.".to_string(),
                _ => format!("The server returned an error (HTTP {}).", status),
            },
            ApiError::Validation { field, message } => format!("Invalid {}: {}", field, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network() -> ApiError {
        ApiError::Network {
            endpoint: "scan_port",
            source: HttpError::ConnectionFailed("refused".to_string()),
        }
    }

    #[test]
    fn test_display_includes_endpoint() {
        assert_eq!(
            network().to_string(),
            "network error calling scan_port: Connection failed: refused"
        );
        let decode = ApiError::Decode {
            endpoint: "get_security_logs",
            message: "expected array".to_string(),
        };
        assert!(decode.to_string().contains("get_security_logs"));
    }

    #[test]
    fn test_categories_and_codes() {
        assert_eq!(network().category(), ErrorCategory::Network);
        assert_eq!(network().error_code(), "E_API_NETWORK");

        let server = ApiError::Server {
            endpoint: "scan_port",
            status: 503,
            body: String::new(),
        };
        assert_eq!(server.category(), ErrorCategory::Server);
        assert_eq!(
            server.user_message(),
            "The server is experiencing issues. Please try again later."
        );
    }

    #[test]
    fn test_user_message_for_unlisted_status() {
        let err = ApiError::Server {
            endpoint: "detect_threats",
            status: 418,
            body: "teapot".to_string(),
        };
        assert_eq!(err.user_message(), "The server returned an error (HTTP 418).");
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;
        assert!(network().source().is_some());
    }
}
