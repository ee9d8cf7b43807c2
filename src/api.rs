//! CyberSec AI Agent API client.
//!
//! One method per backend endpoint. Requests are sent exactly once: there is
//! no retry, no timeout and no cancellation, and inputs are forwarded to the
//! server unchecked.

use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{PortScanResult, SecurityLogEntry, ThreatFinding, ThreatMessage};
use crate::traits::{Headers, HttpClient, Response};

/// Default base URL: the backend's local development address.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:4943";

const DETECT_THREATS: &str = "detect_threats";
const SCAN_PORT: &str = "scan_port";
const GET_SECURITY_LOGS: &str = "get_security_logs";

/// Client for the three feature endpoints plus the health check.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client backed by reqwest.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, Arc::new(ReqwestHttpClient::new()))
    }

    /// Create a client over any [`HttpClient`] implementation.
    pub fn with_http(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/api/{}", self.base_url, endpoint)
    }

    fn json_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers
    }

    fn decode<T: DeserializeOwned>(endpoint: &'static str, response: Response) -> ApiResult<T> {
        if !response.is_success() {
            return Err(ApiError::Server {
                endpoint,
                status: response.status,
                body: response.text().unwrap_or_default(),
            });
        }
        response.json().map_err(|e| ApiError::Decode {
            endpoint,
            message: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str, url: &str) -> ApiResult<T> {
        let response = self
            .http
            .get(url, &Self::json_headers())
            .await
            .map_err(|source| ApiError::Network { endpoint, source })?;
        Self::decode(endpoint, response)
    }

    /// `POST /api/detect_threats` with `messages` as the JSON body.
    pub async fn detect_threats(&self, messages: &[ThreatMessage]) -> ApiResult<Vec<ThreatFinding>> {
        let url = self.endpoint_url(DETECT_THREATS);
        let body = serde_json::to_string(messages).map_err(|e| ApiError::Decode {
            endpoint: DETECT_THREATS,
            message: e.to_string(),
        })?;

        tracing::debug!(count = messages.len(), "POST {}", url);
        let response = self
            .http
            .post(&url, &body, &Self::json_headers())
            .await
            .map_err(|source| ApiError::Network {
                endpoint: DETECT_THREATS,
                source,
            })?;
        Self::decode(DETECT_THREATS, response)
    }

    /// `GET /api/scan_port?ip=<ip>&port=<port>`.
    ///
    /// `port` is forwarded as its display form, so raw typed text (even a
    /// non-number) reaches the server unchanged apart from URL encoding.
    pub async fn scan_port(&self, ip: &str, port: impl Display) -> ApiResult<PortScanResult> {
        let port = port.to_string();
        let url = format!(
            "{}?ip={}&port={}",
            self.endpoint_url(SCAN_PORT),
            urlencoding::encode(ip),
            urlencoding::encode(&port)
        );
        tracing::debug!("GET {}", url);
        self.get_json(SCAN_PORT, &url).await
    }

    /// `GET /api/get_security_logs`.
    pub async fn get_security_logs(&self) -> ApiResult<Vec<SecurityLogEntry>> {
        let url = self.endpoint_url(GET_SECURITY_LOGS);
        tracing::debug!("GET {}", url);
        self.get_json(GET_SECURITY_LOGS, &url).await
    }

    /// `GET /health`. Any 2xx counts as reachable; transport errors count as not.
    pub async fn health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.http.get(&url, &Headers::new()).await {
            Ok(response) => response.is_success(),
            Err(e) => {
                tracing::debug!("health check failed: {}", e);
                false
            }
        }
    }
}
