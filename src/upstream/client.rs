//! Upstream control API client with timeout and error normalization.
//!
//! # Responsibilities
//! - Build the full URL from the configured base URL and an endpoint path
//! - Attach JSON content type and auth headers to every call
//! - Enforce the per-call deadline
//! - Turn non-2xx responses and malformed bodies into errors

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use thiserror::Error;
use tokio::time::timeout;

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::upstream::auth::{build_auth_headers, AuthConfig};

/// Errors from a single upstream call.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The exchange did not finish within the deadline.
    #[error("Upstream request to {endpoint} timed out after {timeout_ms}ms")]
    Timeout { endpoint: String, timeout_ms: u64 },

    /// Connection or transport failure.
    #[error("Upstream request to {endpoint} failed: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-2xx status.
    #[error("Upstream returned {status}{}", body_suffix(.body))]
    Status { status: u16, body: String },

    /// Upstream answered 2xx but the body was not JSON.
    #[error("Upstream returned invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The HTTP client could not be constructed.
    #[error("Failed to build upstream client: {0}")]
    Client(#[source] reqwest::Error),
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body)
    }
}

impl UpstreamError {
    /// Label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Timeout { .. } => "timeout",
            UpstreamError::Network { .. } => "network",
            UpstreamError::Status { .. } => "status",
            UpstreamError::InvalidJson(_) => "invalid_json",
            UpstreamError::Client(_) => "client",
        }
    }
}

/// Client for the upstream control API.
///
/// Cheap to clone; the connection pool and pre-built headers are shared.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    headers: HeaderMap,
    timeout: Duration,
}

impl UpstreamClient {
    /// Create a client for the configured upstream.
    pub fn new(config: &UpstreamConfig, auth: &AuthConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .no_proxy()
            .build()
            .map_err(UpstreamError::Client)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(build_auth_headers(auth));

        tracing::info!(
            base_url = %config.base_url,
            timeout_ms = config.timeout_ms,
            auth = auth.scheme(),
            "Upstream client initialized"
        );

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            headers,
            timeout: Duration::from_millis(config.timeout_ms),
        })
    }

    /// Full URL for an endpoint path.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// `GET` an endpoint.
    pub async fn get(&self, endpoint: &str) -> Result<Value, UpstreamError> {
        self.call(endpoint, Method::GET, None).await
    }

    /// `PUT` a JSON body to an endpoint.
    pub async fn put(&self, endpoint: &str, body: &Value) -> Result<Value, UpstreamError> {
        self.call(endpoint, Method::PUT, Some(body)).await
    }

    /// Perform one call. No retries: the first failure is returned.
    pub async fn call(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<Value, UpstreamError> {
        let start = Instant::now();

        let result = match timeout(self.timeout, self.exchange(endpoint, method.clone(), body)).await {
            Ok(result) => result,
            Err(_) => Err(UpstreamError::Timeout {
                endpoint: endpoint.to_string(),
                timeout_ms: self.timeout.as_millis() as u64,
            }),
        };

        let outcome = match &result {
            Ok(_) => {
                tracing::debug!(
                    endpoint,
                    method = %method,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Upstream call succeeded"
                );
                "ok"
            }
            Err(e) => {
                tracing::warn!(
                    endpoint,
                    method = %method,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    error = %e,
                    "Upstream call failed"
                );
                e.kind()
            }
        };
        metrics::record_upstream_call(endpoint, method.as_str(), outcome, start);

        result
    }

    async fn exchange(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<Value, UpstreamError> {
        let network = |source| UpstreamError::Network {
            endpoint: endpoint.to_string(),
            source,
        };

        let mut request = self
            .http
            .request(method, self.url(endpoint))
            .headers(self.headers.clone());
        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let response = request.send().await.map_err(network)?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: text.trim().to_string(),
            });
        }

        let bytes = response.bytes().await.map_err(network)?;
        serde_json::from_slice(&bytes).map_err(UpstreamError::InvalidJson)
    }
}
