//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the web UI
//! backend. All types derive Serde traits for deserialization from config files.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the web UI backend.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address, port).
    pub listener: ListenerConfig,

    /// Upstream control API settings.
    pub upstream: UpstreamConfig,

    /// Credentials passed through to the upstream.
    pub credentials: CredentialsConfig,

    /// Static asset serving.
    pub assets: AssetsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address without port (e.g., "0.0.0.0").
    pub bind_address: String,

    /// Listening port.
    pub port: u16,

    /// Overall deadline for an inbound request in seconds.
    pub request_timeout_secs: u64,
}

impl ListenerConfig {
    /// Full socket address string, e.g. "0.0.0.0:3000".
    pub fn socket_address(&self) -> String {
        match self.bind_address.parse::<std::net::IpAddr>() {
            Ok(ip) => SocketAddr::new(ip, self.port).to_string(),
            Err(_) => format!("{}:{}", self.bind_address, self.port),
        }
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            request_timeout_secs: 30,
        }
    }
}

/// Upstream control API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the control server (e.g., "http://gluetun:8000").
    pub base_url: String,

    /// Per-call timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://gluetun:8000".to_string(),
            timeout_ms: 5000,
        }
    }
}

/// Raw credentials as configured. Resolved into an
/// [`AuthConfig`](crate::upstream::AuthConfig) once at startup.
#[derive(Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CredentialsConfig {
    /// API key sent as a Bearer token. Takes precedence over basic auth.
    pub api_key: Option<String>,

    /// Username for HTTP Basic auth.
    pub username: Option<String>,

    /// Password for HTTP Basic auth.
    pub password: Option<String>,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("CredentialsConfig")
            .field("api_key", &redact(&self.api_key))
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .finish()
    }
}

/// Static asset configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding the browser UI.
    pub dir: PathBuf,

    /// Entry document served for unmatched paths, relative to `dir`.
    pub index: String,

    /// Attach a permissive CORS layer.
    pub cors_enabled: bool,
}

impl AssetsConfig {
    /// Path of the single-page-app entry document.
    pub fn index_path(&self) -> PathBuf {
        self.dir.join(&self.index)
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public"),
            index: "index.html".to_string(),
            cors_enabled: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
