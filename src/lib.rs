//! Web UI backend for the Gluetun VPN container.
//!
//! Proxies a handful of JSON endpoints to the Gluetun control server,
//! aggregates a health snapshot from several of them at once, and serves the
//! browser UI.

pub mod config;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
