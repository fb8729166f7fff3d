//! Upstream control API subsystem.
//!
//! # Data Flow
//! ```text
//! handler
//!     → client.rs (URL, headers, deadline)
//!     → auth.rs (credential headers, built once at startup)
//!     → control API
//!     → JSON value or UpstreamError
//! ```

pub mod auth;
pub mod client;
pub mod endpoints;

pub use auth::{build_auth_headers, AuthConfig};
pub use client::{UpstreamClient, UpstreamError};
