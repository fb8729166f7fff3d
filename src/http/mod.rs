//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → handlers.rs / vpn.rs (one upstream call each, or the health fan-out)
//!     → envelope.rs / error.rs ({ok, data | error} with 200, 400 or 502)
//!     → Send to client
//!
//! Anything not under /api → static asset or the entry document
//! ```

pub mod envelope;
pub mod error;
pub mod handlers;
pub mod request;
pub mod server;
pub mod vpn;

pub use envelope::Envelope;
pub use error::ApiError;
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
pub use vpn::VpnAction;
