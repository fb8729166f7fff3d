//! Aggregate health snapshot.
//!
//! # Data Flow
//! ```text
//! GET /api/health
//!     → snapshot.rs fires five upstream calls at once
//!     → waits for all of them (join, not race)
//!     → each Result becomes its own Envelope
//!     → HealthSnapshot, always 200
//! ```
//!
//! # Design Decisions
//! - One failing section never affects the other four
//! - The endpoint itself never reports failure; failures nest per field

pub mod snapshot;

pub use snapshot::{collect_snapshot, HealthSnapshot};
