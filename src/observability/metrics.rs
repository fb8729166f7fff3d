//! Metrics collection and exposition.
//!
//! # Metrics
//! - `webui_upstream_requests_total` (counter): upstream calls by endpoint, method, outcome
//! - `webui_upstream_request_duration_seconds` (histogram): upstream latency by endpoint
//! - `webui_health_snapshot_failures` (histogram): failed sections per health snapshot

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter with its own HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one upstream call.
pub fn record_upstream_call(endpoint: &str, method: &str, outcome: &'static str, start: Instant) {
    metrics::counter!(
        "webui_upstream_requests_total",
        "endpoint" => endpoint.to_string(),
        "method" => method.to_string(),
        "outcome" => outcome
    )
    .increment(1);

    metrics::histogram!(
        "webui_upstream_request_duration_seconds",
        "endpoint" => endpoint.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record how many sections of a health snapshot failed.
pub fn record_health_snapshot(failed_sections: usize) {
    metrics::histogram!("webui_health_snapshot_failures").record(failed_sections as f64);
}
