//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): inbound requests by outcome and status
//! - `gateway_request_duration_seconds` (histogram): inbound latency
//! - `gateway_downstream_requests_total` (counter): day service calls by outcome
//! - `gateway_downstream_duration_seconds` (histogram): day service latency
//!
//! Recording is a no-op until a recorder is installed by [`init_metrics`].

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one handled inbound request.
pub fn record_request(outcome: &'static str, status: u16, start: Instant) {
    metrics::counter!(
        "gateway_requests_total",
        "outcome" => outcome,
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("gateway_request_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

/// Record one call to the day service.
pub fn record_downstream(outcome: &'static str, start: Instant) {
    metrics::counter!("gateway_downstream_requests_total", "outcome" => outcome).increment(1);
    metrics::histogram!("gateway_downstream_duration_seconds")
        .record(start.elapsed().as_secs_f64());
}
