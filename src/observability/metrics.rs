//! Metrics collection and exposition.
//!
//! # Metrics
//! - `cms_responses_total` (counter): responses written, labelled by
//!   `operation` and `status`

use std::net::SocketAddr;

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const RESPONSES_TOTAL: &str = "cms_responses_total";

/// Install the Prometheus exporter listening on `addr`.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    describe_counter!(RESPONSES_TOTAL, "Total number of responses written");

    tracing::info!(address = %addr, "Metrics exporter initialized");
    Ok(())
}

/// Count one written response.
///
/// A no-op until a recorder is installed.
pub fn record_response(operation: &'static str, status: u16) {
    counter!(RESPONSES_TOTAL, "operation" => operation, "status" => status.to_string()).increment(1);
}
