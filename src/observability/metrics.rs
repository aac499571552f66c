//! Metrics collection and exposition.
//!
//! # Metrics
//! - `flag_watch_evaluations_total` (counter): evaluations by flag, outcome
//! - `flag_watch_transitions_total` (counter): logged value changes by flag
//! - `flag_watch_flag_value` (gauge): 1=true, 0=false
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed
//! - Exporter is off unless `observability.metrics_enabled` is set

use metrics::{counter, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Install the Prometheus recorder and HTTP listener on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one evaluation; `outcome` is "ok" or "error".
pub fn record_evaluation(flag_key: &str, outcome: &'static str) {
    counter!(
        "flag_watch_evaluations_total",
        "flag" => flag_key.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}

/// Record a logged transition to `value`.
pub fn record_transition(flag_key: &str, value: bool) {
    counter!("flag_watch_transitions_total", "flag" => flag_key.to_string()).increment(1);
    gauge!("flag_watch_flag_value", "flag" => flag_key.to_string()).set(if value { 1.0 } else { 0.0 });
}
