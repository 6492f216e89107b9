//! Prometheus metrics for monitoring bracket server health and usage.
//!
//! Metrics are exposed in Prometheus text format at `http://<addr>/metrics`
//! once [`init_metrics`] has installed the exporter. Without an exporter
//! every recording function is a no-op.
//!
//! # Metrics Categories
//!
//! - **HTTP Metrics**: Request counts, duration, status codes
//! - **Bracket Metrics**: Brackets generated, field sizes, byes, rejections

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Initialize Prometheus metrics exporter.
///
/// Sets up a Prometheus scrape endpoint on the specified address.
///
/// # Arguments
///
/// - `addr`: Address to bind the metrics server to (e.g., `0.0.0.0:9090`)
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Record HTTP request.
pub fn http_requests_total(method: &str, path: &str, status: u16) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record HTTP request duration in milliseconds.
pub fn http_request_duration_ms(method: &str, path: &str, duration_ms: f64) {
    metrics::histogram!("http_request_duration_ms",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(duration_ms);
}

// ============================================================================
// Bracket Metrics
// ============================================================================

/// Increment brackets generated counter.
pub fn brackets_generated_total(pairing: &str) {
    metrics::counter!("brackets_generated_total",
        "pairing" => pairing.to_string()
    )
    .increment(1);
}

/// Record field size distribution.
pub fn bracket_field_size(participants: usize) {
    metrics::histogram!("bracket_field_size").record(participants as f64);
}

/// Record byes per generated bracket.
pub fn bracket_byes(byes: usize) {
    metrics::histogram!("bracket_byes").record(byes as f64);
}

/// Increment rejected request counter.
pub fn bracket_rejections_total(reason: &str) {
    metrics::counter!("bracket_rejections_total",
        "reason" => reason.to_string()
    )
    .increment(1);
}
