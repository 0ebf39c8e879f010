//! Prometheus metrics endpoint
//!
//! Exposes review counters and latencies in Prometheus format.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    let _ = &*PROMETHEUS_HANDLE;

    metrics::describe_counter!(
        "review_requests_total",
        "Total number of review requests by outcome"
    );
    metrics::describe_histogram!(
        "review_request_duration_seconds",
        "Review request duration in seconds"
    );
}

/// Prometheus metrics endpoint handler
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE.render()
}

/// Record a finished review request
pub fn record_request(status: &str, duration_secs: f64) {
    metrics::counter!("review_requests_total", "status" => status.to_string()).increment(1);
    metrics::histogram!("review_request_duration_seconds", "status" => status.to_string())
        .record(duration_secs);
}
