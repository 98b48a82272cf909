//! Prometheus metrics for observability.
//!
//! This module provides metrics for monitoring the Courrier server:
//! - HTTP request metrics (latency, counts)
//! - Ticket lookups by outcome
//! - Pending sync counter

use once_cell::sync::Lazy;
use prometheus::{
    self, Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};
use regex_lite::Regex;

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "courrier_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("courrier_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "courrier_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

// =============================================================================
// Ticket Metrics
// =============================================================================

/// Ticket lookups by outcome.
pub static TICKET_LOOKUPS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("courrier_ticket_lookups_total", "Ticket lookups by outcome"),
        &["view", "outcome"], // outcome: "curated", "synthesized", "not_found"
    )
    .unwrap()
});

// =============================================================================
// Sync Metrics
// =============================================================================

/// Items waiting to be synchronized.
pub static PENDING_SYNC_ITEMS: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "courrier_pending_sync_items",
        "Number of items waiting to be synchronized",
    )
    .unwrap()
});

// =============================================================================
// Registration
// =============================================================================

fn register_metrics(registry: &Registry) {
    // HTTP
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .unwrap();

    // Tickets
    registry
        .register(Box::new(TICKET_LOOKUPS_TOTAL.clone()))
        .unwrap();

    // Sync
    registry
        .register(Box::new(PENDING_SYNC_ITEMS.clone()))
        .unwrap();
}

/// Encode all registered metrics in the Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if encoder.encode(&metric_families, &mut buffer).is_err() {
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

/// Record a pending sync count after a store operation.
pub fn record_pending_sync(count: u64) {
    PENDING_SYNC_ITEMS.set(i64::try_from(count).unwrap_or(i64::MAX));
}

static TICKET_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z]+-\d{4}-\d+").unwrap());
static NUMERIC_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\d+(/|$)").unwrap());

/// Collapse ticket identifiers and numeric segments so paths stay low-cardinality.
pub fn normalize_path(path: &str) -> String {
    let result = TICKET_ID_PATTERN.replace_all(path, "{id}");
    let result = NUMERIC_SEGMENT.replace_all(&result, "/{id}$1");
    result.to_string()
}
