//! Prometheus metrics for the hub.
//!
//! All metrics follow the naming convention: `sg_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Profiles created
    pub static ref PROFILES_CREATED: IntCounter = IntCounter::new(
        "sg_profiles_created_total",
        "Total number of profiles created"
    ).expect("metric creation failed");

    /// Publications created, by kind
    pub static ref PUBLICATIONS_CREATED: IntCounterVec = IntCounterVec::new(
        Opts::new("sg_publications_created_total", "Total publications created"),
        &["kind"]  // post, comment, mirror
    ).expect("metric creation failed");

    /// Follow receipts minted
    pub static ref FOLLOWS: IntCounter = IntCounter::new(
        "sg_follows_total",
        "Total follow receipts minted"
    ).expect("metric creation failed");

    /// Collect receipts minted
    pub static ref COLLECTS: IntCounter = IntCounter::new(
        "sg_collects_total",
        "Total collect receipts minted"
    ).expect("metric creation failed");

    /// Delegated signatures rejected (expired or invalid)
    pub static ref SIGNATURE_FAILURES: IntCounter = IntCounter::new(
        "sg_signature_failures_total",
        "Total delegated signatures rejected"
    ).expect("metric creation failed");

    /// Rejected operations by operation and error category
    pub static ref REJECTED_OPERATIONS: IntCounterVec = IntCounterVec::new(
        Opts::new("sg_rejected_operations_total", "Operations rejected without state change"),
        &["operation", "category"]
    ).expect("metric creation failed");

    /// Events published to the sink, by event name
    pub static ref EVENTS_EMITTED: IntCounterVec = IntCounterVec::new(
        Opts::new("sg_events_emitted_total", "Events published on commit"),
        &["event"]
    ).expect("metric creation failed");
}

/// Keeps the registered metrics alive for the process lifetime.
pub struct MetricsHandle {
    _registry: Registry,
}

/// Register all metrics with the global registry.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(PROFILES_CREATED.clone()),
        Box::new(PUBLICATIONS_CREATED.clone()),
        Box::new(FOLLOWS.clone()),
        Box::new(COLLECTS.clone()),
        Box::new(SIGNATURE_FAILURES.clone()),
        Box::new(REJECTED_OPERATIONS.clone()),
        Box::new(EVENTS_EMITTED.clone()),
    ];

    for metric in metrics {
        REGISTRY
            .register(metric)
            .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    }

    Ok(MetricsHandle {
        _registry: REGISTRY.clone(),
    })
}

/// Encode all registered metrics in the Prometheus text format.
pub fn gather() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
