//! Metrics collection and exposition.
//!
//! # Metrics
//! - `rsvp_requests_total` (counter): requests by operation and status
//! - `rsvp_request_duration_seconds` (histogram): latency per operation
//! - `rsvp_entries` (gauge): entries in the store after the last write
//! - `rsvp_store_corrupt_total` (counter): corrupt store reads

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(op: &'static str, status: u16, start: Instant) {
    counter!("rsvp_requests_total", "op" => op, "status" => status.to_string()).increment(1);
    histogram!("rsvp_request_duration_seconds", "op" => op).record(start.elapsed().as_secs_f64());
}

pub fn record_entry_count(count: usize) {
    gauge!("rsvp_entries").set(count as f64);
}

pub fn record_store_corrupt() {
    counter!("rsvp_store_corrupt_total").increment(1);
}
