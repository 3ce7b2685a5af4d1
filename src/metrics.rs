// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Metrics instrumentation for the cache engine.
//!
//! Uses the `metrics` crate for backend-agnostic collection. The host
//! chooses the exporter (Prometheus, OTEL, a debugging recorder in
//! tests).
//!
//! # Metric Naming Convention
//! - `geo_cache_` prefix for all metrics
//! - `_total` suffix for counters
//! - `_seconds` suffix for duration histograms

use metrics::{counter, gauge, histogram};
use std::time::{Duration, Instant};

use crate::engine::CacheStats;

/// Record one completed cleanup pass.
pub fn record_cleanup_pass(stats: &CacheStats) {
    counter!("geo_cache_cleanup_passes_total").increment(1);
    counter!("geo_cache_evicted_records_total").increment(stats.evicted_count as u64);
    histogram!("geo_cache_evicted_per_pass").record(stats.evicted_count as f64);
    gauge!("geo_cache_resident_records").set(stats.kept_count as f64);
    gauge!("geo_cache_memory_freed_mb").set(stats.memory_freed_mb);
}

/// Record a forced, priority-ranked trim (eligible set over hard capacity).
pub fn record_forced_trim(trimmed: usize) {
    counter!("geo_cache_forced_trims_total").increment(1);
    counter!("geo_cache_force_trimmed_records_total").increment(trimmed as u64);
}

/// Record a pass that kept everything because no usable viewport existed.
pub fn record_permissive_pass() {
    counter!("geo_cache_permissive_passes_total").increment(1);
}

/// Set the current estimated resident memory.
pub fn set_memory_estimate_mb(mb: f64) {
    gauge!("geo_cache_memory_estimate_mb").set(mb);
}

/// Record operation latency.
pub fn record_latency(operation: &str, duration: Duration) {
    histogram!(
        "geo_cache_operation_seconds",
        "operation" => operation.to_string()
    )
    .record(duration.as_secs_f64());
}

/// A timing guard that records latency on drop.
pub struct LatencyTimer {
    operation: &'static str,
    start: Instant,
}

impl LatencyTimer {
    /// Start a new latency timer
    pub fn new(operation: &'static str) -> Self {
        Self { operation, start: Instant::now() }
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        record_latency(self.operation, self.start.elapsed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // These verify the API compiles and doesn't panic without a
    // recorder installed. Hosts assert values with metrics-util's
    // DebuggingRecorder.

    #[test]
    fn test_record_cleanup_pass() {
        let stats = CacheStats {
            initial_count: 10,
            kept_count: 8,
            evicted_count: 2,
            memory_freed_mb: 0.01,
        };
        record_cleanup_pass(&stats);
    }

    #[test]
    fn test_record_forced_trim() {
        record_forced_trim(1500);
        record_forced_trim(0);
    }

    #[test]
    fn test_gauges() {
        set_memory_estimate_mb(5.27);
        record_permissive_pass();
    }

    #[test]
    fn test_latency_timer_records_on_drop() {
        {
            let _timer = LatencyTimer::new("cleanup");
            std::thread::sleep(Duration::from_micros(10));
        }
    }
}
