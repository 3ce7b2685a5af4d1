//! Approximate resident-memory accounting.
//!
//! True heap measurement is unreliable or unavailable in the host
//! environments this cache targets, so memory figures are derived from
//! record counts and a configured average per-record cost. They feed
//! telemetry and host back-pressure decisions only; eviction itself is
//! driven by counts against the capacity thresholds.

/// Estimate resident memory for `count` cached records, in MB.
///
/// `count * per_record_kb / 1024`, rounded to two decimals for display.
///
/// # Example
///
/// ```
/// use viewport_cache::estimate_memory_mb;
///
/// assert_eq!(estimate_memory_mb(1000, 1.8), 1.76);
/// assert_eq!(estimate_memory_mb(0, 1.8), 0.0);
/// ```
#[must_use]
pub fn estimate_memory_mb(count: usize, per_record_kb: f64) -> f64 {
    let mb = count as f64 * per_record_kb / 1024.0;
    (mb * 100.0).round() / 100.0
}
