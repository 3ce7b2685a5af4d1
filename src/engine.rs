// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! The eviction engine: a pure keep/evict decision over the host's
//! record table.
//!
//! The engine holds no state between calls. It reads three snapshots
//! (records, access timestamps, viewport), returns a total partition of
//! the input ids plus summary stats, and leaves all mutation to the
//! host: the host deletes the evicted ids from its own store, merges in
//! fresh fetches, and may persist the keep set out-of-band.
//!
//! # Algorithm
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │ 1. Eligibility pass (hard rule, no exceptions)                │
//! │    eligible := in cache zone  OR  touched within the          │
//! │                recency window                                 │
//! │    everything else → evict                                    │
//! ├───────────────────────────────────────────────────────────────┤
//! │ 2. Capacity pass (only when |eligible| > hard_capacity)       │
//! │    rank eligible by RetentionPolicy, keep the top             │
//! │    soft_capacity, evict the rest                              │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! No viewport, or a degenerate one, means there is no basis to judge
//! spatial relevance: the engine keeps every record.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::access::epoch_ms;
use crate::config::CacheConfig;
use crate::memory::estimate_memory_mb;
use crate::metrics::{self, LatencyTimer};
use crate::priority::{RankingPolicy, RetentionPolicy};
use crate::record::GeoRecord;
use crate::viewport::Viewport;
use crate::zone::compute_cache_zone;

/// Summary of one cleanup pass. Ephemeral; recomputed every pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub initial_count: usize,
    pub kept_count: usize,
    pub evicted_count: usize,
    /// Estimated memory released by the evicted records, in MB
    pub memory_freed_mb: f64,
}

/// Output of [`cleanup`]: a total partition of the input ids.
///
/// `keep` and `evict` are each sorted by id, together cover exactly the
/// input record table, and never overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanupResult {
    pub keep: Vec<String>,
    pub evict: Vec<String>,
    pub stats: CacheStats,
}

/// Run a cleanup pass at the current wall-clock time.
///
/// See [`cleanup_at`] for the semantics; this wrapper only supplies
/// `now_ms`.
pub fn cleanup(
    records: &HashMap<String, GeoRecord>,
    access: &HashMap<String, u64>,
    viewport: Option<&Viewport>,
    tracked_cells: &HashSet<String>,
    config: &CacheConfig,
) -> CleanupResult {
    cleanup_at(records, access, viewport, tracked_cells, config, epoch_ms())
}

/// Run a cleanup pass with an explicit clock, using the default
/// [`RetentionPolicy`] for forced trims.
///
/// `now_ms` is fixed once for the whole pass so that eligibility and
/// ranking are mutually consistent and the pass is deterministic:
/// identical inputs always produce identical partitions.
///
/// `tracked_cells` is advisory. Retention is independent of the host's
/// cell subscriptions; the parameter only lets the pass log how many
/// evicted records fell in cells the host still tracks, so fetch-layer
/// churn shows up next to eviction churn in the same trace.
///
/// # Panics
///
/// Panics on the documented config preconditions (zero capacities,
/// soft above hard): these indicate host mis-configuration, and a
/// silent nonsensical partition would be worse. Hosts should run
/// [`CacheConfig::validate`] at startup.
pub fn cleanup_at(
    records: &HashMap<String, GeoRecord>,
    access: &HashMap<String, u64>,
    viewport: Option<&Viewport>,
    tracked_cells: &HashSet<String>,
    config: &CacheConfig,
    now_ms: u64,
) -> CleanupResult {
    cleanup_with(
        records,
        access,
        viewport,
        tracked_cells,
        config,
        &RetentionPolicy::default(),
        now_ms,
    )
}

/// [`cleanup_at`] with a caller-supplied ranking policy for the
/// capacity pass.
pub fn cleanup_with<P: RankingPolicy>(
    records: &HashMap<String, GeoRecord>,
    access: &HashMap<String, u64>,
    viewport: Option<&Viewport>,
    tracked_cells: &HashSet<String>,
    config: &CacheConfig,
    policy: &P,
    now_ms: u64,
) -> CleanupResult {
    assert!(config.hard_capacity > 0, "hard_capacity must be greater than zero");
    assert!(config.soft_capacity > 0, "soft_capacity must be greater than zero");
    assert!(
        config.soft_capacity <= config.hard_capacity,
        "soft_capacity must not exceed hard_capacity"
    );

    let _timer = LatencyTimer::new("cleanup");
    let initial_count = records.len();

    // No viewport, or a zero-area one: nothing to judge spatial
    // relevance against, keep everything.
    let zone = viewport
        .map(|v| compute_cache_zone(v, config.expansion_factor))
        .filter(|z| !z.is_degenerate());
    let Some(zone) = zone else {
        debug!(initial_count, "no usable viewport, keeping all records");
        metrics::record_permissive_pass();
        let mut keep: Vec<String> = records.keys().cloned().collect();
        keep.sort_unstable();
        let stats = CacheStats {
            initial_count,
            kept_count: initial_count,
            evicted_count: 0,
            memory_freed_mb: 0.0,
        };
        metrics::record_cleanup_pass(&stats);
        return CleanupResult { keep, evict: Vec::new(), stats };
    };

    // Stage 1: eligibility. In-zone or recently touched survives;
    // everything else is out, regardless of score.
    let mut eligible: Vec<&GeoRecord> = Vec::with_capacity(records.len());
    let mut evict: Vec<String> = Vec::new();
    for record in records.values() {
        let in_zone = zone.contains(record.position.lon(), record.position.lat());
        let recently_touched = access
            .get(&record.id)
            .is_some_and(|&t| now_ms.saturating_sub(t) <= config.recency_window_ms);

        if in_zone || recently_touched {
            eligible.push(record);
        } else {
            evict.push(record.id.clone());
        }
    }

    // Stage 2: capacity. Only a hard-capacity breach triggers ranking;
    // at or below the ceiling the whole eligible set is kept.
    let mut keep: Vec<String>;
    if eligible.len() > config.hard_capacity {
        let mut ranked: Vec<(f64, &str)> = eligible
            .iter()
            .map(|r| (policy.score(r, access.get(&r.id).copied(), now_ms), r.id.as_str()))
            .collect();
        // Highest score first; ties broken by id so reruns are stable
        ranked.sort_unstable_by(|a, b| {
            b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal).then_with(|| a.1.cmp(b.1))
        });

        let trimmed = ranked.len() - config.soft_capacity;
        keep = ranked[..config.soft_capacity]
            .iter()
            .map(|(_, id)| (*id).to_string())
            .collect();
        evict.extend(ranked[config.soft_capacity..].iter().map(|(_, id)| (*id).to_string()));

        info!(
            eligible = ranked.len(),
            hard_capacity = config.hard_capacity,
            soft_capacity = config.soft_capacity,
            trimmed,
            "eligible set over hard capacity, trimmed by retention priority"
        );
        metrics::record_forced_trim(trimmed);
    } else {
        keep = eligible.iter().map(|r| r.id.clone()).collect();
    }

    keep.sort_unstable();
    evict.sort_unstable();

    if !tracked_cells.is_empty() {
        let evicted_in_tracked = evict
            .iter()
            .filter_map(|id| records.get(id))
            .filter(|r| tracked_cells.iter().any(|c| r.spatial_keys.contains_cell(c)))
            .count();
        debug!(evicted_in_tracked, tracked_cells = tracked_cells.len(), "eviction overlap with tracked cells");
    }

    let stats = CacheStats {
        initial_count,
        kept_count: keep.len(),
        evicted_count: evict.len(),
        memory_freed_mb: estimate_memory_mb(evict.len(), config.per_record_kb),
    };
    debug!(
        initial = stats.initial_count,
        kept = stats.kept_count,
        evicted = stats.evicted_count,
        freed_mb = stats.memory_freed_mb,
        "cleanup pass complete"
    );
    metrics::record_cleanup_pass(&stats);
    metrics::set_memory_estimate_mb(estimate_memory_mb(keep.len(), config.per_record_kb));

    CleanupResult { keep, evict, stats }
}
