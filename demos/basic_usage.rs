// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Basic viewport-cache usage example.
//!
//! Demonstrates:
//! 1. Ingesting a batch of fetched records into a host-owned store
//! 2. Touching records as the user interacts
//! 3. Panning the viewport and running a cleanup pass
//! 4. Applying the partition and pruning the access tracker
//! 5. Selecting display markers from the kept set
//! 6. Displaying stats and metrics (OTEL-compatible)
//!
//! # Run
//!
//! ```bash
//! cargo run --example basic_usage
//! ```

use std::collections::{HashMap, HashSet};

use metrics_util::debugging::DebuggingRecorder;
use viewport_cache::{
    cleanup, estimate_memory_mb, select_markers, AccessTracker, BoundingBox, CacheConfig,
    GeoRecord, Viewport,
};

fn main() {
    // Install metrics recorder (captures all metrics for export)
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    recorder.install().expect("failed to install metrics recorder");

    // Simple logging (no filter for simplicity)
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    let config = CacheConfig::default();
    config.validate().expect("invalid cache configuration");

    // ─────────────────────────────────────────────────────────────────────
    // 1. Ingest a fetched batch into the host store
    // ─────────────────────────────────────────────────────────────────────
    let mut store: HashMap<String, GeoRecord> = HashMap::new();
    for i in 0..2000u32 {
        let lat = 34.0 + f64::from(i % 200) * 0.02;
        let lon = 138.0 + f64::from(i / 200) * 0.4;
        let mut record = GeoRecord::new(format!("token-{i:04}"), lat, lon);
        record.generation = i % 6;
        record.reference_count = i % 9;
        if i % 5 == 0 {
            record.content = Some(format!("inscription #{i}"));
        }
        store.insert(record.id.clone(), record);
    }
    println!(
        "ingested {} records (~{} MB resident)",
        store.len(),
        estimate_memory_mb(store.len(), config.per_record_kb)
    );

    // ─────────────────────────────────────────────────────────────────────
    // 2. The user pokes at a few tokens
    // ─────────────────────────────────────────────────────────────────────
    let tracker = AccessTracker::new();
    for i in [3u32, 77, 410, 1999] {
        tracker.touch_now(&format!("token-{i:04}"));
    }

    // ─────────────────────────────────────────────────────────────────────
    // 3. The map settles over Tokyo; run a cleanup pass
    // ─────────────────────────────────────────────────────────────────────
    let viewport = Viewport::new(BoundingBox::new(139.0, 35.0, 140.0, 36.0), 12.0);
    let result = cleanup(
        &store,
        &tracker.snapshot(),
        Some(&viewport),
        &HashSet::new(),
        &config,
    );
    println!(
        "cleanup: kept {} / evicted {} of {} (freed ~{} MB)",
        result.stats.kept_count,
        result.stats.evicted_count,
        result.stats.initial_count,
        result.stats.memory_freed_mb,
    );

    // ─────────────────────────────────────────────────────────────────────
    // 4. Apply the partition: the engine recommends, the host deletes
    // ─────────────────────────────────────────────────────────────────────
    for id in &result.evict {
        store.remove(id);
    }
    tracker.forget_all(&result.evict);
    println!("store now holds {} records", store.len());

    // ─────────────────────────────────────────────────────────────────────
    // 5. Pick markers to draw from the kept set
    // ─────────────────────────────────────────────────────────────────────
    let markers = select_markers(store.values(), 50, viewport_cache::epoch_ms());
    println!("drawing {} markers, first few: {:?}", markers.len(), &markers[..5.min(markers.len())]);

    // ─────────────────────────────────────────────────────────────────────
    // 6. Metrics snapshot
    // ─────────────────────────────────────────────────────────────────────
    let series = snapshotter.snapshot().into_vec();
    println!("\ncaptured {} metric series:", series.len());
    for (key, _, _, value) in series {
        println!("  {} = {:?}", key.key().name(), value);
    }
}
