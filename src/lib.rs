//! # Viewport Cache
//!
//! A viewport-aware spatial cache with priority eviction, bounding
//! memory for a live map of geotagged records while keeping what the
//! user is looking at and recently touched.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Host (store layer)                     │
//! │  • Owns the record table and access timestamps             │
//! │  • Feeds viewport snapshots on pan/zoom/move-end           │
//! │  • Applies the partition: deletes evicted ids, persists    │
//! │    the keep set and stats out-of-band                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ snapshots in, partition out
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Eviction Engine (pure)                     │
//! │  • Cache zone: viewport padded by the expansion factor     │
//! │  • Hard rule: outside zone AND stale → evict               │
//! │  • Over hard capacity → rank by RetentionPolicy, keep      │
//! │    the top soft_capacity                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ kept set
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Marker selection (display)                 │
//! │  • DiscoveryPolicy: old, unreferenced records surface      │
//! │    first, within the marker budget                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine performs no I/O, holds no state between calls, and
//! returns before the host's next animation frame at the record counts
//! the capacities allow. All three inputs are read-only snapshots;
//! overlapping calls are race-free because nothing shared is mutated.
//!
//! ## Quick Start
//!
//! ```
//! use std::collections::{HashMap, HashSet};
//! use viewport_cache::{cleanup_at, BoundingBox, CacheConfig, GeoRecord, Viewport};
//!
//! // The host owns the record table; the engine only reads it.
//! let mut records = HashMap::new();
//! let on_screen = GeoRecord::new("token-1", 35.5, 139.5);
//! let far_away = GeoRecord::new("token-2", 51.5, -0.1);
//! records.insert(on_screen.id.clone(), on_screen);
//! records.insert(far_away.id.clone(), far_away);
//!
//! let viewport = Viewport::new(BoundingBox::new(139.0, 35.0, 140.0, 36.0), 12.0);
//! let config = CacheConfig::default();
//!
//! let result = cleanup_at(
//!     &records,
//!     &HashMap::new(),   // access timestamps (none touched yet)
//!     Some(&viewport),
//!     &HashSet::new(),   // tracked cells (advisory)
//!     &config,
//!     1_700_000_000_000, // clock, fixed per pass
//! );
//!
//! assert_eq!(result.keep, vec!["token-1"]);
//! assert_eq!(result.evict, vec!["token-2"]);
//!
//! // The host applies the partition to its own store.
//! for id in &result.evict {
//!     records.remove(id);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`engine`]: the [`cleanup`] decision function and [`CacheStats`]
//! - [`zone`]: viewport → padded retention zone
//! - [`priority`]: the retention and discovery ranking policies
//! - [`access`]: host-side last-touch tracking
//! - [`markers`]: display-budget selection over the kept set
//! - [`memory`]: count-based resident-memory estimate
//! - [`metrics`]: `metrics`-crate instrumentation

pub mod access;
pub mod config;
pub mod engine;
pub mod markers;
pub mod memory;
pub mod metrics;
pub mod priority;
pub mod record;
pub mod spatial;
pub mod viewport;
pub mod zone;

pub use access::{epoch_ms, AccessTracker};
pub use config::{CacheConfig, ConfigError};
pub use engine::{cleanup, cleanup_at, cleanup_with, CacheStats, CleanupResult};
pub use markers::{select_markers, select_markers_with};
pub use memory::estimate_memory_mb;
pub use priority::{DiscoveryPolicy, RankingPolicy, RetentionPolicy};
pub use record::{GeoPosition, GeoRecord};
pub use spatial::{records_in_cell, SpatialKeys, SpatialResolution};
pub use viewport::{BoundingBox, Viewport};
pub use zone::{cache_zone_for, compute_cache_zone};
