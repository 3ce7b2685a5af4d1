//! Ranking policies for cache and display decisions.
//!
//! Two distinct "priority" concepts exist in this domain and must not be
//! conflated:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Priority Module                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │  retention.rs  - What to CACHE                               │
//! │  └─ RetentionPolicy: newer / more-connected / content-       │
//! │     bearing records outrank stale disconnected ones          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  discovery.rs  - What to DRAW                                │
//! │  └─ DiscoveryPolicy: older, unreferenced records surface     │
//! │     first (logarithmic age growth)                           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The eviction engine ranks with [`RetentionPolicy`] during forced
//! trimming; marker selection ranks the kept set with
//! [`DiscoveryPolicy`]. Both implement [`RankingPolicy`] so the host
//! picks the one appropriate to its current decision.

pub mod discovery;
pub mod retention;

pub use discovery::DiscoveryPolicy;
pub use retention::RetentionPolicy;

use crate::record::GeoRecord;

/// A deterministic scoring strategy over records.
///
/// Higher scores mean "more worth keeping" (or, for display policies,
/// "more worth drawing"). Scores only ever rank records against each
/// other; call sites break ties by `id` so repeated passes over
/// identical inputs produce identical results.
pub trait RankingPolicy {
    /// Score one record. `last_access_ms` is the record's last-touch
    /// time if it was ever touched; `now_ms` is fixed once per pass by
    /// the caller.
    fn score(&self, record: &GeoRecord, last_access_ms: Option<u64>, now_ms: u64) -> f64;
}
