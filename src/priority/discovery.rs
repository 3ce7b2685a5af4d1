// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Discovery scoring: which kept records get drawn as markers.
//!
//! The inverse temperament of retention: discovery surfaces *older,
//! unreferenced* records so that forgotten corners of the map resurface
//! instead of the same well-connected clusters dominating the screen.

use crate::priority::RankingPolicy;
use crate::record::GeoRecord;

/// Display-oriented ranking with a logarithmic age-growth curve.
///
/// Age contributes `age_weight * ln(1 + age_secs)`: strictly increasing
/// with age but with diminishing increments, so a ten-year-old record
/// does not drown out everything else. Unreferenced records earn a flat
/// bonus; each inbound reference subtracts a penalty.
///
/// Never used for eviction. See the module docs in
/// [`crate::priority`].
#[derive(Debug, Clone)]
pub struct DiscoveryPolicy {
    /// Multiplier on the log-age curve
    pub age_weight: f64,
    /// Flat bonus when `reference_count == 0`
    pub unreferenced_bonus: f64,
    /// Points subtracted per inbound reference
    pub reference_penalty: f64,
}

impl Default for DiscoveryPolicy {
    fn default() -> Self {
        Self {
            age_weight: 10.0,
            unreferenced_bonus: 20.0,
            reference_penalty: 5.0,
        }
    }
}

impl RankingPolicy for DiscoveryPolicy {
    fn score(&self, record: &GeoRecord, _last_access_ms: Option<u64>, now_ms: u64) -> f64 {
        let now_secs = (now_ms / 1000) as i64;
        let age_secs = now_secs.saturating_sub(record.created_at).max(0) as f64;

        let age = self.age_weight * (1.0 + age_secs).ln();
        let connectivity = if record.reference_count == 0 {
            self.unreferenced_bonus
        } else {
            -self.reference_penalty * f64::from(record.reference_count)
        };

        age + connectivity
    }
}
