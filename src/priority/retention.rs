// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Retention scoring: which eligible records survive a forced trim.

use crate::priority::RankingPolicy;
use crate::record::GeoRecord;

/// Retention-oriented ranking.
///
/// Combines four signals, each monotone in the documented direction:
///
/// - `generation`: deeper / more-connected records score higher
/// - `reference_count`: more-referenced records score higher
/// - non-empty `content`: fixed bonus over an otherwise-identical record
/// - recency: strictly decreasing in the gap since last access
///   (exponential decay with a configurable half-life); a record never
///   accessed contributes nothing here
///
/// The weights are tunable, not a contract. They are sized so that the
/// structural signals (generation, references, content) dominate pure
/// recency: a well-connected content-bearing record survives a forced
/// trim even against records touched seconds ago.
#[derive(Debug, Clone)]
pub struct RetentionPolicy {
    /// Points per generation level
    pub generation_weight: f64,
    /// Points per inbound reference
    pub reference_weight: f64,
    /// Flat bonus for a non-empty content payload
    pub content_bonus: f64,
    /// Maximum points from recency (at zero gap)
    pub recency_weight: f64,
    /// Half-life of the recency contribution (ms)
    pub recency_half_life_ms: f64,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            generation_weight: 10.0,
            reference_weight: 5.0,
            content_bonus: 25.0,
            recency_weight: 15.0,
            recency_half_life_ms: 60_000.0,
        }
    }
}

impl RankingPolicy for RetentionPolicy {
    fn score(&self, record: &GeoRecord, last_access_ms: Option<u64>, now_ms: u64) -> f64 {
        let structural = self.generation_weight * f64::from(record.generation)
            + self.reference_weight * f64::from(record.reference_count);

        let content = if record.has_content() { self.content_bonus } else { 0.0 };

        // exp(-age * ln2 / half_life): 1.0 at zero gap, halving every
        // half-life, never reaching the never-accessed floor of 0.
        let recency = match last_access_ms {
            Some(t) => {
                let age_ms = now_ms.saturating_sub(t) as f64;
                self.recency_weight
                    * (-age_ms * std::f64::consts::LN_2 / self.recency_half_life_ms).exp()
            }
            None => 0.0,
        };

        structural + content + recency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u64 = 1_000_000_000;

    fn record(generation: u32, references: u32, content: Option<&str>) -> GeoRecord {
        let mut r = GeoRecord::new("r", 35.0, 139.0);
        r.generation = generation;
        r.reference_count = references;
        r.content = content.map(str::to_string);
        r
    }

    #[test]
    fn test_higher_generation_scores_higher() {
        let policy = RetentionPolicy::default();
        let shallow = record(1, 0, None);
        let deep = record(5, 0, None);

        assert!(
            policy.score(&deep, None, NOW) > policy.score(&shallow, None, NOW),
            "deeper records should outrank shallow ones"
        );
    }

    #[test]
    fn test_more_references_score_higher() {
        let policy = RetentionPolicy::default();
        let lonely = record(0, 0, None);
        let popular = record(0, 8, None);

        assert!(policy.score(&popular, None, NOW) > policy.score(&lonely, None, NOW));
    }

    #[test]
    fn test_content_bonus_is_fixed() {
        let policy = RetentionPolicy::default();
        let bare = record(2, 3, None);
        let with_content = record(2, 3, Some("gm"));

        let diff = policy.score(&with_content, None, NOW) - policy.score(&bare, None, NOW);
        assert!((diff - policy.content_bonus).abs() < 1e-9);
    }

    #[test]
    fn test_empty_content_earns_no_bonus() {
        let policy = RetentionPolicy::default();
        let bare = record(0, 0, None);
        let empty = record(0, 0, Some(""));

        assert_eq!(policy.score(&bare, None, NOW), policy.score(&empty, None, NOW));
    }

    #[test]
    fn test_recency_strictly_decreasing() {
        let policy = RetentionPolicy::default();
        let r = record(0, 0, None);

        let just_now = policy.score(&r, Some(NOW - 1_000), NOW);
        let half_minute = policy.score(&r, Some(NOW - 30_000), NOW);
        let two_minutes = policy.score(&r, Some(NOW - 120_000), NOW);

        assert!(just_now > half_minute);
        assert!(half_minute > two_minutes);
    }

    #[test]
    fn test_never_accessed_scores_lowest_on_recency() {
        let policy = RetentionPolicy::default();
        let r = record(0, 0, None);

        let ancient = policy.score(&r, Some(0), NOW);
        let never = policy.score(&r, None, NOW);

        assert!(ancient >= never, "any recorded touch beats no touch at all");
        assert_eq!(never, 0.0);
    }

    #[test]
    fn test_structural_signals_dominate_recency() {
        let policy = RetentionPolicy::default();

        // A connected, content-bearing record last touched ten minutes ago
        let valuable = record(3, 5, Some("genesis"));
        // A bare record touched this instant
        let fresh = record(0, 0, None);

        let valuable_score = policy.score(&valuable, Some(NOW - 600_000), NOW);
        let fresh_score = policy.score(&fresh, Some(NOW), NOW);

        assert!(
            valuable_score > fresh_score,
            "structure should outweigh pure recency during forced trims"
        );
    }

    #[test]
    fn test_deterministic() {
        let policy = RetentionPolicy::default();
        let r = record(2, 2, Some("x"));

        let a = policy.score(&r, Some(NOW - 5_000), NOW);
        let b = policy.score(&r, Some(NOW - 5_000), NOW);
        assert_eq!(a, b);
    }

    #[test]
    fn test_half_life_halves_recency() {
        let policy = RetentionPolicy::default();
        let r = record(0, 0, None);

        let full = policy.score(&r, Some(NOW), NOW);
        let halved = policy.score(&r, Some(NOW - 60_000), NOW);

        assert!((full - policy.recency_weight).abs() < 1e-9);
        assert!((halved - policy.recency_weight / 2.0).abs() < 1e-9);
    }
}
