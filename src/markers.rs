//! Marker selection for the rendering layer.
//!
//! Even after eviction the kept set can exceed what the map should
//! draw. Marker selection ranks the kept records with the
//! display-oriented [`DiscoveryPolicy`] (older, unreferenced records
//! surface first) and takes the top of the budget. This is a drawing
//! decision, never a caching one; evicting by discovery score would
//! invert the cache's retention goals.

use std::cmp::Ordering;

use crate::priority::{DiscoveryPolicy, RankingPolicy};
use crate::record::GeoRecord;

/// Pick at most `budget` record ids to render, ranked by the default
/// [`DiscoveryPolicy`].
///
/// Returns ids in rank order (most display-worthy first). Deterministic:
/// ties break by id.
pub fn select_markers<'a, I>(records: I, budget: usize, now_ms: u64) -> Vec<String>
where
    I: IntoIterator<Item = &'a GeoRecord>,
{
    select_markers_with(records, &DiscoveryPolicy::default(), budget, now_ms)
}

/// [`select_markers`] with a caller-supplied ranking policy.
pub fn select_markers_with<'a, I, P>(
    records: I,
    policy: &P,
    budget: usize,
    now_ms: u64,
) -> Vec<String>
where
    I: IntoIterator<Item = &'a GeoRecord>,
    P: RankingPolicy,
{
    if budget == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(f64, &str)> = records
        .into_iter()
        .map(|r| (policy.score(r, None, now_ms), r.id.as_str()))
        .collect();
    ranked.sort_unstable_by(|a, b| {
        b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal).then_with(|| a.1.cmp(b.1))
    });

    ranked
        .into_iter()
        .take(budget)
        .map(|(_, id)| id.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW_MS: u64 = 1_700_000_000_000;
    const NOW_SECS: i64 = 1_700_000_000;

    fn record(id: &str, age_secs: i64, references: u32) -> GeoRecord {
        let mut r = GeoRecord::new(id, 35.5, 139.5);
        r.created_at = NOW_SECS - age_secs;
        r.reference_count = references;
        r
    }

    #[test]
    fn test_budget_bounds_output() {
        let records: Vec<GeoRecord> =
            (0..20).map(|i| record(&format!("id-{i:02}"), i * 100, 0)).collect();

        let markers = select_markers(records.iter(), 5, NOW_MS);
        assert_eq!(markers.len(), 5);
    }

    #[test]
    fn test_under_budget_returns_all() {
        let records = [record("a", 100, 0), record("b", 200, 0)];
        let markers = select_markers(records.iter(), 10, NOW_MS);
        assert_eq!(markers.len(), 2);
    }

    #[test]
    fn test_zero_budget() {
        let records = [record("a", 100, 0)];
        assert!(select_markers(records.iter(), 0, NOW_MS).is_empty());
    }

    #[test]
    fn test_old_unreferenced_wins() {
        let records = [
            record("new-hub", 60, 12),
            record("old-orphan", 30 * 86_400, 0),
            record("new-orphan", 60, 0),
        ];

        let markers = select_markers(records.iter(), 1, NOW_MS);
        assert_eq!(markers, vec!["old-orphan"]);
    }

    #[test]
    fn test_deterministic_with_ties() {
        // Identical attributes, so the id breaks the tie
        let records = [record("b", 100, 0), record("a", 100, 0), record("c", 100, 0)];

        let first = select_markers(records.iter(), 2, NOW_MS);
        let second = select_markers(records.iter(), 2, NOW_MS);

        assert_eq!(first, second);
        assert_eq!(first, vec!["a", "b"]);
    }
}
