//! Nested spatial keys and area-level queries.
//!
//! Every record carries identifiers at four nested resolutions
//! (coarse to fine), assigned by the indexer. They support area-level
//! lookups ("all records in this cell") and are deliberately independent
//! of the cache's own retention logic, which works on raw coordinates.

use serde::{Deserialize, Serialize};

use crate::record::GeoRecord;

/// One of the four nested resolutions, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpatialResolution {
    Coarse,
    Area,
    Local,
    Fine,
}

impl SpatialResolution {
    /// All resolutions, coarsest first.
    pub const ALL: [SpatialResolution; 4] = [
        SpatialResolution::Coarse,
        SpatialResolution::Area,
        SpatialResolution::Local,
        SpatialResolution::Fine,
    ];
}

/// Cell identifiers for one record at each resolution.
///
/// Empty strings mean the indexer did not assign a key at that level;
/// such records simply never match a cell query there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpatialKeys {
    #[serde(default)]
    pub coarse: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub local: String,
    #[serde(default)]
    pub fine: String,
}

impl SpatialKeys {
    /// The cell identifier at one resolution.
    pub fn key_at(&self, resolution: SpatialResolution) -> &str {
        match resolution {
            SpatialResolution::Coarse => &self.coarse,
            SpatialResolution::Area => &self.area,
            SpatialResolution::Local => &self.local,
            SpatialResolution::Fine => &self.fine,
        }
    }

    /// True when any resolution carries `cell`.
    pub fn contains_cell(&self, cell: &str) -> bool {
        !cell.is_empty()
            && SpatialResolution::ALL
                .iter()
                .any(|&r| self.key_at(r) == cell)
    }
}

/// Area-level query: all records whose key at `resolution` equals `cell`.
///
/// Linear scan; the caller's record table is bounded by the cache
/// capacities so this stays cheap.
pub fn records_in_cell<'a, I>(
    records: I,
    resolution: SpatialResolution,
    cell: &str,
) -> Vec<&'a GeoRecord>
where
    I: IntoIterator<Item = &'a GeoRecord>,
{
    if cell.is_empty() {
        return Vec::new();
    }
    records
        .into_iter()
        .filter(|r| r.spatial_keys.key_at(resolution) == cell)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_keys(id: &str, coarse: &str, fine: &str) -> GeoRecord {
        let mut record = GeoRecord::new(id, 0.0, 0.0);
        record.spatial_keys = SpatialKeys {
            coarse: coarse.to_string(),
            area: String::new(),
            local: String::new(),
            fine: fine.to_string(),
        };
        record
    }

    #[test]
    fn test_key_at_each_resolution() {
        let keys = SpatialKeys {
            coarse: "c1".into(),
            area: "a1".into(),
            local: "l1".into(),
            fine: "f1".into(),
        };

        assert_eq!(keys.key_at(SpatialResolution::Coarse), "c1");
        assert_eq!(keys.key_at(SpatialResolution::Area), "a1");
        assert_eq!(keys.key_at(SpatialResolution::Local), "l1");
        assert_eq!(keys.key_at(SpatialResolution::Fine), "f1");
    }

    #[test]
    fn test_contains_cell() {
        let keys = SpatialKeys {
            coarse: "c1".into(),
            ..Default::default()
        };

        assert!(keys.contains_cell("c1"));
        assert!(!keys.contains_cell("c2"));
        assert!(!keys.contains_cell(""), "empty cell never matches");
    }

    #[test]
    fn test_records_in_cell_filters_by_resolution() {
        let a = record_with_keys("a", "tokyo", "tokyo-001");
        let b = record_with_keys("b", "tokyo", "tokyo-002");
        let c = record_with_keys("c", "osaka", "osaka-001");
        let records = [&a, &b, &c];

        let coarse = records_in_cell(records.iter().copied(), SpatialResolution::Coarse, "tokyo");
        assert_eq!(coarse.len(), 2);

        let fine = records_in_cell(records.iter().copied(), SpatialResolution::Fine, "tokyo-002");
        assert_eq!(fine.len(), 1);
        assert_eq!(fine[0].id, "b");
    }

    #[test]
    fn test_records_in_cell_empty_cell_matches_nothing() {
        let a = record_with_keys("a", "", "");
        let found = records_in_cell([&a], SpatialResolution::Coarse, "");
        assert!(found.is_empty());
    }

    #[test]
    fn test_resolution_serde_names() {
        let json = serde_json::to_string(&SpatialResolution::Coarse).unwrap();
        assert_eq!(json, "\"coarse\"");
    }
}
