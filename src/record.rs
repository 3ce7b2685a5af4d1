//! Geo record data structure.
//!
//! The [`GeoRecord`] is the unit of caching: an immutable snapshot of one
//! spatial entity as fetched from the indexer. Coordinates are stored as
//! fixed-point integers to avoid float drift at country scale.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::spatial::SpatialKeys;

/// A latitude/longitude/elevation triple in fixed-point form.
///
/// Latitude and longitude are scaled by 10^6 (micro-degrees), elevation
/// by 10^4. Conversions back to degrees happen only at the geometry
/// boundary ([`crate::BoundingBox::contains`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeoPosition {
    /// Latitude in micro-degrees (degrees * 10^6)
    pub lat_e6: i64,
    /// Longitude in micro-degrees (degrees * 10^6)
    pub lon_e6: i64,
    /// Elevation scaled by 10^4
    pub elevation_e4: i64,
}

impl GeoPosition {
    /// Build from plain degrees (elevation zero).
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        Self {
            lat_e6: (lat * 1e6).round() as i64,
            lon_e6: (lon * 1e6).round() as i64,
            elevation_e4: 0,
        }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat_e6 as f64 / 1e6
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon_e6 as f64 / 1e6
    }

    /// Elevation in source units.
    pub fn elevation(&self) -> f64 {
        self.elevation_e4 as f64 / 1e4
    }
}

/// An immutable snapshot of one spatial entity as cached client-side.
///
/// Records arrive from the fetch layer, may be overwritten by a later
/// snapshot under the same `id` on re-fetch, and are destroyed by the
/// host the moment a cleanup pass places them in the evict partition.
///
/// Unknown host-domain fields survive a round trip through the flattened
/// `extra` map; the engine itself only reads the fields below.
///
/// # Example
///
/// ```
/// use viewport_cache::GeoRecord;
///
/// let record = GeoRecord::new("token-42", 35.6812, 139.7671);
///
/// assert_eq!(record.id, "token-42");
/// assert_eq!(record.position.lat_e6, 35_681_200);
/// assert!(!record.has_content());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoRecord {
    /// Unique identifier, stable across the record's lifetime
    pub id: String,
    /// Fixed-point coordinates
    pub position: GeoPosition,
    /// Identifiers at four nested spatial resolutions (coarse to fine)
    #[serde(default)]
    pub spatial_keys: SpatialKeys,
    /// Depth of the record in the host's reference graph
    #[serde(default)]
    pub generation: u32,
    /// How many other records reference this one
    #[serde(default)]
    pub reference_count: u32,
    /// Optional short text payload; presence is a retention signal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Creation timestamp (epoch seconds)
    #[serde(default)]
    pub created_at: i64,
    /// Unrelated host-domain fields, carried through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl GeoRecord {
    /// Create a record with minimal required fields, stamped with the
    /// current wall-clock time.
    pub fn new(id: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            position: GeoPosition::from_degrees(lat, lon),
            spatial_keys: SpatialKeys::default(),
            generation: 0,
            reference_count: 0,
            content: None,
            created_at: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs() as i64,
            extra: serde_json::Map::new(),
        }
    }

    /// True when the record carries a non-empty text payload.
    pub fn has_content(&self) -> bool {
        self.content.as_deref().is_some_and(|c| !c.is_empty())
    }
}
