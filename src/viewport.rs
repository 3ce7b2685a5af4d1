//! Viewport and bounding-box geometry.
//!
//! Boxes are axis-aligned in plain degrees with no projection
//! correction, which is acceptable at the zoom levels this cache
//! targets. The host mutates its [`Viewport`] on every pan/zoom; the
//! engine only ever reads a snapshot of it.

use serde::{Deserialize, Serialize};

/// Axis-aligned box in degrees: (west, south) to (east, north).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self { west, south, east, north }
    }

    /// Width in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Height in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Center point as (lon, lat).
    pub fn center(&self) -> (f64, f64) {
        ((self.west + self.east) / 2.0, (self.south + self.north) / 2.0)
    }

    /// Whether the point falls inside the box, edges inclusive.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.west && lon <= self.east && lat >= self.south && lat <= self.north
    }

    /// A box with zero (or inverted) extent in either axis.
    ///
    /// An uninitialized viewport produces one of these; the engine
    /// treats it like a missing viewport and keeps everything.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

/// The host's current view state.
///
/// `center` is (lon, lat). `bounds` is what the map actually shows;
/// the retention zone is derived from it by [`crate::compute_cache_zone`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: (f64, f64),
    pub zoom: f64,
    pub bounds: BoundingBox,
}

impl Viewport {
    /// Build a viewport with the center derived from the bounds.
    pub fn new(bounds: BoundingBox, zoom: f64) -> Self {
        Self { center: bounds.center(), zoom, bounds }
    }
}
