//! Cache zone calculation.
//!
//! The cache zone is the primary spatial retention criterion: a padded
//! bounding box, centered on the viewport's center and larger than the
//! visible frame, so that a small pan does not immediately evict
//! records that are about to scroll into view.

use crate::config::CacheConfig;
use crate::viewport::{BoundingBox, Viewport};

/// Derive the retention zone from the visible viewport.
///
/// The zone shares the viewport's center; its width and height are the
/// viewport's multiplied by `expansion_factor`. Pure, O(1). A
/// degenerate viewport yields a degenerate zone rather than an error,
/// which the engine turns into its keep-all short circuit.
///
/// # Example
///
/// ```
/// use viewport_cache::{compute_cache_zone, BoundingBox, Viewport};
///
/// let viewport = Viewport::new(BoundingBox::new(139.0, 35.0, 140.0, 36.0), 12.0);
/// let zone = compute_cache_zone(&viewport, 1.75);
///
/// assert_eq!(zone.center(), viewport.bounds.center());
/// assert!((zone.width() - 1.75).abs() < 1e-9);
/// ```
#[must_use]
pub fn compute_cache_zone(viewport: &Viewport, expansion_factor: f64) -> BoundingBox {
    let (cx, cy) = viewport.bounds.center();
    let half_width = viewport.bounds.width() * expansion_factor / 2.0;
    let half_height = viewport.bounds.height() * expansion_factor / 2.0;

    BoundingBox::new(cx - half_width, cy - half_height, cx + half_width, cy + half_height)
}

/// Convenience wrapper reading the factor from config.
#[must_use]
pub fn cache_zone_for(viewport: &Viewport, config: &CacheConfig) -> BoundingBox {
    compute_cache_zone(viewport, config.expansion_factor)
}
