//! Configuration for the cache engine.
//!
//! # Example
//!
//! ```
//! use viewport_cache::CacheConfig;
//!
//! // Minimal config (uses defaults)
//! let config = CacheConfig::default();
//! assert_eq!(config.hard_capacity, 4000);
//! assert_eq!(config.soft_capacity, 3000);
//!
//! // Full config
//! let config = CacheConfig {
//!     expansion_factor: 2.0,
//!     recency_window_ms: 30_000,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Host mis-configuration detected by [`CacheConfig::validate`].
///
/// These are programmer errors, not runtime data issues. Hosts should
/// validate once at startup; a cleanup pass with an invalid config
/// fails fast instead of producing a nonsensical partition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("hard_capacity must be greater than zero")]
    ZeroHardCapacity,
    #[error("soft_capacity must be greater than zero")]
    ZeroSoftCapacity,
    #[error("soft_capacity ({soft}) must not exceed hard_capacity ({hard})")]
    SoftExceedsHard { soft: usize, hard: usize },
    #[error("expansion_factor must be positive, got {0}")]
    NonPositiveExpansionFactor(f64),
    #[error("per_record_kb must be positive, got {0}")]
    NonPositivePerRecordKb(f64),
}

/// Configuration for the cache engine.
///
/// All fields have defaults tuned for a country-scale token map; hosts
/// override per deployment. The engine never measures live heap usage:
/// eviction is driven by record counts against the capacity thresholds,
/// and `per_record_kb` only feeds the observability estimate.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Cache zone padding: the retention box is the viewport's width and
    /// height multiplied by this factor, around the same center. Widens
    /// retention so a small pan does not immediately evict soon-to-be
    /// visible records.
    #[serde(default = "default_expansion_factor")]
    pub expansion_factor: f64,

    /// How long after its last touch a record stays eligible even when a
    /// fast pan has carried it outside the padded zone (default: 60 s).
    #[serde(default = "default_recency_window_ms")]
    pub recency_window_ms: u64,

    /// Absolute ceiling: once the eligible set exceeds this, forced
    /// priority-ranked trimming kicks in.
    #[serde(default = "default_hard_capacity")]
    pub hard_capacity: usize,

    /// Target size the eligible set is trimmed down to once the hard
    /// capacity is exceeded.
    #[serde(default = "default_soft_capacity")]
    pub soft_capacity: usize,

    /// Average resident cost of one cached record in KB (attributes +
    /// index entries), for the memory estimate only.
    #[serde(default = "default_per_record_kb")]
    pub per_record_kb: f64,
}

// The 2.5x factor quoted in the original component's comments does not
// reproduce its observed padded bounds; 1.75x does.
fn default_expansion_factor() -> f64 { 1.75 }
fn default_recency_window_ms() -> u64 { 60_000 }
fn default_hard_capacity() -> usize { 4000 }
fn default_soft_capacity() -> usize { 3000 }
fn default_per_record_kb() -> f64 { 1.8 }

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            expansion_factor: default_expansion_factor(),
            recency_window_ms: default_recency_window_ms(),
            hard_capacity: default_hard_capacity(),
            soft_capacity: default_soft_capacity(),
            per_record_kb: default_per_record_kb(),
        }
    }
}

impl CacheConfig {
    /// Check the documented preconditions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hard_capacity == 0 {
            return Err(ConfigError::ZeroHardCapacity);
        }
        if self.soft_capacity == 0 {
            return Err(ConfigError::ZeroSoftCapacity);
        }
        if self.soft_capacity > self.hard_capacity {
            return Err(ConfigError::SoftExceedsHard {
                soft: self.soft_capacity,
                hard: self.hard_capacity,
            });
        }
        if !(self.expansion_factor > 0.0) {
            return Err(ConfigError::NonPositiveExpansionFactor(self.expansion_factor));
        }
        if !(self.per_record_kb > 0.0) {
            return Err(ConfigError::NonPositivePerRecordKb(self.per_record_kb));
        }
        Ok(())
    }
}
