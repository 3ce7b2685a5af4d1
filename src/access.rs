//! Host-side access timestamp tracking.
//!
//! The host updates the tracker every time a record is rendered,
//! selected, or otherwise touched; the engine only ever reads an
//! immutable snapshot of it. A record with no entry counts as never
//! accessed and fails the recency test unconditionally.

use std::collections::HashMap;

use dashmap::DashMap;

/// Current wall-clock time in epoch milliseconds.
pub fn epoch_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Last-touch table, safe to update from render and event threads
/// concurrently.
///
/// # Example
///
/// ```
/// use viewport_cache::AccessTracker;
///
/// let tracker = AccessTracker::new();
/// tracker.touch("token-1", 1_000);
/// tracker.touch("token-1", 5_000);
///
/// assert_eq!(tracker.last_access("token-1"), Some(5_000));
/// assert_eq!(tracker.last_access("token-2"), None);
/// ```
#[derive(Debug, Default)]
pub struct AccessTracker {
    touched: DashMap<String, u64>,
}

impl AccessTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a touch at an explicit timestamp (epoch ms).
    pub fn touch(&self, id: &str, now_ms: u64) {
        self.touched.insert(id.to_string(), now_ms);
    }

    /// Record a touch at the current wall-clock time.
    pub fn touch_now(&self, id: &str) {
        self.touch(id, epoch_ms());
    }

    /// Last touch time for a record, if it was ever touched.
    pub fn last_access(&self, id: &str) -> Option<u64> {
        self.touched.get(id).map(|entry| *entry.value())
    }

    /// Drop entries for records the host has evicted, so the table does
    /// not grow with the lifetime of the session.
    pub fn forget_all<I, S>(&self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in ids {
            self.touched.remove(id.as_ref());
        }
    }

    pub fn len(&self) -> usize {
        self.touched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.touched.is_empty()
    }

    /// Immutable snapshot for one cleanup pass.
    ///
    /// The engine reads only this copy; touches that land during the
    /// pass are picked up by the next one.
    pub fn snapshot(&self) -> HashMap<String, u64> {
        self.touched
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }
}
