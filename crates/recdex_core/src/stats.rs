//! Engine statistics.
//!
//! Counters cover the engine's lifetime. Per-query cost is reported
//! separately through [`Traced`](crate::Traced).
//!
//! # Usage
//!
//! ```rust
//! use recdex_core::{BasicRecord, StorageEngine};
//!
//! let mut engine = StorageEngine::new();
//! engine.insert_record(BasicRecord::new(1, "Lee"));
//! engine.find_by_key(&1);
//!
//! let stats = engine.stats();
//! assert_eq!(stats.inserts, 1);
//! assert_eq!(stats.point_lookups, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Engine statistics.
///
/// All counters are atomic so they can be bumped from `&self` query paths.
/// Values are monotonically increasing.
#[derive(Debug, Default)]
pub struct EngineStats {
    /// Total records appended.
    inserts: AtomicU64,
    /// Successful logical deletes.
    deletes: AtomicU64,
    /// Deletes that found nothing to delete.
    failed_deletes: AtomicU64,
    /// `find_by_key` calls.
    point_lookups: AtomicU64,
    /// `range_by_key` calls.
    range_scans: AtomicU64,
    /// `prefix_by_secondary` calls.
    prefix_scans: AtomicU64,
    /// Sum of comparisons reported by traced queries.
    comparisons: AtomicU64,
    /// Inserts that replaced a live unique-index entry.
    shadowed_keys: AtomicU64,
}

impl EngineStats {
    /// Creates a new stats instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_delete(&self, deleted: bool) {
        if deleted {
            self.deletes.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed_deletes.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_point_lookup(&self, comparisons: u64) {
        self.point_lookups.fetch_add(1, Ordering::Relaxed);
        self.comparisons.fetch_add(comparisons, Ordering::Relaxed);
    }

    pub(crate) fn record_range_scan(&self, comparisons: u64) {
        self.range_scans.fetch_add(1, Ordering::Relaxed);
        self.comparisons.fetch_add(comparisons, Ordering::Relaxed);
    }

    pub(crate) fn record_prefix_scan(&self, comparisons: u64) {
        self.prefix_scans.fetch_add(1, Ordering::Relaxed);
        self.comparisons.fetch_add(comparisons, Ordering::Relaxed);
    }

    pub(crate) fn record_shadowed_key(&self) {
        self.shadowed_keys.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns a snapshot of all stats.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            inserts: self.inserts.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
            failed_deletes: self.failed_deletes.load(Ordering::Relaxed),
            point_lookups: self.point_lookups.load(Ordering::Relaxed),
            range_scans: self.range_scans.load(Ordering::Relaxed),
            prefix_scans: self.prefix_scans.load(Ordering::Relaxed),
            comparisons: self.comparisons.load(Ordering::Relaxed),
            shadowed_keys: self.shadowed_keys.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of engine statistics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    /// Total records appended.
    pub inserts: u64,
    /// Successful logical deletes.
    pub deletes: u64,
    /// Deletes that found nothing to delete.
    pub failed_deletes: u64,
    /// `find_by_key` calls.
    pub point_lookups: u64,
    /// `range_by_key` calls.
    pub range_scans: u64,
    /// `prefix_by_secondary` calls.
    pub prefix_scans: u64,
    /// Sum of comparisons reported by traced queries.
    pub comparisons: u64,
    /// Inserts that replaced a live unique-index entry.
    pub shadowed_keys: u64,
}

impl StatsSnapshot {
    /// Average comparisons per traced query, or zero if none ran.
    pub fn mean_comparisons(&self) -> f64 {
        let queries = self.point_lookups + self.range_scans + self.prefix_scans;
        if queries == 0 {
            0.0
        } else {
            self.comparisons as f64 / queries as f64
        }
    }
}
