//! Storage engine: a record heap with a unique index and a secondary index.
//!
//! The engine owns the heap and both index trees and keeps them in step:
//!
//! 1. `insert_record` appends to the heap, then points both indexes at the
//!    new position
//! 2. `delete_by_id` tombstones the slot and detaches it from both indexes
//! 3. queries walk one tree, resolve positions through the heap, and drop
//!    tombstoned slots
//!
//! # Invariants
//!
//! - Heap positions are never reused; slots are never physically removed
//! - The unique index maps a key to at most one live position
//! - A secondary bucket is never empty; empty buckets are erased
//! - Tombstoned records never appear in query results

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::heap::{Heap, Slot};
use crate::index::OrderedIndexTree;
use crate::record::Record;
use crate::stats::{EngineStats, StatsSnapshot};
use crate::types::{Position, Traced};
use tracing::{debug, trace, warn};

/// Summary produced by [`StorageEngine::verify`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VerifyReport {
    /// Slots that are not tombstoned.
    pub live_records: usize,
    /// Tombstoned slots.
    pub deleted_records: usize,
    /// Entries in the unique index.
    pub unique_entries: usize,
    /// Distinct folded keys in the secondary index.
    pub secondary_keys: usize,
    /// Live records that the unique index no longer reaches because a later
    /// insert reused their key.
    pub unreachable_by_key: usize,
}

/// Record heap indexed by a unique key and a case-insensitive secondary key.
///
/// # Duplicate keys
///
/// [`insert_record`](Self::insert_record) never fails. Inserting a key that
/// is already live repoints the unique index at the new slot. The older
/// record stays in the heap, stays live, and stays in its secondary bucket,
/// so prefix queries still return it, but it can no longer be found, ranged
/// over, or deleted by key. Use
/// [`try_insert_record`](Self::try_insert_record) to reject such inserts.
///
/// # Concurrency
///
/// The engine is `Send` but not `Sync`: queries update the trees'
/// comparison counters through `&self`. Wrap it in
/// [`SharedEngine`](crate::SharedEngine) to share it between threads.
///
/// # Example
///
/// ```rust
/// use recdex_core::{BasicRecord, StorageEngine};
///
/// let mut engine = StorageEngine::new();
/// engine.insert_record(BasicRecord::new(5, "Smith"));
/// engine.insert_record(BasicRecord::new(6, "smith"));
/// engine.insert_record(BasicRecord::new(7, "Smythe"));
///
/// let found = engine.prefix_by_secondary("SMI");
/// let keys: Vec<i64> = found.value.iter().map(|r| r.key).collect();
/// assert_eq!(keys, vec![5, 6]);
/// ```
pub struct StorageEngine<R: Record> {
    config: EngineConfig,
    heap: Heap<R>,
    unique: OrderedIndexTree<R::Key, Position>,
    secondary: OrderedIndexTree<String, Vec<Position>>,
    stats: EngineStats,
}

impl<R: Record> Default for StorageEngine<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> StorageEngine<R> {
    /// Creates an empty engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::build(EngineConfig::default())
    }

    /// Creates an empty engine after validating `config`.
    pub fn with_config(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        Self {
            heap: Heap::with_capacity(config.initial_capacity),
            unique: OrderedIndexTree::new(),
            secondary: OrderedIndexTree::new(),
            stats: EngineStats::new(),
            config,
        }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns a snapshot of the lifetime statistics.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Returns the unique index, for shape diagnostics.
    pub fn unique_index(&self) -> &OrderedIndexTree<R::Key, Position> {
        &self.unique
    }

    /// Returns the secondary index, for shape diagnostics.
    pub fn secondary_index(&self) -> &OrderedIndexTree<String, Vec<Position>> {
        &self.secondary
    }

    fn fold(&self, s: &str) -> String {
        self.config.case_folding.fold(s)
    }

    /// Appends `record` and indexes it. Returns its heap position.
    ///
    /// If the key is already live, the unique index is silently repointed
    /// at the new slot; see the type-level docs for the consequences.
    pub fn insert_record(&mut self, record: R) -> Position {
        let key = record.key().clone();
        let folded = self.fold(record.secondary());
        let position = self.heap.append(record);

        if let Some(previous) = self.unique.insert(key.clone(), position) {
            warn!(
                ?key,
                %previous,
                %position,
                "unique key reinserted; previous slot is no longer reachable by key"
            );
            self.stats.record_shadowed_key();
        }

        match self.secondary.find_mut(&folded) {
            Some(bucket) => bucket.push(position),
            None => {
                self.secondary.insert(folded, vec![position]);
            }
        }

        self.stats.record_insert();
        debug!(?key, %position, "record inserted");
        position
    }

    /// Appends `record` unless its key already resolves to a live record.
    pub fn try_insert_record(&mut self, record: R) -> EngineResult<Position> {
        if let Some(&existing) = self.unique.find(record.key()) {
            if self.heap.live(existing).is_some() {
                return Err(EngineError::duplicate_key(
                    record.key(),
                    existing.as_usize(),
                ));
            }
        }
        Ok(self.insert_record(record))
    }

    /// Logically deletes the record with `key`.
    ///
    /// Returns false if the key is not indexed or its slot is missing or
    /// already tombstoned.
    pub fn delete_by_id(&mut self, key: &R::Key) -> bool {
        let deleted = self.delete_indexed(key);
        self.stats.record_delete(deleted);
        debug!(?key, deleted, "delete_by_id");
        deleted
    }

    fn delete_indexed(&mut self, key: &R::Key) -> bool {
        let Some(&position) = self.unique.find(key) else {
            return false;
        };

        let folded = match self.heap.slot(position) {
            Some(Slot {
                record,
                deleted: false,
            }) => self.fold(record.secondary()),
            Some(_) => {
                warn!(?key, %position, "unique index points at a tombstoned slot");
                return false;
            }
            None => {
                warn!(?key, %position, heap_len = self.heap.len(), "unique index points past the heap");
                return false;
            }
        };

        self.heap.tombstone(position);
        self.unique.erase(key);
        self.detach_secondary(folded, position);
        true
    }

    fn detach_secondary(&mut self, folded: String, position: Position) {
        let emptied = match self.secondary.find_mut(&folded) {
            Some(bucket) => {
                if let Some(i) = bucket.iter().position(|&p| p == position) {
                    bucket.remove(i);
                }
                bucket.is_empty()
            }
            None => {
                warn!(key = %folded, %position, "secondary bucket missing on delete");
                false
            }
        };
        if emptied {
            self.secondary.erase(&folded);
        }
    }

    /// Resolves an indexed position to a live record.
    fn resolve(&self, position: Position) -> Option<&R> {
        match self.heap.slot(position) {
            Some(slot) => slot.live(),
            None => {
                warn!(%position, heap_len = self.heap.len(), "index references a position past the heap");
                None
            }
        }
    }

    /// Looks up a live record by unique key.
    ///
    /// The comparison count of the index lookup is reported even on a miss.
    pub fn find_by_key(&self, key: &R::Key) -> Traced<Option<&R>> {
        self.unique.reset_metrics();
        let position = self.unique.find(key).copied();
        let comparisons = self.unique.comparisons();
        self.stats.record_point_lookup(comparisons);

        let record = position.and_then(|p| self.resolve(p));
        trace!(?key, comparisons, hit = record.is_some(), "find_by_key");
        Traced::new(record, comparisons)
    }

    /// Returns live records with `lo <= key <= hi`, in ascending key order.
    pub fn range_by_key(&self, lo: &R::Key, hi: &R::Key) -> Traced<Vec<&R>> {
        self.unique.reset_metrics();
        let mut out = Vec::new();
        self.unique.range_apply(lo, hi, |_, &position| {
            if let Some(record) = self.resolve(position) {
                out.push(record);
            }
        });
        let comparisons = self.unique.comparisons();
        self.stats.record_range_scan(comparisons);

        trace!(?lo, ?hi, comparisons, hits = out.len(), "range_by_key");
        Traced::new(out, comparisons)
    }

    /// Returns live records whose folded secondary key starts with the
    /// folded `prefix`.
    ///
    /// Results come in ascending secondary-key order, then insertion order
    /// within a key. The scan covers `[prefix, prefix + sentinel]` and each
    /// visited key is re-checked against the prefix. Keys that still start
    /// with the prefix but sort above the sentinel bound (a character at or
    /// above the sentinel right after the prefix) are picked up by continuing
    /// the walk while the prefix holds.
    pub fn prefix_by_secondary(&self, prefix: &str) -> Traced<Vec<&R>> {
        let low = self.fold(prefix);
        let mut high = low.clone();
        high.push(self.config.prefix_sentinel);

        self.secondary.reset_metrics();
        let mut out = Vec::new();
        let matches = |key: &String| key.starts_with(low.as_str());
        self.secondary
            .range_apply_while(&low, &high, matches, |key, bucket| {
                if !matches(key) {
                    return;
                }
                out.extend(bucket.iter().filter_map(|&p| self.resolve(p)));
            });
        let comparisons = self.secondary.comparisons();
        self.stats.record_prefix_scan(comparisons);

        trace!(prefix = %low, comparisons, hits = out.len(), "prefix_by_secondary");
        Traced::new(out, comparisons)
    }

    /// Returns the live record at `position`.
    pub fn get(&self, position: Position) -> Option<&R> {
        self.heap.live(position)
    }

    /// Returns whether the slot at `position` is tombstoned, or `None` if
    /// the position was never assigned.
    pub fn is_deleted(&self, position: Position) -> Option<bool> {
        self.heap.slot(position).map(|slot| slot.deleted)
    }

    /// Returns the number of heap slots, tombstoned ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if nothing was ever inserted.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of live records.
    pub fn live_count(&self) -> usize {
        self.iter_live().count()
    }

    /// Iterates over live records in heap order.
    pub fn iter_live(&self) -> impl Iterator<Item = (Position, &R)> {
        self.heap
            .iter()
            .filter_map(|(position, slot)| slot.live().map(|record| (position, record)))
    }

    /// Rebuilds both indexes from the heap.
    ///
    /// Live slots are replayed in position order with the same
    /// last-writer-wins rule as [`insert_record`](Self::insert_record). A
    /// shadowed record whose newer twin has since been deleted becomes
    /// reachable by key again.
    pub fn rebuild_indexes(&mut self) {
        let mut unique = OrderedIndexTree::new();
        let mut secondary: OrderedIndexTree<String, Vec<Position>> = OrderedIndexTree::new();

        for (position, record) in self.iter_live() {
            unique.insert(record.key().clone(), position);
            let folded = self.fold(record.secondary());
            match secondary.find_mut(&folded) {
                Some(bucket) => bucket.push(position),
                None => {
                    secondary.insert(folded, vec![position]);
                }
            }
        }

        debug!(
            unique = unique.len(),
            secondary = secondary.len(),
            "indexes rebuilt"
        );
        self.unique = unique;
        self.secondary = secondary;
    }

    /// Checks heap and index consistency.
    ///
    /// Does not touch the comparison counters.
    pub fn verify(&self) -> EngineResult<VerifyReport> {
        let mut report = VerifyReport::default();
        let mut reachable = vec![false; self.heap.len()];

        for (key, &position) in self.unique.scan_ordered() {
            let slot = self.heap.slot(position).ok_or_else(|| {
                EngineError::inconsistency("unique", format!("{key:?} -> {position} is past the heap"))
            })?;
            if slot.deleted {
                return Err(EngineError::inconsistency(
                    "unique",
                    format!("{key:?} -> {position} is tombstoned"),
                ));
            }
            if slot.record.key() != key {
                return Err(EngineError::inconsistency(
                    "unique",
                    format!("{key:?} -> {position} holds {:?}", slot.record.key()),
                ));
            }
            reachable[position.as_usize()] = true;
            report.unique_entries += 1;
        }

        let mut bucketed = 0;
        for (key, bucket) in self.secondary.scan_ordered() {
            if bucket.is_empty() {
                return Err(EngineError::inconsistency(
                    "secondary",
                    format!("empty bucket for {key:?}"),
                ));
            }
            if bucket.windows(2).any(|w| w[0] >= w[1]) {
                return Err(EngineError::inconsistency(
                    "secondary",
                    format!("bucket for {key:?} is out of insertion order"),
                ));
            }
            for &position in bucket {
                let record = self.heap.live(position).ok_or_else(|| {
                    EngineError::inconsistency(
                        "secondary",
                        format!("{key:?} holds dead or missing {position}"),
                    )
                })?;
                if self.fold(record.secondary()) != *key {
                    return Err(EngineError::inconsistency(
                        "secondary",
                        format!("{position} filed under {key:?}"),
                    ));
                }
            }
            bucketed += bucket.len();
            report.secondary_keys += 1;
        }

        for (position, slot) in self.heap.iter() {
            if slot.deleted {
                report.deleted_records += 1;
            } else {
                report.live_records += 1;
                if !reachable[position.as_usize()] {
                    report.unreachable_by_key += 1;
                }
            }
        }

        if bucketed != report.live_records {
            return Err(EngineError::inconsistency(
                "secondary",
                format!(
                    "{bucketed} bucketed positions for {} live records",
                    report.live_records
                ),
            ));
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::CaseFolding;
    use crate::record::BasicRecord;

    fn engine_with(rows: &[(i64, &str)]) -> StorageEngine<BasicRecord> {
        let mut engine = StorageEngine::new();
        for &(key, name) in rows {
            engine.insert_record(BasicRecord::new(key, name));
        }
        engine
    }

    fn keys(records: &[&BasicRecord]) -> Vec<i64> {
        records.iter().map(|r| r.key).collect()
    }

    #[test]
    fn insert_returns_sequential_positions() {
        let mut engine = StorageEngine::new();
        assert_eq!(engine.insert_record(BasicRecord::new(3, "Lee")), Position::new(0));
        assert_eq!(engine.insert_record(BasicRecord::new(1, "Lee")), Position::new(1));
        assert_eq!(engine.len(), 2);
        assert_eq!(engine.live_count(), 2);
    }

    #[test]
    fn find_and_range_by_key() {
        let engine = engine_with(&[(3, "Lee"), (1, "Lee"), (2, "Kim")]);

        let found = engine.find_by_key(&2);
        assert_eq!(found.value.map(|r| r.name.as_str()), Some("Kim"));
        assert!(found.comparisons > 0);

        let ranged = engine.range_by_key(&1, &2);
        assert_eq!(keys(&ranged.value), vec![1, 2]);
    }

    #[test]
    fn miss_still_reports_comparisons() {
        let engine = engine_with(&[(3, "Lee"), (1, "Lee")]);
        let missing = engine.find_by_key(&9);
        assert!(missing.value.is_none());
        assert_eq!(missing.comparisons, 1);

        let empty: StorageEngine<BasicRecord> = StorageEngine::new();
        assert_eq!(empty.find_by_key(&1).comparisons, 0);
    }

    #[test]
    fn prefix_is_case_insensitive() {
        let engine = engine_with(&[(5, "Smith"), (6, "smith"), (7, "Smythe")]);

        assert_eq!(keys(&engine.prefix_by_secondary("sm").value), vec![5, 6, 7]);
        assert_eq!(keys(&engine.prefix_by_secondary("smi").value), vec![5, 6]);
        assert_eq!(keys(&engine.prefix_by_secondary("SMI").value), vec![5, 6]);
        assert!(engine.prefix_by_secondary("smz").value.is_empty());
    }

    #[test]
    fn prefix_orders_by_key_then_insertion() {
        let engine = engine_with(&[(1, "Young"), (2, "Adams"), (3, "young"), (4, "Abbot")]);
        assert_eq!(keys(&engine.prefix_by_secondary("").value), vec![4, 2, 1, 3]);
        assert_eq!(keys(&engine.prefix_by_secondary("a").value), vec![4, 2]);
    }

    #[test]
    fn delete_tombstones_and_detaches() {
        let mut engine = engine_with(&[(10, "X")]);

        assert!(engine.delete_by_id(&10));
        assert!(!engine.delete_by_id(&10));
        assert!(engine.find_by_key(&10).value.is_none());
        assert!(engine.prefix_by_secondary("x").value.is_empty());
        assert_eq!(engine.is_deleted(Position::new(0)), Some(true));
        assert_eq!(engine.len(), 1);
        assert!(engine.secondary_index().is_empty());
        assert!(engine.unique_index().is_empty());
    }

    #[test]
    fn delete_keeps_rest_of_bucket() {
        let mut engine = engine_with(&[(1, "Lee"), (2, "LEE"), (3, "lee")]);
        assert!(engine.delete_by_id(&2));

        let bucket = engine.secondary_index().find(&"lee".to_string()).cloned();
        assert_eq!(bucket, Some(vec![Position::new(0), Position::new(2)]));
        assert_eq!(keys(&engine.prefix_by_secondary("lee").value), vec![1, 3]);
        assert_eq!(keys(&engine.range_by_key(&1, &3).value), vec![1, 3]);
    }

    #[test]
    fn delete_absent_key() {
        let mut engine = engine_with(&[(1, "Lee")]);
        assert!(!engine.delete_by_id(&2));
        let stats = engine.stats();
        assert_eq!(stats.deletes, 0);
        assert_eq!(stats.failed_deletes, 1);
    }

    #[test]
    fn reinserting_a_key_shadows_the_old_slot() {
        let mut engine = engine_with(&[(1, "Old")]);
        let newer = engine.insert_record(BasicRecord::new(1, "New"));

        assert_eq!(newer, Position::new(1));
        assert_eq!(
            engine.find_by_key(&1).value.map(|r| r.name.as_str()),
            Some("New")
        );
        // The old record is still live and still prefix-searchable.
        assert_eq!(engine.get(Position::new(0)).map(|r| r.name.as_str()), Some("Old"));
        assert_eq!(keys(&engine.prefix_by_secondary("old").value), vec![1]);
        assert_eq!(engine.stats().shadowed_keys, 1);

        // Deleting by key only reaches the newer slot.
        assert!(engine.delete_by_id(&1));
        assert!(!engine.delete_by_id(&1));
        assert_eq!(engine.is_deleted(Position::new(0)), Some(false));

        let report = engine.verify().unwrap();
        assert_eq!(report.live_records, 1);
        assert_eq!(report.unreachable_by_key, 1);
    }

    #[test]
    fn try_insert_rejects_live_duplicate() {
        let mut engine = StorageEngine::new();
        engine.try_insert_record(BasicRecord::new(1, "Lee")).unwrap();

        let err = engine
            .try_insert_record(BasicRecord::new(1, "Kim"))
            .unwrap_err();
        assert_eq!(err, EngineError::duplicate_key(1_i64, 0));
        assert_eq!(engine.len(), 1);

        assert!(engine.delete_by_id(&1));
        assert_eq!(
            engine.try_insert_record(BasicRecord::new(1, "Kim")).unwrap(),
            Position::new(1)
        );
    }

    #[test]
    fn repeated_lookups_cost_the_same() {
        let engine = engine_with(&[(50, "a"), (30, "b"), (70, "c"), (60, "d")]);
        let first = engine.find_by_key(&60).comparisons;
        let second = engine.find_by_key(&60).comparisons;
        assert_eq!(first, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn stats_track_queries() {
        let engine = engine_with(&[(2, "b"), (1, "a")]);
        engine.find_by_key(&1);
        engine.range_by_key(&1, &2);
        engine.prefix_by_secondary("a");

        let stats = engine.stats();
        assert_eq!(stats.inserts, 2);
        assert_eq!(stats.point_lookups, 1);
        assert_eq!(stats.range_scans, 1);
        assert_eq!(stats.prefix_scans, 1);
        assert!(stats.comparisons >= 3);
    }

    #[test]
    fn unicode_folding() {
        let config = EngineConfig::new().case_folding(CaseFolding::Unicode);
        let mut engine = StorageEngine::with_config(config).unwrap();
        engine.insert_record(BasicRecord::new(1, "ÉCOLE"));
        assert_eq!(keys(&engine.prefix_by_secondary("éc").value), vec![1]);

        let mut ascii = StorageEngine::new();
        ascii.insert_record(BasicRecord::new(1, "ÉCOLE"));
        assert!(ascii.prefix_by_secondary("éc").value.is_empty());
        assert_eq!(keys(&ascii.prefix_by_secondary("Éc").value), vec![1]);
    }

    #[test]
    fn unicode_folding_is_position_independent() {
        let config = EngineConfig::new().case_folding(CaseFolding::Unicode);
        let mut engine = StorageEngine::with_config(config).unwrap();
        engine.insert_record(BasicRecord::new(1, "ΟΔΟΣΑ"));

        assert_eq!(keys(&engine.prefix_by_secondary("οδοσ").value), vec![1]);
        assert_eq!(keys(&engine.prefix_by_secondary("ΟΔΟΣ").value), vec![1]);
        assert_eq!(keys(&engine.prefix_by_secondary("ΟδΟς").value), Vec::<i64>::new());
        assert!(engine.verify().is_ok());
    }

    #[test]
    fn prefix_finds_keys_past_the_sentinel() {
        let engine = engine_with(&[
            (1, "a\u{10FFFF}b"),
            (2, "a"),
            (3, "ab"),
            (4, "b"),
            (5, "\u{10FFFF}"),
        ]);
        assert_eq!(keys(&engine.prefix_by_secondary("a").value), vec![2, 3, 1]);
        assert_eq!(
            keys(&engine.prefix_by_secondary("a\u{10FFFF}").value),
            vec![1]
        );
        assert_eq!(
            keys(&engine.prefix_by_secondary("").value),
            vec![2, 3, 1, 4, 5]
        );
    }

    #[test]
    fn narrow_sentinel_still_finds_wider_suffix() {
        let config = EngineConfig::new().prefix_sentinel('\u{7f}');
        let mut engine = StorageEngine::with_config(config).unwrap();
        engine.insert_record(BasicRecord::new(1, "smith"));
        engine.insert_record(BasicRecord::new(2, "smé"));
        engine.insert_record(BasicRecord::new(3, "sn"));

        assert_eq!(keys(&engine.prefix_by_secondary("sm").value), vec![1, 2]);

        let wide = engine_with(&[(1, "smith"), (2, "smé"), (3, "sn")]);
        assert_eq!(keys(&wide.prefix_by_secondary("sm").value), vec![1, 2]);
    }

    #[test]
    fn invalid_config_rejected() {
        let config = EngineConfig::new().prefix_sentinel('a');
        assert!(StorageEngine::<BasicRecord>::with_config(config).is_err());
    }

    #[test]
    fn rebuild_matches_incremental_state() {
        let mut engine = engine_with(&[(4, "Kim"), (2, "Lee"), (9, "kim"), (1, "Park")]);
        engine.delete_by_id(&9);

        let before: Vec<i64> = keys(&engine.range_by_key(&0, &100).value);
        let before_prefix = keys(&engine.prefix_by_secondary("k").value);
        engine.rebuild_indexes();

        assert_eq!(keys(&engine.range_by_key(&0, &100).value), before);
        assert_eq!(keys(&engine.prefix_by_secondary("k").value), before_prefix);
        assert!(engine.verify().is_ok());
    }

    #[test]
    fn rebuild_resurfaces_shadowed_record() {
        let mut engine = engine_with(&[(1, "Old"), (1, "New")]);
        assert!(engine.delete_by_id(&1));
        assert!(engine.find_by_key(&1).value.is_none());

        engine.rebuild_indexes();
        assert_eq!(
            engine.find_by_key(&1).value.map(|r| r.name.as_str()),
            Some("Old")
        );
        assert_eq!(engine.verify().unwrap().unreachable_by_key, 0);
    }

    #[test]
    fn verify_counts_state() {
        let mut engine = engine_with(&[(1, "a"), (2, "b"), (3, "b")]);
        engine.delete_by_id(&1);

        let report = engine.verify().unwrap();
        assert_eq!(
            report,
            VerifyReport {
                live_records: 2,
                deleted_records: 1,
                unique_entries: 2,
                secondary_keys: 1,
                unreachable_by_key: 0,
            }
        );
    }
}
