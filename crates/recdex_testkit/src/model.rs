//! Linear-scan reference model.
//!
//! [`LinearStore`] answers the same queries as
//! [`StorageEngine`](recdex_core::StorageEngine) by scanning a flat vector.
//! It serves two purposes: an oracle for property tests, and the unindexed
//! baseline that index comparison counts are measured against.
//!
//! Comparisons are counted one per slot whose key or secondary key is
//! examined, so a point lookup over `n` live records costs up to `n`.

use recdex_core::{CaseFolding, Record};

#[derive(Debug, Clone)]
struct Entry<R> {
    record: R,
    deleted: bool,
    /// False once a later insert reused the key.
    reachable: bool,
}

/// Flat, unindexed record store with the engine's semantics.
#[derive(Debug, Clone)]
pub struct LinearStore<R: Record> {
    entries: Vec<Entry<R>>,
    folding: CaseFolding,
}

impl<R: Record> Default for LinearStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> LinearStore<R> {
    /// Creates an empty store with ASCII case folding.
    #[must_use]
    pub fn new() -> Self {
        Self::with_folding(CaseFolding::Ascii)
    }

    /// Creates an empty store with the given folding.
    #[must_use]
    pub fn with_folding(folding: CaseFolding) -> Self {
        Self {
            entries: Vec::new(),
            folding,
        }
    }

    fn indexed(&self, key: &R::Key) -> (Option<usize>, u64) {
        let mut comparisons = 0;
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.deleted || !entry.reachable {
                continue;
            }
            comparisons += 1;
            if entry.record.key() == key {
                return (Some(i), comparisons);
            }
        }
        (None, comparisons)
    }

    /// Appends a record, shadowing any reachable record with the same key.
    pub fn insert(&mut self, record: R) -> usize {
        if let (Some(i), _) = self.indexed(record.key()) {
            self.entries[i].reachable = false;
        }
        self.entries.push(Entry {
            record,
            deleted: false,
            reachable: true,
        });
        self.entries.len() - 1
    }

    /// Tombstones the reachable record with `key`.
    pub fn delete(&mut self, key: &R::Key) -> bool {
        match self.indexed(key) {
            (Some(i), _) => {
                self.entries[i].deleted = true;
                true
            }
            (None, _) => false,
        }
    }

    /// Finds the reachable live record with `key`.
    pub fn find(&self, key: &R::Key) -> (Option<&R>, u64) {
        let (index, comparisons) = self.indexed(key);
        (index.map(|i| &self.entries[i].record), comparisons)
    }

    /// Reachable live records with `lo <= key <= hi`, ascending.
    pub fn range(&self, lo: &R::Key, hi: &R::Key) -> (Vec<&R>, u64) {
        let mut comparisons = 0;
        let mut out: Vec<&R> = Vec::new();
        for entry in &self.entries {
            if entry.deleted || !entry.reachable {
                continue;
            }
            comparisons += 1;
            let key = entry.record.key();
            if key >= lo && key <= hi {
                out.push(&entry.record);
            }
        }
        out.sort_by(|a, b| a.key().cmp(b.key()));
        (out, comparisons)
    }

    /// Live records whose folded secondary key starts with the folded
    /// prefix, ordered by folded key then insertion.
    pub fn prefix(&self, prefix: &str) -> (Vec<&R>, u64) {
        let low = self.folding.fold(prefix);
        let mut comparisons = 0;
        let mut out: Vec<(String, &R)> = Vec::new();
        for entry in &self.entries {
            if entry.deleted {
                continue;
            }
            comparisons += 1;
            let folded = self.folding.fold(entry.record.secondary());
            if folded.starts_with(low.as_str()) {
                out.push((folded, &entry.record));
            }
        }
        // Stable: ties keep insertion order.
        out.sort_by(|a, b| a.0.cmp(&b.0));
        (out.into_iter().map(|(_, r)| r).collect(), comparisons)
    }

    /// Number of live records.
    pub fn live_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.deleted).count()
    }
}
