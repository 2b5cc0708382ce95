//! The record contract the engine indexes.

use std::fmt::Debug;

/// A value stored in the heap.
///
/// Both keys must stay fixed for the lifetime of the record: the engine
/// reads them at insert time and again when deleting or verifying, and
/// assumes they have not changed. The tombstone flag lives in the heap slot,
/// not in the record, so only the engine can set it.
pub trait Record {
    /// Unique ordered key type.
    type Key: Ord + Clone + Debug;

    /// Returns the unique key.
    fn key(&self) -> &Self::Key;

    /// Returns the string indexed by the case-insensitive secondary index.
    fn secondary(&self) -> &str;
}

/// Minimal record with an integer key and a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicRecord {
    /// Unique key.
    pub key: i64,
    /// Name used by the secondary index.
    pub name: String,
}

impl BasicRecord {
    /// Creates a new record.
    pub fn new(key: i64, name: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
        }
    }
}

impl Record for BasicRecord {
    type Key = i64;

    fn key(&self) -> &i64 {
        &self.key
    }

    fn secondary(&self) -> &str {
        &self.name
    }
}
