//! Thread-shareable engine handle.

use crate::config::EngineConfig;
use crate::engine::{StorageEngine, VerifyReport};
use crate::error::EngineResult;
use crate::record::Record;
use crate::stats::StatsSnapshot;
use crate::types::{Position, Traced};
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle to one engine guarded by a single exclusive lock.
///
/// Every operation, queries included, takes the lock: tree traversal updates
/// the comparison counters, and heap and index mutation are not atomic with
/// respect to each other. Query results are cloned out before the lock is
/// released.
///
/// # Example
///
/// ```rust
/// use recdex_core::{BasicRecord, SharedEngine};
///
/// let engine: SharedEngine<BasicRecord> = SharedEngine::new();
/// let writer = engine.clone();
/// std::thread::spawn(move || {
///     writer.insert_record(BasicRecord::new(1, "Lee"));
/// })
/// .join()
/// .unwrap();
///
/// assert!(engine.find_by_key(&1).value.is_some());
/// ```
pub struct SharedEngine<R: Record> {
    inner: Arc<Mutex<StorageEngine<R>>>,
}

impl<R: Record> Clone for SharedEngine<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Record> Default for SharedEngine<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> From<StorageEngine<R>> for SharedEngine<R> {
    fn from(engine: StorageEngine<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }
}

impl<R: Record> SharedEngine<R> {
    /// Creates a handle to an empty engine.
    #[must_use]
    pub fn new() -> Self {
        StorageEngine::new().into()
    }

    /// Creates a handle to an empty engine after validating `config`.
    pub fn with_config(config: EngineConfig) -> EngineResult<Self> {
        Ok(StorageEngine::with_config(config)?.into())
    }

    /// Runs `f` with exclusive access to the engine.
    pub fn with<T>(&self, f: impl FnOnce(&mut StorageEngine<R>) -> T) -> T {
        f(&mut self.inner.lock())
    }

    /// See [`StorageEngine::insert_record`].
    pub fn insert_record(&self, record: R) -> Position {
        self.inner.lock().insert_record(record)
    }

    /// See [`StorageEngine::try_insert_record`].
    pub fn try_insert_record(&self, record: R) -> EngineResult<Position> {
        self.inner.lock().try_insert_record(record)
    }

    /// See [`StorageEngine::delete_by_id`].
    pub fn delete_by_id(&self, key: &R::Key) -> bool {
        self.inner.lock().delete_by_id(key)
    }

    /// See [`StorageEngine::stats`].
    pub fn stats(&self) -> StatsSnapshot {
        self.inner.lock().stats()
    }

    /// See [`StorageEngine::verify`].
    pub fn verify(&self) -> EngineResult<VerifyReport> {
        self.inner.lock().verify()
    }
}

impl<R: Record + Clone> SharedEngine<R> {
    /// See [`StorageEngine::find_by_key`].
    pub fn find_by_key(&self, key: &R::Key) -> Traced<Option<R>> {
        self.inner.lock().find_by_key(key).map(|r| r.cloned())
    }

    /// See [`StorageEngine::range_by_key`].
    pub fn range_by_key(&self, lo: &R::Key, hi: &R::Key) -> Traced<Vec<R>> {
        self.inner
            .lock()
            .range_by_key(lo, hi)
            .map(|records| records.into_iter().cloned().collect())
    }

    /// See [`StorageEngine::prefix_by_secondary`].
    pub fn prefix_by_secondary(&self, prefix: &str) -> Traced<Vec<R>> {
        self.inner
            .lock()
            .prefix_by_secondary(prefix)
            .map(|records| records.into_iter().cloned().collect())
    }
}
