//! Core type definitions for recdex.

use std::fmt;

/// Stable address of a record slot in the heap.
///
/// Positions are assigned in increasing insertion order and are never
/// reused or reassigned, even after the record is tombstoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub usize);

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw slot index.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pos:{}", self.0)
    }
}

/// A query result paired with the number of key comparisons it cost.
///
/// The count is taken from the index tree touched by the query, reset
/// right before the traversal and read right after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traced<T> {
    /// The query result.
    pub value: T,
    /// Key-ordering comparisons performed by the traversal.
    pub comparisons: u64,
}

impl<T> Traced<T> {
    /// Wraps a value with its comparison count.
    #[must_use]
    pub const fn new(value: T, comparisons: u64) -> Self {
        Self { value, comparisons }
    }

    /// Splits into `(value, comparisons)`.
    #[must_use]
    pub fn into_parts(self) -> (T, u64) {
        (self.value, self.comparisons)
    }

    /// Maps the value, keeping the comparison count.
    pub fn map<U, F>(self, f: F) -> Traced<U>
    where
        F: FnOnce(T) -> U,
    {
        Traced {
            value: f(self.value),
            comparisons: self.comparisons,
        }
    }
}
