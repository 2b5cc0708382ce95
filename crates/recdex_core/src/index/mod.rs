//! Ordered index structures.
//!
//! The engine keeps two instances of [`OrderedIndexTree`] over the heap:
//!
//! - a unique index: record key → heap position
//! - a secondary index: folded secondary key → bucket of positions
//!
//! Indexes only ever hold positions that were handed out by the heap, so
//! dereferencing them never goes out of bounds under correct maintenance.

mod tree;

pub use tree::OrderedIndexTree;
