//! # recdex Core
//!
//! A small storage engine for studying how indexes speed up lookups over a
//! flat record store.
//!
//! This crate provides:
//! - An append-only record heap with logical (tombstone) deletion
//! - [`OrderedIndexTree`], a binary search tree that counts key comparisons
//! - [`StorageEngine`], which keeps a unique-key index and a case-insensitive
//!   secondary index over the heap and answers exact, range and prefix
//!   queries together with their comparison cost
//! - [`SharedEngine`], a lock-guarded handle for multi-threaded embedders
//!
//! ## Example
//!
//! ```rust
//! use recdex_core::{BasicRecord, StorageEngine};
//!
//! let mut engine = StorageEngine::new();
//! for (key, name) in [(3, "Lee"), (1, "Lee"), (2, "Kim")] {
//!     engine.insert_record(BasicRecord::new(key, name));
//! }
//!
//! let hit = engine.find_by_key(&2);
//! assert_eq!(hit.value.map(|r| r.name.as_str()), Some("Kim"));
//!
//! let range = engine.range_by_key(&1, &2);
//! let keys: Vec<i64> = range.value.iter().map(|r| r.key).collect();
//! assert_eq!(keys, vec![1, 2]);
//! println!("range scan cost {} comparisons", range.comparisons);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod heap;
mod index;
mod normalize;
mod record;
mod shared;
mod stats;
mod types;

pub use config::EngineConfig;
pub use engine::{StorageEngine, VerifyReport};
pub use error::{EngineError, EngineResult};
pub use heap::{Heap, Slot};
pub use index::OrderedIndexTree;
pub use normalize::CaseFolding;
pub use record::{BasicRecord, Record};
pub use shared::SharedEngine;
pub use stats::{EngineStats, StatsSnapshot};
pub use types::{Position, Traced};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
