//! # recdex Testkit
//!
//! Test utilities for recdex.
//!
//! This crate provides:
//! - A richer record type, sample data, and scripted scenarios
//! - Property-based test generators using proptest
//! - A linear-scan reference model to check the engine against
//! - Golden test utilities for scenario outcomes
//! - Stress testing utilities for the shared engine
//!
//! ## Usage
//!
//! ```rust
//! use recdex_testkit::prelude::*;
//!
//! let engine = engine_with(roster());
//! let mut model = LinearStore::new();
//! for student in roster() {
//!     model.insert(student);
//! }
//! assert_eq!(engine.live_count(), model.live_count());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod golden;
pub mod logging;
pub mod model;
pub mod stress;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::golden::*;
    pub use crate::logging::init_tracing;
    pub use crate::model::LinearStore;
    pub use crate::stress::*;
}

pub use fixtures::*;
pub use generators::*;
pub use golden::*;
pub use logging::init_tracing;
pub use model::LinearStore;
pub use stress::*;
