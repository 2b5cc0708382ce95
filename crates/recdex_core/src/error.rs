//! Error types for recdex core.
//!
//! Expected outcomes of the engine API ("not found", "nothing deleted") are
//! plain `Option`/`bool` values. Errors are reserved for the strict insert
//! path, configuration validation, and invariant verification.

use thiserror::Error;

/// Result type for core operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur in recdex core operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A live record already owns the unique key.
    #[error("duplicate key {key} already stored at position {position}")]
    DuplicateKey {
        /// Debug rendering of the conflicting key.
        key: String,
        /// Heap position of the live record holding the key.
        position: usize,
    },

    /// Heap and indexes disagree.
    #[error("index inconsistency in {index}: {message}")]
    IndexInconsistency {
        /// Which index failed verification.
        index: &'static str,
        /// Description of the violated invariant.
        message: String,
    },

    /// Configuration rejected by validation.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },
}

impl EngineError {
    /// Creates a duplicate key error.
    pub fn duplicate_key(key: impl std::fmt::Debug, position: usize) -> Self {
        Self::DuplicateKey {
            key: format!("{key:?}"),
            position,
        }
    }

    /// Creates an index inconsistency error.
    pub fn inconsistency(index: &'static str, message: impl Into<String>) -> Self {
        Self::IndexInconsistency {
            index,
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
