//! Engine configuration.

use crate::error::{EngineError, EngineResult};
use crate::normalize::CaseFolding;

/// Configuration for a [`StorageEngine`](crate::StorageEngine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Case folding applied to secondary keys and prefix queries.
    pub case_folding: CaseFolding,

    /// Character appended to a folded prefix to form the upper bound of a
    /// prefix scan.
    ///
    /// Keys up to the bound are found by ordinary range comparisons. Keys
    /// that start with the prefix but sort above the bound (including any
    /// key with `char::MAX` right after the prefix) are still returned: the
    /// scan keeps walking while the prefix matches, without counting those
    /// checks as comparisons. With a sentinel above every stored character,
    /// the whole scan is counted.
    pub prefix_sentinel: char,

    /// Number of heap slots to pre-allocate.
    pub initial_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            case_folding: CaseFolding::Ascii,
            prefix_sentinel: char::MAX,
            initial_capacity: 0,
        }
    }
}

impl EngineConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the case folding mode.
    #[must_use]
    pub const fn case_folding(mut self, folding: CaseFolding) -> Self {
        self.case_folding = folding;
        self
    }

    /// Sets the prefix scan sentinel.
    #[must_use]
    pub const fn prefix_sentinel(mut self, sentinel: char) -> Self {
        self.prefix_sentinel = sentinel;
        self
    }

    /// Sets the number of pre-allocated heap slots.
    #[must_use]
    pub const fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Checks that the configuration is usable.
    ///
    /// The sentinel has to sort above every folded ASCII letter, so that
    /// ordinary names stay inside the counted part of a prefix scan.
    pub fn validate(&self) -> EngineResult<()> {
        if self.prefix_sentinel <= 'z' {
            return Err(EngineError::invalid_config(format!(
                "prefix sentinel {:?} must sort above 'z'",
                self.prefix_sentinel
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.case_folding, CaseFolding::Ascii);
        assert_eq!(config.prefix_sentinel, char::MAX);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_pattern() {
        let config = EngineConfig::new()
            .case_folding(CaseFolding::Unicode)
            .prefix_sentinel('\u{7f}')
            .initial_capacity(128);

        assert_eq!(config.case_folding, CaseFolding::Unicode);
        assert_eq!(config.prefix_sentinel, '\u{7f}');
        assert_eq!(config.initial_capacity, 128);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn low_sentinel_rejected() {
        let config = EngineConfig::new().prefix_sentinel('m');
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig { .. })
        ));
    }
}
