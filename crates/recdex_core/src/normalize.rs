//! Case folding for secondary keys.
//!
//! The same folding is applied when a record enters the secondary index and
//! when a prefix query is normalized, so matching is case-insensitive.

/// How secondary keys are case-folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseFolding {
    /// ASCII lowercase. Length-preserving; non-ASCII characters pass
    /// through untouched.
    #[default]
    Ascii,
    /// Unicode lowercase, applied one character at a time. Not
    /// length-preserving (`'İ'` folds to two characters).
    ///
    /// Each character folds the same way wherever it appears, so the fold of
    /// a prefix is always a prefix of the fold of the whole key. Word-final
    /// `'Σ'` therefore folds to `'σ'`, never `'ς'`.
    Unicode,
}

impl CaseFolding {
    /// Folds `s` into its normalized form.
    #[must_use]
    pub fn fold(self, s: &str) -> String {
        match self {
            Self::Ascii => s.to_ascii_lowercase(),
            Self::Unicode => s.chars().flat_map(char::to_lowercase).collect(),
        }
    }
}
