//! Scanner configuration.

/// How the number scanner recovers when a lookahead branch fails.
///
/// Two branches read past the digit run before they know whether they match:
/// the base suffix (`x08`, `x16`) and the fractional part (`.` plus digits).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Backtrack {
    /// Characters read by a failed branch stay consumed. A rejected base
    /// suffix is dropped from the stream and scanning falls through to the
    /// fractional check; a `.` without a following digit turns the literal
    /// into an `ERROR` and the character after the `.` is dropped.
    #[default]
    Legacy,
    /// Characters read by a failed branch are pushed back, so `89x08` scans
    /// as `89` then `x08`, and `3.a` as `3`, `.`, `a`.
    Restore,
}

/// Options for a [`LexicalAnalyzer`](crate::LexicalAnalyzer).
///
/// # Example
///
/// ```
/// use picoc_lex::{Backtrack, ScanConfig};
///
/// let config = ScanConfig::new().with_backtrack(Backtrack::Restore);
/// assert_eq!(config.backtrack, Backtrack::Restore);
/// assert_eq!(ScanConfig::default().backtrack, Backtrack::Legacy);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ScanConfig {
    /// Recovery strategy for failed numeric lookahead.
    pub backtrack: Backtrack,
}

impl ScanConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backtracking strategy.
    pub fn with_backtrack(mut self, backtrack: Backtrack) -> Self {
        self.backtrack = backtrack;
        self
    }
}
