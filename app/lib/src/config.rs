//! Configuration types for the ALE exchange library.
//!
//! This module provides the configuration struct controlling how strictly
//! the parser holds a document to the ALE specification.

/// Configuration for the ALE parser.
///
/// Controls the optional validation passes run at section transitions.
/// The required heading keys, required column names, and the 64-entry
/// ceilings themselves are specification constants and are not
/// configurable; see [`crate::ale::REQUIRED_HEADINGS`] and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserConfig {
    /// Enforce the ALE specification's required fields.
    ///
    /// When set, the parser verifies at the Heading/Column transition that
    /// all required heading keys are present and that no more than 64
    /// heading entries exist, and at the Column/Data transition that all
    /// required column names are present and that no more than 64 columns
    /// exist.
    ///
    /// Default: false
    pub strict: bool,

    /// Reject heading lines that repeat an earlier key.
    ///
    /// The ALE format historically lets a later heading entry silently
    /// overwrite an earlier one with the same key. When set, a repeated
    /// key is reported as a syntax error at the repeated line instead.
    ///
    /// Default: false (last write wins)
    pub reject_duplicate_headings: bool,
}

impl ParserConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable strict specification validation.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Enable or disable rejection of duplicate heading keys.
    pub fn with_reject_duplicate_headings(mut self, reject: bool) -> Self {
        self.reject_duplicate_headings = reject;
        self
    }
}
