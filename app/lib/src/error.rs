//! Error types for the ALE exchange library.
//!
//! This module defines all error types that can occur while resolving a
//! source and parsing or exporting an ALE document.

use thiserror::Error;

/// Main error type for the ALE exchange library.
///
/// All operations that can fail return `Result<T, AleError>`.
#[derive(Debug, Error)]
pub enum AleError {
    /// No source has been set on the parser.
    ///
    /// Raised before any line is read when `parse` is called on a parser
    /// without a source.
    #[error("Source not set, use set_source first")]
    SourceNotSet,

    /// A section-structure or line-format violation in the ALE text.
    ///
    /// Carries the source name and the 1-based line number where the
    /// violation was detected. The rendered message is a single line,
    /// suitable for direct display.
    #[error("<{source_name}:{line:03}> {message}")]
    Syntax {
        /// Diagnostic name of the source being parsed
        source_name: String,
        /// Line number where the violation occurred (1-indexed)
        line: usize,
        /// Description of the violation
        message: String,
    },

    /// Error building the JSON view of a document.
    ///
    /// Wraps errors from the `serde_json` crate.
    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error building the CSV view of a document.
    ///
    /// Wraps errors from the `csv` crate.
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    ///
    /// Wraps errors from standard I/O operations, typically while reading
    /// a file-backed source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using `AleError`.
pub type Result<T> = std::result::Result<T, AleError>;
