//! Input sources for the ALE parser.
//!
//! The parser core only ever sees an already-resolved sequence of lines.
//! This module defines the closed set of input variants — a file path, an
//! in-memory string, or a pre-split line sequence — and resolves each into
//! a diagnostic name plus LF-normalized lines exactly once, at the
//! boundary.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Default diagnostic name for in-memory text sources.
pub const STRING_SOURCE_NAME: &str = "<string>";

/// Default diagnostic name for pre-split line sources.
pub const STREAM_SOURCE_NAME: &str = "<stream>";

/// An input to the ALE parser.
///
/// Path and text variants are newline-normalized during resolution, before
/// the parser sees any line. Line-sequence inputs are passed through
/// untouched; callers handing over pre-split lines are responsible for
/// normalizing `\r\n`/`\r` variants themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Read the document from a file on disk.
    Path(PathBuf),

    /// Parse an in-memory string.
    Text {
        /// Diagnostic name override; defaults to `<string>`
        name: Option<String>,
        /// The full document text
        text: String,
    },

    /// Parse an already-split sequence of lines.
    ///
    /// Lines may carry trailing newline characters; the parser strips them.
    Lines {
        /// Diagnostic name override; defaults to `<stream>`
        name: Option<String>,
        /// The document lines, in input order
        lines: Vec<String>,
    },
}

impl Source {
    /// Create a file-backed source.
    pub fn path<P: Into<PathBuf>>(path: P) -> Self {
        Source::Path(path.into())
    }

    /// Create an in-memory text source.
    pub fn text<S: Into<String>>(text: S) -> Self {
        Source::Text {
            name: None,
            text: text.into(),
        }
    }

    /// Create a source from pre-split lines.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Source::Lines {
            name: None,
            lines: lines.into_iter().map(|l| l.into()).collect(),
        }
    }

    /// Create a line source by draining a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading from the underlying stream fails.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        Ok(Source::Lines { name: None, lines })
    }

    /// Override the diagnostic name used in error messages.
    ///
    /// Has no effect on path sources, which always report the path itself.
    pub fn with_name<S: Into<String>>(mut self, source_name: S) -> Self {
        match &mut self {
            Source::Path(_) => {}
            Source::Text { name, .. } | Source::Lines { name, .. } => {
                *name = Some(source_name.into());
            }
        }
        self
    }

    /// The diagnostic name this source reports in error messages.
    pub fn name(&self) -> String {
        match self {
            Source::Path(path) => path.display().to_string(),
            Source::Text { name, .. } => name
                .clone()
                .unwrap_or_else(|| STRING_SOURCE_NAME.to_string()),
            Source::Lines { name, .. } => name
                .clone()
                .unwrap_or_else(|| STREAM_SOURCE_NAME.to_string()),
        }
    }

    /// Resolve this source into a name and a sequence of lines.
    ///
    /// Path and text inputs are newline-normalized here; line inputs are
    /// returned as given.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a file-backed source cannot be read.
    pub fn resolve(&self) -> Result<ResolvedSource> {
        let lines = match self {
            Source::Path(path) => split_lines(&normalize_newlines(&read_path(path)?)),
            Source::Text { text, .. } => split_lines(&normalize_newlines(text)),
            Source::Lines { lines, .. } => lines.clone(),
        };
        Ok(ResolvedSource {
            name: self.name(),
            lines,
        })
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Source::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::Path(path)
    }
}

/// A source resolved into its diagnostic name and lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    /// Diagnostic name used in error messages.
    pub name: String,
    /// Document lines in input order, newline-stripped for path and text
    /// sources.
    pub lines: Vec<String>,
}

/// Normalize line endings to bare LF.
///
/// `\r\n` and `\n\r` pairs collapse to `\n` first, then any remaining bare
/// `\r` becomes `\n`.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace("\n\r", "\n")
        .replace('\r', "\n")
}

fn read_path(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(|l| l.to_string()).collect()
}
