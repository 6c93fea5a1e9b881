//! ALE document parser.
//!
//! This module implements the line-oriented state machine that recognizes
//! the Heading, Column, and Data sections of an ALE file and builds an
//! [`AleDocument`] from them.

use std::collections::HashMap;

use crate::config::ParserConfig;
use crate::error::{AleError, Result};
use crate::source::Source;

use super::document::AleDocument;

/// Heading keys every ALE document must carry, per the specification.
pub const REQUIRED_HEADINGS: [&str; 4] = ["FIELD_DELIM", "VIDEO_FORMAT", "TAPE", "FPS"];

/// Column names every ALE document must declare, per the specification.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Name", "Tracks", "Start", "End"];

/// Maximum number of heading entries the specification allows.
pub const MAX_HEADING_FIELDS: usize = 64;

/// Maximum number of columns the specification allows.
pub const MAX_COLUMNS: usize = 64;

/// The parse phase. Transitions are one-directional; no phase is revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    /// Before the `Heading` keyword has been seen.
    Init,
    /// Inside the Heading section, collecting key/value pairs.
    InHeading,
    /// Inside the Column section, expecting the column definition line.
    InColumns,
    /// Inside the Data section, collecting rows.
    InData,
}

/// ALE document parser.
///
/// Consumes a [`Source`] line by line and produces an [`AleDocument`], or
/// fails with a syntax error naming the offending line. A parser may be
/// reused sequentially for multiple sources via [`AleParser::set_source`];
/// each parse call builds its result from scratch.
///
/// ```
/// use ale_exchange::{AleParser, Source};
///
/// let text = "Heading\nFIELD_DELIM\tTABS\nColumn\nName\tTracks\nData\nCU Josh\tV\n";
/// let mut parser = AleParser::new();
/// parser.set_source(Source::text(text));
///
/// let doc = parser.parse()?;
/// assert_eq!(doc.columns, vec!["Name", "Tracks"]);
/// assert_eq!(doc.field(0, "Name"), Some("CU Josh"));
/// # Ok::<(), ale_exchange::AleError>(())
/// ```
pub struct AleParser {
    config: ParserConfig,
    source: Option<Source>,
}

impl AleParser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
            source: None,
        }
    }

    /// Create a new parser with the given configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// Set or replace the source to parse.
    pub fn set_source(&mut self, source: Source) {
        self.source = Some(source);
    }

    /// The diagnostic name of the current source, if one is set.
    pub fn source_name(&self) -> Option<String> {
        self.source.as_ref().map(Source::name)
    }

    /// Parse the current source into a document.
    ///
    /// # Errors
    ///
    /// Returns [`AleError::SourceNotSet`] if no source has been set, an
    /// I/O error if a file-backed source cannot be read, and a syntax
    /// error for any structural violation in the text.
    pub fn parse(&self) -> Result<AleDocument> {
        match &self.source {
            Some(source) => self.parse_source(source),
            None => Err(AleError::SourceNotSet),
        }
    }

    /// Parse the given source into a document, ignoring any stored source.
    pub fn parse_source(&self, source: &Source) -> Result<AleDocument> {
        let resolved = source.resolve()?;
        let mut scan = Scan::new(self.config, &resolved.name);
        for line in &resolved.lines {
            scan.feed(line)?;
        }
        scan.finish()
    }
}

impl Default for AleParser {
    fn default() -> Self {
        Self::new()
    }
}

/// State carried across lines of a single parse call.
///
/// Owns the document being built; on failure the partial document is
/// dropped with the scan, so the parser itself never holds half-parsed
/// state.
struct Scan<'a> {
    config: ParserConfig,
    source_name: &'a str,
    state: ParserState,
    line_no: usize,
    doc: AleDocument,
}

impl<'a> Scan<'a> {
    fn new(config: ParserConfig, source_name: &'a str) -> Self {
        Self {
            config,
            source_name,
            state: ParserState::Init,
            line_no: 0,
            doc: AleDocument::new(),
        }
    }

    /// Consume one input line and advance the state machine.
    fn feed(&mut self, line: &str) -> Result<()> {
        self.line_no += 1;

        // Section keywords are matched on the fully trimmed line; the
        // heading/column/data parsers split the raw newline-stripped line
        // so that spaces inside values survive.
        let raw = line.trim_end_matches('\n');
        let token = line.trim();

        self.state = match self.state {
            ParserState::Init => {
                if token == "Heading" {
                    ParserState::InHeading
                } else {
                    ParserState::Init
                }
            }
            ParserState::InHeading => {
                if token == "Column" {
                    if self.config.strict {
                        self.check_headings()?;
                    }
                    ParserState::InColumns
                } else {
                    if !token.is_empty() {
                        self.parse_heading(raw)?;
                    }
                    ParserState::InHeading
                }
            }
            ParserState::InColumns => {
                if token == "Data" {
                    if self.config.strict {
                        self.check_columns()?;
                    }
                    ParserState::InData
                } else {
                    if !token.is_empty() {
                        self.parse_column(raw)?;
                    }
                    ParserState::InColumns
                }
            }
            ParserState::InData => {
                if !token.is_empty() {
                    self.parse_data(raw)?;
                }
                ParserState::InData
            }
        };

        Ok(())
    }

    /// Check the terminal state and hand over the document.
    fn finish(self) -> Result<AleDocument> {
        let missing = match self.state {
            ParserState::InData => return Ok(self.doc),
            ParserState::Init => "Heading",
            ParserState::InHeading => "Columns",
            ParserState::InColumns => "Data",
        };
        Err(self.syntax_error(format!("Malformed ALE file missing {missing} section")))
    }

    /// Parse a `KEY<TAB>VALUE` heading line.
    fn parse_heading(&mut self, raw: &str) -> Result<()> {
        // Exactly one tab separates key and value.
        let Some((key, value)) = raw.split_once('\t') else {
            return Err(self.syntax_error("Malformed heading section"));
        };
        if value.contains('\t') {
            return Err(self.syntax_error("Malformed heading section"));
        }

        let key = key.trim();
        let value = value.trim();

        if key == "FIELD_DELIM" && value != "TABS" {
            return Err(self.syntax_error("Unable to handle non tab delimited ALE files"));
        }

        if self.config.reject_duplicate_headings && self.doc.heading.contains_key(key) {
            return Err(self.syntax_error(format!("Duplicate {key} heading")));
        }

        self.doc.heading.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Parse the single tab-separated column definition line.
    fn parse_column(&mut self, raw: &str) -> Result<()> {
        if !self.doc.columns.is_empty() {
            return Err(self.syntax_error("Columns already defined"));
        }
        if !raw.contains('\t') {
            return Err(self.syntax_error("Malformed column definition"));
        }

        self.doc.columns = raw.split('\t').map(|c| c.trim().to_string()).collect();
        Ok(())
    }

    /// Parse a tab-separated data row.
    fn parse_data(&mut self, raw: &str) -> Result<()> {
        let fields: Vec<&str> = raw.split('\t').collect();
        if fields.len() != self.doc.columns.len() {
            return Err(self.syntax_error("Malformed data line"));
        }

        let row: HashMap<String, String> = self
            .doc
            .columns
            .iter()
            .cloned()
            .zip(fields.iter().map(|f| f.trim().to_string()))
            .collect();
        self.doc.add_row(row);
        Ok(())
    }

    /// Strict validation run at the Heading/Column transition.
    fn check_headings(&self) -> Result<()> {
        for required in REQUIRED_HEADINGS {
            if !self.doc.heading.contains_key(required) {
                return Err(self.syntax_error(format!("Missing required {required} heading")));
            }
        }

        if self.doc.heading.len() > MAX_HEADING_FIELDS {
            return Err(self.syntax_error(format!(
                "Heading has more than {MAX_HEADING_FIELDS} fields defined"
            )));
        }

        Ok(())
    }

    /// Strict validation run at the Column/Data transition.
    fn check_columns(&self) -> Result<()> {
        for required in REQUIRED_COLUMNS {
            if !self.doc.columns.iter().any(|c| c == required) {
                return Err(self.syntax_error(format!("Missing required {required} column")));
            }
        }

        if self.doc.columns.len() > MAX_COLUMNS {
            return Err(self.syntax_error(format!(
                "Column has more than {MAX_COLUMNS} columns defined"
            )));
        }

        Ok(())
    }

    fn syntax_error(&self, message: impl Into<String>) -> AleError {
        AleError::Syntax {
            source_name: self.source_name.to_string(),
            line: self.line_no,
            message: message.into(),
        }
    }
}
