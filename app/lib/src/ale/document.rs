//! ALE document structure.
//!
//! This module defines the `AleDocument` struct which holds the three
//! sections of a parsed ALE file: the heading map, the ordered column
//! names, and the data rows.

use std::collections::HashMap;

/// A parsed ALE document.
///
/// An ALE document consists of:
/// - A heading: key/value metadata such as `FIELD_DELIM`, `TAPE`, `FPS`
/// - Columns: the ordered field names declared by the Column section
/// - Data: one row per data line, each keyed exactly by the column names
///
/// All cell contents are opaque trimmed text; the library does not
/// interpret timecodes, frame rates, or any other ALE semantics.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AleDocument {
    /// Heading key/value pairs. Insertion order is not significant.
    pub heading: HashMap<String, String>,

    /// Ordered column names declared by the Column section.
    pub columns: Vec<String>,

    /// Data rows in the order they were read.
    ///
    /// Each row maps a column name to that row's cell value.
    pub data: Vec<HashMap<String, String>>,
}

impl AleDocument {
    /// Create a new empty ALE document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with the given column names and no rows.
    pub fn with_columns<S: Into<String>>(columns: Vec<S>) -> Self {
        Self {
            heading: HashMap::new(),
            columns: columns.into_iter().map(|c| c.into()).collect(),
            data: Vec::new(),
        }
    }

    /// Get the number of columns in the document.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of data rows in the document.
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Look up a heading value by key.
    pub fn heading_value(&self, key: &str) -> Option<&str> {
        self.heading.get(key).map(String::as_str)
    }

    /// Get a cell value by row index and column name.
    pub fn field(&self, row: usize, column: &str) -> Option<&str> {
        self.data.get(row).and_then(|r| r.get(column)).map(String::as_str)
    }

    /// The data rows in input order.
    pub fn rows(&self) -> &[HashMap<String, String>] {
        &self.data
    }

    /// Append a data row.
    pub fn add_row(&mut self, row: HashMap<String, String>) {
        self.data.push(row);
    }

    /// Validate the document structure.
    ///
    /// Checks that every row's key set matches the declared columns.
    ///
    /// # Returns
    ///
    /// `true` if the document is consistent, `false` otherwise.
    pub fn is_valid(&self) -> bool {
        self.data.iter().all(|row| {
            row.len() == self.columns.len()
                && self.columns.iter().all(|c| row.contains_key(c))
        })
    }
}
