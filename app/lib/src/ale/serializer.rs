//! ALE document serializer.
//!
//! This module renders an [`AleDocument`] back into ALE text: the three
//! section keywords, tab-separated heading pairs, the column definition
//! line, and one tab-joined line per data row.

use super::document::AleDocument;

/// ALE document serializer.
///
/// Produces canonical ALE text from a document. Heading keys are emitted
/// in sorted order so that output is deterministic; column order and row
/// order follow the document.
///
/// ```
/// use ale_exchange::{AleDocument, AleSerializer};
///
/// let mut doc = AleDocument::with_columns(vec!["Name", "Tracks"]);
/// doc.heading.insert("FIELD_DELIM".to_string(), "TABS".to_string());
///
/// let text = AleSerializer::new().serialize(&doc);
/// assert!(text.starts_with("Heading\nFIELD_DELIM\tTABS\n"));
/// ```
pub struct AleSerializer;

impl AleSerializer {
    /// Create a new serializer.
    pub fn new() -> Self {
        Self
    }

    /// Serialize a document to ALE text.
    pub fn serialize(&self, doc: &AleDocument) -> String {
        let mut output = String::new();

        self.serialize_heading(&mut output, doc);
        self.serialize_columns(&mut output, doc);
        self.serialize_data(&mut output, doc);

        output
    }

    /// Serialize the Heading section.
    fn serialize_heading(&self, output: &mut String, doc: &AleDocument) {
        output.push_str("Heading\n");

        // Sort keys for deterministic output
        let mut keys: Vec<_> = doc.heading.keys().collect();
        keys.sort();

        for key in keys {
            if let Some(value) = doc.heading.get(key) {
                output.push_str(key);
                output.push('\t');
                output.push_str(value);
                output.push('\n');
            }
        }
    }

    /// Serialize the Column section.
    fn serialize_columns(&self, output: &mut String, doc: &AleDocument) {
        output.push_str("Column\n");

        for (i, name) in doc.columns.iter().enumerate() {
            if i > 0 {
                output.push('\t');
            }
            output.push_str(name);
        }
        if !doc.columns.is_empty() {
            output.push('\n');
        }
    }

    /// Serialize the Data section.
    fn serialize_data(&self, output: &mut String, doc: &AleDocument) {
        output.push_str("Data\n");

        for row in &doc.data {
            for (i, column) in doc.columns.iter().enumerate() {
                if i > 0 {
                    output.push('\t');
                }
                if let Some(value) = row.get(column) {
                    output.push_str(value);
                }
            }
            output.push('\n');
        }
    }
}

impl Default for AleSerializer {
    fn default() -> Self {
        Self::new()
    }
}
