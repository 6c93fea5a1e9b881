//! CSV export.
//!
//! This module renders the tabular body of a parsed ALE document as CSV:
//! a header row of column names followed by one record per data row. The
//! heading section has no CSV counterpart and is not emitted.

use crate::ale::AleDocument;
use crate::error::{AleError, Result};

/// Render a document's columns and data rows as CSV text.
///
/// Fields are quoted by the `csv` crate as needed, so cell values
/// containing commas or quotes survive the conversion.
///
/// # Examples
///
/// ```
/// use ale_exchange::{convert, AleDocument};
///
/// let doc = AleDocument::with_columns(vec!["Name", "Tracks"]);
/// let csv = convert::to_csv(&doc).unwrap();
/// assert_eq!(csv, "Name,Tracks\n");
/// ```
pub fn to_csv(doc: &AleDocument) -> Result<String> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

    writer.write_record(&doc.columns)?;

    for row in &doc.data {
        let record: Vec<&str> = doc
            .columns
            .iter()
            .map(|column| row.get(column).map(String::as_str).unwrap_or(""))
            .collect();
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AleError::Io(std::io::Error::other(e.to_string())))?;
    String::from_utf8(bytes).map_err(|e| AleError::Io(std::io::Error::other(e)))
}
