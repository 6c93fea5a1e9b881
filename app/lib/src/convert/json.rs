//! JSON export.
//!
//! This module renders a parsed ALE document as a JSON object with
//! `heading`, `columns`, and `data` members. Cell values stay strings;
//! the library does not interpret them.

use serde_json::{Map, Value};

use crate::ale::AleDocument;
use crate::error::Result;

/// Render a document as a compact JSON string.
///
/// The result is an object of the form
/// `{"heading": {...}, "columns": [...], "data": [{...}, ...]}` with each
/// data row keyed by column name.
///
/// # Examples
///
/// ```
/// use ale_exchange::{convert, AleDocument};
///
/// let doc = AleDocument::with_columns(vec!["Name"]);
/// let json = convert::to_json(&doc).unwrap();
/// assert_eq!(json, r#"{"columns":["Name"],"data":[],"heading":{}}"#);
/// ```
pub fn to_json(doc: &AleDocument) -> Result<String> {
    Ok(serde_json::to_string(&document_value(doc))?)
}

/// Render a document as pretty-printed JSON.
pub fn to_json_pretty(doc: &AleDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(&document_value(doc))?)
}

/// Build the JSON value for a document.
fn document_value(doc: &AleDocument) -> Value {
    let heading: Map<String, Value> = doc
        .heading
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();

    let columns: Vec<Value> = doc
        .columns
        .iter()
        .map(|c| Value::String(c.clone()))
        .collect();

    let data: Vec<Value> = doc
        .data
        .iter()
        .map(|row| {
            let object: Map<String, Value> = row
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect();
            Value::Object(object)
        })
        .collect();

    let mut root = Map::new();
    root.insert("heading".to_string(), Value::Object(heading));
    root.insert("columns".to_string(), Value::Array(columns));
    root.insert("data".to_string(), Value::Array(data));
    Value::Object(root)
}
