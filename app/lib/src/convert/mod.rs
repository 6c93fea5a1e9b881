//! Export views of parsed ALE documents.
//!
//! This module converts an [`crate::AleDocument`] into interchange formats
//! for downstream tooling: a JSON object carrying all three sections, and
//! a CSV rendering of the tabular body.

pub mod csv;
pub mod json;

pub use self::csv::to_csv;
pub use self::json::{to_json, to_json_pretty};
