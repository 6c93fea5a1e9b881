//! # ALE Exchange Library
//!
//! Avid Log Exchange (ALE) parsing library for tape logging metadata.
//!
//! ALE files are tab-delimited text logs with a three-section structure —
//! Heading, Column, Data — used to exchange metadata about video tape
//! clips. This library parses that structure with a deterministic
//! line-oriented state machine, optionally enforces the specification's
//! required fields, and can serialize documents back to ALE text or
//! export them as JSON or CSV.
//!
//! ## Features
//!
//! - **Line-oriented parsing**: one forward pass, no lookahead, syntax
//!   errors carry the source name and 1-based line number
//! - **Strict mode**: enforces the specification's required heading keys,
//!   required columns, and 64-entry ceilings
//! - **Flexible sources**: parse a file path, an in-memory string, or a
//!   pre-split line sequence; text inputs are newline-normalized first
//! - **Round-tripping**: serialize a parsed document back to canonical
//!   ALE text
//! - **Export views**: JSON and CSV renderings of a parsed document
//!
//! ## Quick Start
//!
//! ### Parsing
//!
//! ```rust
//! use ale_exchange::{AleParser, Source};
//!
//! let text = "Heading\n\
//!     FIELD_DELIM\tTABS\n\
//!     FPS\t29.97\n\
//!     Column\n\
//!     Name\tTracks\n\
//!     Data\n\
//!     CU Josh & Mary\tV\n";
//!
//! let mut parser = AleParser::new();
//! parser.set_source(Source::text(text));
//! let doc = parser.parse()?;
//!
//! assert_eq!(doc.heading_value("FPS"), Some("29.97"));
//! assert_eq!(doc.columns, vec!["Name", "Tracks"]);
//! assert_eq!(doc.field(0, "Tracks"), Some("V"));
//! # Ok::<(), ale_exchange::AleError>(())
//! ```
//!
//! ### Strict mode
//!
//! ```rust
//! use ale_exchange::{AleParser, ParserConfig, Source};
//!
//! let parser = AleParser::with_config(ParserConfig::new().with_strict(true));
//! let result = parser.parse_source(&Source::text("Heading\nFPS\t24\nColumn\nData\n"));
//!
//! // Strict mode rejects documents missing required headings
//! assert!(result.is_err());
//! ```
//!
//! ### Serialization and export
//!
//! ```rust,ignore
//! use ale_exchange::{convert, AleSerializer};
//!
//! let ale_text = AleSerializer::new().serialize(&doc);
//! let json = convert::to_json_pretty(&doc)?;
//! let csv = convert::to_csv(&doc)?;
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use ale_exchange::{AleError, AleParser, Source};
//!
//! let source = Source::text("Heading\nbroken line\n").with_name("reel1.ale");
//! match AleParser::new().parse_source(&source) {
//!     Ok(doc) => println!("{} rows", doc.row_count()),
//!     Err(AleError::Syntax { line, message, .. }) => {
//!         eprintln!("syntax error at line {}: {}", line, message);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod ale;
pub mod config;
pub mod convert;
pub mod error;
pub mod source;

// Re-exports for convenience
pub use ale::{
    AleDocument, AleParser, AleSerializer, MAX_COLUMNS, MAX_HEADING_FIELDS, REQUIRED_COLUMNS,
    REQUIRED_HEADINGS,
};
pub use config::ParserConfig;
pub use error::{AleError, Result};
pub use source::{normalize_newlines, ResolvedSource, Source};
