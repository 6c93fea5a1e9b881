//! Integration tests for the ALE parsing pipeline.

use std::io::Cursor;
use std::io::Write;

use ale_exchange::{
    convert, AleError, AleParser, AleSerializer, ParserConfig, Source, MAX_COLUMNS,
    MAX_HEADING_FIELDS,
};

const SIMPLE_ALE: &str = "Heading\n\
    FIELD_DELIM\tTABS\n\
    VIDEO_FORMAT\tNTSC\n\
    TAPE\t001\n\
    FPS\t29.97\n\
    \n\
    Column\n\
    Name\tTracks\tStart\tEnd\n\
    \n\
    Data\n\
    CU Josh & Mary\tV\t01:00:00:00\t01:15:05:00\n\
    WS Street\tVA1A2\t01:15:05:00\t01:31:00:10\n";

fn strict_parser() -> AleParser {
    AleParser::with_config(ParserConfig::new().with_strict(true))
}

#[test]
fn test_simple_ale_strict_parse() {
    let doc = strict_parser().parse_source(&Source::text(SIMPLE_ALE)).unwrap();

    assert_eq!(doc.heading.len(), 4);
    assert_eq!(doc.heading_value("FIELD_DELIM"), Some("TABS"));
    assert_eq!(doc.heading_value("VIDEO_FORMAT"), Some("NTSC"));
    assert_eq!(doc.heading_value("TAPE"), Some("001"));
    assert_eq!(doc.heading_value("FPS"), Some("29.97"));

    assert_eq!(doc.columns, vec!["Name", "Tracks", "Start", "End"]);

    assert_eq!(doc.row_count(), 2);
    assert_eq!(doc.field(0, "Name"), Some("CU Josh & Mary"));
    assert_eq!(doc.field(0, "Tracks"), Some("V"));
    assert_eq!(doc.field(0, "Start"), Some("01:00:00:00"));
    assert_eq!(doc.field(0, "End"), Some("01:15:05:00"));
    assert_eq!(doc.field(1, "Name"), Some("WS Street"));

    assert!(doc.is_valid());
}

#[test]
fn test_line_ending_invariance() {
    let lf = AleParser::new().parse_source(&Source::text(SIMPLE_ALE)).unwrap();
    let crlf = AleParser::new()
        .parse_source(&Source::text(SIMPLE_ALE.replace('\n', "\r\n")))
        .unwrap();
    let cr = AleParser::new()
        .parse_source(&Source::text(SIMPLE_ALE.replace('\n', "\r")))
        .unwrap();

    assert_eq!(lf, crlf);
    assert_eq!(lf, cr);
}

#[test]
fn test_fresh_parsers_agree() {
    let first = AleParser::new().parse_source(&Source::text(SIMPLE_ALE)).unwrap();
    let second = AleParser::new().parse_source(&Source::text(SIMPLE_ALE)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_file_backed_source() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SIMPLE_ALE.as_bytes()).unwrap();

    let source = Source::path(file.path());
    let doc = strict_parser().parse_source(&source).unwrap();

    assert_eq!(source.name(), file.path().display().to_string());
    assert_eq!(doc, AleParser::new().parse_source(&Source::text(SIMPLE_ALE)).unwrap());
}

#[test]
fn test_file_source_error_names_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SIMPLE_ALE.replace("TABS", "PIZZA").as_bytes())
        .unwrap();

    let err = AleParser::new()
        .parse_source(&Source::path(file.path()))
        .unwrap_err();
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn test_reader_source() {
    let source = Source::from_reader(Cursor::new(SIMPLE_ALE)).unwrap();
    let doc = strict_parser().parse_source(&source).unwrap();
    assert_eq!(doc.row_count(), 2);
}

#[test]
fn test_round_trip_through_serializer() {
    let doc = strict_parser().parse_source(&Source::text(SIMPLE_ALE)).unwrap();

    let text = AleSerializer::new().serialize(&doc);
    let reparsed = strict_parser().parse_source(&Source::text(text)).unwrap();

    assert_eq!(doc, reparsed);
}

#[test]
fn test_strict_missing_fps_heading() {
    let text = SIMPLE_ALE.replace("FPS\t29.97\n", "");
    let err = strict_parser().parse_source(&Source::text(text)).unwrap_err();

    match err {
        AleError::Syntax { ref message, .. } => {
            assert_eq!(message, "Missing required FPS heading");
        }
        other => panic!("expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_strict_missing_end_column() {
    let text = SIMPLE_ALE
        .replace("\tEnd", "")
        .replace("\t01:15:05:00\n", "\n")
        .replace("\t01:31:00:10\n", "\n");
    let err = strict_parser().parse_source(&Source::text(text)).unwrap_err();
    assert!(err.to_string().contains("Missing required End column"));
}

#[test]
fn test_non_tab_field_delim_rejected() {
    let text = SIMPLE_ALE.replace("TABS", "PIZZA");
    let err = AleParser::new().parse_source(&Source::text(text)).unwrap_err();
    assert!(err.to_string().contains("non tab delimited"));
}

#[test]
fn test_non_strict_accepts_incomplete_heading() {
    let text = SIMPLE_ALE.replace("FPS\t29.97\n", "");
    let doc = AleParser::new().parse_source(&Source::text(text)).unwrap();
    assert_eq!(doc.heading.len(), 3);
    assert_eq!(doc.row_count(), 2);
}

/// Build a document with the four required headings plus `extra_headings`
/// more, and the four required columns plus `extra_columns` more.
fn synthetic_document(extra_headings: usize, extra_columns: usize) -> String {
    let mut text = String::from(
        "Heading\nFIELD_DELIM\tTABS\nVIDEO_FORMAT\tNTSC\nTAPE\t001\nFPS\t29.97\n",
    );
    for i in 0..extra_headings {
        text.push_str(&format!("USER_FIELD_{i}\tvalue {i}\n"));
    }

    let mut columns = vec![
        "Name".to_string(),
        "Tracks".to_string(),
        "Start".to_string(),
        "End".to_string(),
    ];
    for i in 0..extra_columns {
        columns.push(format!("User{i}"));
    }

    text.push_str("Column\n");
    text.push_str(&columns.join("\t"));
    text.push_str("\nData\n");

    let row: Vec<String> = (0..columns.len()).map(|i| format!("cell{i}")).collect();
    text.push_str(&row.join("\t"));
    text.push('\n');
    text
}

#[test]
fn test_exactly_64_heading_fields_accepted() {
    let text = synthetic_document(MAX_HEADING_FIELDS - 4, 0);
    let doc = strict_parser().parse_source(&Source::text(text)).unwrap();
    assert_eq!(doc.heading.len(), MAX_HEADING_FIELDS);
}

#[test]
fn test_65_heading_fields_rejected() {
    let text = synthetic_document(MAX_HEADING_FIELDS - 3, 0);
    let err = strict_parser().parse_source(&Source::text(text)).unwrap_err();
    assert!(err.to_string().contains("more than 64 fields"));
}

#[test]
fn test_exactly_64_columns_accepted() {
    let text = synthetic_document(0, MAX_COLUMNS - 4);
    let doc = strict_parser().parse_source(&Source::text(text)).unwrap();
    assert_eq!(doc.column_count(), MAX_COLUMNS);
    assert_eq!(doc.row_count(), 1);
}

#[test]
fn test_65_columns_rejected() {
    let text = synthetic_document(0, MAX_COLUMNS - 3);
    let err = strict_parser().parse_source(&Source::text(text)).unwrap_err();
    assert!(err.to_string().contains("more than 64 columns"));
}

#[test]
fn test_ceilings_ignored_outside_strict_mode() {
    let text = synthetic_document(80, 80);
    let doc = AleParser::new().parse_source(&Source::text(text)).unwrap();
    assert_eq!(doc.heading.len(), 84);
    assert_eq!(doc.column_count(), 84);
}

#[test]
fn test_json_export_of_parsed_document() {
    let doc = strict_parser().parse_source(&Source::text(SIMPLE_ALE)).unwrap();
    let json = convert::to_json(&doc).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["heading"]["TAPE"], "001");
    assert_eq!(value["columns"][3], "End");
    assert_eq!(value["data"][1]["Name"], "WS Street");
}

#[test]
fn test_csv_export_of_parsed_document() {
    let doc = strict_parser().parse_source(&Source::text(SIMPLE_ALE)).unwrap();
    let csv = convert::to_csv(&doc).unwrap();

    assert_eq!(
        csv,
        "Name,Tracks,Start,End\n\
         CU Josh & Mary,V,01:00:00:00,01:15:05:00\n\
         WS Street,VA1A2,01:15:05:00,01:31:00:10\n"
    );
}
