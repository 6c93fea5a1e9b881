//! Parse a small ALE document and print what was found.
//!
//! Run with: cargo run --example parse_ale

use ale_exchange::{convert, AleParser, ParserConfig, Source};

const SAMPLE: &str = "Heading\n\
    FIELD_DELIM\tTABS\n\
    VIDEO_FORMAT\tNTSC\n\
    TAPE\t001\n\
    FPS\t29.97\n\
    Column\n\
    Name\tTracks\tStart\tEnd\n\
    Data\n\
    CU Josh & Mary\tV\t01:00:00:00\t01:15:05:00\n\
    WS Street\tVA1A2\t01:15:05:00\t01:31:00:10\n";

fn main() -> ale_exchange::Result<()> {
    let parser = AleParser::with_config(ParserConfig::new().with_strict(true));
    let doc = parser.parse_source(&Source::text(SAMPLE).with_name("sample.ale"))?;

    println!("tape:    {}", doc.heading_value("TAPE").unwrap_or("?"));
    println!("format:  {}", doc.heading_value("VIDEO_FORMAT").unwrap_or("?"));
    println!("columns: {}", doc.columns.join(", "));
    println!("rows:    {}", doc.row_count());
    println!();
    println!("{}", convert::to_json_pretty(&doc)?);

    Ok(())
}
