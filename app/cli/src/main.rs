use ale_exchange::{convert, AleDocument, AleParser, AleSerializer, ParserConfig, Source};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};

/// Avid Log Exchange (ALE) inspection and conversion tool
#[derive(Parser)]
#[command(name = "ale")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// JSON object with heading, columns, and data members
    Json,
    /// CSV rendering of the tabular body
    Csv,
    /// Canonical ALE text
    Ale,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an ALE file and report whether it is well-formed
    Validate {
        /// Input file (use '-' for stdin)
        #[arg(short, long, value_name = "FILE", default_value = "-")]
        input: String,

        /// Enforce the specification's required headings and columns
        #[arg(short, long)]
        strict: bool,
    },

    /// Display a summary of an ALE file
    Info {
        /// Input file (use '-' for stdin)
        #[arg(short, long, value_name = "FILE", default_value = "-")]
        input: String,
    },

    /// Convert an ALE file to JSON, CSV, or canonical ALE text
    Convert {
        /// Input file (use '-' for stdin)
        #[arg(short, long, value_name = "FILE", default_value = "-")]
        input: String,

        /// Output file (use '-' for stdout)
        #[arg(short, long, value_name = "FILE", default_value = "-")]
        output: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Validate { input, strict } => validate_command(&input, strict, cli.quiet),
        Commands::Info { input } => info_command(&input),
        Commands::Convert {
            input,
            output,
            format,
        } => convert_command(&input, &output, format),
    }
}

/// Set up logging based on verbosity flags
fn setup_logging(verbose: bool, quiet: bool) {
    let log_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logging initialized at {} level", log_level);
}

/// Build a parser source from a file path or stdin
fn read_source(input: &str) -> Result<Source> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(Source::text(buffer).with_name("<stdin>"))
    } else {
        Ok(Source::path(input))
    }
}

/// Write output to file or stdout
fn write_output(output: &str, content: &str) -> Result<()> {
    if output == "-" {
        io::stdout()
            .write_all(content.as_bytes())
            .context("Failed to write to stdout")?;
        io::stdout().flush().context("Failed to flush stdout")?;
    } else {
        fs::write(output, content)
            .with_context(|| format!("Failed to write output file: {}", output))?;
    }
    Ok(())
}

/// Parse the given input, mapping failures into a displayable error
fn parse_input(input: &str, strict: bool) -> Result<AleDocument> {
    let source = read_source(input)?;
    let parser = AleParser::with_config(ParserConfig::new().with_strict(strict));

    debug!("Parsing {}", source.name());
    parser
        .parse_source(&source)
        .with_context(|| format!("Failed to parse {}", source.name()))
}

/// Execute the validate command
fn validate_command(input: &str, strict: bool, quiet: bool) -> Result<()> {
    let doc = parse_input(input, strict)?;

    info!(
        "Validated {} heading entries, {} columns, {} rows",
        doc.heading.len(),
        doc.column_count(),
        doc.row_count()
    );
    if !quiet {
        println!(
            "OK: {} columns, {} rows{}",
            doc.column_count(),
            doc.row_count(),
            if strict { " (strict)" } else { "" }
        );
    }
    Ok(())
}

/// Execute the info command
fn info_command(input: &str) -> Result<()> {
    let doc = parse_input(input, false)?;

    println!("Heading ({} entries):", doc.heading.len());
    let mut keys: Vec<_> = doc.heading.keys().collect();
    keys.sort();
    for key in keys {
        if let Some(value) = doc.heading_value(key) {
            println!("  {}\t{}", key, value);
        }
    }

    println!("Columns ({}):", doc.column_count());
    println!("  {}", doc.columns.join(", "));

    println!("Rows: {}", doc.row_count());
    Ok(())
}

/// Execute the convert command
fn convert_command(input: &str, output: &str, format: Format) -> Result<()> {
    let doc = parse_input(input, false)?;

    let content = match format {
        Format::Json => convert::to_json_pretty(&doc).context("JSON conversion failed")?,
        Format::Csv => convert::to_csv(&doc).context("CSV conversion failed")?,
        Format::Ale => AleSerializer::new().serialize(&doc),
    };

    info!("Converted {} rows to {:?}", doc.row_count(), format);
    write_output(output, &content)
}
