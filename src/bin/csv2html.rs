//! Convert a CSV file to an HTML table.
//!
//! Writes `<input>.html` next to the input unless `--output` is given.
//! Defaults match semicolon-separated exports with a header row.

use anyhow::{Context, Result};
use clap::Parser;
use csv_codec::{html, CsvOptions, CsvReader};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "csv2html", version, about = "Convert a CSV file to an HTML table")]
struct Args {
    /// CSV file to convert
    input: PathBuf,

    /// Output file (default: <input>.html)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Field separator
    #[arg(short, long, default_value_t = ';')]
    separator: char,

    /// Quote character
    #[arg(short, long, default_value_t = '"')]
    quote: char,

    /// Treat the first record as data instead of a header
    #[arg(long)]
    no_header: bool,

    /// Text encoding of the input (utf-8, latin1, ansi_1252, ...)
    #[arg(short, long, default_value = "utf-8")]
    encoding: String,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let options = CsvOptions::new()
        .with_separator(args.separator)
        .with_quote(args.quote)
        .with_header(!args.no_header)
        .with_encoding_label(&args.encoding)?;

    let output = args.output.clone().unwrap_or_else(|| {
        let mut name = args.input.clone().into_os_string();
        name.push(".html");
        PathBuf::from(name)
    });
    let title = args
        .input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut reader = CsvReader::from_path(&args.input, options)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let file = File::create(&output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let mut out = BufWriter::new(file);

    let rows = html::write_html_document(&title, &mut reader, &mut out)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;
    out.flush()
        .with_context(|| format!("failed to write {}", output.display()))?;
    reader.close();

    log::info!("wrote {} rows to {}", rows, output.display());
    Ok(())
}
