//! tabexport - Export tabular data to CSV files

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use tabexport::{BlankRowPolicy, CellValue, CsvExporter, ExportOptions, ExportedFile, Exporter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliBlankRows {
    Falsy,
    Empty,
}

impl From<CliBlankRows> for BlankRowPolicy {
    fn from(p: CliBlankRows) -> Self {
        match p {
            CliBlankRows::Falsy => BlankRowPolicy::Falsy,
            CliBlankRows::Empty => BlankRowPolicy::Empty,
        }
    }
}

/// Export a JSON array of rows to a CSV file
#[derive(Parser, Debug)]
#[command(name = "tabexport")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file holding an array of rows (arrays of scalars)
    input: PathBuf,

    /// Header labels (comma-separated)
    #[arg(long, value_delimiter = ',', conflicts_with = "first_row_headers")]
    header: Vec<String>,

    /// Use the first input row as the header row
    #[arg(long)]
    first_row_headers: bool,

    /// Prepend a 1-based index column (requires headers)
    #[arg(long)]
    index: bool,

    /// Prefix of the generated file name
    #[arg(long)]
    prefix: Option<String>,

    /// Extension of the generated file name, including the dot
    #[arg(long)]
    extension: Option<String>,

    /// Output directory (defaults to the system temp directory)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Which rows count as blank and are skipped
    #[arg(long, value_enum, default_value = "falsy")]
    blank_rows: CliBlankRows,

    /// Print metadata of the exported file
    #[arg(long)]
    info: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read input file: {}", cli.input.display()))?;
    let mut rows: Vec<Vec<CellValue>> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse rows from: {}", cli.input.display()))?;

    let mut headers = cli.header;
    if cli.first_row_headers && !rows.is_empty() {
        headers = rows.remove(0).iter().map(CellValue::to_field).collect();
    }

    let mut options = ExportOptions::default().with_blank_rows(cli.blank_rows.into());
    if let Some(prefix) = cli.prefix {
        options = options.with_prefix(prefix);
    }
    if let Some(extension) = cli.extension {
        options = options.with_extension(extension);
    }
    if let Some(dir) = cli.dir {
        options = options.with_directory(dir);
    }

    let mut exporter = CsvExporter::with_options(rows, options);
    if !headers.is_empty() {
        exporter.with_headers(headers);
    }
    if cli.index {
        exporter.with_index()?;
    }

    let file = exporter.export().context("Failed to export CSV")?;
    println!("{}", file.path().display());

    if cli.info {
        println!("mime:      {}", file.mime_type());
        println!("extension: {}", file.extension());
        println!("name:      {}", file.file_name());
        println!("directory: {}", file.base_path().display());
        println!("size:      {}", file.size()?);
        println!("created:   {}", file.created()?.to_rfc3339());
        println!("modified:  {}", file.modified()?.to_rfc3339());
    }

    Ok(())
}
