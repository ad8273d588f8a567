//! Statement Analyzer CLI
//!
//! Converts a bank-statement PDF to text, classifies every transaction,
//! and renders a summary chart.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --file statement.pdf
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: overrides the log filter chosen by `--debug`

use clap::Parser;
use log::warn;
use statement_analyzer::chart::{open_in_viewer, render_chart};
use statement_analyzer::pdf::{convert_pdf_to_text, read_statement_lines};
use statement_analyzer::sections::reporting_period;
use statement_analyzer::{CategoryMap, Result, StatementEngine};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "statement-analyzer",
    version,
    about = "Classifies bank statement transactions and charts the result"
)]
struct Cli {
    /// Statement PDF, or an already-extracted `pdftotext -layout` text file
    #[arg(short, long)]
    file: PathBuf,

    /// JSON file mapping lowercase shop keywords to category names
    #[arg(short, long, default_value = "categories.json")]
    categories: PathBuf,

    /// Chart destination; defaults to the input path with an .svg extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render the chart without opening it in a viewer
    #[arg(long)]
    no_open: bool,

    /// Log per-line scan details
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.debug { "debug" } else { "warn" }),
    )
    .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let text_path = if cli.file.extension().is_some_and(|ext| ext == "txt") {
        cli.file.clone()
    } else {
        convert_pdf_to_text(&cli.file)?
    };

    let lines = read_statement_lines(&text_path)?;
    let period = reporting_period(&lines);
    let categories = CategoryMap::from_path(&cli.categories)?;

    let mut engine = StatementEngine::new(categories);
    engine.process_lines(&lines);
    let summary = engine.finish()?;

    let chart_path = cli
        .output
        .clone()
        .unwrap_or_else(|| text_path.with_extension("svg"));
    render_chart(&summary, period.as_deref(), &chart_path)?;

    if !cli.no_open {
        if let Err(e) = open_in_viewer(&chart_path) {
            warn!("Could not open chart in viewer: {}", e);
        }
    }

    Ok(())
}
