//! Gridcalc - a spreadsheet driven from the command line

mod config;

use anyhow::{Context, anyhow};
use clap::Parser;
use gridcalc_core::Document;
use gridcalc_core::storage::write_table;
use gridcalc_engine::engine::format_number;
use log::info;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "gridcalc", version, about = "Spreadsheet with SUM/AVG/MIN/MAX formulas")]
struct Cli {
    /// Delimiter-separated file to open (created on save if missing)
    file: Option<PathBuf>,

    /// Set a cell, e.g. `B2==A1*2` (can be repeated)
    #[arg(short, long = "set", value_name = "ADDR=TEXT")]
    set: Vec<String>,

    /// Evaluate an expression against the sheet and print the result
    #[arg(short = 'c', long, value_name = "EXPR", allow_hyphen_values = true)]
    command: Option<String>,

    /// Export to markdown file (non-interactive)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write the sheet back to FILE after applying edits
    #[arg(short, long)]
    write: bool,

    /// Read settings from this TOML file instead of the user config dir
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Ignore configuration files
    #[arg(long, conflicts_with = "config")]
    no_config: bool,

    /// Number of rows in the grid
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns in the grid
    #[arg(long)]
    cols: Option<usize>,

    /// Field separator for reading and writing FILE
    #[arg(long)]
    separator: Option<char>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut sheet_config = if cli.no_config {
        gridcalc_core::SheetConfig::default()
    } else {
        let (sheet_config, warnings) = config::load_config(cli.config.as_ref());
        for warning in warnings {
            eprintln!("Warning: {}", warning);
        }
        sheet_config
    };
    if let Some(rows) = cli.rows {
        sheet_config.rows = rows;
    }
    if let Some(cols) = cli.cols {
        sheet_config.cols = cols;
    }
    if let Some(separator) = cli.separator {
        sheet_config.separator = separator;
    }
    let col_width = sheet_config.col_width;

    let mut doc = Document::with_file(cli.file.clone(), sheet_config).with_context(|| match &cli.file {
        Some(path) => format!("cannot open {}", path.display()),
        None => "cannot create sheet".to_string(),
    })?;

    for edit in &cli.set {
        let (address, text) = edit
            .split_once('=')
            .ok_or_else(|| anyhow!("expected ADDR=TEXT, got {:?}", edit))?;
        let cell_ref = doc.parse_address_in_bounds(address)?;
        doc.set_cell_from_input(cell_ref, text)?;
        info!("set {} to {:?}", cell_ref, text);
    }

    if cli.write {
        let path = doc.save_file().context("cannot save")?;
        eprintln!("Saved {}", path.display());
    }

    if let Some(expr) = cli.command {
        println!("{}", format_number(doc.evaluate_expression(&expr)));
    } else if let Some(output_path) = cli.output {
        doc.export_markdown(&output_path)
            .with_context(|| format!("cannot write {}", output_path.display()))?;
        println!("Exported to {}", output_path.display());
    } else {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        write_table(&mut out, &doc, col_width)?;
        out.flush()?;
    }

    Ok(())
}
