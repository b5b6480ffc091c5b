//! walkerscan - cDNA Translation and Walker Motif Counter
//!
//! ## Usage
//!
//! ```bash
//! walkerscan sequences.fasta          # interactive report viewer
//! walkerscan sequences.fasta -o -     # write the report to stdout
//! walkerscan sequences.fasta -o out.txt
//! ```
//!
//! Running without a file argument reports "no file selected" and
//! exits cleanly.
//!
//! ## Viewer keys
//!
//! - `j/k` or arrows: scroll
//! - `Ctrl+D/U`, `PageDown/Up`, `Space`: page
//! - `g/G`: top/bottom
//! - `q`, `Esc` or `:q`: close

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use walkerscan::controller::run_app;
use walkerscan::model::AppState;
use walkerscan::report::{process_file, Report};

/// walkerscan - translate FASTA cDNA and count Walker A motifs
///
/// When run without -o/--output, opens an interactive scrollable
/// report viewer. With -o/--output, writes the report to a file (or
/// stdout with "-").
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// FASTA file of nucleotide sequences to process
    file: Option<PathBuf>,

    /// Output file for the report (enables batch mode). Use "-" for stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

/// Runs batch mode: write the rendered report to a file or stdout.
fn run_batch_mode(report: &Report, output: &str) -> Result<()> {
    if output == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(report.render().as_bytes())?;
    } else {
        std::fs::write(output, report.render())
            .with_context(|| format!("Failed to write report to {}", output))?;
        eprintln!(
            "Wrote report for {} records to {}",
            report.entries.len(),
            output
        );
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // No file given: informational, not an error
    let Some(file_path) = args.file else {
        println!("No file selected. Please select a file.");
        return Ok(());
    };

    let report = process_file(&file_path)
        .with_context(|| format!("Failed to process {}", file_path.display()))?;

    if let Some(output) = args.output {
        run_batch_mode(&report, &output)?;
    } else {
        run_app(AppState::new(report))?;
    }

    Ok(())
}
