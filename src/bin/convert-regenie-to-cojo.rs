// ==============================================================================
// convert-regenie-to-cojo.rs - Regenie to GCTA-cojo Converter
// ==============================================================================
// Description: Converts concatenated regenie results into a cojo .ma file
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 1.0.0
// ==============================================================================

use anyhow::{Context, Result};
use clap::Parser;
use gwas_prep::logging::init_tracing;
use gwas_prep::{ColumnLayout, PrepError, RegenieConverter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

/// Convert regenie association output to GCTA-cojo input
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file (regenie association output, .regenie, optionally gzipped)
    #[arg(short = 'i', long = "in_file")]
    in_file: PathBuf,

    /// Output file (GCTA-cojo input, .ma)
    #[arg(short = 'o', long = "out_file")]
    out_file: PathBuf,

    /// First input line is a regenie header; locate columns by name
    #[arg(long)]
    header: bool,

    /// JSON column layout overriding the regenie positions
    #[arg(long, env = "GWAS_PREP_LAYOUT")]
    layout: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> Result<()> {
    let mut converter = RegenieConverter::new().with_header(args.header);

    if let Some(path) = &args.layout {
        let layout = ColumnLayout::from_json_file(path)
            .with_context(|| format!("Failed to load column layout {}", path.display()))?;
        converter = converter.with_layout(layout);
    }

    converter
        .convert(&args.in_file, &args.out_file)
        .with_context(|| {
            format!(
                "Failed to convert {} to {}",
                args.in_file.display(),
                args.out_file.display()
            )
        })?;

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(PrepError::exit_code_of(&e))
        }
    }
}
