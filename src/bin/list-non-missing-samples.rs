// ==============================================================================
// list-non-missing-samples.rs - Non-Missing Phenotype Sample Lister
// ==============================================================================
// Description: Lists FID/IID pairs without NA for one phenotype, for filtering
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 1.0.0
// ==============================================================================

use anyhow::{Context, Result};
use clap::Parser;
use gwas_prep::logging::init_tracing;
use gwas_prep::{PhenotypeFilter, PrepError, DEFAULT_MISSING_MARKER};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

/// Extract individuals without a missing value for one phenotype
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The phenotype file (plink/regenie format, tab-delimited with header)
    #[arg(short = 'i', long = "in_file")]
    in_file: PathBuf,

    /// The phenotype column to scan for missing values
    #[arg(short = 'p', long = "pheno")]
    pheno: String,

    /// The list of individuals without a missing value
    #[arg(short = 'o', long = "out_file")]
    out_file: PathBuf,

    /// Value that marks a missing phenotype
    #[arg(long = "missing_marker", default_value = DEFAULT_MISSING_MARKER)]
    missing_marker: String,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> Result<()> {
    PhenotypeFilter::new(&args.pheno)
        .with_missing_marker(&args.missing_marker)
        .filter(&args.in_file, &args.out_file)
        .with_context(|| {
            format!(
                "Failed to list samples with non-missing '{}' from {}",
                args.pheno,
                args.in_file.display()
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
