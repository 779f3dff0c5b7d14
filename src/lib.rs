// ==============================================================================
// lib.rs - GWAS Preparation Library
// ==============================================================================
// Description: Library interface for GWAS file preparation tools
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 1.0.0
// ==============================================================================

pub mod converter;
pub mod error;
pub mod format;
pub mod io;
pub mod layout;
pub mod logging;
pub mod phenotype;

pub use converter::{CojoRecord, ConversionSummary, RegenieConverter, COJO_HEADER};
pub use error::PrepError;
pub use layout::{ColumnLayout, ColumnRef, ResolvedLayout};
pub use phenotype::{FilterSummary, PhenotypeFilter, DEFAULT_MISSING_MARKER};
