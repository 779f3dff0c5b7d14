// ==============================================================================
// phenotype.rs - Non-Missing Phenotype Sample Lists
// ==============================================================================
// Description: Lists individuals with a non-missing value for one phenotype
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 1.0.0
// ==============================================================================
// Input:  tab-delimited plink/regenie phenotype table with header
//   FID  IID  AGE  BMI
//   F1   I1   45   NA
//   F2   I2   50   27.3
// Output: FID/IID pairs for rows where the phenotype is not missing,
//         suitable for --keep style filtering
//   F2   I2
// ==============================================================================

use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::error::PrepError;
use crate::io::{create_output, open_input, tab_writer, InputLines, STREAM_PATH};

/// Marker for a missing phenotype value in plink/regenie tables
pub const DEFAULT_MISSING_MARKER: &str = "NA";

/// Counts from one filter run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    /// Data rows read (header excluded)
    pub rows_scanned: usize,
    /// Rows written to the output list
    pub rows_kept: usize,
}

/// Filter that keeps individuals whose phenotype value is present
#[derive(Debug, Clone)]
pub struct PhenotypeFilter {
    phenotype: String,
    missing_marker: String,
}

impl PhenotypeFilter {
    pub fn new(phenotype: impl Into<String>) -> Self {
        Self {
            phenotype: phenotype.into(),
            missing_marker: DEFAULT_MISSING_MARKER.to_string(),
        }
    }

    /// Treat `marker` instead of `NA` as the missing value
    pub fn with_missing_marker(mut self, marker: impl Into<String>) -> Self {
        self.missing_marker = marker.into();
        self
    }

    /// Locate the phenotype column in a tab-delimited header line.
    ///
    /// Surrounding whitespace of the whole line is ignored; column names are
    /// matched exactly.
    pub fn locate(&self, header_line: &str) -> Result<usize, PrepError> {
        header_line
            .trim()
            .split('\t')
            .position(|name| name == self.phenotype)
            .ok_or_else(|| PrepError::ColumnNotFound {
                name: self.phenotype.clone(),
            })
    }

    /// Write the non-missing FID/IID pairs of `input` to `output`.
    ///
    /// The header is checked before the output file is created, so an unknown
    /// phenotype leaves no output behind.
    pub fn filter(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<FilterSummary, PrepError> {
        let input = input.as_ref();
        let output = output.as_ref();
        info!(
            "Listing samples with non-missing '{}' from {}",
            self.phenotype,
            input.display()
        );

        let mut lines = InputLines::new(open_input(input)?, input);
        let index = self.locate(&lines.next_or_empty()?)?;
        let file = create_output(output)?;

        let summary = self.write_ids(lines, file, output, index)?;
        info!(
            "Kept {} of {} samples, written to {}",
            summary.rows_kept,
            summary.rows_scanned,
            output.display()
        );

        Ok(summary)
    }

    /// Filter from an already-open reader into any writer
    pub fn filter_reader<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: W,
    ) -> Result<FilterSummary, PrepError> {
        let mut lines = InputLines::new(reader, STREAM_PATH);
        let index = self.locate(&lines.next_or_empty()?)?;
        self.write_ids(lines, writer, Path::new(STREAM_PATH), index)
    }

    fn write_ids<R: BufRead, W: Write>(
        &self,
        lines: InputLines<R>,
        writer: W,
        output: &Path,
        index: usize,
    ) -> Result<FilterSummary, PrepError> {
        debug!("Phenotype '{}' is column {}", self.phenotype, index);

        let mut writer = tab_writer(writer);
        let required = (index + 1).max(2);
        let mut summary = FilterSummary {
            rows_scanned: 0,
            rows_kept: 0,
        };

        for line_result in lines {
            let (line_number, line) = line_result?;
            summary.rows_scanned += 1;

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < required {
                return Err(PrepError::MalformedRecord {
                    line: line_number,
                    expected: required,
                    found: fields.len(),
                });
            }

            if fields[index] != self.missing_marker {
                writer.write_record([fields[0], fields[1]])?;
                summary.rows_kept += 1;
            }
        }

        writer.flush().map_err(|e| PrepError::io(output, e))?;
        Ok(summary)
    }
}
