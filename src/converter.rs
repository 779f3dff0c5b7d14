// ==============================================================================
// converter.rs - Regenie to GCTA-cojo Conversion
// ==============================================================================
// Description: Rewrites regenie association results as cojo .ma input
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 1.0.0
// ==============================================================================
// Input:  space-delimited regenie results, per-chromosome files concatenated
//         with their headers stripped
//   1 55550 rs123 G A 0.25 0.98 5000 ADD 1.2 0.05 576.0 3.0
// Output: tab-delimited cojo file with a fixed header
//   ID     A1  A2  FREQ  B    SE    P      N
//   rs123  A   G   0.25  1.2  0.05  0.001  5000
// ==============================================================================

use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::error::PrepError;
use crate::format::format_float;
use crate::io::{create_output, open_input, tab_writer, InputLines, STREAM_PATH};
use crate::layout::{ColumnLayout, ResolvedLayout};

/// Header line of every cojo output file
pub const COJO_HEADER: [&str; 8] = ["ID", "A1", "A2", "FREQ", "B", "SE", "P", "N"];

/// One converted row, borrowing its text fields from the input line
#[derive(Debug, Clone, PartialEq)]
pub struct CojoRecord<'a> {
    pub id: &'a str,
    /// Effect allele
    pub a1: &'a str,
    /// Other allele
    pub a2: &'a str,
    pub freq: &'a str,
    pub beta: &'a str,
    pub se: &'a str,
    /// Linear-scale p-value
    pub p_value: f64,
    pub n: &'a str,
}

impl<'a> CojoRecord<'a> {
    /// Extract a record from one space-delimited input line.
    ///
    /// The line is split on single spaces; runs of spaces produce empty fields.
    pub fn parse(
        line: &'a str,
        line_number: usize,
        layout: &ResolvedLayout,
    ) -> Result<Self, PrepError> {
        let fields: Vec<&str> = line.split(' ').collect();

        if fields.len() < layout.min_fields() {
            return Err(PrepError::MalformedRecord {
                line: line_number,
                expected: layout.min_fields(),
                found: fields.len(),
            });
        }

        let log10p_str = fields[layout.log10p];
        let log10p = log10p_str
            .trim()
            .parse::<f64>()
            .map_err(|_| PrepError::InvalidLog10P {
                line: line_number,
                value: log10p_str.to_string(),
            })?;

        Ok(Self {
            id: fields[layout.id],
            a1: fields[layout.a1],
            a2: fields[layout.a2],
            freq: fields[layout.freq],
            beta: fields[layout.beta],
            se: fields[layout.se],
            p_value: log10p_to_p(log10p),
            n: fields[layout.n],
        })
    }

    fn write_to<W: Write>(&self, writer: &mut csv::Writer<W>) -> Result<(), PrepError> {
        let p_value = format_float(self.p_value);
        writer.write_record([
            self.id,
            self.a1,
            self.a2,
            self.freq,
            self.beta,
            self.se,
            p_value.as_str(),
            self.n,
        ])?;
        Ok(())
    }
}

/// Convert a -log10 p-value back to the linear scale
///
/// No clamping: 0 gives 1, negative inputs give values above 1, and very
/// large inputs underflow to 0.
pub fn log10p_to_p(log10p: f64) -> f64 {
    10f64.powf(-log10p)
}

/// Outcome of a conversion run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Data rows read and written (one output row per input row)
    pub records: usize,
    /// Whether a header line was consumed from the input
    pub header_skipped: bool,
}

/// Regenie association result to cojo converter
#[derive(Debug, Clone, Default)]
pub struct RegenieConverter {
    layout: Option<ColumnLayout>,
    has_header: bool,
}

impl RegenieConverter {
    /// Converter for headerless input at the regenie column positions
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit column layout instead of the regenie default
    pub fn with_layout(mut self, layout: ColumnLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Treat the first input line as a header.
    ///
    /// Without an explicit layout, columns are then located by their regenie
    /// names rather than their positions.
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Convert `input` into a cojo file at `output`.
    ///
    /// The layout is resolved before the output file is created, so a missing
    /// header column leaves no output behind. A malformed row aborts the run;
    /// rows written before it stay on disk.
    pub fn convert(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<ConversionSummary, PrepError> {
        let input = input.as_ref();
        let output = output.as_ref();
        info!("Converting {} -> {}", input.display(), output.display());

        let mut lines = InputLines::new(open_input(input)?, input);
        let layout = self.resolve_layout(&mut lines)?;
        let file = create_output(output)?;

        let summary = self.write_records(lines, file, output, &layout)?;
        info!("Wrote {} cojo records to {}", summary.records, output.display());

        Ok(summary)
    }

    /// Convert from an already-open reader into any writer
    pub fn convert_reader<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: W,
    ) -> Result<ConversionSummary, PrepError> {
        let mut lines = InputLines::new(reader, STREAM_PATH);
        let layout = self.resolve_layout(&mut lines)?;
        self.write_records(lines, writer, Path::new(STREAM_PATH), &layout)
    }

    fn resolve_layout<R: BufRead>(
        &self,
        lines: &mut InputLines<R>,
    ) -> Result<ResolvedLayout, PrepError> {
        if !self.has_header {
            let layout = self.layout.clone().unwrap_or_default();
            return layout.resolve(None);
        }

        let header_line = lines.next_or_empty()?;
        let header: Vec<&str> = header_line.split(' ').collect();
        debug!("Input header has {} columns", header.len());

        let layout = self
            .layout
            .clone()
            .unwrap_or_else(ColumnLayout::regenie_names);
        layout.resolve(Some(header.as_slice()))
    }

    fn write_records<R: BufRead, W: Write>(
        &self,
        lines: InputLines<R>,
        writer: W,
        output: &Path,
        layout: &ResolvedLayout,
    ) -> Result<ConversionSummary, PrepError> {
        let mut writer = tab_writer(writer);
        writer.write_record(COJO_HEADER)?;

        let mut records = 0;

        for line_result in lines {
            let (line_number, line) = line_result?;
            let record = CojoRecord::parse(&line, line_number, layout)?;
            record.write_to(&mut writer)?;
            records += 1;
        }

        writer.flush().map_err(|e| PrepError::io(output, e))?;

        Ok(ConversionSummary {
            records,
            header_skipped: self.has_header,
        })
    }
}
