// ==============================================================================
// io.rs - Input/Output Helpers
// ==============================================================================
// Description: Opens plain or gzip-compressed inputs and tab-delimited outputs
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 1.0.0
// ==============================================================================
// Compression is detected by magic number, not by file extension:
//   1f 8b = gzip (including bgzip, which is a series of gzip members)
// ==============================================================================

use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::PrepError;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Open an input file for line-oriented reading.
///
/// Gzip and bgzip inputs are decompressed transparently.
pub fn open_input(path: impl AsRef<Path>) -> Result<Box<dyn BufRead>, PrepError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| PrepError::io(path, e))?;
    let mut reader = BufReader::new(file);

    let compressed = {
        let head = reader.fill_buf().map_err(|e| PrepError::io(path, e))?;
        head.starts_with(&GZIP_MAGIC)
    };

    if compressed {
        debug!("Detected gzip input: {}", path.display());
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
    } else {
        Ok(Box::new(reader))
    }
}

/// Create (or truncate) an output file
pub fn create_output(path: impl AsRef<Path>) -> Result<File, PrepError> {
    let path = path.as_ref();
    File::create(path).map_err(|e| PrepError::io(path, e))
}

/// Label used in errors for inputs that are not named files
pub const STREAM_PATH: &str = "-";

/// Lines of a text input with their 1-based line numbers.
///
/// The `\n` or `\r\n` terminator is stripped and nothing else. Read failures
/// carry the input path; a line that is not UTF-8 is `InvalidText`.
pub struct InputLines<R> {
    reader: R,
    path: PathBuf,
    buf: Vec<u8>,
    line: usize,
}

impl<R: BufRead> InputLines<R> {
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            path: path.into(),
            buf: Vec::new(),
            line: 0,
        }
    }

    /// Next line's text, or an empty string at end of input
    pub fn next_or_empty(&mut self) -> Result<String, PrepError> {
        self.next().map_or(Ok(String::new()), |result| result.map(|(_, text)| text))
    }
}

impl<R: BufRead> Iterator for InputLines<R> {
    type Item = Result<(usize, String), PrepError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line += 1;
                if self.buf.ends_with(b"\n") {
                    self.buf.pop();
                    if self.buf.ends_with(b"\r") {
                        self.buf.pop();
                    }
                }
                let line = self.line;
                Some(
                    std::str::from_utf8(&self.buf)
                        .map(|text| (line, text.to_string()))
                        .map_err(|_| PrepError::InvalidText { line }),
                )
            }
            Err(e) => Some(Err(PrepError::io(&self.path, e))),
        }
    }
}

/// Tab-delimited writer that never quotes and always ends rows with `\n`
pub fn tab_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(false)
        .flexible(true)
        .from_writer(writer)
}
