// ==============================================================================
// layout.rs - Association Result Column Layout
// ==============================================================================
// Description: Maps cojo output roles to regenie input columns
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 1.0.0
// ==============================================================================
// Regenie step 2 columns (space-delimited, zero-based):
//   0 CHROM  1 GENPOS  2 ID  3 ALLELE0  4 ALLELE1  5 A1FREQ  6 INFO  7 N
//   8 TEST   9 BETA   10 SE 11 CHISQ  12 LOG10P 13 EXTRA
//
// Layout file (JSON), every role optional:
//   { "id": 2, "a1": "ALLELE1", "log10p": 12 }
// ==============================================================================

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::PrepError;

/// Reference to an input column, either by position or by header name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnRef {
    Index(usize),
    Name(String),
}

impl From<usize> for ColumnRef {
    fn from(index: usize) -> Self {
        ColumnRef::Index(index)
    }
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> Self {
        ColumnRef::Name(name.to_string())
    }
}

/// Where each cojo field comes from in the association result file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnLayout {
    /// Variant identifier
    pub id: ColumnRef,
    /// Effect allele (regenie ALLELE1)
    pub a1: ColumnRef,
    /// Other allele (regenie ALLELE0)
    pub a2: ColumnRef,
    /// Effect allele frequency
    pub freq: ColumnRef,
    /// Effect size
    pub beta: ColumnRef,
    /// Standard error of the effect size
    pub se: ColumnRef,
    /// -log10 of the p-value
    pub log10p: ColumnRef,
    /// Sample size
    pub n: ColumnRef,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::regenie_positions()
    }
}

impl ColumnLayout {
    /// Fixed positions of a headerless regenie result
    pub fn regenie_positions() -> Self {
        Self {
            id: 2.into(),
            a1: 4.into(),
            a2: 3.into(),
            freq: 5.into(),
            beta: 9.into(),
            se: 10.into(),
            log10p: 12.into(),
            n: 7.into(),
        }
    }

    /// Regenie header names, for results that still carry their header line
    pub fn regenie_names() -> Self {
        Self {
            id: "ID".into(),
            a1: "ALLELE1".into(),
            a2: "ALLELE0".into(),
            freq: "A1FREQ".into(),
            beta: "BETA".into(),
            se: "SE".into(),
            log10p: "LOG10P".into(),
            n: "N".into(),
        }
    }

    /// Load a layout from a JSON file; omitted roles keep their regenie position
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PrepError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| PrepError::io(path, e))?;
        let layout: ColumnLayout = serde_json::from_str(&text)?;
        Ok(layout)
    }

    fn roles(&self) -> [(&'static str, &ColumnRef); 8] {
        [
            ("id", &self.id),
            ("a1", &self.a1),
            ("a2", &self.a2),
            ("freq", &self.freq),
            ("beta", &self.beta),
            ("se", &self.se),
            ("log10p", &self.log10p),
            ("n", &self.n),
        ]
    }

    /// Resolve every role to a column index.
    ///
    /// Name references need the input's header fields; a name missing from
    /// the header is reported as `ColumnNotFound`.
    pub fn resolve(&self, header: Option<&[&str]>) -> Result<ResolvedLayout, PrepError> {
        let mut indices = [0usize; 8];

        for (slot, (role, column)) in indices.iter_mut().zip(self.roles()) {
            *slot = match column {
                ColumnRef::Index(index) => *index,
                ColumnRef::Name(name) => {
                    let fields = header.ok_or_else(|| {
                        PrepError::InvalidLayout(format!(
                            "role '{}' refers to column '{}' but the input has no header",
                            role, name
                        ))
                    })?;
                    fields
                        .iter()
                        .position(|field| *field == name.as_str())
                        .ok_or_else(|| PrepError::ColumnNotFound { name: name.clone() })?
                }
            };
            debug!("Column role {} -> index {}", role, slot);
        }

        let [id, a1, a2, freq, beta, se, log10p, n] = indices;
        let widest = indices.iter().copied().max().unwrap_or(0);
        let min_fields = widest.checked_add(1).ok_or_else(|| {
            PrepError::InvalidLayout(format!("column index {} is out of range", widest))
        })?;

        Ok(ResolvedLayout {
            id,
            a1,
            a2,
            freq,
            beta,
            se,
            log10p,
            n,
            min_fields,
        })
    }
}

/// Column layout with every role resolved to a zero-based index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLayout {
    pub id: usize,
    pub a1: usize,
    pub a2: usize,
    pub freq: usize,
    pub beta: usize,
    pub se: usize,
    pub log10p: usize,
    pub n: usize,
    min_fields: usize,
}

impl ResolvedLayout {
    /// Number of fields a row needs for every role to be present
    pub fn min_fields(&self) -> usize {
        self.min_fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const REGENIE_HEADER: [&str; 14] = [
        "CHROM", "GENPOS", "ID", "ALLELE0", "ALLELE1", "A1FREQ", "INFO", "N", "TEST", "BETA",
        "SE", "CHISQ", "LOG10P", "EXTRA",
    ];

    #[test]
    fn test_default_positions() {
        let resolved = ColumnLayout::default().resolve(None).unwrap();

        assert_eq!(resolved.id, 2);
        assert_eq!(resolved.a1, 4);
        assert_eq!(resolved.a2, 3);
        assert_eq!(resolved.freq, 5);
        assert_eq!(resolved.beta, 9);
        assert_eq!(resolved.se, 10);
        assert_eq!(resolved.log10p, 12);
        assert_eq!(resolved.n, 7);
        assert_eq!(resolved.min_fields(), 13);
    }

    #[test]
    fn test_names_match_positions() {
        let by_name = ColumnLayout::regenie_names()
            .resolve(Some(&REGENIE_HEADER[..]))
            .unwrap();
        let by_position = ColumnLayout::regenie_positions().resolve(None).unwrap();

        assert_eq!(by_name, by_position);
    }

    #[test]
    fn test_name_without_header() {
        let result = ColumnLayout::regenie_names().resolve(None);
        match result.unwrap_err() {
            PrepError::InvalidLayout(msg) => assert!(msg.contains("ID")),
            other => panic!("Expected InvalidLayout error, got {:?}", other),
        }
    }

    #[test]
    fn test_name_missing_from_header() {
        let header = ["CHROM", "GENPOS", "ID"];
        let result = ColumnLayout::regenie_names().resolve(Some(&header[..]));
        match result.unwrap_err() {
            PrepError::ColumnNotFound { name } => assert_eq!(name, "ALLELE1"),
            other => panic!("Expected ColumnNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_json_partial_override() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "log10p": 13, "n": "N" }}"#).unwrap();
        file.flush().unwrap();

        let layout = ColumnLayout::from_json_file(file.path()).unwrap();
        assert_eq!(layout.log10p, ColumnRef::Index(13));
        assert_eq!(layout.n, ColumnRef::Name("N".to_string()));
        assert_eq!(layout.id, ColumnRef::Index(2));

        let mut header = REGENIE_HEADER.to_vec();
        header.push("LOG10P_ADJ");
        let resolved = layout.resolve(Some(&header[..])).unwrap();
        assert_eq!(resolved.log10p, 13);
        assert_eq!(resolved.n, 7);
        assert_eq!(resolved.min_fields(), 14);
    }

    #[test]
    fn test_index_at_usize_max() {
        let layout = ColumnLayout {
            id: ColumnRef::Index(usize::MAX),
            ..ColumnLayout::regenie_positions()
        };

        match layout.resolve(None).unwrap_err() {
            PrepError::InvalidLayout(msg) => assert!(msg.contains(&usize::MAX.to_string())),
            other => panic!("Expected InvalidLayout error, got {:?}", other),
        }
    }

    #[test]
    fn test_json_huge_index() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "id": {} }}"#, usize::MAX).unwrap();
        file.flush().unwrap();

        let layout = ColumnLayout::from_json_file(file.path()).unwrap();
        let err = layout.resolve(None).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_json_unknown_role() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "pvalue": 12 }}"#).unwrap();
        file.flush().unwrap();

        let result = ColumnLayout::from_json_file(file.path());
        match result.unwrap_err() {
            PrepError::LayoutConfig(_) => {}
            other => panic!("Expected LayoutConfig error, got {:?}", other),
        }
    }
}
