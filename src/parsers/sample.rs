// ==============================================================================
// parsers/sample.rs - Personal Genotype Sample Parser
// ==============================================================================
// Description: Parser for per-individual genotype calls keyed by rsID
// Author: gero-drugs contributors
// Created: 2026-10-16
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================
// Format: Tab-delimited text with header row, '#' comment lines allowed
// Example:
//   # toy sample
//   Variant/Haplotypes    ref    alt
//   rs3745274             G      T
// ==============================================================================

use std::path::Path;
use tracing::info;

use super::tsv::TsvParser;
use crate::error::Result;
use crate::models::{SampleGenotype, SAMPLE_COLUMNS};

/// Parser for genotype sample files
pub struct SampleParser;

impl SampleParser {
    /// Parse a sample genotype file
    ///
    /// Lines starting with '#' are treated as comments and skipped. Columns
    /// other than "Variant/Haplotypes", "ref" and "alt" are ignored.
    pub fn parse(path: impl AsRef<Path>) -> Result<Vec<SampleGenotype>> {
        let path = path.as_ref();
        let rows = TsvParser::with_comments().parse(path, SAMPLE_COLUMNS)?;
        info!("Loaded {} sample genotypes from {:?}", rows.len(), path);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_with_comments() {
        let contents = "\
# sample exported from genotyping array
# build GRCh37
Variant/Haplotypes\tchrom\tref\talt
rs3745274\t19\tG\tT
rs1045642\t7\tA\tG
";
        let file = create_test_file(contents);

        let records = SampleParser::parse(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].variant, "rs3745274");
        assert_eq!(records[0].ref_allele.as_deref(), Some("G"));
        assert_eq!(records[0].alt_allele.as_deref(), Some("T"));
        assert_eq!(records[1].variant, "rs1045642");
    }

    #[test]
    fn test_missing_alt_column() {
        let file = create_test_file("Variant/Haplotypes\tref\nrs1\tA\n");

        match SampleParser::parse(file.path()).unwrap_err() {
            PipelineError::MissingColumn { column, .. } => assert_eq!(column, "alt"),
            other => panic!("Expected MissingColumn error, got {:?}", other),
        }
    }

    #[test]
    fn test_header_only_sample() {
        let file = create_test_file("Variant/Haplotypes\tref\talt\n");

        let records = SampleParser::parse(file.path()).unwrap();

        assert!(records.is_empty());
    }
}
