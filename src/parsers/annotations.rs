// ==============================================================================
// parsers/annotations.rs - PharmGKB Annotation Table Parsers
// ==============================================================================
// Description: Loads the variant-drug annotation table, the study parameters
//              table and the persisted (joined) annotation table
// Author: gero-drugs contributors
// Created: 2026-10-16
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================
// Format: Tab-delimited text with header row
// Example (var_drug_ann.tsv, projected columns only):
//   Variant Annotation ID    Variant/Haplotypes    Drug(s)      Phenotype Category ...
//   1449192334               rs3745274             efavirenz    Metabolism/PK ...
// ==============================================================================

use std::path::Path;
use tracing::info;

use super::tsv::TsvParser;
use crate::error::Result;
use crate::models::{
    AnnotationRecord, StudyParameters, VariantDrugAnnotation, ANNOTATION_COLUMNS,
    STUDY_PARAMETER_COLUMNS, VAR_DRUG_COLUMNS,
};

/// Parser for the PharmGKB source tables
pub struct AnnotationParser;

impl AnnotationParser {
    /// Parse `var_drug_ann.tsv`, projecting the annotation columns
    pub fn parse_variant_drug(path: impl AsRef<Path>) -> Result<Vec<VariantDrugAnnotation>> {
        let path = path.as_ref();
        let rows = TsvParser::new().parse(path, VAR_DRUG_COLUMNS)?;
        info!("Loaded {} variant-drug annotations from {:?}", rows.len(), path);
        Ok(rows)
    }

    /// Parse `study_parameters.tsv`, projecting the statistical columns
    ///
    /// An unparseable "Ratio Stat" fails the whole load.
    pub fn parse_study_parameters(path: impl AsRef<Path>) -> Result<Vec<StudyParameters>> {
        let path = path.as_ref();
        let rows = TsvParser::new().parse(path, STUDY_PARAMETER_COLUMNS)?;
        info!("Loaded {} study parameter rows from {:?}", rows.len(), path);
        Ok(rows)
    }

    /// Parse a previously written annotation table (`annotation_tab.tsv`)
    pub fn parse_annotation_table(path: impl AsRef<Path>) -> Result<Vec<AnnotationRecord>> {
        let path = path.as_ref();
        let rows = TsvParser::with_comments().parse(path, ANNOTATION_COLUMNS)?;
        info!("Loaded {} filtered annotations from {:?}", rows.len(), path);
        Ok(rows)
    }
}
