// ==============================================================================
// analyzer.rs - Sample Genotype Analysis
// ==============================================================================
// Description: Joins filtered annotations with a personal genotype sample and
//              writes the per-variant drug-response report
// Author: gero-drugs contributors
// Created: 2026-10-16
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================
// Effect:
//   Effect = Ratio Stat                      if "Allele Of Frequency In Cases" == alt
//   Effect = round(1 / Ratio Stat, 3)        otherwise (including a missing alt)
// ==============================================================================

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::PipelineLayout;
use crate::error::{PipelineError, Result};
use crate::models::{AnnotationRecord, ReportRecord, SampleGenotype, REPORT_COLUMNS};
use crate::output::{ensure_dir, write_tsv};
use crate::parsers::{AnnotationParser, SampleParser};

/// Round to three decimal places
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Direction-corrected ratio statistic for one individual
///
/// # Arguments
/// * `ratio_stat` - Study ratio statistic (e.g., odds ratio)
/// * `allele_in_cases` - Allele the study observed in cases
/// * `alt_allele` - Alternate allele called for the individual
///
/// # Examples
/// ```
/// use gero_drugs::analyzer::compute_effect;
///
/// assert_eq!(compute_effect(2.5, Some("A"), Some("A")), 2.5);
/// assert_eq!(compute_effect(2.5, Some("A"), Some("G")), 0.4);
/// ```
pub fn compute_effect(ratio_stat: f64, allele_in_cases: Option<&str>, alt_allele: Option<&str>) -> f64 {
    match (allele_in_cases, alt_allele) {
        (Some(cases), Some(alt)) if cases == alt => ratio_stat,
        _ => round3(1.0 / ratio_stat),
    }
}

/// Inner-join annotations with sample calls on "Variant/Haplotypes"
///
/// Output follows annotation order; a variant called more than once in the
/// sample yields one report row per call.
pub fn build_report(annotations: &[AnnotationRecord], sample: &[SampleGenotype]) -> Vec<ReportRecord> {
    let mut calls: HashMap<&str, Vec<&SampleGenotype>> = HashMap::new();
    for genotype in sample {
        calls.entry(genotype.variant.as_str()).or_default().push(genotype);
    }

    annotations
        .iter()
        .flat_map(|annotation| {
            calls
                .get(annotation.variant.as_str())
                .into_iter()
                .flatten()
                .map(move |genotype| ReportRecord {
                    variant: annotation.variant.clone(),
                    drugs: annotation.drugs.clone(),
                    phenotype_category: annotation.phenotype_category.clone(),
                    significance: annotation.significance.clone(),
                    sentence: annotation.sentence.clone(),
                    allele_in_cases: annotation.allele_in_cases.clone(),
                    allele_in_controls: annotation.allele_in_controls.clone(),
                    ratio_stat_type: annotation.ratio_stat_type.clone(),
                    effect: annotation.ratio_stat.map(|ratio| {
                        compute_effect(
                            ratio,
                            annotation.allele_in_cases.as_deref(),
                            genotype.alt_allele.as_deref(),
                        )
                    }),
                })
        })
        .collect()
}

/// Analyze `sample` against already loaded annotations
///
/// Writes `output/report.tsv` under `layout` and returns its path. An empty
/// join still writes the report header and is logged as a warning.
pub fn analyze(sample: &Path, annotations: &[AnnotationRecord], layout: &PipelineLayout) -> Result<PathBuf> {
    let genotypes = SampleParser::parse(sample)?;
    let report = build_report(annotations, &genotypes);

    if report.is_empty() {
        warn!(
            "No sample variants matched the {} filtered annotations; report will be empty",
            annotations.len()
        );
    }

    ensure_dir(&layout.output_dir())?;
    let report_path = write_tsv(&layout.report(), REPORT_COLUMNS, &report)?;

    info!("Successfully wrote report with {} rows to {:?}", report.len(), report_path);
    Ok(report_path)
}

/// Load the annotation table at `annotations` and analyze `sample`
///
/// Both files must exist; a missing one fails with `InputNotFound` before
/// anything is read.
pub fn run_analysis(sample: &Path, annotations: &Path, layout: &PipelineLayout) -> Result<PathBuf> {
    for input in [sample, annotations] {
        if !input.exists() {
            return Err(PipelineError::InputNotFound(input.to_path_buf()));
        }
    }

    let annotation_tab = AnnotationParser::parse_annotation_table(annotations)?;
    analyze(sample, &annotation_tab, layout)
}
