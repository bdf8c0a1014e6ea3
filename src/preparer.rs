// ==============================================================================
// preparer.rs - Annotation Table Preparation
// ==============================================================================
// Description: Loads the PharmGKB source tables, joins them on the variant
//              annotation ID and hands the result to the filter
// Author: gero-drugs contributors
// Created: 2026-10-16
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================

use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

use crate::config::PipelineLayout;
use crate::error::{PipelineError, Result};
use crate::filter::{filter_annotations, FilterOutcome};
use crate::models::{AnnotationRecord, StudyParameters, VariantDrugAnnotation};
use crate::parsers::AnnotationParser;

/// Inner-join variant-drug annotations with study parameters
///
/// Output follows annotation order; an annotation with several study
/// parameter rows yields one joined row per pairing, in study parameter file
/// order. Rows without a partner on the other side are dropped.
pub fn join_annotations(
    annotations: &[VariantDrugAnnotation],
    params: &[StudyParameters],
) -> Vec<AnnotationRecord> {
    let mut by_id: HashMap<&str, Vec<&StudyParameters>> = HashMap::new();
    for p in params {
        by_id.entry(p.annotation_id.as_str()).or_default().push(p);
    }

    let joined: Vec<AnnotationRecord> = annotations
        .iter()
        .flat_map(|a| {
            by_id
                .get(a.annotation_id.as_str())
                .into_iter()
                .flatten()
                .map(move |p| AnnotationRecord::join(a, p))
        })
        .collect();

    let unmatched_annotations = annotations
        .iter()
        .filter(|a| !by_id.contains_key(a.annotation_id.as_str()))
        .count();
    let annotation_ids: HashSet<&str> =
        annotations.iter().map(|a| a.annotation_id.as_str()).collect();
    let unmatched_params = params
        .iter()
        .filter(|p| !annotation_ids.contains(p.annotation_id.as_str()))
        .count();

    debug!(
        "Join dropped {} annotations and {} study parameter rows without a partner",
        unmatched_annotations, unmatched_params
    );

    joined
}

/// Build, filter and persist the annotation table for `layout`
///
/// Reads `inputdata/var_drug_ann.tsv` and `inputdata/study_parameters.tsv`,
/// joins them and runs [`filter_annotations`] on the result.
pub fn prepare_annotations(layout: &PipelineLayout) -> Result<FilterOutcome> {
    if !layout.base().exists() {
        return Err(PipelineError::BaseNotFound(layout.base().to_path_buf()));
    }

    info!(
        "Initial data preparation started, input folder is {:?}",
        layout.input_dir()
    );

    let annotations = AnnotationParser::parse_variant_drug(layout.var_drug_ann())?;
    let params = AnnotationParser::parse_study_parameters(layout.study_parameters())?;

    let joined = join_annotations(&annotations, &params);
    info!("Assembled annotation table with {} rows", joined.len());

    filter_annotations(joined, layout)
}
