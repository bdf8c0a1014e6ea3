// ==============================================================================
// filter.rs - Annotation Quality Filtering
// ==============================================================================
// Description: Applies the ordered exclusion rules to joined annotations and
//              persists every excluded partition for audit
// Author: gero-drugs contributors
// Created: 2026-10-16
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================
// Algorithm:
//   kept = joined annotations
//   for each rule in EXCLUSION_RULES (fixed order):
//       excluded[rule] = rows of kept matching rule
//       missing_field += rows of kept whose tested field is null (unsaved)
//       kept           = remaining rows of kept
//   kept = rows of kept with a non-null "Ratio Stat" (others dropped, unsaved)
//
//   A row is recorded under the first rule that matches it, so the partitions
//   are disjoint and together with kept cover the whole input.
// ==============================================================================

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::PipelineLayout;
use crate::error::{PipelineError, Result};
use crate::models::{AnnotationRecord, ANNOTATION_COLUMNS};
use crate::output::{ensure_dir, write_json, write_tsv};

/// Drug names ending in "s" (but not "us") name a drug class, e.g. "statins".
/// "tacrolimus" and "sirolimus" are single drugs.
static DRUG_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^u]s$").unwrap());

/// Single-nucleotide variant identifiers; anything else is a haplotype name
static RSID_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^rs").unwrap());

/// A labelled exclusion predicate
///
/// The predicate yields `None` when the field it tests is null; such rows
/// can neither be kept nor excluded by the rule.
pub struct ExclusionRule {
    /// Partition name, also the excluded file stem
    pub label: &'static str,
    predicate: fn(&AnnotationRecord) -> Option<bool>,
}

impl ExclusionRule {
    /// `Some(true)` if `record` should be excluded by this rule, `None` if the
    /// tested field is null
    pub fn excludes(&self, record: &AnnotationRecord) -> Option<bool> {
        (self.predicate)(record)
    }
}

/// Exclusion rules in application order
pub static EXCLUSION_RULES: &[ExclusionRule] = &[
    ExclusionRule {
        label: "problematic_multi_var_hap_entries",
        predicate: |r| Some(r.variant.contains(',')),
    },
    ExclusionRule {
        label: "problematic_multi_drug_entries",
        predicate: |r| r.drugs.as_deref().map(|d| d.contains([',', '/'])),
    },
    ExclusionRule {
        label: "problematic_multi_pheno_cat",
        predicate: |r| r.phenotype_category.as_deref().map(|c| c.contains([',', '/'])),
    },
    ExclusionRule {
        label: "problematic_drug_class",
        predicate: |r| r.drugs.as_deref().map(|d| DRUG_CLASS.is_match(d)),
    },
    ExclusionRule {
        label: "problematic_haps",
        predicate: |r| Some(!RSID_PREFIX.is_match(&r.variant)),
    },
    ExclusionRule {
        label: "problematic_unknown_stat_type",
        predicate: |r| r.ratio_stat_type.as_deref().map(|t| t.contains("Unknown")),
    },
    ExclusionRule {
        label: "problematic_unclear_ref_alt_nucl",
        predicate: |r| Some(r.allele_in_cases.is_none() || r.allele_in_controls.is_none()),
    },
    ExclusionRule {
        label: "problematic_same_ref_alt_nucl",
        predicate: |r| Some(r.allele_in_cases == r.allele_in_controls),
    },
];

/// Rows removed by one exclusion rule
#[derive(Debug, Clone, PartialEq)]
pub struct ExcludedPartition {
    pub label: &'static str,
    pub records: Vec<AnnotationRecord>,
}

/// Result of filtering: the kept rows plus every exclusion partition
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    /// Rows passing every rule with a usable "Ratio Stat"
    pub kept: Vec<AnnotationRecord>,

    /// One partition per rule, in rule order
    pub excluded: Vec<ExcludedPartition>,

    /// Rows with a null "Drug(s)", "Phenotype Category" or "Ratio Stat Type"
    /// when a rule tested it (not persisted)
    pub missing_field: Vec<AnnotationRecord>,

    /// Rows passing every rule but lacking a "Ratio Stat" (not persisted)
    pub missing_ratio_stat: Vec<AnnotationRecord>,
}

impl FilterOutcome {
    /// Excluded rows for `label`, if such a rule exists
    pub fn partition(&self, label: &str) -> Option<&[AnnotationRecord]> {
        self.excluded
            .iter()
            .find(|p| p.label == label)
            .map(|p| p.records.as_slice())
    }

    /// Total number of rows across kept, excluded and dropped sets
    pub fn total(&self) -> usize {
        self.kept.len()
            + self.missing_field.len()
            + self.missing_ratio_stat.len()
            + self.excluded.iter().map(|p| p.records.len()).sum::<usize>()
    }

    pub fn summary(&self) -> FilterSummary {
        FilterSummary {
            input_rows: self.total(),
            excluded: self
                .excluded
                .iter()
                .map(|p| RuleCount {
                    label: p.label.to_string(),
                    rows: p.records.len(),
                })
                .collect(),
            missing_field: self.missing_field.len(),
            missing_ratio_stat: self.missing_ratio_stat.len(),
            kept: self.kept.len(),
        }
    }
}

/// Row counts per partition, persisted next to the filtered table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSummary {
    pub input_rows: usize,
    pub excluded: Vec<RuleCount>,
    pub missing_field: usize,
    pub missing_ratio_stat: usize,
    pub kept: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleCount {
    pub label: String,
    pub rows: usize,
}

/// Split `records` into kept rows and per-rule exclusions, without I/O
pub fn partition_annotations(records: Vec<AnnotationRecord>) -> FilterOutcome {
    let (kept, excluded, missing_field) = EXCLUSION_RULES.iter().fold(
        (records, Vec::with_capacity(EXCLUSION_RULES.len()), Vec::new()),
        |(kept, mut excluded, mut missing_field), rule| {
            let mut hits = Vec::new();
            let mut survivors = Vec::with_capacity(kept.len());
            let missing_before = missing_field.len();
            for record in kept {
                match rule.excludes(&record) {
                    Some(true) => hits.push(record),
                    Some(false) => survivors.push(record),
                    None => missing_field.push(record),
                }
            }
            debug!(
                "Rule {} excluded {} rows, {} dropped for a null field",
                rule.label,
                hits.len(),
                missing_field.len() - missing_before
            );
            excluded.push(ExcludedPartition {
                label: rule.label,
                records: hits,
            });
            (survivors, excluded, missing_field)
        },
    );

    let (kept, missing_ratio_stat): (Vec<_>, Vec<_>) =
        kept.into_iter().partition(|r| r.ratio_stat.is_some());

    FilterOutcome {
        kept,
        excluded,
        missing_field,
        missing_ratio_stat,
    }
}

/// Filter joined annotations and persist the results under `layout`
///
/// # Outputs
/// * `tempdata/excluded/<label>.tsv` - one file per rule, header always present
/// * `tempdata/annotation_tab.tsv` - kept rows
/// * `tempdata/filter_summary.json` - row counts per partition
///
/// # Errors
/// * `PipelineError::BaseNotFound` - the base directory does not exist
/// * `PipelineError::Io` / `PipelineError::Csv` - a write failed
pub fn filter_annotations(
    records: Vec<AnnotationRecord>,
    layout: &PipelineLayout,
) -> Result<FilterOutcome> {
    if !layout.base().exists() {
        return Err(PipelineError::BaseNotFound(layout.base().to_path_buf()));
    }

    let outcome = partition_annotations(records);

    let excluded_dir = layout.excluded_dir();
    info!("Writing excluded data to {:?}", excluded_dir);
    ensure_dir(&excluded_dir)?;

    for partition in &outcome.excluded {
        write_tsv(
            &layout.excluded_file(partition.label),
            ANNOTATION_COLUMNS,
            &partition.records,
        )?;
    }

    let annotation_tab: PathBuf = layout.annotation_tab();
    write_tsv(&annotation_tab, ANNOTATION_COLUMNS, &outcome.kept)?;

    let summary = outcome.summary();
    write_json(&layout.filter_summary(), &summary)?;

    for count in &summary.excluded {
        info!("  {}: {} rows", count.label, count.rows);
    }
    info!(
        "Filtering complete: {} of {} rows kept ({} dropped for a null text field, {} for missing Ratio Stat)",
        summary.kept, summary.input_rows, summary.missing_field, summary.missing_ratio_stat
    );
    info!("Filtered annotations saved to {:?}", annotation_tab);

    Ok(outcome)
}
