// ==============================================================================
// models.rs - Annotation, Sample and Report Data Models
// ==============================================================================
// Description: Typed rows for PharmGKB annotation tables, genotype samples and
//              the drug-response report
// Author: gero-drugs contributors
// Created: 2026-10-16
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================
// Column names are the literal PharmGKB headers ("Drug(s)",
// "Variant/Haplotypes", ...). Empty TSV fields deserialize to None for
// Option<T> fields and to "" for plain String fields.
// ==============================================================================

use serde::{Deserialize, Serialize};

pub const COL_ANNOTATION_ID: &str = "Variant Annotation ID";
pub const COL_VARIANT: &str = "Variant/Haplotypes";
pub const COL_DRUGS: &str = "Drug(s)";
pub const COL_PHENOTYPE_CATEGORY: &str = "Phenotype Category";
pub const COL_SIGNIFICANCE: &str = "Significance";
pub const COL_SENTENCE: &str = "Sentence";
pub const COL_ALLELE_CASES: &str = "Allele Of Frequency In Cases";
pub const COL_ALLELE_CONTROLS: &str = "Allele Of Frequency In Controls";
pub const COL_P_VALUE: &str = "P Value";
pub const COL_RATIO_STAT_TYPE: &str = "Ratio Stat Type";
pub const COL_RATIO_STAT: &str = "Ratio Stat";
pub const COL_CI_START: &str = "Confidence Interval Start";
pub const COL_CI_STOP: &str = "Confidence Interval Stop";
pub const COL_REF: &str = "ref";
pub const COL_ALT: &str = "alt";
pub const COL_EFFECT: &str = "Effect";

/// Columns projected from the variant-drug annotation table
pub const VAR_DRUG_COLUMNS: &[&str] = &[
    COL_ANNOTATION_ID,
    COL_VARIANT,
    COL_DRUGS,
    COL_PHENOTYPE_CATEGORY,
    COL_SIGNIFICANCE,
    COL_SENTENCE,
];

/// Columns projected from the study parameters table
pub const STUDY_PARAMETER_COLUMNS: &[&str] = &[
    COL_ANNOTATION_ID,
    COL_ALLELE_CASES,
    COL_ALLELE_CONTROLS,
    COL_P_VALUE,
    COL_RATIO_STAT_TYPE,
    COL_RATIO_STAT,
    COL_CI_START,
    COL_CI_STOP,
];

/// Columns of the joined annotation table, in output order
pub const ANNOTATION_COLUMNS: &[&str] = &[
    COL_ANNOTATION_ID,
    COL_VARIANT,
    COL_DRUGS,
    COL_PHENOTYPE_CATEGORY,
    COL_SIGNIFICANCE,
    COL_SENTENCE,
    COL_ALLELE_CASES,
    COL_ALLELE_CONTROLS,
    COL_P_VALUE,
    COL_RATIO_STAT_TYPE,
    COL_RATIO_STAT,
    COL_CI_START,
    COL_CI_STOP,
];

/// Columns required in a genotype sample file
pub const SAMPLE_COLUMNS: &[&str] = &[COL_VARIANT, COL_REF, COL_ALT];

/// Columns of the final report, in output order
pub const REPORT_COLUMNS: &[&str] = &[
    COL_VARIANT,
    COL_DRUGS,
    COL_PHENOTYPE_CATEGORY,
    COL_SIGNIFICANCE,
    COL_SENTENCE,
    COL_ALLELE_CASES,
    COL_ALLELE_CONTROLS,
    COL_RATIO_STAT_TYPE,
    COL_EFFECT,
];

/// Projection of a row from `var_drug_ann.tsv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantDrugAnnotation {
    #[serde(rename = "Variant Annotation ID")]
    pub annotation_id: String,

    /// rsID (e.g., "rs3745274") or haplotype name (e.g., "CYP2D6*4")
    #[serde(rename = "Variant/Haplotypes")]
    pub variant: String,

    #[serde(rename = "Drug(s)")]
    pub drugs: Option<String>,

    #[serde(rename = "Phenotype Category")]
    pub phenotype_category: Option<String>,

    #[serde(rename = "Significance")]
    pub significance: String,

    #[serde(rename = "Sentence")]
    pub sentence: String,
}

/// Projection of a row from `study_parameters.tsv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyParameters {
    #[serde(rename = "Variant Annotation ID")]
    pub annotation_id: String,

    #[serde(rename = "Allele Of Frequency In Cases")]
    pub allele_in_cases: Option<String>,

    #[serde(rename = "Allele Of Frequency In Controls")]
    pub allele_in_controls: Option<String>,

    /// Kept verbatim, PharmGKB writes values such as "< 0.05"
    #[serde(rename = "P Value")]
    pub p_value: Option<String>,

    #[serde(rename = "Ratio Stat Type")]
    pub ratio_stat_type: Option<String>,

    #[serde(rename = "Ratio Stat")]
    pub ratio_stat: Option<f64>,

    #[serde(rename = "Confidence Interval Start")]
    pub ci_start: Option<f64>,

    #[serde(rename = "Confidence Interval Stop")]
    pub ci_stop: Option<f64>,
}

/// Joined annotation row (variant-drug annotation + study parameters)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    #[serde(rename = "Variant Annotation ID")]
    pub annotation_id: String,

    #[serde(rename = "Variant/Haplotypes")]
    pub variant: String,

    #[serde(rename = "Drug(s)")]
    pub drugs: Option<String>,

    #[serde(rename = "Phenotype Category")]
    pub phenotype_category: Option<String>,

    #[serde(rename = "Significance")]
    pub significance: String,

    #[serde(rename = "Sentence")]
    pub sentence: String,

    #[serde(rename = "Allele Of Frequency In Cases")]
    pub allele_in_cases: Option<String>,

    #[serde(rename = "Allele Of Frequency In Controls")]
    pub allele_in_controls: Option<String>,

    #[serde(rename = "P Value")]
    pub p_value: Option<String>,

    #[serde(rename = "Ratio Stat Type")]
    pub ratio_stat_type: Option<String>,

    #[serde(rename = "Ratio Stat")]
    pub ratio_stat: Option<f64>,

    #[serde(rename = "Confidence Interval Start")]
    pub ci_start: Option<f64>,

    #[serde(rename = "Confidence Interval Stop")]
    pub ci_stop: Option<f64>,
}

impl AnnotationRecord {
    /// Combine a variant-drug row with one of its study parameter rows
    pub fn join(annotation: &VariantDrugAnnotation, params: &StudyParameters) -> Self {
        Self {
            annotation_id: annotation.annotation_id.clone(),
            variant: annotation.variant.clone(),
            drugs: annotation.drugs.clone(),
            phenotype_category: annotation.phenotype_category.clone(),
            significance: annotation.significance.clone(),
            sentence: annotation.sentence.clone(),
            allele_in_cases: params.allele_in_cases.clone(),
            allele_in_controls: params.allele_in_controls.clone(),
            p_value: params.p_value.clone(),
            ratio_stat_type: params.ratio_stat_type.clone(),
            ratio_stat: params.ratio_stat,
            ci_start: params.ci_start,
            ci_stop: params.ci_stop,
        }
    }
}

/// Genotype call for one variant of the personal sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleGenotype {
    #[serde(rename = "Variant/Haplotypes")]
    pub variant: String,

    /// Reference allele
    #[serde(rename = "ref")]
    pub ref_allele: Option<String>,

    /// Alternate allele observed for this individual
    #[serde(rename = "alt")]
    pub alt_allele: Option<String>,
}

/// One row of the drug-response report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    #[serde(rename = "Variant/Haplotypes")]
    pub variant: String,

    #[serde(rename = "Drug(s)")]
    pub drugs: Option<String>,

    #[serde(rename = "Phenotype Category")]
    pub phenotype_category: Option<String>,

    #[serde(rename = "Significance")]
    pub significance: String,

    #[serde(rename = "Sentence")]
    pub sentence: String,

    #[serde(rename = "Allele Of Frequency In Cases")]
    pub allele_in_cases: Option<String>,

    #[serde(rename = "Allele Of Frequency In Controls")]
    pub allele_in_controls: Option<String>,

    #[serde(rename = "Ratio Stat Type")]
    pub ratio_stat_type: Option<String>,

    /// Direction-corrected ratio statistic for this individual
    #[serde(rename = "Effect")]
    pub effect: Option<f64>,
}
