// ==============================================================================
// config.rs - Pipeline Directory Layout
// ==============================================================================
// Description: File and directory names derived from the base folder
// Author: gero-drugs contributors
// Created: 2026-10-16
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================
// Layout:
//   BASE/inputdata/var_drug_ann.tsv
//   BASE/inputdata/study_parameters.tsv
//   BASE/tempdata/annotation_tab.tsv
//   BASE/tempdata/filter_summary.json
//   BASE/tempdata/excluded/<rule>.tsv
//   BASE/output/report.tsv
// ==============================================================================

use std::path::{Path, PathBuf};

pub const INPUT_DIR: &str = "inputdata";
pub const TEMP_DIR: &str = "tempdata";
pub const EXCLUDED_DIR: &str = "excluded";
pub const OUTPUT_DIR: &str = "output";

pub const VAR_DRUG_ANN_FILE: &str = "var_drug_ann.tsv";
pub const STUDY_PARAMETERS_FILE: &str = "study_parameters.tsv";
pub const ANNOTATION_TAB_FILE: &str = "annotation_tab.tsv";
pub const FILTER_SUMMARY_FILE: &str = "filter_summary.json";
pub const REPORT_FILE: &str = "report.tsv";

/// Default sample path for the `run` command
pub const DEFAULT_SAMPLE: &str = "./inputdata/toy-rsids.tsv";
/// Default annotation table path for the `run` command
pub const DEFAULT_ANNOTATIONS: &str = "./tempdata/annotation_tab.tsv";

/// Every path the pipeline reads or writes, resolved against one base folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineLayout {
    base: PathBuf,
}

impl PipelineLayout {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Resolve `base` to an absolute path, falling back to joining it onto
    /// the working directory when it cannot be canonicalized yet
    pub fn resolve(base: impl AsRef<Path>) -> std::io::Result<Self> {
        let base = base.as_ref();
        let absolute = match base.canonicalize() {
            Ok(path) => path,
            Err(_) => std::env::current_dir()?.join(base),
        };
        Ok(Self::new(absolute))
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn input_dir(&self) -> PathBuf {
        self.base.join(INPUT_DIR)
    }

    pub fn var_drug_ann(&self) -> PathBuf {
        self.input_dir().join(VAR_DRUG_ANN_FILE)
    }

    pub fn study_parameters(&self) -> PathBuf {
        self.input_dir().join(STUDY_PARAMETERS_FILE)
    }

    pub fn temp_dir(&self) -> PathBuf {
        self.base.join(TEMP_DIR)
    }

    pub fn annotation_tab(&self) -> PathBuf {
        self.temp_dir().join(ANNOTATION_TAB_FILE)
    }

    pub fn filter_summary(&self) -> PathBuf {
        self.temp_dir().join(FILTER_SUMMARY_FILE)
    }

    pub fn excluded_dir(&self) -> PathBuf {
        self.temp_dir().join(EXCLUDED_DIR)
    }

    /// Path of the partition file for an exclusion rule label
    pub fn excluded_file(&self, label: &str) -> PathBuf {
        self.excluded_dir().join(format!("{}.tsv", label))
    }

    pub fn output_dir(&self) -> PathBuf {
        self.base.join(OUTPUT_DIR)
    }

    pub fn report(&self) -> PathBuf {
        self.output_dir().join(REPORT_FILE)
    }
}
