// ==============================================================================
// parsers/tsv.rs - Typed Tab-Delimited Table Reader
// ==============================================================================
// Description: Reads headered TSV files into serde rows after checking that
//              every required column is present
// Author: gero-drugs contributors
// Created: 2026-10-16
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================

use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;
use tracing::debug;

use crate::error::{PipelineError, Result};

/// Reader for tab-delimited tables with a header row
#[derive(Debug, Clone, Default)]
pub struct TsvParser {
    /// Skip lines starting with '#'
    pub skip_comments: bool,
}

impl TsvParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser that treats '#'-prefixed lines as comments
    pub fn with_comments() -> Self {
        Self {
            skip_comments: true,
        }
    }

    /// Parse `path` into rows of `T`
    ///
    /// # Arguments
    /// * `path` - Tab-delimited file with a header row
    /// * `required` - Column names that must appear in the header
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - Rows in file order (may be empty)
    /// * `Err(PipelineError::Io)` - File missing or unreadable
    /// * `Err(PipelineError::MissingColumn)` - Header lacks a required column
    /// * `Err(PipelineError::Csv)` - Malformed row or unparseable numeric field
    ///
    /// Columns not named by `T` are ignored.
    pub fn parse<T: DeserializeOwned>(&self, path: impl AsRef<Path>, required: &[&str]) -> Result<Vec<T>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| PipelineError::io(path, e))?;

        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .comment(if self.skip_comments { Some(b'#') } else { None })
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| PipelineError::csv(path, e))?
            .clone();

        for column in required {
            if !headers.iter().any(|h| h == *column) {
                return Err(PipelineError::MissingColumn {
                    column: column.to_string(),
                    path: path.to_path_buf(),
                });
            }
        }

        let rows = reader
            .deserialize()
            .collect::<std::result::Result<Vec<T>, csv::Error>>()
            .map_err(|e| PipelineError::csv(path, e))?;

        debug!("Read {} rows from {:?}", rows.len(), path);
        Ok(rows)
    }
}
