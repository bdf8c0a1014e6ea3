// ==============================================================================
// output.rs - Table and Summary Output
// ==============================================================================
// Description: Writes typed rows as headered TSV and run summaries as JSON
// Author: gero-drugs contributors
// Created: 2026-10-16
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================

use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PipelineError, Result};

/// Create `dir` and any missing parents
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| PipelineError::io(dir, e))
}

/// Write `rows` to `path` as tab-delimited text
///
/// The header row is always written from `columns`, so an empty table still
/// produces a file with its header. `columns` must list the serde field names
/// of `T` in declaration order.
pub fn write_tsv<T: Serialize>(path: &Path, columns: &[&str], rows: &[T]) -> Result<PathBuf> {
    let file = File::create(path).map_err(|e| PipelineError::io(path, e))?;

    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(file);

    writer
        .write_record(columns)
        .map_err(|e| PipelineError::csv(path, e))?;

    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| PipelineError::csv(path, e))?;
    }

    writer.flush().map_err(|e| PipelineError::io(path, e))?;

    debug!("Wrote {} rows to {:?}", rows.len(), path);
    Ok(path.to_path_buf())
}

/// Write `value` to `path` as pretty-printed JSON
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<PathBuf> {
    let mut file = File::create(path).map_err(|e| PipelineError::io(path, e))?;

    serde_json::to_writer_pretty(&mut file, value)?;
    file.write_all(b"\n").map_err(|e| PipelineError::io(path, e))?;

    Ok(path.to_path_buf())
}
