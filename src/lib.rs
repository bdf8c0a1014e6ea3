// ==============================================================================
// lib.rs - Gero Drugs Library
// ==============================================================================
// Description: Library interface for the pharmacogenomic annotation pipeline
// Author: gero-drugs contributors
// Created: 2026-10-16
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================

pub mod analyzer;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod output;
pub mod parsers;
pub mod preparer;

pub use error::{PipelineError, Result};
