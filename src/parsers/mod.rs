// ==============================================================================
// parsers/mod.rs - File parser modules
// ==============================================================================
// Description: Parsers for annotation tables and genotype samples
// Author: gero-drugs contributors
// Created: 2026-10-16
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================

pub mod annotations;
pub mod sample;
pub mod tsv;

pub use annotations::AnnotationParser;
pub use sample::SampleParser;
pub use tsv::TsvParser;
