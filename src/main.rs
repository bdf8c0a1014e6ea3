// ==============================================================================
// main.rs - Gero Drugs Entry Point
// ==============================================================================
// Description: Command line interface for annotation preparation and sample
//              drug-response reporting
// Author: gero-drugs contributors
// Created: 2026-10-16
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gero_drugs::analyzer;
use gero_drugs::config::{PipelineLayout, DEFAULT_ANNOTATIONS, DEFAULT_SAMPLE};
use gero_drugs::preparer;

#[derive(Parser, Debug)]
#[command(author, version, about = "Pharmacogenomic drug-response reports from PharmGKB annotations", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Join and filter the PharmGKB tables found in BASE/inputdata
    Init {
        /// Base folder containing inputdata/
        #[arg(default_value = ".")]
        base: PathBuf,
    },

    /// Write the drug-response report for a genotype sample
    Run {
        /// Sample genotype table (Variant/Haplotypes, ref, alt)
        #[arg(default_value = DEFAULT_SAMPLE)]
        sample: PathBuf,

        /// Filtered annotation table produced by `init`
        #[arg(default_value = DEFAULT_ANNOTATIONS)]
        annotations: PathBuf,

        /// Base folder receiving output/report.tsv
        #[arg(default_value = ".")]
        base: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "gero_drugs=debug"
    } else {
        "gero_drugs=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Running gero-drugs application");

    match cli.command {
        Command::Init { base } => {
            let layout = PipelineLayout::resolve(&base)
                .with_context(|| format!("Failed to resolve base folder {:?}", base))?;

            let outcome = preparer::prepare_annotations(&layout)
                .context("Failed to prepare annotations")?;

            info!(
                "Annotation table ready: {} rows at {:?}",
                outcome.kept.len(),
                layout.annotation_tab()
            );
        }
        Command::Run {
            sample,
            annotations,
            base,
        } => {
            let layout = PipelineLayout::resolve(&base)
                .with_context(|| format!("Failed to resolve base folder {:?}", base))?;
            info!("Initializing the annotations with base folder {:?}", layout.base());

            let report_path = analyzer::run_analysis(&sample, &annotations, &layout)
                .context("Failed to analyze sample")?;

            info!("Report complete: {:?}", report_path);
        }
    }

    Ok(())
}
