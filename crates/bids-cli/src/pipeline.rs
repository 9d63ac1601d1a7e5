//! Inventory pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Scan**: List `*raw` dataset directories under each root
//! 2. **Extract**: Build one record per dataset that has subjects
//! 3. **Assemble**: Collect records into a table, rejecting duplicate names
//! 4. **Output**: Write the TSV and append the markdown table
//!
//! Outputs are only written once the table is complete, so a fatal error
//! leaves earlier output files untouched.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use bids_ingest::{DEBUG_DATASET_LIMIT, extract_dataset, list_raw_datasets};
use bids_model::{DatasetTable, Diagnostics};
use bids_report::{append_markdown, write_tsv};

// ============================================================================
// Stages 1-3: Scan, Extract, Assemble
// ============================================================================

/// Options controlling which datasets are scanned.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Keep only the first `limit` candidates of each root.
    pub limit: Option<usize>,
}

impl ScanOptions {
    /// Options for a debug run, limited to the first few datasets per root.
    pub fn debug() -> Self {
        Self {
            limit: Some(DEBUG_DATASET_LIMIT),
        }
    }
}

/// Result of the scan stages.
#[derive(Debug, Default)]
pub struct Inventory {
    /// Records sorted by dataset name.
    pub table: DatasetTable,
    /// Non-fatal findings, in the order they were raised.
    pub diagnostics: Diagnostics,
    /// Number of `*raw` directories considered.
    pub candidates: usize,
}

/// Scans every root and assembles the sorted inventory table.
///
/// # Errors
///
/// Fails on a missing root, any filesystem error, or a dataset name seen twice.
pub fn scan_roots(roots: &[PathBuf], options: ScanOptions) -> Result<Inventory> {
    let mut inventory = Inventory::default();
    for root in roots {
        scan_root(root, options, &mut inventory)?;
    }
    inventory.table.sort_by_name();
    Ok(inventory)
}

fn scan_root(root: &Path, options: ScanOptions, inventory: &mut Inventory) -> Result<()> {
    let span = info_span!("root", root = %root.display());
    let _guard = span.enter();
    let start = Instant::now();

    let datasets = list_raw_datasets(root, options.limit)
        .with_context(|| format!("list datasets in {}", root.display()))?;
    info!(candidate_count = datasets.len(), "listing datasets");

    for dataset in &datasets {
        inventory.candidates += 1;
        let record = extract_dataset(dataset, &mut inventory.diagnostics)
            .with_context(|| format!("inventory {}", dataset.display()))?;
        let Some(record) = record else {
            continue;
        };
        info!(
            dataset = %record.name,
            subjects = record.nb_subjects,
            "dataset inventoried"
        );
        inventory.table.push(record)?;
    }

    debug!(
        record_count = inventory.table.len(),
        duration_ms = start.elapsed().as_millis(),
        "root scanned"
    );
    Ok(())
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Where the reports are written.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub tsv: PathBuf,
    pub markdown: PathBuf,
}

/// Paths of the reports that were written.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub tsv: PathBuf,
    pub markdown: PathBuf,
}

/// Writes the TSV report and appends the markdown table.
pub fn write_outputs(table: &DatasetTable, config: &OutputConfig) -> Result<OutputPaths> {
    write_tsv(table, &config.tsv)?;
    info!(path = %config.tsv.display(), rows = table.len(), "wrote tsv");
    append_markdown(table, &config.markdown)?;
    info!(path = %config.markdown.display(), "appended markdown");
    Ok(OutputPaths {
        tsv: config.tsv.clone(),
        markdown: config.markdown.clone(),
    })
}
