use std::path::PathBuf;

use bids_model::{DatasetTable, Diagnostics};

use bids_cli::pipeline::OutputPaths;

#[derive(Debug)]
pub struct ScanResult {
    pub roots: Vec<PathBuf>,
    pub candidates: usize,
    pub table: DatasetTable,
    pub diagnostics: Diagnostics,
    pub outputs: Option<OutputPaths>,
}
