use std::io;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use tracing::{info, info_span, warn};

use bids_cli::pipeline::{OutputConfig, ScanOptions, scan_roots, write_outputs};
use bids_model::{DiagnosticSeverity, Modality};

use crate::cli::ScanArgs;
use crate::summary::{apply_table_style, flag_cell};
use crate::types::ScanResult;

pub fn run_modalities() -> Result<()> {
    let mut modalities = Modality::ALL.to_vec();
    modalities.sort();
    let mut table = Table::new();
    table.set_header(vec!["Modality", "Task extraction", "Task required"]);
    apply_table_style(&mut table);
    for modality in modalities {
        table.add_row(vec![
            Cell::new(modality.as_str()),
            flag_cell(modality.supports_tasks()),
            flag_cell(modality.requires_tasks()),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_scan(args: &ScanArgs) -> Result<ScanResult> {
    let span = info_span!("scan", roots = args.roots.len());
    let _guard = span.enter();

    let options = if args.debug {
        ScanOptions::debug()
    } else {
        ScanOptions::default()
    };
    let inventory = scan_roots(&args.roots, options)?;

    for diagnostic in inventory.diagnostics.iter() {
        match diagnostic.severity() {
            DiagnosticSeverity::Warning => warn!(code = diagnostic.code(), "{diagnostic}"),
            DiagnosticSeverity::Info => info!(code = diagnostic.code(), "{diagnostic}"),
        }
    }

    let outputs = if args.dry_run {
        info!("dry run, no output written");
        None
    } else {
        let config = OutputConfig {
            tsv: args.tsv.clone(),
            markdown: args.markdown.clone(),
        };
        Some(write_outputs(&inventory.table, &config)?)
    };

    Ok(ScanResult {
        roots: args.roots.clone(),
        candidates: inventory.candidates,
        table: inventory.table,
        diagnostics: inventory.diagnostics,
        outputs,
    })
}

pub fn print_json(result: &ScanResult) -> Result<()> {
    let stdout = io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &result.table.records())
        .context("serialize inventory")?;
    println!();
    Ok(())
}
