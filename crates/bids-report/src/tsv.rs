use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use bids_model::DatasetTable;

use crate::columns::{Column, TSV_COLUMNS};

/// Writes the full inventory as tab-separated values, replacing `path`.
pub fn write_tsv(table: &DatasetTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir {}", parent.display()))?;
    }
    let file =
        fs::File::create(path).with_context(|| format!("create tsv: {}", path.display()))?;
    write_tsv_to(table, file).with_context(|| format!("write tsv: {}", path.display()))
}

/// Writes the full inventory as tab-separated values to `writer`.
pub fn write_tsv_to<W: Write>(table: &DatasetTable, writer: W) -> Result<()> {
    let mut writer = WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    writer.write_record(TSV_COLUMNS.iter().map(Column::header))?;
    for record in table.records() {
        writer.write_record(TSV_COLUMNS.iter().map(|column| column.render(record)))?;
    }
    writer.flush()?;
    Ok(())
}
