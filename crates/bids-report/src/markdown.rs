use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::{CellAlignment, ContentArrangement, Table};

use bids_model::DatasetTable;

use crate::columns::{Column, MARKDOWN_COLUMNS};

/// Renders the curated columns of the inventory as a markdown pipe table.
pub fn render_markdown(table: &DatasetTable) -> String {
    let mut markdown = Table::new();
    markdown
        .load_preset(ASCII_MARKDOWN)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(MARKDOWN_COLUMNS.iter().map(Column::header));
    for record in table.records() {
        markdown.add_row(
            MARKDOWN_COLUMNS
                .iter()
                .map(|column| escape_cell(&column.render(record))),
        );
    }
    for (index, column) in MARKDOWN_COLUMNS.iter().enumerate() {
        if column.is_numeric()
            && let Some(target) = markdown.column_mut(index)
        {
            target.set_cell_alignment(CellAlignment::Right);
        }
    }
    mark_right_aligned(&markdown.to_string())
}

/// Rewrites the header separator so numeric columns read `---:`.
///
/// comfy-table pads right-aligned cells but always draws the separator as
/// plain dashes, which markdown renders left-aligned.
fn mark_right_aligned(rendered: &str) -> String {
    let mut seen_separator = false;
    let lines: Vec<String> = rendered
        .lines()
        .map(|line| {
            if seen_separator || !is_separator(line) {
                return line.to_string();
            }
            seen_separator = true;
            line.split('|')
                .enumerate()
                .map(|(index, segment)| {
                    let numeric = index
                        .checked_sub(1)
                        .and_then(|column| MARKDOWN_COLUMNS.get(column))
                        .is_some_and(Column::is_numeric);
                    match segment.strip_suffix('-') {
                        Some(dashes) if numeric => format!("{dashes}:"),
                        _ => segment.to_string(),
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    lines.join("\n")
}

fn is_separator(line: &str) -> bool {
    let line = line.trim();
    line.contains('-') && line.chars().all(|c| c == '|' || c == '-')
}

/// Appends the markdown table to `path`, creating the file if needed.
pub fn append_markdown(table: &DatasetTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir {}", parent.display()))?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open markdown: {}", path.display()))?;
    writeln!(file, "{}\n", render_markdown(table))
        .with_context(|| format!("append markdown: {}", path.display()))
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
