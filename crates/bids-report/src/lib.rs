//! Inventory report generation.
//!
//! This crate serializes a sorted [`DatasetTable`](bids_model::DatasetTable)
//! in two formats:
//!
//! - **TSV**: every column, one row per dataset
//! - **Markdown**: a pipe table with the curated column subset

mod columns;
mod markdown;
mod tsv;

// Re-export public types and functions
pub use columns::{Column, MARKDOWN_COLUMNS, TSV_COLUMNS};
pub use markdown::{append_markdown, render_markdown};
pub use tsv::{write_tsv, write_tsv_to};
