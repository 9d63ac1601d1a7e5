//! CLI argument definitions for the dataset inventory.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bids-inventory",
    version,
    about = "List BIDS raw datasets and report their content",
    long_about = "List the raw BIDS datasets found under one or more directories.\n\n\
                  Writes a TSV file with every attribute and appends a markdown\n\
                  table with a curated subset of columns."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Inventory raw datasets and write the reports.
    Scan(ScanArgs),

    /// List the known BIDS modalities.
    Modalities,
}

#[derive(Parser)]
pub struct ScanArgs {
    /// Directories holding the `*raw` datasets.
    #[arg(value_name = "ROOT", default_value = "cpp-lln-lab_raw")]
    pub roots: Vec<PathBuf>,

    /// TSV output, overwritten on each run.
    #[arg(long = "tsv", value_name = "PATH", default_value = "tools/datasets_raw.tsv")]
    pub tsv: PathBuf,

    /// Markdown document the table is appended to.
    #[arg(long = "markdown", value_name = "PATH", default_value = "src/datasets_raw.md")]
    pub markdown: PathBuf,

    /// Only inventory the first datasets of each root, for quick iteration.
    #[arg(long = "debug")]
    pub debug: bool,

    /// Scan and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the inventory as JSON on stdout instead of the summary tables.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
