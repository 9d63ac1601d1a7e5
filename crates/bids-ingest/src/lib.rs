//! BIDS raw dataset discovery and attribute extraction.
//!
//! This crate walks a directory of raw datasets and derives, for each one,
//! the [`DatasetRecord`](bids_model::DatasetRecord) reported by the inventory.
//!
//! # Features
//!
//! - **Discovery**: Find `*raw` dataset directories under a root
//! - **Extraction**: Subjects, sessions, modalities and tasks from the BIDS layout
//! - **Participants**: Header of `participants.tsv`, with malformed tables recovered
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use bids_ingest::{extract_dataset, list_raw_datasets};
//! use bids_model::Diagnostics;
//!
//! let mut diagnostics = Diagnostics::new();
//! for dataset in list_raw_datasets(Path::new("cpp-lln-lab_raw"), None)? {
//!     if let Some(record) = extract_dataset(&dataset, &mut diagnostics)? {
//!         println!("{}: {} subjects", record.name, record.nb_subjects);
//!     }
//! }
//! ```

mod discovery;
mod error;
mod extract;
mod layout;
mod participants;

// === Error Types ===
pub use error::{IngestError, Result};

// === Dataset Discovery ===
pub use discovery::{DEBUG_DATASET_LIMIT, RAW_SUFFIX, list_raw_datasets};

// === Attribute Extraction ===
pub use extract::{
    PHENOTYPE_DIR, TASK_MARKER, count_subjects, extract_dataset, list_data_files,
    list_modalities, list_sessions, list_tasks, task_label,
};

// === Participants ===
pub use participants::{
    PARTICIPANTS_JSON, PARTICIPANTS_TSV, ParticipantsError, ParticipantsInfo,
    inspect_participants, read_participant_columns,
};
