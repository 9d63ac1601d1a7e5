//! Participant metadata at the dataset root.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::ReaderBuilder;
use thiserror::Error;
use tracing::debug;

use bids_model::{Diagnostic, Diagnostics, ParticipantColumns};

use crate::error::{IngestError, Result};

pub const PARTICIPANTS_TSV: &str = "participants.tsv";
pub const PARTICIPANTS_JSON: &str = "participants.json";

/// Why a participants table could not be read.
#[derive(Debug, Error)]
pub enum ParticipantsError {
    /// The file could not be opened or read at all.
    #[error(transparent)]
    Io(#[from] IngestError),

    /// The file was read but its content is not a valid table.
    #[error("{0}")]
    Malformed(String),
}

/// Participant files found at the dataset root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantsInfo {
    pub has_tsv: bool,
    pub has_json: bool,
    pub columns: ParticipantColumns,
}

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').to_string()
}

/// Reads the header row of a tab-delimited participants table.
///
/// The whole file is parsed and short rows are accepted. When the first data
/// row is wider than the header, its leading fields are row labels and that
/// width becomes the limit for every row. A row past the limit makes the table
/// malformed, and so do invalid UTF-8 and an empty file.
pub fn read_participant_columns(
    path: &Path,
) -> std::result::Result<Vec<String>, ParticipantsError> {
    let file = File::open(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| classify(path, e))?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.is_empty() || headers.iter().all(|header| header.trim().is_empty()) {
        return Err(ParticipantsError::Malformed("no header row".to_string()));
    }

    let mut expected = headers.len();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| classify(path, e))?;
        if index == 0 && record.len() > headers.len() {
            // Surplus leading fields in the first row are row label columns.
            expected = record.len();
        }
        if record.len() > expected {
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            return Err(ParticipantsError::Malformed(format!(
                "expected {expected} fields in line {line}, saw {}",
                record.len()
            )));
        }
    }

    Ok(headers)
}

fn classify(path: &Path, error: csv::Error) -> ParticipantsError {
    if error.is_io_error() {
        match error.into_kind() {
            csv::ErrorKind::Io(source) => ParticipantsError::Io(IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }),
            other => ParticipantsError::Malformed(format!("{other:?}")),
        }
    } else {
        ParticipantsError::Malformed(error.to_string())
    }
}

/// Checks the participant files of a dataset and reads the table header.
///
/// A malformed table resolves to [`ParticipantColumns::Unparseable`] and a
/// diagnostic; only I/O failures are returned as errors.
pub fn inspect_participants(
    dataset: &Path,
    diagnostics: &mut Diagnostics,
) -> Result<ParticipantsInfo> {
    let tsv_path = dataset.join(PARTICIPANTS_TSV);
    let has_tsv = tsv_path.exists();
    let has_json = dataset.join(PARTICIPANTS_JSON).exists();

    let columns = if has_tsv {
        match read_participant_columns(&tsv_path) {
            Ok(columns) => {
                debug!(
                    path = %tsv_path.display(),
                    column_count = columns.len(),
                    "read participants header"
                );
                ParticipantColumns::Columns(columns)
            }
            Err(ParticipantsError::Malformed(reason)) => {
                diagnostics.push(Diagnostic::UnparseableParticipants {
                    dataset: dataset.to_path_buf(),
                    path: tsv_path.clone(),
                    reason,
                });
                ParticipantColumns::Unparseable
            }
            Err(ParticipantsError::Io(error)) => return Err(error),
        }
    } else {
        ParticipantColumns::NotApplicable
    };

    Ok(ParticipantsInfo {
        has_tsv,
        has_json,
        columns,
    })
}
