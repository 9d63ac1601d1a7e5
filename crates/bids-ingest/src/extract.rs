//! Dataset attribute extraction.
//!
//! Steps run in a fixed order because later ones depend on earlier results:
//! subjects, sessions, modalities, tasks, participants, phenotype.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, info_span};

use bids_model::{DatasetRecord, Diagnostic, Diagnostics, Modality};

use crate::error::Result;
use crate::layout::{
    SESSION_PREFIX, SUBJECT_PREFIX, data_file_entries, datatype_entries, entry_name,
    session_entries, child_entries,
};
use crate::participants::inspect_participants;

/// Marker of the task entity in BIDS file names.
pub const TASK_MARKER: &str = "task-";

/// Name of the phenotype directory at the dataset root.
pub const PHENOTYPE_DIR: &str = "phenotype";

/// Counts `sub-*` directories directly under the dataset root.
pub fn count_subjects(dataset: &Path) -> Result<usize> {
    let count = child_entries(dataset)?
        .iter()
        .filter(|path| path.is_dir())
        .filter(|path| entry_name(path).is_some_and(|name| name.starts_with(SUBJECT_PREFIX)))
        .count();
    Ok(count)
}

/// Session labels found at `sub-*/ses-*`, without the `ses-` prefix.
pub fn list_sessions(dataset: &Path) -> Result<BTreeSet<String>> {
    let sessions = session_entries(dataset)?
        .iter()
        .filter(|path| path.is_dir())
        .filter_map(|path| entry_name(path))
        .map(|name| name.strip_prefix(SESSION_PREFIX).unwrap_or(name).to_string())
        .collect();
    Ok(sessions)
}

/// Known modality directories at the datatype level.
pub fn list_modalities(dataset: &Path, has_sessions: bool) -> Result<BTreeSet<Modality>> {
    let modalities = datatype_entries(dataset, has_sessions)?
        .iter()
        .filter(|path| path.is_dir())
        .filter_map(|path| entry_name(path))
        .filter_map(Modality::parse)
        .collect();
    Ok(modalities)
}

/// Names of data-level entries containing `task-`, sorted.
///
/// Directories are included: some recordings (e.g. CTF MEG `.ds`) are
/// stored as directories.
pub fn list_data_files(dataset: &Path, has_sessions: bool) -> Result<Vec<String>> {
    let mut files: Vec<String> = data_file_entries(dataset, has_sessions)?
        .iter()
        .filter_map(|path| entry_name(path))
        .filter(|name| name.contains(TASK_MARKER))
        .map(str::to_string)
        .collect();
    files.sort();
    Ok(files)
}

/// Extracts the task label from a file name.
///
/// The label is the text after the first `task-`, up to the next `_` (or the
/// next `task-`). Returns `None` only when there is no marker; `task-_bold`
/// yields an empty label.
pub fn task_label(file_name: &str) -> Option<&str> {
    let (_, rest) = file_name.split_once(TASK_MARKER)?;
    let rest = rest.split(TASK_MARKER).next().unwrap_or(rest);
    rest.split('_').next()
}

/// Distinct task labels found at the data-file level.
pub fn list_tasks(files: &[String]) -> BTreeSet<String> {
    files
        .iter()
        .filter_map(|name| task_label(name))
        .map(str::to_string)
        .collect()
}

/// Builds the inventory record of one dataset directory.
///
/// Returns `Ok(None)` for a dataset without subject directories; such a
/// dataset is recorded as skipped in `diagnostics`.
pub fn extract_dataset(
    dataset: &Path,
    diagnostics: &mut Diagnostics,
) -> Result<Option<DatasetRecord>> {
    let name = dataset
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let span = info_span!("dataset", dataset = %name);
    let _guard = span.enter();

    let mut record = DatasetRecord::new(name);

    record.nb_subjects = count_subjects(dataset)?;
    if record.nb_subjects == 0 {
        debug!("no subject directories, skipping");
        diagnostics.push(Diagnostic::SkippedDataset {
            dataset: dataset.to_path_buf(),
            reason: "no subject directories".to_string(),
        });
        return Ok(None);
    }

    record.sessions = list_sessions(dataset)?;
    let has_sessions = record.has_sessions();
    record.modalities = list_modalities(dataset, has_sessions)?;
    debug!(
        subjects = record.nb_subjects,
        sessions = record.sessions.len(),
        modalities = record.modalities.len(),
        "listed dataset layout"
    );

    if record.modalities.iter().any(Modality::supports_tasks) {
        let files = list_data_files(dataset, has_sessions)?;
        record.tasks = Some(list_tasks(&files));
        if record.is_missing_tasks() {
            diagnostics.push(Diagnostic::MissingTasks {
                dataset: dataset.to_path_buf(),
                modalities: record.modalities.iter().copied().collect(),
                files,
            });
        }
    }

    let participants = inspect_participants(dataset, diagnostics)?;
    record.has_participant_tsv = participants.has_tsv;
    record.has_participant_json = participants.has_json;
    record.participant_columns = participants.columns;
    record.has_phenotype_dir = dataset.join(PHENOTYPE_DIR).exists();

    Ok(Some(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_task_label() {
        assert_eq!(task_label("sub-01_task-rest_bold.nii.gz"), Some("rest"));
        assert_eq!(task_label("sub-01_ses-02_task-nback_run-1_events.tsv"), Some("nback"));
        assert_eq!(task_label("task-faces_bold.json"), Some("faces"));
        assert_eq!(task_label("sub-01_task-rest.json"), Some("rest.json"));
        assert_eq!(task_label("sub-01_T1w.nii.gz"), None);
        assert_eq!(task_label("sub-01_task-_bold.nii"), Some(""));
        assert_eq!(task_label("sub-01_task-a_task-b_bold.nii"), Some("a"));
    }

    #[test]
    fn test_list_tasks_deduplicates() {
        let files = vec![
            "sub-01_task-rest_bold.nii".to_string(),
            "sub-01_task-rest_bold.json".to_string(),
            "sub-01_task-nback_bold.nii".to_string(),
        ];
        let tasks: Vec<String> = list_tasks(&files).into_iter().collect();
        assert_eq!(tasks, vec!["nback", "rest"]);
    }

    proptest! {
        #[test]
        fn label_is_recovered_from_bids_names(
            subject in "[a-zA-Z0-9]{1,8}",
            label in "[a-zA-Z0-9]{1,12}",
            suffix in "(bold|events|eeg|meg|beh|physio)",
        ) {
            let name = format!("sub-{subject}_task-{label}_{suffix}.tsv");
            prop_assert_eq!(task_label(&name), Some(label.as_str()));
        }

        #[test]
        fn label_never_contains_separator(name in "[a-z_\\-]{0,40}") {
            if let Some(label) = task_label(&name) {
                prop_assert!(!label.contains('_'));
                prop_assert!(name.contains(TASK_MARKER));
            }
        }
    }
}
