//! Per-dataset inventory record.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::modality::Modality;

/// Rendering of values that do not apply to a dataset.
pub const NOT_APPLICABLE: &str = "n/a";

/// Rendering of a participants table that could not be parsed.
pub const CANNOT_BE_PARSED: &str = "cannot be parsed";

/// Column headers found in `participants.tsv`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "columns", rename_all = "snake_case")]
pub enum ParticipantColumns {
    /// The dataset has no `participants.tsv`.
    #[default]
    NotApplicable,
    /// `participants.tsv` exists but is malformed.
    Unparseable,
    /// Header row, in file order.
    Columns(Vec<String>),
}

/// Links to derivative datasets built from a raw dataset.
///
/// Derivative discovery is not performed; every link stays unset and is
/// reported as `n/a`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DerivativeLinks {
    pub fmriprep: Option<String>,
    pub freesurfer: Option<String>,
    pub mriqc: Option<String>,
}

/// One inventoried raw dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// Directory name, unique within a table.
    pub name: String,
    /// Number of `sub-*` directories at the dataset root.
    pub nb_subjects: usize,
    pub has_participant_tsv: bool,
    pub has_participant_json: bool,
    pub participant_columns: ParticipantColumns,
    pub has_phenotype_dir: bool,
    pub modalities: BTreeSet<Modality>,
    /// Session labels without the `ses-` prefix.
    pub sessions: BTreeSet<String>,
    /// Task labels; `None` when no task-bearing modality is present.
    pub tasks: Option<BTreeSet<String>>,
    pub derivatives: DerivativeLinks,
}

impl DatasetRecord {
    /// Creates a record with every attribute at its "absent" value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nb_subjects: 0,
            has_participant_tsv: false,
            has_participant_json: false,
            participant_columns: ParticipantColumns::NotApplicable,
            has_phenotype_dir: false,
            modalities: BTreeSet::new(),
            sessions: BTreeSet::new(),
            tasks: None,
            derivatives: DerivativeLinks::default(),
        }
    }

    pub fn has_sessions(&self) -> bool {
        !self.sessions.is_empty()
    }

    /// True when a modality that must name its tasks is present but no
    /// task label was found.
    pub fn is_missing_tasks(&self) -> bool {
        let requires = self.modalities.iter().any(Modality::requires_tasks);
        let found = self.tasks.as_ref().is_some_and(|tasks| !tasks.is_empty());
        requires && !found
    }
}
