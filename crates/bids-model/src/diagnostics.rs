//! Non-fatal findings collected while inventorying datasets.
//!
//! Extraction never prints; callers decide how to surface what was collected.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::modality::Modality;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A modality that names its tasks is present, yet no task label was found.
    MissingTasks {
        dataset: PathBuf,
        modalities: Vec<Modality>,
        /// Entry names that contained `task-` at the data-file level.
        files: Vec<String>,
    },
    /// `participants.tsv` exists but could not be parsed.
    UnparseableParticipants {
        dataset: PathBuf,
        path: PathBuf,
        reason: String,
    },
    /// The dataset was left out of the table.
    SkippedDataset { dataset: PathBuf, reason: String },
}

impl Diagnostic {
    pub fn severity(&self) -> DiagnosticSeverity {
        match self {
            Diagnostic::MissingTasks { .. } | Diagnostic::UnparseableParticipants { .. } => {
                DiagnosticSeverity::Warning
            }
            Diagnostic::SkippedDataset { .. } => DiagnosticSeverity::Info,
        }
    }

    /// Path of the dataset the diagnostic refers to.
    pub fn dataset(&self) -> &PathBuf {
        match self {
            Diagnostic::MissingTasks { dataset, .. }
            | Diagnostic::UnparseableParticipants { dataset, .. }
            | Diagnostic::SkippedDataset { dataset, .. } => dataset,
        }
    }

    /// Short machine-friendly code used in summaries.
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::MissingTasks { .. } => "missing-tasks",
            Diagnostic::UnparseableParticipants { .. } => "unparseable-participants",
            Diagnostic::SkippedDataset { .. } => "skipped-dataset",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingTasks {
                dataset,
                modalities,
                files,
            } => {
                let modalities: Vec<&str> = modalities.iter().map(Modality::as_str).collect();
                write!(
                    f,
                    "no tasks found in {} with modalities [{}] and files [{}]",
                    dataset.display(),
                    modalities.join(", "),
                    files.join(", ")
                )
            }
            Diagnostic::UnparseableParticipants { path, reason, .. } => {
                write!(f, "could not parse {}: {reason}", path.display())
            }
            Diagnostic::SkippedDataset { dataset, reason } => {
                write!(f, "skipped {}: {reason}", dataset.display())
            }
        }
    }
}

/// Ordered collection of diagnostics, in the order they were raised.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.severity() == DiagnosticSeverity::Warning)
            .count()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|entry| entry.severity() == DiagnosticSeverity::Warning)
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
