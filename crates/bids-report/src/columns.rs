//! Report columns and cell rendering.

use std::collections::BTreeSet;

use bids_model::{CANNOT_BE_PARSED, DatasetRecord, Modality, NOT_APPLICABLE, ParticipantColumns};

/// A column of the inventory report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    NbSubjects,
    HasParticipantTsv,
    HasParticipantJson,
    ParticipantColumns,
    HasPhenotypeDir,
    Modalities,
    Sessions,
    Tasks,
    Fmriprep,
    Freesurfer,
    Mriqc,
}

/// Every column, in TSV order.
pub const TSV_COLUMNS: [Column; 12] = [
    Column::Name,
    Column::NbSubjects,
    Column::HasParticipantTsv,
    Column::HasParticipantJson,
    Column::ParticipantColumns,
    Column::HasPhenotypeDir,
    Column::Modalities,
    Column::Sessions,
    Column::Tasks,
    Column::Fmriprep,
    Column::Freesurfer,
    Column::Mriqc,
];

/// Columns kept in the markdown document.
pub const MARKDOWN_COLUMNS: [Column; 8] = [
    Column::Name,
    Column::NbSubjects,
    Column::Modalities,
    Column::Sessions,
    Column::Tasks,
    Column::Fmriprep,
    Column::Freesurfer,
    Column::Mriqc,
];

impl Column {
    pub fn header(&self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::NbSubjects => "nb_subjects",
            Column::HasParticipantTsv => "has_participant_tsv",
            Column::HasParticipantJson => "has_participant_json",
            Column::ParticipantColumns => "participant_columns",
            Column::HasPhenotypeDir => "has_phenotype_dir",
            Column::Modalities => "modalities",
            Column::Sessions => "sessions",
            Column::Tasks => "tasks",
            Column::Fmriprep => "fmriprep",
            Column::Freesurfer => "freesurfer",
            Column::Mriqc => "mriqc",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::NbSubjects)
    }

    /// Renders the cell of this column for one record.
    pub fn render(&self, record: &DatasetRecord) -> String {
        match self {
            Column::Name => record.name.clone(),
            Column::NbSubjects => record.nb_subjects.to_string(),
            Column::HasParticipantTsv => render_bool(record.has_participant_tsv),
            Column::HasParticipantJson => render_bool(record.has_participant_json),
            Column::ParticipantColumns => match &record.participant_columns {
                ParticipantColumns::NotApplicable => NOT_APPLICABLE.to_string(),
                ParticipantColumns::Unparseable => CANNOT_BE_PARSED.to_string(),
                ParticipantColumns::Columns(columns) => columns.join(", "),
            },
            Column::HasPhenotypeDir => render_bool(record.has_phenotype_dir),
            Column::Modalities => render_list(record.modalities.iter().map(Modality::as_str)),
            Column::Sessions => render_set(&record.sessions),
            Column::Tasks => match &record.tasks {
                Some(tasks) => render_set(tasks),
                None => NOT_APPLICABLE.to_string(),
            },
            Column::Fmriprep => render_link(record.derivatives.fmriprep.as_deref()),
            Column::Freesurfer => render_link(record.derivatives.freesurfer.as_deref()),
            Column::Mriqc => render_link(record.derivatives.mriqc.as_deref()),
        }
    }
}

fn render_bool(value: bool) -> String {
    let text = if value { "True" } else { "False" };
    text.to_string()
}

fn render_set(values: &BTreeSet<String>) -> String {
    render_list(values.iter().map(String::as_str))
}

fn render_list<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(", ")
}

fn render_link(link: Option<&str>) -> String {
    link.unwrap_or(NOT_APPLICABLE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_columns_are_a_tsv_subset() {
        assert!(MARKDOWN_COLUMNS.iter().all(|c| TSV_COLUMNS.contains(c)));
        for dropped in [
            Column::HasParticipantTsv,
            Column::HasParticipantJson,
            Column::HasPhenotypeDir,
            Column::ParticipantColumns,
        ] {
            assert!(!MARKDOWN_COLUMNS.contains(&dropped));
        }
    }

    #[test]
    fn renders_absent_values_as_sentinels() {
        let mut record = DatasetRecord::new("ds001_raw");
        assert_eq!(Column::Tasks.render(&record), "n/a");
        assert_eq!(Column::ParticipantColumns.render(&record), "n/a");
        assert_eq!(Column::Mriqc.render(&record), "n/a");
        assert_eq!(Column::Sessions.render(&record), "");

        record.participant_columns = ParticipantColumns::Unparseable;
        assert_eq!(Column::ParticipantColumns.render(&record), "cannot be parsed");
    }

    #[test]
    fn renders_present_values() {
        let mut record = DatasetRecord::new("ds001_raw");
        record.nb_subjects = 12;
        record.has_participant_tsv = true;
        record.modalities.extend([Modality::Func, Modality::Anat]);
        record.tasks = Some(["rest".to_string(), "nback".to_string()].into_iter().collect());
        record.participant_columns =
            ParticipantColumns::Columns(vec!["participant_id".to_string(), "age".to_string()]);

        assert_eq!(Column::NbSubjects.render(&record), "12");
        assert_eq!(Column::HasParticipantTsv.render(&record), "True");
        assert_eq!(Column::HasParticipantJson.render(&record), "False");
        assert_eq!(Column::Modalities.render(&record), "anat, func");
        assert_eq!(Column::Tasks.render(&record), "nback, rest");
        assert_eq!(Column::ParticipantColumns.render(&record), "participant_id, age");
    }
}
