use crate::error::{InventoryError, Result};
use crate::record::DatasetRecord;

/// All inventoried datasets of one run, one record per dataset.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct DatasetTable {
    records: Vec<DatasetRecord>,
}

impl DatasetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record, rejecting a name that is already present.
    ///
    /// On error the table is left unchanged.
    pub fn push(&mut self, record: DatasetRecord) -> Result<()> {
        if self.contains(&record.name) {
            return Err(InventoryError::DuplicateDataset { name: record.name });
        }
        self.records.push(record);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.iter().any(|record| record.name == name)
    }

    /// Sorts records by dataset name, ascending.
    pub fn sort_by_name(&mut self) {
        self.records.sort_by(|a, b| a.name.cmp(&b.name));
    }

    pub fn records(&self) -> &[DatasetRecord] {
        &self.records
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
