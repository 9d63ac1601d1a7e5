use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("dataset {name} already in datasets")]
    DuplicateDataset { name: String },
}

pub type Result<T> = std::result::Result<T, InventoryError>;
