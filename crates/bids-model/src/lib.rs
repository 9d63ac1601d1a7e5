//! Data model for the BIDS raw dataset inventory.

pub mod diagnostics;
pub mod error;
pub mod modality;
pub mod record;
pub mod table;

pub use diagnostics::{Diagnostic, DiagnosticSeverity, Diagnostics};
pub use error::{InventoryError, Result};
pub use modality::Modality;
pub use record::{
    CANNOT_BE_PARSED, DatasetRecord, DerivativeLinks, NOT_APPLICABLE, ParticipantColumns,
};
pub use table::DatasetTable;
