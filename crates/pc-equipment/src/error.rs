//! Error types for equipment facades.

use pc_core::error::PcError;
use thiserror::Error;

/// Errors that can occur when configuring or pricing equipment.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EquipmentError {
    #[error("Unknown {what}: {name}")]
    UnknownName { what: &'static str, name: String },

    #[error("Material {material} is not tabulated for {equipment}")]
    MaterialNotAvailable {
        material: &'static str,
        equipment: &'static str,
    },

    #[error("Cost evaluation failed: {0}")]
    Cost(PcError),
}

pub type EquipmentResult<T> = Result<T, EquipmentError>;

impl From<PcError> for EquipmentError {
    fn from(e: PcError) -> Self {
        EquipmentError::Cost(e)
    }
}
