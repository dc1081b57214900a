//! pc-catalog: equipment catalog file format, validation and evaluation.
//!
//! A catalog describes equipment types as data: correlation coefficients,
//! size range, material factors and a bare-module rule. Entries are validated
//! on load and save, then compiled into engine components for pricing.

pub mod builtin;
pub mod compile;
pub mod schema;
pub mod validate;

pub use builtin::builtin_catalog;
pub use compile::CompiledEquipment;
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_catalog};

use pc_core::PcError;
use std::collections::BTreeMap;
use std::path::Path;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown equipment: {id}")]
    UnknownEquipment { id: String },

    #[error("Unknown material '{material}' for equipment {id}")]
    UnknownMaterial { id: String, material: String },

    #[error("Missing input '{input}' for equipment {id}")]
    MissingInput { id: String, input: &'static str },

    #[error("Cost evaluation failed: {0}")]
    Cost(#[from] PcError),
}

pub fn load_yaml(path: &Path) -> CatalogResult<Catalog> {
    let content = std::fs::read_to_string(path)?;
    let catalog: Catalog = serde_yaml::from_str(&content)?;
    validate_catalog(&catalog)?;
    tracing::info!(path = %path.display(), entries = catalog.equipment.len(), "loaded catalog");
    Ok(catalog)
}

pub fn save_yaml(path: &Path, catalog: &Catalog) -> CatalogResult<()> {
    validate_catalog(catalog)?;
    let content = serde_yaml::to_string(catalog)?;
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), entries = catalog.equipment.len(), "saved catalog");
    Ok(())
}

pub fn load_json(path: &Path) -> CatalogResult<Catalog> {
    let content = std::fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&content)?;
    validate_catalog(&catalog)?;
    tracing::info!(path = %path.display(), entries = catalog.equipment.len(), "loaded catalog");
    Ok(catalog)
}

pub fn save_json(path: &Path, catalog: &Catalog) -> CatalogResult<()> {
    validate_catalog(catalog)?;
    let content = serde_json::to_string_pretty(catalog)?;
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), entries = catalog.equipment.len(), "saved catalog");
    Ok(())
}

/// Compile every entry, keyed by id.
pub fn compile_catalog(catalog: &Catalog) -> CatalogResult<BTreeMap<String, CompiledEquipment>> {
    validate_catalog(catalog)?;
    catalog
        .equipment
        .iter()
        .map(|def| CompiledEquipment::compile(def).map(|c| (def.id.clone(), c)))
        .collect()
}

/// Price the entry `id` of `catalog` in one call.
pub fn estimate(
    catalog: &Catalog,
    id: &str,
    request: &EstimateRequest,
) -> CatalogResult<pc_cost::CostResult> {
    let def = catalog
        .get(id)
        .ok_or_else(|| CatalogError::UnknownEquipment { id: id.to_string() })?;
    CompiledEquipment::compile(def)?.estimate(request)
}
