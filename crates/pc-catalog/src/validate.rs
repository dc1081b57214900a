//! Catalog validation logic.

use crate::schema::{BareModuleDef, Catalog, EquipmentDef, PressureSegmentDef, find_material};
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_catalog(catalog: &Catalog) -> Result<(), ValidationError> {
    if catalog.version == 0 || catalog.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: catalog.version,
        });
    }

    let mut ids = HashSet::new();
    for def in &catalog.equipment {
        if !ids.insert(&def.id) {
            return Err(ValidationError::DuplicateId {
                id: def.id.clone(),
                context: format!("catalog '{}' equipment", catalog.name),
            });
        }
        validate_equipment(def)?;
    }

    Ok(())
}

pub fn validate_equipment(def: &EquipmentDef) -> Result<(), ValidationError> {
    let size = def.size;
    if !size.min.is_finite() || size.min <= 0.0 {
        return Err(invalid(def, "size.min", size.min, "must be positive and finite"));
    }
    if !size.max.is_finite() || size.max < size.min {
        return Err(invalid(def, "size.max", size.max, "must be finite and >= size.min"));
    }

    for (i, k) in def.coefficients.iter().enumerate() {
        if !k.is_finite() {
            return Err(invalid(def, &format!("coefficients[{i}]"), *k, "must be finite"));
        }
    }

    let mut folded = HashSet::new();
    for (material, factor) in &def.materials {
        positive(def, &format!("materials.{material}"), *factor)?;
        // Lookup ignores ASCII case, so keys must be distinct under it.
        if !folded.insert(material.to_ascii_lowercase()) {
            return Err(ValidationError::DuplicateId {
                id: material.clone(),
                context: format!("equipment '{}' materials (case-insensitive)", def.id),
            });
        }
    }

    if let Some(default) = &def.default_material
        && find_material(&def.materials, default).is_none()
    {
        return Err(ValidationError::MissingReference {
            id: default.clone(),
            context: format!("equipment '{}' default_material", def.id),
        });
    }

    match &def.bare_module {
        BareModuleDef::Simple { factor } => positive(def, "bare_module.factor", *factor),
        BareModuleDef::PressureAdjusted {
            factor, pressure, ..
        } => {
            positive(def, "bare_module.factor", *factor)?;
            validate_segments(def, pressure)
        }
        BareModuleDef::Linear { b1, b2, pressure } => {
            positive(def, "bare_module.b1", *b1)?;
            positive(def, "bare_module.b2", *b2)?;
            validate_segments(def, pressure)
        }
    }
}

fn validate_segments(
    def: &EquipmentDef,
    segments: &[PressureSegmentDef],
) -> Result<(), ValidationError> {
    if segments.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: format!("equipment '{}' bare_module.pressure", def.id),
            value: "[]".to_string(),
            reason: "at least one pressure segment is required".to_string(),
        });
    }

    let mut bounds = Vec::with_capacity(segments.len());
    for (i, seg) in segments.iter().enumerate() {
        let lower = seg.lower.unwrap_or(0.0);
        let upper = seg.upper.unwrap_or(f64::INFINITY);
        if !lower.is_finite() || lower < 0.0 {
            return Err(invalid(
                def,
                &format!("pressure[{i}].lower"),
                lower,
                "must be finite and >= 0",
            ));
        }
        if upper.is_nan() || upper <= lower {
            return Err(invalid(
                def,
                &format!("pressure[{i}].upper"),
                upper,
                "must be greater than lower",
            ));
        }
        for (j, c) in seg.coefficients.iter().enumerate() {
            if !c.is_finite() {
                return Err(invalid(
                    def,
                    &format!("pressure[{i}].coefficients[{j}]"),
                    *c,
                    "must be finite",
                ));
            }
        }
        bounds.push((lower, upper, i));
    }

    bounds.sort_by(|a, b| a.0.total_cmp(&b.0));
    for pair in bounds.windows(2) {
        let (_, prev_upper, prev) = pair[0];
        let (next_lower, _, next) = pair[1];
        if next_lower < prev_upper {
            return Err(ValidationError::InvalidValue {
                field: format!("equipment '{}' bare_module.pressure", def.id),
                value: format!("segments {prev} and {next}"),
                reason: "pressure segments must not overlap".to_string(),
            });
        }
    }

    Ok(())
}

fn positive(def: &EquipmentDef, field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(def, field, value, "must be positive and finite"));
    }
    Ok(())
}

fn invalid(def: &EquipmentDef, field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: format!("equipment '{}' {field}", def.id),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
