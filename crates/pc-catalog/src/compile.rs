//! Build engine components from validated catalog entries.

use crate::schema::{
    BareModuleDef, CostBasis, EquipmentDef, EstimateRequest, PressureSegmentDef, find_material,
};
use crate::validate::validate_equipment;
use crate::{CatalogError, CatalogResult};
use pc_core::SizeRange;
use pc_core::numeric::Real;
use pc_cost::{
    CostCorrelation, CostIndex, CostResult, PressureFactor, PressureFactorTable, PressureSegment,
    compose_linear, compose_pressure_adjusted, compose_simple, superheat_factor,
};
use pc_equipment::SizeUnit;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
enum Rule {
    Simple {
        factor: Real,
    },
    PressureAdjusted {
        factor: Real,
        table: PressureFactorTable,
        superheat: bool,
    },
    Linear {
        b1: Real,
        b2: Real,
        table: PressureFactorTable,
    },
}

/// A catalog entry resolved into a correlation, a material table and a
/// bare-module rule. Immutable and shareable across threads.
#[derive(Clone, Debug)]
pub struct CompiledEquipment {
    id: String,
    name: String,
    unit: SizeUnit,
    correlation: CostCorrelation,
    materials: BTreeMap<String, Real>,
    default_material: Option<String>,
    rule: Rule,
}

impl CompiledEquipment {
    pub fn compile(def: &EquipmentDef) -> CatalogResult<Self> {
        validate_equipment(def)?;

        let rule = match &def.bare_module {
            BareModuleDef::Simple { factor } => Rule::Simple { factor: *factor },
            BareModuleDef::PressureAdjusted {
                factor,
                pressure,
                superheat,
            } => Rule::PressureAdjusted {
                factor: *factor,
                table: table(pressure)?,
                superheat: *superheat,
            },
            BareModuleDef::Linear { b1, b2, pressure } => Rule::Linear {
                b1: *b1,
                b2: *b2,
                table: table(pressure)?,
            },
        };

        Ok(Self {
            id: def.id.clone(),
            name: def.name.clone(),
            unit: def.unit.into(),
            correlation: CostCorrelation::new(
                def.coefficients.into(),
                SizeRange::new(def.size.min, def.size.max),
            ),
            materials: def.materials.clone(),
            default_material: def.default_material.clone(),
            rule,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> SizeUnit {
        self.unit
    }

    pub fn correlation(&self) -> &CostCorrelation {
        &self.correlation
    }

    pub fn estimate(&self, request: &EstimateRequest) -> CatalogResult<CostResult> {
        let cost_index = match request.cost_index {
            Some(v) => CostIndex::new(v)?,
            None => CostIndex::REFERENCE,
        };
        let base = self.correlation.evaluate(request.size, cost_index)?;
        tracing::debug!(
            equipment = %self.id,
            size = request.size,
            unit = self.unit.symbol(),
            basis = ?request.basis,
            "estimating catalog equipment"
        );

        if request.basis == CostBasis::Purchased {
            return Ok(CostResult::purchased(&base));
        }

        let fm = self.material_factor(request.material.as_deref())?;
        let result = match &self.rule {
            Rule::Simple { factor } => compose_simple(&base, factor * fm),
            Rule::PressureAdjusted {
                factor,
                table,
                superheat,
            } => {
                let fp = self.pressure_factor(table, request)?;
                let ft = if *superheat {
                    superheat_factor(request.superheat.unwrap_or(0.0))
                } else {
                    1.0
                };
                compose_pressure_adjusted(&base, factor * fm, &fp, ft)
            }
            Rule::Linear { b1, b2, table } => {
                let fp = self.pressure_factor(table, request)?;
                compose_linear(&base, *b1, *b2, fm, &fp)
            }
        };
        Ok(result)
    }

    /// Material factor for `material`, falling back to the entry's default.
    ///
    /// Entries without a material table always resolve to 1.
    pub fn material_factor(&self, material: Option<&str>) -> CatalogResult<Real> {
        if self.materials.is_empty() && material.is_none() {
            return Ok(1.0);
        }
        let Some(name) = material.or(self.default_material.as_deref()) else {
            return Err(CatalogError::MissingInput {
                id: self.id.clone(),
                input: "material",
            });
        };
        find_material(&self.materials, name)
            .map(|(_, f)| f)
            .ok_or_else(|| CatalogError::UnknownMaterial {
                id: self.id.clone(),
                material: name.to_string(),
            })
    }

    fn pressure_factor(
        &self,
        table: &PressureFactorTable,
        request: &EstimateRequest,
    ) -> CatalogResult<PressureFactor> {
        let pressure = request.pressure.ok_or_else(|| CatalogError::MissingInput {
            id: self.id.clone(),
            input: "pressure",
        })?;
        Ok(table.factor(pressure)?)
    }
}

fn table(segments: &[PressureSegmentDef]) -> CatalogResult<PressureFactorTable> {
    let segments = segments
        .iter()
        .map(|s| PressureSegment::bounded(s.lower, s.upper, s.coefficients.into()))
        .collect();
    Ok(PressureFactorTable::new(segments)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::builtin_catalog;
    use pc_core::{Dimension, Tolerances, nearly_equal};

    fn compiled(id: &str) -> CompiledEquipment {
        CompiledEquipment::compile(builtin_catalog().get(id).unwrap()).unwrap()
    }

    #[test]
    fn kneader_matches_reference_scenario() {
        let kneader = compiled("blender-kneader");
        let bare = kneader.estimate(&EstimateRequest::new(1.0)).unwrap();
        assert!((bare.value() - 115_695.91).abs() < 0.01);

        let purchased = kneader
            .estimate(&EstimateRequest::new(1.0).purchased())
            .unwrap();
        assert!((purchased.value() - 103_299.92).abs() < 0.01);
    }

    #[test]
    fn pump_needs_pressure() {
        let pump = compiled("pump-centrifugal");
        let err = pump.estimate(&EstimateRequest::new(50.0)).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingInput {
                input: "pressure",
                ..
            }
        ));
    }

    #[test]
    fn pump_defaults_to_carbon_steel() {
        let pump = compiled("pump-centrifugal");
        let default = pump
            .estimate(&EstimateRequest::new(50.0).pressure(5.0))
            .unwrap();
        let explicit = pump
            .estimate(&EstimateRequest::new(50.0).pressure(5.0).material("carbonsteel"))
            .unwrap();
        assert_eq!(default, explicit);

        let base = pump.correlation().evaluate(50.0, CostIndex::REFERENCE).unwrap();
        assert!(nearly_equal(
            default.value(),
            base.value * (1.89 + 1.89 * 1.54),
            Tolerances::default()
        ));
    }

    #[test]
    fn unknown_material_is_rejected() {
        let vaporizer = compiled("vaporizer-internalcoils");
        let err = vaporizer
            .estimate(&EstimateRequest::new(10.0).pressure(1.0).material("Brass"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownMaterial { .. }));
    }

    #[test]
    fn vaporizer_pressure_warning() {
        let vaporizer = compiled("vaporizer-jacketedvessels");
        let r = vaporizer
            .estimate(&EstimateRequest::new(10.0).pressure(400.0).cost_index(600.0))
            .unwrap();
        assert_eq!(
            r.status(Dimension::Pressure).unwrap().label(),
            "Warning - Upper pressure limit"
        );
        assert_eq!(r.cost_index().value(), 600.0);
    }

    #[test]
    fn invalid_cost_index_is_an_error() {
        let kneader = compiled("blender-kneader");
        assert!(matches!(
            kneader.estimate(&EstimateRequest::new(1.0).cost_index(0.0)),
            Err(CatalogError::Cost(_))
        ));
    }
}
