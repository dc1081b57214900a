//! Pumps with electric drives, sized by shaft power (kW).
//!
//! Not every material is offered for every pump type, so construction is fallible.

use crate::error::EquipmentResult;
use crate::pressure_tables;
use crate::table::{SizeUnit, TypeSpec, named_enum, require_material};
use crate::traits::EquipmentCost;
use pc_core::numeric::Real;
use pc_core::units::{Power, Pressure, tabulated};
use pc_cost::{CostCorrelation, CostIndex, CostResult, PressureFactorTable, compose_linear};

named_enum! {
    pub enum PumpType ("pump type") {
        Reciprocating,
        PositiveDisplacement,
        Centrifugal,
    }
}

named_enum! {
    pub enum PumpMaterial ("pump material") {
        CastIron,
        CarbonSteel,
        CuAlloy,
        StainlessSteel,
        NiAlloy,
        Titanium,
    }
}

impl Default for PumpMaterial {
    fn default() -> Self {
        PumpMaterial::CarbonSteel
    }
}

/// Bare-module constant shared by every pump type.
pub const PUMP_B1: Real = 1.89;

impl PumpType {
    pub const fn spec(self) -> TypeSpec {
        match self {
            PumpType::Reciprocating => {
                TypeSpec::new(SizeUnit::Kilowatt, 0.1, 200.0, [3.8696, 0.3161, 0.1220])
            }
            PumpType::PositiveDisplacement => {
                TypeSpec::new(SizeUnit::Kilowatt, 1.0, 100.0, [3.4771, 0.1350, 0.1438])
            }
            PumpType::Centrifugal => {
                TypeSpec::new(SizeUnit::Kilowatt, 1.0, 300.0, [3.3892, 0.0536, 0.1538])
            }
        }
    }

    /// `(B1, B2)`. The published B2 (1.35) is never read: B2 repeats B1.
    pub const fn bare_module_constants(self) -> (Real, Real) {
        (PUMP_B1, PUMP_B1)
    }
}

impl PumpMaterial {
    /// `None` when the material is not offered for `ty`.
    pub const fn factor(self, ty: PumpType) -> Option<Real> {
        use PumpMaterial::*;
        use PumpType::*;
        match (self, ty) {
            (CastIron, _) => Some(1.0),
            (CarbonSteel, Reciprocating) => Some(1.45),
            (CarbonSteel, PositiveDisplacement) => Some(1.42),
            (CarbonSteel, Centrifugal) => Some(1.54),
            (CuAlloy, Centrifugal) | (Titanium, Centrifugal) => None,
            (CuAlloy, _) => Some(1.29),
            (StainlessSteel, Reciprocating) => Some(2.35),
            (StainlessSteel, PositiveDisplacement) => Some(2.66),
            (StainlessSteel, Centrifugal) => Some(2.31),
            (NiAlloy, Reciprocating) => Some(3.96),
            (NiAlloy, PositiveDisplacement) => Some(4.75),
            (NiAlloy, Centrifugal) => Some(4.36),
            (Titanium, Reciprocating) => Some(6.45),
            (Titanium, PositiveDisplacement) => Some(10.68),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PumpCost {
    ty: PumpType,
    material: PumpMaterial,
    material_factor: Real,
    correlation: CostCorrelation,
    pressure: PressureFactorTable,
}

impl PumpCost {
    pub fn new(ty: PumpType, material: PumpMaterial) -> EquipmentResult<Self> {
        let material_factor = require_material(material.factor(ty), material.name(), ty.name())?;
        Ok(Self {
            ty,
            material,
            material_factor,
            correlation: ty.spec().correlation(),
            pressure: PressureFactorTable::from_slice(pressure_tables::pump(ty))?,
        })
    }

    pub fn equipment_type(&self) -> PumpType {
        self.ty
    }

    pub fn material(&self) -> PumpMaterial {
        self.material
    }

    pub fn purchased(&self, power: Power, cost_index: CostIndex) -> EquipmentResult<CostResult> {
        self.purchased_cost(tabulated::kw(power), cost_index)
    }

    /// Bare-module cost at discharge gauge `pressure`.
    pub fn bare_module(
        &self,
        power: Power,
        pressure: Pressure,
        cost_index: CostIndex,
    ) -> EquipmentResult<CostResult> {
        let fp = self.pressure.factor(tabulated::barg(pressure))?;
        let base = self.base_cost(tabulated::kw(power), cost_index)?;
        let (b1, b2) = self.ty.bare_module_constants();
        Ok(compose_linear(&base, b1, b2, self.material_factor, &fp))
    }
}

impl EquipmentCost for PumpCost {
    fn type_name(&self) -> &'static str {
        self.ty.name()
    }

    fn unit(&self) -> SizeUnit {
        SizeUnit::Kilowatt
    }

    fn correlation(&self) -> &CostCorrelation {
        &self.correlation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EquipmentError;
    use pc_core::units::{barg, kw};
    use pc_core::{Dimension, Tolerances, nearly_equal};

    #[test]
    fn centrifugal_rejects_copper_and_titanium() {
        for m in [PumpMaterial::CuAlloy, PumpMaterial::Titanium] {
            let err = PumpCost::new(PumpType::Centrifugal, m).unwrap_err();
            assert!(matches!(err, EquipmentError::MaterialNotAvailable { .. }));
        }
        assert!(PumpCost::new(PumpType::Reciprocating, PumpMaterial::Titanium).is_ok());
    }

    #[test]
    fn linear_bare_module_uses_b1_twice() {
        let pump = PumpCost::new(PumpType::Centrifugal, PumpMaterial::default()).unwrap();
        let purchased = pump.purchased(kw(100.0), CostIndex::REFERENCE).unwrap();
        let bare = pump
            .bare_module(kw(100.0), barg(5.0), CostIndex::REFERENCE)
            .unwrap();
        let fbm = 1.89 + 1.89 * 1.54;
        assert!(nearly_equal(
            bare.value(),
            purchased.value() * fbm,
            Tolerances::default()
        ));
        assert!(bare.is_within_range());
    }

    #[test]
    fn reports_both_dimensions() {
        let pump = PumpCost::new(PumpType::PositiveDisplacement, PumpMaterial::CastIron).unwrap();
        let r = pump
            .bare_module(kw(0.5), barg(150.0), CostIndex::REFERENCE)
            .unwrap();
        assert_eq!(
            r.status(Dimension::Size).unwrap().label(),
            "Warning - Below minimum size"
        );
        assert_eq!(
            r.status(Dimension::Pressure).unwrap().label(),
            "Warning - Upper pressure limit"
        );
    }
}
