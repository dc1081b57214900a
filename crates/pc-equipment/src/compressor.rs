//! Gas compressors without drives, sized by fluid power (kW).
//!
//! The material factor is the whole bare-module factor for compressors.

use crate::error::EquipmentResult;
use crate::table::{SizeUnit, TypeSpec, named_enum};
use crate::traits::EquipmentCost;
use pc_core::numeric::Real;
use pc_core::units::{Power, tabulated};
use pc_cost::{CostCorrelation, CostIndex, CostResult, compose_simple};

named_enum! {
    pub enum CompressorType ("compressor type") {
        Centrifugal,
        Axial,
        Reciprocating,
        Rotary,
    }
}

named_enum! {
    pub enum CompressorMaterial ("compressor material") {
        CarbonSteel,
        StainlessSteel,
        NiAlloy,
    }
}

impl CompressorType {
    pub const fn spec(self) -> TypeSpec {
        match self {
            CompressorType::Centrifugal | CompressorType::Axial | CompressorType::Reciprocating => {
                TypeSpec::new(SizeUnit::Kilowatt, 450.0, 3000.0, [2.2897, 1.3604, -0.1027])
            }
            CompressorType::Rotary => {
                TypeSpec::new(SizeUnit::Kilowatt, 18.0, 950.0, [5.0355, -1.8002, 0.8253])
            }
        }
    }
}

impl CompressorMaterial {
    pub const fn factor(self, ty: CompressorType) -> Real {
        use CompressorMaterial::*;
        use CompressorType::*;
        match (self, ty) {
            (CarbonSteel, Centrifugal) => 2.78,
            (CarbonSteel, Axial) => 3.85,
            (CarbonSteel, Reciprocating) => 3.37,
            (CarbonSteel, Rotary) => 2.41,
            (StainlessSteel, Centrifugal) => 5.77,
            (StainlessSteel, Axial) => 8.03,
            (StainlessSteel, Reciprocating) => 7.01,
            (StainlessSteel, Rotary) => 5.07,
            (NiAlloy, Centrifugal) => 11.49,
            (NiAlloy, Axial) => 16.0,
            (NiAlloy, Reciprocating) => 13.92,
            (NiAlloy, Rotary) => 9.9,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CompressorCost {
    ty: CompressorType,
    material: CompressorMaterial,
    correlation: CostCorrelation,
}

impl CompressorCost {
    pub fn new(ty: CompressorType, material: CompressorMaterial) -> Self {
        Self {
            ty,
            material,
            correlation: ty.spec().correlation(),
        }
    }

    pub fn material(&self) -> CompressorMaterial {
        self.material
    }

    pub fn equipment_type(&self) -> CompressorType {
        self.ty
    }

    pub fn purchased(&self, power: Power, cost_index: CostIndex) -> EquipmentResult<CostResult> {
        self.purchased_cost(tabulated::kw(power), cost_index)
    }

    pub fn bare_module(&self, power: Power, cost_index: CostIndex) -> EquipmentResult<CostResult> {
        let base = self.base_cost(tabulated::kw(power), cost_index)?;
        Ok(compose_simple(&base, self.material.factor(self.ty)))
    }
}

impl EquipmentCost for CompressorCost {
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
