//! Power-recovery turbines, sized by shaft power (kW).

use crate::error::EquipmentResult;
use crate::table::{SizeUnit, TypeSpec, named_enum};
use crate::traits::EquipmentCost;
use pc_core::numeric::Real;
use pc_core::units::{Power, tabulated};
use pc_cost::{CostCorrelation, CostIndex, CostResult, compose_simple};

named_enum! {
    pub enum TurbineType ("turbine type") {
        AxialGas,
        RadialGas,
        RadialLiquid,
    }
}

named_enum! {
    pub enum TurbineMaterial ("turbine material") {
        CarbonSteel,
        StainlessSteel,
        NiAlloy,
    }
}

impl TurbineType {
    pub const fn spec(self) -> TypeSpec {
        match self {
            TurbineType::AxialGas => {
                TypeSpec::new(SizeUnit::Kilowatt, 100.0, 4000.0, [2.7051, 1.4398, -0.1776])
            }
            TurbineType::RadialGas | TurbineType::RadialLiquid => {
                TypeSpec::new(SizeUnit::Kilowatt, 100.0, 1500.0, [2.2476, 1.4965, -0.1618])
            }
        }
    }
}

impl TurbineMaterial {
    /// Same factor for every turbine type.
    pub const fn factor(self, _ty: TurbineType) -> Real {
        match self {
            TurbineMaterial::CarbonSteel => 3.54,
            TurbineMaterial::StainlessSteel => 6.16,
            TurbineMaterial::NiAlloy => 11.71,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TurbineCost {
    ty: TurbineType,
    material: TurbineMaterial,
    correlation: CostCorrelation,
}

impl TurbineCost {
    pub fn new(ty: TurbineType, material: TurbineMaterial) -> Self {
        Self {
            ty,
            material,
            correlation: ty.spec().correlation(),
        }
    }

    pub fn equipment_type(&self) -> TurbineType {
        self.ty
    }

    pub fn material(&self) -> TurbineMaterial {
        self.material
    }

    pub fn purchased(&self, power: Power, cost_index: CostIndex) -> EquipmentResult<CostResult> {
        self.purchased_cost(tabulated::kw(power), cost_index)
    }

    pub fn bare_module(&self, power: Power, cost_index: CostIndex) -> EquipmentResult<CostResult> {
        let base = self.base_cost(tabulated::kw(power), cost_index)?;
        Ok(compose_simple(&base, self.material.factor(self.ty)))
    }
}

impl EquipmentCost for TurbineCost {
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
