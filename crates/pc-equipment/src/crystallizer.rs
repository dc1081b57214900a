//! Batch crystallizers, sized by volume (m3).

use crate::error::EquipmentResult;
use crate::table::{SizeUnit, TypeSpec, named_enum};
use crate::traits::EquipmentCost;
use pc_core::numeric::Real;
use pc_core::units::{Volume, tabulated};
use pc_cost::{CostCorrelation, CostIndex, CostResult, compose_simple};

named_enum! {
    pub enum CrystallizerType ("crystallizer type") {
        Batch,
    }
}

impl CrystallizerType {
    pub const fn spec(self) -> TypeSpec {
        match self {
            CrystallizerType::Batch => {
                TypeSpec::new(SizeUnit::CubicMeter, 1.5, 30.0, [4.5097, 0.1731, 0.1344])
            }
        }
    }

    pub const fn bare_module_factor(self) -> Real {
        1.60
    }
}

#[derive(Clone, Debug)]
pub struct CrystallizerCost {
    ty: CrystallizerType,
    correlation: CostCorrelation,
}

impl CrystallizerCost {
    pub fn new(ty: CrystallizerType) -> Self {
        Self {
            ty,
            correlation: ty.spec().correlation(),
        }
    }

    pub fn equipment_type(&self) -> CrystallizerType {
        self.ty
    }

    pub fn purchased(&self, volume: Volume, cost_index: CostIndex) -> EquipmentResult<CostResult> {
        self.purchased_cost(tabulated::m3(volume), cost_index)
    }

    pub fn bare_module(&self, volume: Volume, cost_index: CostIndex) -> EquipmentResult<CostResult> {
        let base = self.base_cost(tabulated::m3(volume), cost_index)?;
        Ok(compose_simple(&base, self.ty.bare_module_factor()))
    }
}

impl EquipmentCost for CrystallizerCost {
    fn type_name(&self) -> &'static str {
        self.ty.name()
    }

    fn unit(&self) -> SizeUnit {
        SizeUnit::CubicMeter
    }

    fn correlation(&self) -> &CostCorrelation {
        &self.correlation
    }
}
