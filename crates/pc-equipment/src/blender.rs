//! Blenders, sized by volume (m3).

use crate::error::EquipmentResult;
use crate::table::{SizeUnit, TypeSpec, named_enum};
use crate::traits::EquipmentCost;
use pc_core::numeric::Real;
use pc_core::units::{Volume, tabulated};
use pc_cost::{CostCorrelation, CostIndex, CostResult, compose_simple};

named_enum! {
    pub enum BlenderType ("blender type") {
        Kneader,
        Ribbon,
        Rotary,
    }
}

impl BlenderType {
    pub const fn spec(self) -> TypeSpec {
        match self {
            BlenderType::Kneader => {
                TypeSpec::new(SizeUnit::CubicMeter, 0.14, 3.0, [5.0141, 0.5867, 0.3224])
            }
            BlenderType::Ribbon | BlenderType::Rotary => {
                TypeSpec::new(SizeUnit::CubicMeter, 0.7, 11.0, [4.1366, 0.5072, 0.0070])
            }
        }
    }

    /// Lumped bare-module factor.
    pub const fn bare_module_factor(self) -> Real {
        1.12
    }
}

#[derive(Clone, Debug)]
pub struct BlenderCost {
    ty: BlenderType,
    correlation: CostCorrelation,
}

impl BlenderCost {
    pub fn new(ty: BlenderType) -> Self {
        Self {
            ty,
            correlation: ty.spec().correlation(),
        }
    }

    pub fn equipment_type(&self) -> BlenderType {
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

impl EquipmentCost for BlenderCost {
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
