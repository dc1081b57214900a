//! Tower packing, sized by packed volume (m3).

use crate::error::EquipmentResult;
use crate::table::{SizeUnit, TypeSpec, named_enum};
use crate::traits::EquipmentCost;
use pc_core::numeric::Real;
use pc_core::units::{Volume, tabulated};
use pc_cost::{CostCorrelation, CostIndex, CostResult, compose_simple};

named_enum! {
    pub enum PackingType ("packing type") {
        Towers,
    }
}

named_enum! {
    pub enum PackingMaterial ("packing material") {
        SS304,
        Polyethylene,
        Ceramic,
    }
}

impl PackingType {
    pub const fn spec(self) -> TypeSpec {
        match self {
            PackingType::Towers => {
                TypeSpec::new(SizeUnit::CubicMeter, 0.03, 628.0, [2.4493, 0.9744, 0.0055])
            }
        }
    }
}

impl PackingMaterial {
    pub const fn factor(self, ty: PackingType) -> Real {
        match (self, ty) {
            (PackingMaterial::SS304, PackingType::Towers) => 7.14,
            (PackingMaterial::Polyethylene, PackingType::Towers) => 1.03,
            (PackingMaterial::Ceramic, PackingType::Towers) => 4.2,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PackingCost {
    ty: PackingType,
    material: PackingMaterial,
    correlation: CostCorrelation,
}

impl Default for PackingCost {
    fn default() -> Self {
        Self::new(PackingType::Towers, PackingMaterial::Polyethylene)
    }
}

impl PackingCost {
    pub fn new(ty: PackingType, material: PackingMaterial) -> Self {
        Self {
            ty,
            material,
            correlation: ty.spec().correlation(),
        }
    }

    pub fn equipment_type(&self) -> PackingType {
        self.ty
    }

    pub fn material(&self) -> PackingMaterial {
        self.material
    }

    pub fn purchased(&self, volume: Volume, cost_index: CostIndex) -> EquipmentResult<CostResult> {
        self.purchased_cost(tabulated::m3(volume), cost_index)
    }

    pub fn bare_module(&self, volume: Volume, cost_index: CostIndex) -> EquipmentResult<CostResult> {
        let base = self.base_cost(tabulated::m3(volume), cost_index)?;
        Ok(compose_simple(&base, self.material.factor(self.ty)))
    }
}

impl EquipmentCost for PackingCost {
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
