//! Agitators and mixers, sized by shaft power (kW).

use crate::error::EquipmentResult;
use crate::table::{SizeUnit, TypeSpec, named_enum};
use crate::traits::EquipmentCost;
use pc_core::numeric::Real;
use pc_core::units::{Power, tabulated};
use pc_cost::{CostCorrelation, CostIndex, CostResult, compose_simple};

named_enum! {
    pub enum MixerType ("mixer type") {
        Impeller,
        Propeller,
        Turbine,
    }
}

impl MixerType {
    pub const fn spec(self) -> TypeSpec {
        match self {
            MixerType::Impeller => {
                TypeSpec::new(SizeUnit::Kilowatt, 5.0, 150.0, [3.8511, 0.7009, -0.0003])
            }
            MixerType::Propeller => {
                TypeSpec::new(SizeUnit::Kilowatt, 5.0, 500.0, [4.3207, 0.0359, 0.1346])
            }
            MixerType::Turbine => {
                TypeSpec::new(SizeUnit::Kilowatt, 5.0, 150.0, [3.4092, 0.4896, 0.0030])
            }
        }
    }

    pub const fn bare_module_factor(self) -> Real {
        1.38
    }
}

#[derive(Clone, Debug)]
pub struct MixerCost {
    ty: MixerType,
    correlation: CostCorrelation,
}

impl MixerCost {
    pub fn new(ty: MixerType) -> Self {
        Self {
            ty,
            correlation: ty.spec().correlation(),
        }
    }

    pub fn equipment_type(&self) -> MixerType {
        self.ty
    }

    pub fn purchased(&self, power: Power, cost_index: CostIndex) -> EquipmentResult<CostResult> {
        self.purchased_cost(tabulated::kw(power), cost_index)
    }

    pub fn bare_module(&self, power: Power, cost_index: CostIndex) -> EquipmentResult<CostResult> {
        let base = self.base_cost(tabulated::kw(power), cost_index)?;
        Ok(compose_simple(&base, self.ty.bare_module_factor()))
    }
}

impl EquipmentCost for MixerCost {
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
    use pc_core::units::kw;

    #[test]
    fn propeller_has_wider_range() {
        let mixer = MixerCost::new(MixerType::Propeller);
        let r = mixer.purchased(kw(400.0), CostIndex::REFERENCE).unwrap();
        assert!(r.is_within_range());

        let impeller = MixerCost::new(MixerType::Impeller);
        let r = impeller.purchased(kw(400.0), CostIndex::REFERENCE).unwrap();
        assert!(!r.is_within_range());
    }
}
