//! Fans including electric motors, sized by gas flowrate (m3/s).
//!
//! The pressure factor uses the fan's pressure rise in kPa rather than barg.

use crate::error::EquipmentResult;
use crate::pressure_tables;
use crate::table::{SizeUnit, TypeSpec, named_enum};
use crate::traits::EquipmentCost;
use pc_core::numeric::Real;
use pc_core::units::{Pressure, VolumeRate, tabulated};
use pc_cost::{
    CostCorrelation, CostIndex, CostResult, PressureFactorTable, compose_pressure_adjusted,
};

named_enum! {
    pub enum FanType ("fan type") {
        CentrifugalRadial,
        BackwardCurve,
        AxialVane,
        AxialTube,
    }
}

named_enum! {
    pub enum FanMaterial ("fan material") {
        CarbonSteel,
        Fiberglass,
        NiAlloy,
        StainlessSteel,
    }
}

impl FanType {
    pub const fn spec(self) -> TypeSpec {
        let k = match self {
            FanType::CentrifugalRadial => [3.5391, -0.3533, 0.4477],
            FanType::BackwardCurve => [3.3471, -0.0734, 0.3090],
            FanType::AxialVane => [3.1761, -0.1373, 0.3414],
            FanType::AxialTube => [3.0414, -0.3375, 0.4722],
        };
        TypeSpec::new(SizeUnit::CubicMeterPerSecond, 1.0, 100.0, k)
    }
}

impl FanMaterial {
    /// Same factor for every fan type.
    pub const fn factor(self, _ty: FanType) -> Real {
        match self {
            FanMaterial::CarbonSteel => 2.74,
            FanMaterial::Fiberglass => 5.03,
            FanMaterial::NiAlloy => 5.78,
            FanMaterial::StainlessSteel => 11.52,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FanCost {
    ty: FanType,
    material: FanMaterial,
    correlation: CostCorrelation,
    pressure: PressureFactorTable,
}

impl FanCost {
    pub fn new(ty: FanType, material: FanMaterial) -> EquipmentResult<Self> {
        Ok(Self {
            ty,
            material,
            correlation: ty.spec().correlation(),
            pressure: PressureFactorTable::from_slice(pressure_tables::fan(ty))?,
        })
    }

    pub fn equipment_type(&self) -> FanType {
        self.ty
    }

    pub fn material(&self) -> FanMaterial {
        self.material
    }

    pub fn purchased(
        &self,
        flowrate: VolumeRate,
        cost_index: CostIndex,
    ) -> EquipmentResult<CostResult> {
        self.purchased_cost(tabulated::m3ps(flowrate), cost_index)
    }

    /// Bare-module cost at `rise`, the pressure rise across the fan.
    pub fn bare_module(
        &self,
        flowrate: VolumeRate,
        rise: Pressure,
        cost_index: CostIndex,
    ) -> EquipmentResult<CostResult> {
        let fp = self.pressure.factor(tabulated::kpa(rise))?;
        let base = self.base_cost(tabulated::m3ps(flowrate), cost_index)?;
        Ok(compose_pressure_adjusted(
            &base,
            self.material.factor(self.ty),
            &fp,
            1.0,
        ))
    }
}

impl EquipmentCost for FanCost {
    fn type_name(&self) -> &'static str {
        self.ty.name()
    }

    fn unit(&self) -> SizeUnit {
        SizeUnit::CubicMeterPerSecond
    }

    fn correlation(&self) -> &CostCorrelation {
        &self.correlation
    }
}
