//! Furnaces and fired heaters, sized by duty (kW).

use crate::error::EquipmentResult;
use crate::pressure_tables;
use crate::table::{SizeUnit, TypeSpec, named_enum};
use crate::traits::EquipmentCost;
use pc_core::numeric::Real;
use pc_core::units::{Power, Pressure, TempInterval, tabulated};
use pc_cost::{
    CostCorrelation, CostIndex, CostResult, PressureFactorTable, compose_pressure_adjusted,
    superheat_factor,
};

named_enum! {
    pub enum FurnaceType ("furnace type") {
        ReformerFurnace,
        PyrolysisFurnace,
        NonreactiveFiredHeater,
    }
}

named_enum! {
    pub enum FurnaceMaterial ("furnace material") {
        CarbonSteel,
        StainlessSteel,
        AlloySteel,
    }
}

impl FurnaceType {
    pub const fn spec(self) -> TypeSpec {
        match self {
            FurnaceType::ReformerFurnace => {
                TypeSpec::new(SizeUnit::Kilowatt, 3000.0, 100_000.0, [3.0680, 0.6597, 0.0194])
            }
            FurnaceType::PyrolysisFurnace => {
                TypeSpec::new(SizeUnit::Kilowatt, 3000.0, 100_000.0, [2.3859, 0.9721, -0.0206])
            }
            FurnaceType::NonreactiveFiredHeater => {
                TypeSpec::new(SizeUnit::Kilowatt, 1000.0, 100_000.0, [7.3488, -1.1666, 0.2028])
            }
        }
    }
}

impl FurnaceMaterial {
    pub const fn factor(self, ty: FurnaceType) -> Real {
        match (self, ty) {
            (_, FurnaceType::NonreactiveFiredHeater) => 2.19,
            (FurnaceMaterial::CarbonSteel, _) => 2.14,
            (FurnaceMaterial::StainlessSteel, _) => 2.54,
            (FurnaceMaterial::AlloySteel, _) => 2.82,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FurnaceCost {
    ty: FurnaceType,
    material: FurnaceMaterial,
    correlation: CostCorrelation,
    pressure: PressureFactorTable,
}

impl FurnaceCost {
    pub fn new(ty: FurnaceType, material: FurnaceMaterial) -> EquipmentResult<Self> {
        Ok(Self {
            ty,
            material,
            correlation: ty.spec().correlation(),
            pressure: PressureFactorTable::from_slice(pressure_tables::furnace(ty))?,
        })
    }

    pub fn equipment_type(&self) -> FurnaceType {
        self.ty
    }

    pub fn material(&self) -> FurnaceMaterial {
        self.material
    }

    pub fn purchased(&self, duty: Power, cost_index: CostIndex) -> EquipmentResult<CostResult> {
        self.purchased_cost(tabulated::kw(duty), cost_index)
    }

    /// Bare-module cost at gauge `pressure` with `superheat` above saturation.
    pub fn bare_module(
        &self,
        duty: Power,
        pressure: Pressure,
        superheat: TempInterval,
        cost_index: CostIndex,
    ) -> EquipmentResult<CostResult> {
        let fp = self.pressure.factor(tabulated::barg(pressure))?;
        let ft = superheat_factor(tabulated::delta_k(superheat));
        let base = self.base_cost(tabulated::kw(duty), cost_index)?;
        Ok(compose_pressure_adjusted(
            &base,
            self.material.factor(self.ty),
            &fp,
            ft,
        ))
    }
}

impl EquipmentCost for FurnaceCost {
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
