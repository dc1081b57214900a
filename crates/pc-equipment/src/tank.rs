//! API storage tanks, sized by volume (m3).

use crate::error::EquipmentResult;
use crate::pressure_tables;
use crate::table::{SizeUnit, TypeSpec, named_enum};
use crate::traits::EquipmentCost;
use pc_core::numeric::Real;
use pc_core::units::{Pressure, Volume, tabulated};
use pc_cost::{CostCorrelation, CostIndex, CostResult, PressureFactorTable, compose_linear};

named_enum! {
    pub enum TankType ("tank type") {
        APIFixedRoof,
        APIFloatingRoof,
    }
}

named_enum! {
    pub enum TankMaterial ("tank material") {
        CarbonSteel,
        StainlessSteelClad,
        StainlessSteel,
        NiAlloyClad,
        NiAlloy,
        TitaniumClad,
        Titanium,
    }
}

pub const TANK_B1: Real = 2.25;

impl TankType {
    pub const fn spec(self) -> TypeSpec {
        match self {
            TankType::APIFixedRoof => {
                TypeSpec::new(SizeUnit::CubicMeter, 90.0, 30_000.0, [4.8509, -0.3973, 0.1445])
            }
            TankType::APIFloatingRoof => {
                TypeSpec::new(SizeUnit::CubicMeter, 1000.0, 40_000.0, [5.9567, -0.7585, 0.1749])
            }
        }
    }

    /// `(B1, B2)`. As with pumps, B2 repeats B1 instead of the published 1.82.
    pub const fn bare_module_constants(self) -> (Real, Real) {
        (TANK_B1, TANK_B1)
    }
}

impl TankMaterial {
    pub const fn factor(self, ty: TankType) -> Real {
        match self {
            TankMaterial::CarbonSteel => 1.0,
            TankMaterial::StainlessSteelClad => 1.75,
            TankMaterial::StainlessSteel => 3.12,
            TankMaterial::NiAlloyClad => 3.63,
            TankMaterial::NiAlloy => 7.09,
            TankMaterial::TitaniumClad => 4.71,
            TankMaterial::Titanium => match ty {
                TankType::APIFixedRoof => 9.43,
                TankType::APIFloatingRoof => 9.73,
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct TankCost {
    ty: TankType,
    material: TankMaterial,
    correlation: CostCorrelation,
    pressure: PressureFactorTable,
}

impl TankCost {
    pub fn new(ty: TankType, material: TankMaterial) -> EquipmentResult<Self> {
        Ok(Self {
            ty,
            material,
            correlation: ty.spec().correlation(),
            pressure: PressureFactorTable::from_slice(pressure_tables::TANK)?,
        })
    }

    pub fn equipment_type(&self) -> TankType {
        self.ty
    }

    pub fn material(&self) -> TankMaterial {
        self.material
    }

    pub fn purchased(&self, volume: Volume, cost_index: CostIndex) -> EquipmentResult<CostResult> {
        self.purchased_cost(tabulated::m3(volume), cost_index)
    }

    pub fn bare_module(
        &self,
        volume: Volume,
        pressure: Pressure,
        cost_index: CostIndex,
    ) -> EquipmentResult<CostResult> {
        let fp = self.pressure.factor(tabulated::barg(pressure))?;
        let base = self.base_cost(tabulated::m3(volume), cost_index)?;
        let (b1, b2) = self.ty.bare_module_constants();
        Ok(compose_linear(
            &base,
            b1,
            b2,
            self.material.factor(self.ty),
            &fp,
        ))
    }
}

impl EquipmentCost for TankCost {
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
