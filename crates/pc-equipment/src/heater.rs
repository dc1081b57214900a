//! Thermal-fluid heaters and packaged steam boilers, sized by duty (kW).

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
    pub enum HeaterType ("heater type") {
        Diphenyl,
        MoltenSalt,
        HotWater,
        SteamBoiler,
    }
}

impl HeaterType {
    pub const fn spec(self) -> TypeSpec {
        match self {
            HeaterType::Diphenyl => {
                TypeSpec::new(SizeUnit::Kilowatt, 650.0, 10_750.0, [2.2628, 0.8581, 0.0003])
            }
            HeaterType::MoltenSalt => {
                TypeSpec::new(SizeUnit::Kilowatt, 650.0, 10_750.0, [1.1979, 1.4782, -0.0958])
            }
            HeaterType::HotWater => {
                TypeSpec::new(SizeUnit::Kilowatt, 650.0, 10_750.0, [2.0829, 0.9074, -0.0243])
            }
            HeaterType::SteamBoiler => {
                TypeSpec::new(SizeUnit::Kilowatt, 1200.0, 9400.0, [6.9617, -1.4800, 0.3161])
            }
        }
    }

    pub const fn bare_module_factor(self) -> Real {
        2.19
    }
}

#[derive(Clone, Debug)]
pub struct HeaterCost {
    ty: HeaterType,
    correlation: CostCorrelation,
    pressure: PressureFactorTable,
}

impl HeaterCost {
    pub fn new(ty: HeaterType) -> EquipmentResult<Self> {
        Ok(Self {
            ty,
            correlation: ty.spec().correlation(),
            pressure: PressureFactorTable::from_slice(pressure_tables::heater(ty))?,
        })
    }

    pub fn equipment_type(&self) -> HeaterType {
        self.ty
    }

    pub fn purchased(&self, duty: Power, cost_index: CostIndex) -> EquipmentResult<CostResult> {
        self.purchased_cost(tabulated::kw(duty), cost_index)
    }

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
            self.ty.bare_module_factor(),
            &fp,
            ft,
        ))
    }
}

impl EquipmentCost for HeaterCost {
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
