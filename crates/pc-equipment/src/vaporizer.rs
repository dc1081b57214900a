//! Vaporizers (jacketed or coiled vessels), sized by volume (m3).

use crate::error::EquipmentResult;
use crate::pressure_tables;
use crate::table::{SizeUnit, TypeSpec, named_enum};
use crate::traits::EquipmentCost;
use pc_core::numeric::Real;
use pc_core::units::{Pressure, Volume, tabulated};
use pc_cost::{
    CostCorrelation, CostIndex, CostResult, PressureFactorTable, compose_pressure_adjusted,
};

named_enum! {
    pub enum VaporizerType ("vaporizer type") {
        InternalCoils,
        JacketedVessels,
    }
}

named_enum! {
    pub enum VaporizerMaterial ("vaporizer material") {
        CarbonSteel,
        Copper,
        GlassSS,
        GlassNi,
        StainlessSteel,
        StainlessSteelClad,
        NiAlloy,
        NiAlloyClad,
        Titanium,
        TitaniumClad,
    }
}

impl VaporizerType {
    pub const fn spec(self) -> TypeSpec {
        match self {
            VaporizerType::InternalCoils => {
                TypeSpec::new(SizeUnit::CubicMeter, 1.0, 100.0, [4.0000, 0.4321, 0.1700])
            }
            VaporizerType::JacketedVessels => {
                TypeSpec::new(SizeUnit::CubicMeter, 1.0, 100.0, [3.8751, 0.3328, 0.1901])
            }
        }
    }
}

impl VaporizerMaterial {
    pub const fn factor(self, ty: VaporizerType) -> Real {
        use VaporizerMaterial::*;
        let (coils, jacketed) = match self {
            CarbonSteel => (3.04, 2.73),
            Copper => (3.83, 3.45),
            GlassSS => (5.19, 4.67),
            GlassNi => (5.49, 4.95),
            StainlessSteel => (5.19, 4.81),
            StainlessSteelClad => (4.16, 3.83),
            NiAlloy => (10.14, 9.15),
            NiAlloyClad => (6.64, 6.00),
            Titanium => (15.23, 13.78),
            TitaniumClad => (10.66, 9.69),
        };
        match ty {
            VaporizerType::InternalCoils => coils,
            VaporizerType::JacketedVessels => jacketed,
        }
    }
}

#[derive(Clone, Debug)]
pub struct VaporizerCost {
    ty: VaporizerType,
    material: VaporizerMaterial,
    correlation: CostCorrelation,
    pressure: PressureFactorTable,
}

impl VaporizerCost {
    pub fn new(ty: VaporizerType, material: VaporizerMaterial) -> EquipmentResult<Self> {
        Ok(Self {
            ty,
            material,
            correlation: ty.spec().correlation(),
            pressure: PressureFactorTable::from_slice(pressure_tables::VAPORIZER)?,
        })
    }

    pub fn equipment_type(&self) -> VaporizerType {
        self.ty
    }

    pub fn material(&self) -> VaporizerMaterial {
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
        Ok(compose_pressure_adjusted(
            &base,
            self.material.factor(self.ty),
            &fp,
            1.0,
        ))
    }
}

impl EquipmentCost for VaporizerCost {
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
