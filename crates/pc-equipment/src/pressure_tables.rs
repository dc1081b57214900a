//! Tabulated pressure-factor segments per family.
//!
//! Pressures are gauge, in barg, except fans which use the pressure rise in kPa.
//! Evaporator and heat-exchanger tables have no cost facade here but are exposed
//! for callers that price those units themselves.

use pc_core::numeric::Real;
use pc_cost::{CostCoefficients, PressureFactor, PressureFactorTable, PressureSegment};

use crate::error::EquipmentResult;
use crate::fan::FanType;
use crate::furnace::FurnaceType;
use crate::heater::HeaterType;
use crate::pump::PumpType;
use crate::table::named_enum;

const fn seg(lower: Real, upper: Real, c: [Real; 3]) -> PressureSegment {
    PressureSegment::new(lower, upper, CostCoefficients::new(c[0], c[1], c[2]))
}

pub const PUMP_CENTRIFUGAL: &[PressureSegment] = &[
    PressureSegment::unity_below(10.0),
    seg(10.0, 100.0, [0.1347, -0.2368, 0.1021]),
];

pub const PUMP_DISPLACEMENT: &[PressureSegment] = &[
    PressureSegment::unity_below(10.0),
    seg(10.0, 100.0, [-0.3935, 0.3957, -0.00226]),
];

pub const FAN_CENTRIFUGAL: &[PressureSegment] = &[
    PressureSegment::unity_below(1.0),
    seg(1.0, 16.0, [0.0, 0.20899, -0.0328]),
];

pub const FAN_AXIAL: &[PressureSegment] = &[
    PressureSegment::unity_below(1.0),
    seg(1.0, 4.0, [0.0, 0.20899, -0.0328]),
];

pub const FURNACE_REFORMER: &[PressureSegment] = &[
    PressureSegment::unity_below(10.0),
    seg(10.0, 200.0, [0.1405, -0.2698, 0.1293]),
];

pub const FURNACE_PYROLYSIS: &[PressureSegment] = &[
    PressureSegment::unity_below(10.0),
    seg(10.0, 200.0, [0.1017, -0.1957, 0.09403]),
];

pub const FURNACE_NONREACTIVE: &[PressureSegment] = &[
    PressureSegment::unity_below(10.0),
    seg(10.0, 200.0, [0.1347, -0.2368, 0.1021]),
];

pub const HEATER_THERMAL_FLUID: &[PressureSegment] = &[
    PressureSegment::unity_below(2.0),
    seg(2.0, 200.0, [-0.01633, 0.056875, -0.00876]),
];

pub const HEATER_STEAM_BOILER: &[PressureSegment] = &[
    PressureSegment::unity_below(20.0),
    seg(20.0, 40.0, [0.594072, -4.23476, 1.722404]),
];

pub const TANK: &[PressureSegment] = &[
    PressureSegment::unity_below(10.0),
    seg(10.0, 150.0, [0.1578, -0.2992, 0.1413]),
];

pub const EVAPORATOR: &[PressureSegment] = &[
    PressureSegment::unity_below(10.0),
    seg(10.0, 150.0, [0.1578, -0.2992, 0.1413]),
];

pub const VAPORIZER: &[PressureSegment] = &[
    PressureSegment::unity_below(5.0),
    seg(5.0, 320.0, [-0.16742, 0.13428, 0.15058]),
];

const HX_PIPE: &[PressureSegment] = &[
    PressureSegment::unity_below(40.0),
    seg(40.0, 100.0, [0.6072, -0.9120, 0.3327]),
    seg(100.0, 300.0, [13.1467, -12.6574, 3.0705]),
];
const HX_TEFLON_TUBE: &[PressureSegment] = &[PressureSegment::unity_below(15.0)];
const HX_PLATE: &[PressureSegment] = &[PressureSegment::unity_below(19.0)];
const HX_AIR_COOLER: &[PressureSegment] = &[
    PressureSegment::unity_below(10.0),
    seg(10.0, 100.0, [-0.1250, 0.15361, -0.02861]),
];
const HX_SPIRAL_TUBE_TUBE_ONLY: &[PressureSegment] = &[
    PressureSegment::unity_below(150.0),
    seg(150.0, 400.0, [-0.2115, 0.09717, 0.0]),
];
const HX_SPIRAL_TUBE: &[PressureSegment] = &[
    PressureSegment::unity_below(150.0),
    seg(150.0, 400.0, [-0.4045, 0.1859, 0.0]),
];
const HX_SHELL_TUBE_TUBE_ONLY: &[PressureSegment] = &[
    PressureSegment::unity_below(5.0),
    seg(5.0, 140.0, [-0.00164, -0.00627, 0.0123]),
];
const HX_SHELL_TUBE: &[PressureSegment] = &[
    PressureSegment::unity_below(5.0),
    seg(5.0, 140.0, [0.03881, -0.11272, 0.08183]),
];

named_enum! {
    /// Heat exchanger construction, for pressure factors only.
    pub enum HeatExchangerType ("heat exchanger type") {
        DoublePipe,
        MultiplePipe,
        ScrapedWall,
        TeflonTube,
        FlatPlate,
        SpiralPlate,
        AirCooler,
        SpiralTube,
        FixedTubeSheet,
        FloatingHead,
        UTube,
        BayonetTube,
        KettleReboiler,
    }
}

pub fn pump(ty: PumpType) -> &'static [PressureSegment] {
    match ty {
        PumpType::Centrifugal => PUMP_CENTRIFUGAL,
        PumpType::Reciprocating | PumpType::PositiveDisplacement => PUMP_DISPLACEMENT,
    }
}

pub fn fan(ty: FanType) -> &'static [PressureSegment] {
    match ty {
        FanType::CentrifugalRadial | FanType::BackwardCurve => FAN_CENTRIFUGAL,
        FanType::AxialVane | FanType::AxialTube => FAN_AXIAL,
    }
}

pub fn furnace(ty: FurnaceType) -> &'static [PressureSegment] {
    match ty {
        FurnaceType::ReformerFurnace => FURNACE_REFORMER,
        FurnaceType::PyrolysisFurnace => FURNACE_PYROLYSIS,
        FurnaceType::NonreactiveFiredHeater => FURNACE_NONREACTIVE,
    }
}

pub fn heater(ty: HeaterType) -> &'static [PressureSegment] {
    match ty {
        HeaterType::SteamBoiler => HEATER_STEAM_BOILER,
        HeaterType::Diphenyl | HeaterType::MoltenSalt | HeaterType::HotWater => {
            HEATER_THERMAL_FLUID
        }
    }
}

/// `tube_only` selects the tube-side-only table where the construction has one.
pub fn heat_exchanger(ty: HeatExchangerType, tube_only: bool) -> &'static [PressureSegment] {
    use HeatExchangerType::*;
    match ty {
        ScrapedWall | DoublePipe | MultiplePipe => HX_PIPE,
        TeflonTube => HX_TEFLON_TUBE,
        FlatPlate | SpiralPlate => HX_PLATE,
        AirCooler => HX_AIR_COOLER,
        SpiralTube if tube_only => HX_SPIRAL_TUBE_TUBE_ONLY,
        SpiralTube => HX_SPIRAL_TUBE,
        FixedTubeSheet | FloatingHead | UTube | BayonetTube | KettleReboiler if tube_only => {
            HX_SHELL_TUBE_TUBE_ONLY
        }
        FixedTubeSheet | FloatingHead | UTube | BayonetTube | KettleReboiler => HX_SHELL_TUBE,
    }
}

/// Resolve `pressure` against a tabulated segment list in one call.
pub fn factor(segments: &[PressureSegment], pressure: Real) -> EquipmentResult<PressureFactor> {
    Ok(PressureFactorTable::from_slice(segments)?.factor(pressure)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pc_core::{Tolerances, nearly_equal};

    #[test]
    fn evaporator_matches_tank() {
        assert_eq!(EVAPORATOR, TANK);
        let f = factor(EVAPORATOR, 100.0).unwrap();
        let l = 2.0_f64;
        let expected = f64::powf(10.0, 0.1578 - 0.2992 * l + 0.1413 * l * l);
        assert!(nearly_equal(f.value, expected, Tolerances::default()));
        assert!(f.status.within_range());
    }

    #[test]
    fn heat_exchanger_pipe_has_three_segments() {
        let segments = heat_exchanger(HeatExchangerType::DoublePipe, false);
        assert_eq!(segments.len(), 3);
        let table = PressureFactorTable::from_slice(segments).unwrap();
        assert_eq!(table.max_segment().upper, 300.0);
        let f = table.factor(150.0).unwrap();
        assert!(f.value > 1.0);
        assert!(f.status.within_range());
    }

    #[test]
    fn plate_exchanger_above_rating_extrapolates_unity() {
        let f = factor(heat_exchanger(HeatExchangerType::FlatPlate, true), 25.0).unwrap();
        assert_eq!(f.value, 1.0);
        assert_eq!(f.status.label(), "Warning - Upper pressure limit");
    }

    #[test]
    fn tube_only_changes_shell_and_tube_table() {
        let shell = heat_exchanger(HeatExchangerType::UTube, false);
        let tube = heat_exchanger(HeatExchangerType::UTube, true);
        assert_ne!(shell, tube);
        assert_eq!(
            heat_exchanger(HeatExchangerType::ScrapedWall, true),
            heat_exchanger(HeatExchangerType::ScrapedWall, false)
        );
    }

    #[test]
    fn every_table_resolves_at_zero_gauge() {
        let tables = [
            PUMP_CENTRIFUGAL,
            PUMP_DISPLACEMENT,
            FAN_CENTRIFUGAL,
            FAN_AXIAL,
            FURNACE_REFORMER,
            FURNACE_PYROLYSIS,
            FURNACE_NONREACTIVE,
            HEATER_THERMAL_FLUID,
            HEATER_STEAM_BOILER,
            TANK,
            EVAPORATOR,
            VAPORIZER,
        ];
        for segments in tables {
            let f = factor(segments, 0.0).unwrap();
            assert_eq!(f.value, 1.0);
        }
        for &ty in HeatExchangerType::ALL {
            assert_eq!(factor(heat_exchanger(ty, false), 0.0).unwrap().value, 1.0);
        }
    }
}
