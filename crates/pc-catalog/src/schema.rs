//! Catalog file schema.
//!
//! Sizes and pressures are plain numbers in the units the correlations are
//! tabulated in: the entry's `unit` for size, barg for pressure (kPa rise for fans).

use pc_equipment::SizeUnit;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub equipment: Vec<EquipmentDef>,
}

impl Catalog {
    pub fn get(&self, id: &str) -> Option<&EquipmentDef> {
        self.equipment.iter().find(|e| e.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EquipmentDef {
    pub id: String,
    pub name: String,
    pub unit: UnitDef,
    pub size: SizeRangeDef,
    /// `[K1, K2, K3]`.
    pub coefficients: [f64; 3],
    /// Material name to material factor.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub materials: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_material: Option<String>,
    pub bare_module: BareModuleDef,
}

/// Case-insensitive material lookup shared by validation and evaluation.
///
/// Validated catalogs never hold two keys equal up to ASCII case.
pub fn find_material<'a>(
    materials: &'a BTreeMap<String, f64>,
    name: &str,
) -> Option<(&'a str, f64)> {
    materials
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(k, f)| (k.as_str(), *f))
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnitDef {
    Kilowatt,
    CubicMeter,
    CubicMeterPerSecond,
}

impl From<UnitDef> for SizeUnit {
    fn from(unit: UnitDef) -> Self {
        match unit {
            UnitDef::Kilowatt => SizeUnit::Kilowatt,
            UnitDef::CubicMeter => SizeUnit::CubicMeter,
            UnitDef::CubicMeterPerSecond => SizeUnit::CubicMeterPerSecond,
        }
    }
}

impl From<SizeUnit> for UnitDef {
    fn from(unit: SizeUnit) -> Self {
        match unit {
            SizeUnit::Kilowatt => UnitDef::Kilowatt,
            SizeUnit::CubicMeter => UnitDef::CubicMeter,
            SizeUnit::CubicMeterPerSecond => UnitDef::CubicMeterPerSecond,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SizeRangeDef {
    pub min: f64,
    pub max: f64,
}

/// How the purchased cost becomes a bare-module cost.
///
/// The resolved material factor (1 when the entry lists no materials) always
/// multiplies in as `Fm`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum BareModuleDef {
    /// `Cp0 · factor · Fm`.
    Simple {
        #[serde(default = "unity")]
        factor: f64,
    },
    /// `Cp0 · factor · Fm · Fp · Ft`.
    PressureAdjusted {
        #[serde(default = "unity")]
        factor: f64,
        pressure: Vec<PressureSegmentDef>,
        /// Apply the superheat correction `Ft`.
        #[serde(default)]
        superheat: bool,
    },
    /// `Cp0 · (B1 + B2 · Fm · Fp)`.
    Linear {
        b1: f64,
        b2: f64,
        pressure: Vec<PressureSegmentDef>,
    },
}

fn unity() -> f64 {
    1.0
}

/// One pressure interval `[lower, upper)`. Missing bounds are 0 and unbounded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PressureSegmentDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
    /// `[C1, C2, C3]`; all zeros gives a factor of one.
    #[serde(default)]
    pub coefficients: [f64; 3],
}

/// Which cost an [`EstimateRequest`] asks for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CostBasis {
    Purchased,
    #[default]
    BareModule,
}

/// Inputs for pricing one catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EstimateRequest {
    pub size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    /// Superheat above saturation, K. Defaults to 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superheat: Option<f64>,
    /// CEPCI; defaults to the 397 reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_index: Option<f64>,
    #[serde(default)]
    pub basis: CostBasis,
}

impl EstimateRequest {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn pressure(mut self, pressure: f64) -> Self {
        self.pressure = Some(pressure);
        self
    }

    pub fn superheat(mut self, superheat: f64) -> Self {
        self.superheat = Some(superheat);
        self
    }

    pub fn cost_index(mut self, cost_index: f64) -> Self {
        self.cost_index = Some(cost_index);
        self
    }

    pub fn purchased(mut self) -> Self {
        self.basis = CostBasis::Purchased;
        self
    }
}
