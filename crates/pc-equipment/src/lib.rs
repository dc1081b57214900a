//! pc-equipment: tabulated cost facades for process equipment families.
//!
//! Each family module holds its type and material tables and a `*Cost` facade
//! that resolves them once at construction. Facades take sizing inputs as
//! `uom` quantities and convert to the tabulated unit internally.
//!
//! | family       | size input       | bare-module rule              |
//! |--------------|------------------|-------------------------------|
//! | blender      | volume           | `Cp0 · 1.12`                  |
//! | compressor   | fluid power      | `Cp0 · Fbm(material)`         |
//! | crystallizer | volume           | `Cp0 · 1.60`                  |
//! | fan          | gas flowrate     | `Cp0 · Fbm · Fp(rise)`        |
//! | furnace      | duty             | `Cp0 · Fbm · Fp · Ft`         |
//! | heater       | duty             | `Cp0 · 2.19 · Fp · Ft`        |
//! | mixer        | power            | `Cp0 · 1.38`                  |
//! | packing      | volume           | `Cp0 · Fbm(material)`         |
//! | pump         | shaft power      | `Cp0 · (B1 + B2 · Fm · Fp)`   |
//! | tank         | volume           | `Cp0 · (B1 + B2 · Fm · Fp)`   |
//! | turbine      | power            | `Cp0 · Fbm(material)`         |
//! | vaporizer    | volume           | `Cp0 · Fm · Fp`               |
//!
//! # Example
//!
//! ```
//! use pc_core::units::{barg, kw};
//! use pc_cost::CostIndex;
//! use pc_equipment::{PumpCost, PumpMaterial, PumpType};
//!
//! let pump = PumpCost::new(PumpType::Centrifugal, PumpMaterial::StainlessSteel).unwrap();
//! let cost = pump
//!     .bare_module(kw(40.0), barg(15.0), CostIndex::new(600.0).unwrap())
//!     .unwrap();
//! assert!(cost.is_within_range());
//! ```

pub mod blender;
pub mod compressor;
pub mod crystallizer;
pub mod error;
pub mod fan;
pub mod furnace;
pub mod heater;
pub mod mixer;
pub mod packing;
pub mod pressure_tables;
pub mod pump;
pub mod table;
pub mod tank;
pub mod traits;
pub mod turbine;
pub mod vaporizer;

pub use blender::{BlenderCost, BlenderType};
pub use compressor::{CompressorCost, CompressorMaterial, CompressorType};
pub use crystallizer::{CrystallizerCost, CrystallizerType};
pub use error::{EquipmentError, EquipmentResult};
pub use fan::{FanCost, FanMaterial, FanType};
pub use furnace::{FurnaceCost, FurnaceMaterial, FurnaceType};
pub use heater::{HeaterCost, HeaterType};
pub use mixer::{MixerCost, MixerType};
pub use packing::{PackingCost, PackingMaterial, PackingType};
pub use pressure_tables::HeatExchangerType;
pub use pump::{PumpCost, PumpMaterial, PumpType};
pub use table::{SizeUnit, TypeSpec};
pub use tank::{TankCost, TankMaterial, TankType};
pub use traits::EquipmentCost;
pub use turbine::{TurbineCost, TurbineMaterial, TurbineType};
pub use vaporizer::{VaporizerCost, VaporizerMaterial, VaporizerType};
