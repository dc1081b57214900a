//! Built-in catalog entries exported from the tabulated equipment families.

use crate::schema::{BareModuleDef, Catalog, EquipmentDef, PressureSegmentDef, SizeRangeDef};
use crate::validate::LATEST_VERSION;
use pc_cost::PressureSegment;
use pc_equipment::{
    BlenderType, PumpMaterial, PumpType, TypeSpec, VaporizerMaterial, VaporizerType,
    pressure_tables,
};
use std::collections::BTreeMap;

/// A starter catalog: blenders, pumps and vaporizers with their full tables.
pub fn builtin_catalog() -> Catalog {
    let mut equipment = Vec::new();

    for &ty in BlenderType::ALL {
        equipment.push(entry(
            format!("blender-{}", ty.name().to_lowercase()),
            format!("{ty} blender"),
            ty.spec(),
            BTreeMap::new(),
            None,
            BareModuleDef::Simple {
                factor: ty.bare_module_factor(),
            },
        ));
    }

    for &ty in PumpType::ALL {
        let materials = PumpMaterial::ALL
            .iter()
            .filter_map(|&m| m.factor(ty).map(|f| (m.name().to_string(), f)))
            .collect();
        let (b1, b2) = ty.bare_module_constants();
        equipment.push(entry(
            format!("pump-{}", ty.name().to_lowercase()),
            format!("{ty} pump"),
            ty.spec(),
            materials,
            Some(PumpMaterial::default().name().to_string()),
            BareModuleDef::Linear {
                b1,
                b2,
                pressure: segments(pressure_tables::pump(ty)),
            },
        ));
    }

    for &ty in VaporizerType::ALL {
        let materials = VaporizerMaterial::ALL
            .iter()
            .map(|&m| (m.name().to_string(), m.factor(ty)))
            .collect();
        equipment.push(entry(
            format!("vaporizer-{}", ty.name().to_lowercase()),
            format!("{ty} vaporizer"),
            ty.spec(),
            materials,
            Some(VaporizerMaterial::CarbonSteel.name().to_string()),
            BareModuleDef::PressureAdjusted {
                factor: 1.0,
                pressure: segments(pressure_tables::VAPORIZER),
                superheat: false,
            },
        ));
    }

    Catalog {
        version: LATEST_VERSION,
        name: "Built-in equipment".to_string(),
        equipment,
    }
}

fn entry(
    id: String,
    name: String,
    spec: TypeSpec,
    materials: BTreeMap<String, f64>,
    default_material: Option<String>,
    bare_module: BareModuleDef,
) -> EquipmentDef {
    let k = spec.coefficients;
    EquipmentDef {
        id,
        name,
        unit: spec.unit.into(),
        size: SizeRangeDef {
            min: spec.range.min,
            max: spec.range.max,
        },
        coefficients: [k.c1, k.c2, k.c3],
        materials,
        default_material,
        bare_module,
    }
}

fn segments(table: &[PressureSegment]) -> Vec<PressureSegmentDef> {
    table
        .iter()
        .map(|s| PressureSegmentDef {
            lower: (s.lower > 0.0).then_some(s.lower),
            upper: s.upper.is_finite().then_some(s.upper),
            coefficients: [s.coefficients.c1, s.coefficients.c2, s.coefficients.c3],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centrifugal_pump_omits_untabulated_materials() {
        let catalog = builtin_catalog();
        let pump = catalog.get("pump-centrifugal").unwrap();
        assert!(!pump.materials.contains_key("CuAlloy"));
        assert!(!pump.materials.contains_key("Titanium"));
        assert_eq!(pump.materials["CarbonSteel"], 1.54);
        assert_eq!(pump.default_material.as_deref(), Some("CarbonSteel"));
    }

    #[test]
    fn ids_follow_type_names() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.equipment.len(), 3 + 3 + 2);
        assert!(catalog.get("blender-kneader").is_some());
        assert!(catalog.get("vaporizer-jacketedvessels").is_some());
    }
}
