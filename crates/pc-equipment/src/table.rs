//! Tabulated configuration records shared by every family.

use pc_core::SizeRange;
use pc_core::numeric::Real;
use pc_cost::{CostCoefficients, CostCorrelation};

use crate::error::{EquipmentError, EquipmentResult};

/// Unit the sizing variable of a correlation is tabulated in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeUnit {
    Kilowatt,
    CubicMeter,
    CubicMeterPerSecond,
}

impl SizeUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            SizeUnit::Kilowatt => "kW",
            SizeUnit::CubicMeter => "m3",
            SizeUnit::CubicMeterPerSecond => "m3/s",
        }
    }
}

/// Size limits and purchased-cost coefficients of one equipment type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypeSpec {
    pub unit: SizeUnit,
    pub range: SizeRange,
    pub coefficients: CostCoefficients,
}

impl TypeSpec {
    pub const fn new(unit: SizeUnit, min: Real, max: Real, k: [Real; 3]) -> Self {
        Self {
            unit,
            range: SizeRange::new(min, max),
            coefficients: CostCoefficients::new(k[0], k[1], k[2]),
        }
    }

    pub const fn correlation(&self) -> CostCorrelation {
        CostCorrelation::new(self.coefficients, self.range)
    }
}

/// Resolve an optional material factor, naming the missing pair on failure.
pub(crate) fn require_material(
    factor: Option<Real>,
    material: &'static str,
    equipment: &'static str,
) -> EquipmentResult<Real> {
    factor.ok_or(EquipmentError::MaterialNotAvailable {
        material,
        equipment,
    })
}

/// Declare a fieldless enum of tabulated names with keyed lookup.
///
/// Generates `ALL`, `name()`, `Display` and a case-insensitive `FromStr`.
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($what:literal) { $($variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::error::EquipmentError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(s))
                    .ok_or_else(|| $crate::error::EquipmentError::UnknownName {
                        what: $what,
                        name: s.to_string(),
                    })
            }
        }
    };
}

pub(crate) use named_enum;

#[cfg(test)]
mod tests {
    use super::*;

    named_enum! {
        enum Shape ("shape") { Round, Square }
    }

    #[test]
    fn named_enum_lookup() {
        assert_eq!("round".parse::<Shape>().unwrap(), Shape::Round);
        assert_eq!(Shape::Square.to_string(), "Square");
        assert_eq!(Shape::ALL.len(), 2);
        let err = "oval".parse::<Shape>().unwrap_err();
        assert!(err.to_string().contains("shape"));
    }

    #[test]
    fn missing_material_is_named() {
        let err = require_material(None, "Titanium", "Centrifugal").unwrap_err();
        assert!(matches!(err, EquipmentError::MaterialNotAvailable { .. }));
        assert_eq!(require_material(Some(2.0), "a", "b").unwrap(), 2.0);
    }
}
