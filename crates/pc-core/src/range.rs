//! Inclusive range checks for correlation validity bounds.
//!
//! A value outside its tabulated bounds is never an error: the cost is still
//! computed and the caller inspects the returned [`RangeStatus`].

use crate::numeric::Real;
use crate::{PcError, PcResult};
use core::fmt;

/// Which input a status refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dimension {
    Size,
    Pressure,
}

impl Dimension {
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Size => "size",
            Dimension::Pressure => "pressure",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a value sits relative to an inclusive interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    Within,
    Below,
    Above,
}

/// Outcome of a range check for one dimension.
///
/// Serializes with its derived `label` and `within_range` alongside the raw
/// fields; deserialization reads the raw fields and ignores the derived ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct RangeStatus {
    pub dimension: Dimension,
    pub placement: Placement,
}

impl RangeStatus {
    pub const fn ok(dimension: Dimension) -> Self {
        Self {
            dimension,
            placement: Placement::Within,
        }
    }

    pub const fn new(dimension: Dimension, placement: Placement) -> Self {
        Self {
            dimension,
            placement,
        }
    }

    pub fn within_range(&self) -> bool {
        self.placement == Placement::Within
    }

    /// Human-readable status label.
    pub fn label(&self) -> &'static str {
        match (self.dimension, self.placement) {
            (_, Placement::Within) => "OK",
            (Dimension::Size, Placement::Below) => "Warning - Below minimum size",
            (Dimension::Size, Placement::Above) => "Warning - Above maximum size",
            (Dimension::Pressure, Placement::Below) => "Warning - Lower pressure limit",
            (Dimension::Pressure, Placement::Above) => "Warning - Upper pressure limit",
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RangeStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("RangeStatus", 4)?;
        state.serialize_field("dimension", &self.dimension)?;
        state.serialize_field("placement", &self.placement)?;
        state.serialize_field("label", self.label())?;
        state.serialize_field("within_range", &self.within_range())?;
        state.end()
    }
}

impl fmt::Display for RangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify `value` against the inclusive interval `[min, max]`.
pub fn check(value: Real, min: Real, max: Real, dimension: Dimension) -> RangeStatus {
    let placement = if value < min {
        Placement::Below
    } else if value > max {
        Placement::Above
    } else {
        Placement::Within
    };
    RangeStatus::new(dimension, placement)
}

/// Tabulated validity bounds of a sizing variable.
///
/// Invariant: `0 < min <= max`, both finite. [`SizeRange::new`] is for trusted
/// static tables; [`SizeRange::validated`] checks the invariant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeRange {
    pub min: Real,
    pub max: Real,
}

impl SizeRange {
    pub const fn new(min: Real, max: Real) -> Self {
        Self { min, max }
    }

    pub fn validated(min: Real, max: Real) -> PcResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(PcError::InvalidArg {
                what: "size range bounds must be finite",
            });
        }
        if min <= 0.0 {
            return Err(PcError::InvalidArg {
                what: "size range minimum must be positive",
            });
        }
        if min > max {
            return Err(PcError::InvalidArg {
                what: "size range minimum exceeds maximum",
            });
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, value: Real) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn check(&self, value: Real) -> RangeStatus {
        check(value, self.min, self.max, Dimension::Size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_inclusive() {
        let range = SizeRange::new(0.14, 3.0);
        assert!(range.check(0.14).within_range());
        assert!(range.check(3.0).within_range());
        assert_eq!(range.check(3.0).label(), "OK");
    }

    #[test]
    fn size_labels() {
        let range = SizeRange::new(1.0, 10.0);
        let below = range.check(0.5);
        assert_eq!(below.label(), "Warning - Below minimum size");
        assert!(!below.within_range());

        let above = range.check(11.0);
        assert_eq!(above.label(), "Warning - Above maximum size");
        assert!(!above.within_range());
    }

    #[test]
    fn pressure_labels() {
        let below = check(0.5, 1.0, 10.0, Dimension::Pressure);
        assert_eq!(below.label(), "Warning - Lower pressure limit");
        let above = check(20.0, 1.0, 10.0, Dimension::Pressure);
        assert_eq!(above.label(), "Warning - Upper pressure limit");
        assert_eq!(above.to_string(), "Warning - Upper pressure limit");
    }

    #[test]
    fn validated_rejects_bad_bounds() {
        assert!(SizeRange::validated(0.0, 1.0).is_err());
        assert!(SizeRange::validated(2.0, 1.0).is_err());
        assert!(SizeRange::validated(1.0, Real::INFINITY).is_err());
        assert!(SizeRange::validated(1.0, 1.0).is_ok());
    }
}
