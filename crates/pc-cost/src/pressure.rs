//! Piecewise pressure factors.
//!
//! A table is an ordered list of segments `[lower, upper)`, each carrying its own
//! log-quadratic coefficients. The first segment containing the pressure wins.
//! Pressures outside every segment are evaluated with the nearest boundary
//! segment's formula and flagged with a warning status.

use crate::correlation::CostCoefficients;
use pc_core::numeric::{Real, ensure_finite};
use pc_core::{Dimension, PcError, PcResult, Placement, RangeStatus};

/// One interval of a pressure-factor table.
///
/// Invariant: `0 <= lower < upper`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PressureSegment {
    pub lower: Real,
    pub upper: Real,
    pub coefficients: CostCoefficients,
}

impl PressureSegment {
    pub const fn new(lower: Real, upper: Real, coefficients: CostCoefficients) -> Self {
        Self {
            lower,
            upper,
            coefficients,
        }
    }

    /// Segment with optional bounds: unbounded below means 0, above means +∞.
    pub const fn bounded(
        lower: Option<Real>,
        upper: Option<Real>,
        coefficients: CostCoefficients,
    ) -> Self {
        let lower = match lower {
            Some(v) => v,
            None => 0.0,
        };
        let upper = match upper {
            Some(v) => v,
            None => Real::INFINITY,
        };
        Self::new(lower, upper, coefficients)
    }

    /// Factor-of-one segment covering `[0, upper)`.
    pub const fn unity_below(upper: Real) -> Self {
        Self::new(0.0, upper, CostCoefficients::ZERO)
    }

    /// Lower bound inclusive, upper bound exclusive.
    pub fn contains(&self, pressure: Real) -> bool {
        pressure >= self.lower && pressure < self.upper
    }

    /// Evaluate this segment's formula at `pressure`, in or out of its bounds.
    ///
    /// All-zero coefficients give exactly 1 without taking a logarithm, so a
    /// pressure of 0 is accepted there.
    pub fn evaluate(&self, pressure: Real) -> PcResult<Real> {
        if self.coefficients.is_zero() {
            return Ok(1.0);
        }
        self.coefficients.eval(pressure, "pressure")
    }
}

/// A resolved pressure factor and whether the pressure was inside the table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressureFactor {
    pub value: Real,
    pub status: RangeStatus,
}

impl PressureFactor {
    /// Factor of one with an OK status, for families priced without pressure.
    pub const NEUTRAL: PressureFactor = PressureFactor {
        value: 1.0,
        status: RangeStatus::ok(Dimension::Pressure),
    };
}

/// Ordered pressure segments plus the boundary segments used for clamping.
#[derive(Clone, Debug, PartialEq)]
pub struct PressureFactorTable {
    segments: Vec<PressureSegment>,
    min_idx: usize,
    max_idx: usize,
}

impl PressureFactorTable {
    /// Build a table. Segment order is preserved and significant.
    ///
    /// # Errors
    /// Returns error if `segments` is empty.
    pub fn new(segments: Vec<PressureSegment>) -> PcResult<Self> {
        if segments.is_empty() {
            return Err(PcError::InvalidArg {
                what: "pressure table needs at least one segment",
            });
        }

        // Ties keep the first declared segment.
        let mut min_idx = 0;
        let mut max_idx = 0;
        for (i, seg) in segments.iter().enumerate().skip(1) {
            if seg.lower < segments[min_idx].lower {
                min_idx = i;
            }
            if seg.upper > segments[max_idx].upper {
                max_idx = i;
            }
        }

        Ok(Self {
            segments,
            min_idx,
            max_idx,
        })
    }

    pub fn from_slice(segments: &[PressureSegment]) -> PcResult<Self> {
        Self::new(segments.to_vec())
    }

    pub fn segments(&self) -> &[PressureSegment] {
        &self.segments
    }

    /// Segment with the smallest lower bound.
    pub fn min_segment(&self) -> &PressureSegment {
        &self.segments[self.min_idx]
    }

    /// Segment with the largest upper bound.
    pub fn max_segment(&self) -> &PressureSegment {
        &self.segments[self.max_idx]
    }

    /// Resolve `pressure` to a factor.
    ///
    /// # Errors
    /// [`PcError::Domain`] for negative pressure, or for zero pressure against a
    /// segment whose formula needs its logarithm.
    pub fn factor(&self, pressure: Real) -> PcResult<PressureFactor> {
        let pressure = ensure_finite(pressure, "pressure")?;
        if pressure < 0.0 {
            return Err(PcError::Domain {
                what: "pressure",
                value: pressure,
            });
        }

        if let Some(seg) = self.segments.iter().find(|s| s.contains(pressure)) {
            return Ok(PressureFactor {
                value: seg.evaluate(pressure)?,
                status: RangeStatus::ok(Dimension::Pressure),
            });
        }

        let (seg, placement) = self.clamp_segment(pressure);
        let value = seg.evaluate(pressure)?;
        tracing::debug!(
            pressure,
            lower = seg.lower,
            upper = seg.upper,
            value,
            "pressure outside table, extrapolating boundary segment"
        );

        Ok(PressureFactor {
            value,
            status: RangeStatus::new(Dimension::Pressure, placement),
        })
    }

    fn clamp_segment(&self, pressure: Real) -> (&PressureSegment, Placement) {
        let max = self.max_segment();
        if pressure >= max.upper {
            return (max, Placement::Above);
        }
        let min = self.min_segment();
        if pressure < min.lower {
            return (min, Placement::Below);
        }

        // Gap between non-contiguous segments: nearest segment, first on ties.
        let mut best = (min, Placement::Below, Real::INFINITY);
        for seg in &self.segments {
            let (distance, placement) = if pressure < seg.lower {
                (seg.lower - pressure, Placement::Below)
            } else {
                (pressure - seg.upper, Placement::Above)
            };
            if distance < best.2 {
                best = (seg, placement, distance);
            }
        }
        (best.0, best.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pc_core::{Tolerances, nearly_equal};

    fn pump_table() -> PressureFactorTable {
        PressureFactorTable::new(vec![
            PressureSegment::bounded(None, Some(10.0), CostCoefficients::ZERO),
            PressureSegment::new(10.0, 100.0, CostCoefficients::new(0.1347, -0.2368, 0.1021)),
        ])
        .unwrap()
    }

    fn direct(c: CostCoefficients, p: Real) -> Real {
        let l = p.log10();
        Real::powf(10.0, c.c1 + c.c2 * l + c.c3 * l * l)
    }

    #[test]
    fn unity_segment_below_threshold() {
        let f = pump_table().factor(5.0).unwrap();
        assert_eq!(f.value, 1.0);
        assert_eq!(f.status.label(), "OK");
    }

    #[test]
    fn zero_pressure_in_unity_segment() {
        let f = pump_table().factor(0.0).unwrap();
        assert_eq!(f.value, 1.0);
        assert!(f.status.within_range());
    }

    #[test]
    fn inside_segment_matches_formula() {
        let c = CostCoefficients::new(0.1347, -0.2368, 0.1021);
        let f = pump_table().factor(50.0).unwrap();
        assert!(nearly_equal(f.value, direct(c, 50.0), Tolerances::default()));
        assert!(f.status.within_range());
    }

    #[test]
    fn lower_bound_inclusive_upper_exclusive() {
        let table = pump_table();
        let c = CostCoefficients::new(0.1347, -0.2368, 0.1021);
        // 10 belongs to the second segment
        let at_ten = table.factor(10.0).unwrap();
        assert!(nearly_equal(at_ten.value, direct(c, 10.0), Tolerances::default()));
        // 100 is outside the last finite segment
        let at_hundred = table.factor(100.0).unwrap();
        assert_eq!(at_hundred.status.label(), "Warning - Upper pressure limit");
        assert!(nearly_equal(
            at_hundred.value,
            direct(c, 100.0),
            Tolerances::default()
        ));
    }

    #[test]
    fn above_table_extrapolates_max_segment() {
        let c = CostCoefficients::new(0.1347, -0.2368, 0.1021);
        let f = pump_table().factor(250.0).unwrap();
        assert!(!f.status.within_range());
        assert!(nearly_equal(f.value, direct(c, 250.0), Tolerances::default()));
    }

    #[test]
    fn below_table_extrapolates_min_segment() {
        let c = CostCoefficients::new(0.0, 0.20899, -0.0328);
        let table = PressureFactorTable::new(vec![PressureSegment::new(1.0, 16.0, c)]).unwrap();
        let f = table.factor(0.5).unwrap();
        assert_eq!(f.status.label(), "Warning - Lower pressure limit");
        assert!(nearly_equal(f.value, direct(c, 0.5), Tolerances::default()));
        assert_ne!(f.value, 1.0);
    }

    #[test]
    fn first_match_wins_on_overlap() {
        let a = CostCoefficients::new(0.1, 0.0, 0.0);
        let b = CostCoefficients::new(0.2, 0.0, 0.0);
        let table = PressureFactorTable::new(vec![
            PressureSegment::new(0.0, 20.0, a),
            PressureSegment::new(10.0, 30.0, b),
        ])
        .unwrap();
        let f = table.factor(15.0).unwrap();
        assert!(nearly_equal(f.value, Real::powf(10.0, 0.1), Tolerances::default()));
    }

    #[test]
    fn gap_uses_nearest_segment() {
        let a = CostCoefficients::new(0.1, 0.0, 0.0);
        let b = CostCoefficients::new(0.2, 0.0, 0.0);
        let table = PressureFactorTable::new(vec![
            PressureSegment::new(1.0, 10.0, a),
            PressureSegment::new(20.0, 30.0, b),
        ])
        .unwrap();

        let near_low = table.factor(11.0).unwrap();
        assert_eq!(near_low.status.placement, Placement::Above);
        assert!(nearly_equal(near_low.value, Real::powf(10.0, 0.1), Tolerances::default()));

        let near_high = table.factor(19.0).unwrap();
        assert_eq!(near_high.status.placement, Placement::Below);
        assert!(nearly_equal(near_high.value, Real::powf(10.0, 0.2), Tolerances::default()));
    }

    #[test]
    fn boundary_segments_computed_once() {
        let table = PressureFactorTable::new(vec![
            PressureSegment::new(40.0, 100.0, CostCoefficients::new(0.6072, -0.9120, 0.3327)),
            PressureSegment::unity_below(40.0),
            PressureSegment::new(100.0, 300.0, CostCoefficients::new(13.1467, -12.6574, 3.0705)),
        ])
        .unwrap();
        assert_eq!(table.min_segment().lower, 0.0);
        assert_eq!(table.max_segment().upper, 300.0);
    }

    #[test]
    fn domain_errors() {
        let table = pump_table();
        assert!(matches!(table.factor(-1.0), Err(PcError::Domain { .. })));
        assert!(matches!(table.factor(Real::NAN), Err(PcError::NonFinite { .. })));

        let log_only = PressureFactorTable::new(vec![PressureSegment::new(
            0.0,
            16.0,
            CostCoefficients::new(0.0, 0.20899, -0.0328),
        )])
        .unwrap();
        assert!(matches!(log_only.factor(0.0), Err(PcError::Domain { .. })));
    }

    #[test]
    fn empty_table_rejected() {
        assert!(PressureFactorTable::new(Vec::new()).is_err());
    }
}
