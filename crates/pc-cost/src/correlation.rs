//! Purchased-cost correlation.

use pc_core::numeric::{Real, ensure_finite, log10_positive};
use pc_core::{PcError, PcResult, RangeStatus, SizeRange};

/// Cost index of the year every tabulated coefficient set was regressed in.
pub const REFERENCE_COST_INDEX: Real = 397.0;

/// Chemical plant cost index (CEPCI) used to escalate correlation costs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CostIndex(Real);

impl CostIndex {
    pub const REFERENCE: CostIndex = CostIndex(REFERENCE_COST_INDEX);

    pub fn new(value: Real) -> PcResult<Self> {
        let value = ensure_finite(value, "cost index")?;
        if value <= 0.0 {
            return Err(PcError::InvalidArg {
                what: "cost index must be positive",
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> Real {
        self.0
    }

    /// Escalation ratio relative to the reference year.
    pub fn ratio(self) -> Real {
        self.0 / REFERENCE_COST_INDEX
    }
}

impl Default for CostIndex {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Regression coefficients of `10^(c1 + c2·log10(x) + c3·log10(x)²)`.
///
/// Used both for purchased cost (K1..K3) and for pressure factors (C1..C3).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostCoefficients {
    pub c1: Real,
    pub c2: Real,
    pub c3: Real,
}

impl CostCoefficients {
    pub const ZERO: CostCoefficients = CostCoefficients::new(0.0, 0.0, 0.0);

    pub const fn new(c1: Real, c2: Real, c3: Real) -> Self {
        Self { c1, c2, c3 }
    }

    pub fn is_zero(&self) -> bool {
        self.c1 == 0.0 && self.c2 == 0.0 && self.c3 == 0.0
    }

    /// Evaluate at an already-computed `log10(x)`.
    pub fn eval_log(&self, log_x: Real) -> Real {
        Real::powf(10.0, self.c1 + self.c2 * log_x + self.c3 * log_x * log_x)
    }

    /// Evaluate at `x`. Fails if `x` is not strictly positive.
    pub fn eval(&self, x: Real, what: &'static str) -> PcResult<Real> {
        Ok(self.eval_log(log10_positive(x, what)?))
    }
}

impl From<[Real; 3]> for CostCoefficients {
    fn from(c: [Real; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

/// Purchased cost at a given size, before any bare-module factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseCost {
    pub value: Real,
    pub status: RangeStatus,
    pub cost_index: CostIndex,
}

/// A cost correlation together with the size range it was regressed over.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostCorrelation {
    pub coefficients: CostCoefficients,
    pub range: SizeRange,
}

impl CostCorrelation {
    pub const fn new(coefficients: CostCoefficients, range: SizeRange) -> Self {
        Self {
            coefficients,
            range,
        }
    }

    pub fn evaluate(&self, size: Real, cost_index: CostIndex) -> PcResult<BaseCost> {
        evaluate(size, &self.coefficients, &self.range, cost_index)
    }
}

/// Purchased cost of equipment of `size`, escalated to `cost_index`.
///
/// The range status is informational: a size outside `range` still yields a cost.
///
/// # Errors
/// [`PcError::Domain`] if `size <= 0`, [`PcError::NonFinite`] if it is not finite.
pub fn evaluate(
    size: Real,
    coefficients: &CostCoefficients,
    range: &SizeRange,
    cost_index: CostIndex,
) -> PcResult<BaseCost> {
    let cp0 = coefficients.eval(size, "size")?;
    let value = cp0 * cost_index.ratio();
    let status = range.check(size);

    if !status.within_range() {
        tracing::debug!(
            size,
            min = range.min,
            max = range.max,
            status = %status,
            "size outside correlation range"
        );
    }
    tracing::debug!(size, cost_index = cost_index.value(), value, "evaluated cost correlation");

    Ok(BaseCost {
        value,
        status,
        cost_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pc_core::{Placement, Tolerances, nearly_equal};

    const KNEADER: CostCorrelation = CostCorrelation::new(
        CostCoefficients::new(5.0141, 0.5867, 0.3224),
        SizeRange::new(0.14, 3.0),
    );

    #[test]
    fn kneader_at_unit_size() {
        let base = KNEADER.evaluate(1.0, CostIndex::REFERENCE).unwrap();
        assert!(nearly_equal(
            base.value,
            Real::powf(10.0, 5.0141),
            Tolerances::default()
        ));
        assert_eq!(base.status.label(), "OK");
        assert!(base.status.within_range());
    }

    #[test]
    fn below_minimum_still_priced() {
        let base = KNEADER.evaluate(0.1, CostIndex::REFERENCE).unwrap();
        let log = -1.0_f64;
        let expected = Real::powf(10.0, 5.0141 + 0.5867 * log + 0.3224 * log * log);
        assert!(nearly_equal(base.value, expected, Tolerances::default()));
        assert_eq!(base.status.placement, Placement::Below);
        assert_eq!(base.status.label(), "Warning - Below minimum size");
        assert!(base.value > 0.0);
    }

    #[test]
    fn above_maximum_still_priced() {
        let base = KNEADER.evaluate(5.0, CostIndex::REFERENCE).unwrap();
        assert_eq!(base.status.label(), "Warning - Above maximum size");
        assert!(base.value.is_finite() && base.value > 0.0);
    }

    #[test]
    fn non_positive_size_is_domain_error() {
        assert!(matches!(
            KNEADER.evaluate(0.0, CostIndex::REFERENCE),
            Err(PcError::Domain { .. })
        ));
        assert!(matches!(
            KNEADER.evaluate(-2.0, CostIndex::REFERENCE),
            Err(PcError::Domain { .. })
        ));
    }

    #[test]
    fn cost_index_validation() {
        assert!(CostIndex::new(0.0).is_err());
        assert!(CostIndex::new(-397.0).is_err());
        assert!(CostIndex::new(Real::NAN).is_err());
        assert_eq!(CostIndex::default(), CostIndex::REFERENCE);
        assert_eq!(CostIndex::new(794.0).unwrap().ratio(), 2.0);
    }

    #[test]
    fn escalation_is_applied() {
        let idx = CostIndex::new(600.0).unwrap();
        let reference = KNEADER.evaluate(2.0, CostIndex::REFERENCE).unwrap();
        let escalated = KNEADER.evaluate(2.0, idx).unwrap();
        assert!(nearly_equal(
            escalated.value,
            reference.value * 600.0 / 397.0,
            Tolerances::default()
        ));
        assert_eq!(escalated.cost_index, idx);
    }
}
