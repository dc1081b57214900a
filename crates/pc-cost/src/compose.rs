//! Bare-module composition rules.
//!
//! None of these can fail: any invalid input was already rejected by the
//! correlation or the pressure table, and range problems travel in the statuses.

use crate::correlation::BaseCost;
use crate::pressure::PressureFactor;
use crate::result::CostResult;
use pc_core::numeric::Real;

/// `Cp0 · F` for families with one lumped bare-module factor.
pub fn compose_simple(base: &BaseCost, bare_module_factor: Real) -> CostResult {
    CostResult::from_parts(
        base.value * bare_module_factor,
        base.cost_index,
        [base.status],
    )
}

/// `Cp0 · Fm · Fp · Ft`.
pub fn compose_pressure_adjusted(
    base: &BaseCost,
    material_factor: Real,
    pressure: &PressureFactor,
    temperature_factor: Real,
) -> CostResult {
    CostResult::from_parts(
        base.value * material_factor * pressure.value * temperature_factor,
        base.cost_index,
        [base.status, pressure.status],
    )
}

/// `Cp0 · (B1 + B2 · Fm · Fp)`.
pub fn compose_linear(
    base: &BaseCost,
    b1: Real,
    b2: Real,
    material_factor: Real,
    pressure: &PressureFactor,
) -> CostResult {
    let fbm = b1 + b2 * material_factor * pressure.value;
    CostResult::from_parts(
        base.value * fbm,
        base.cost_index,
        [base.status, pressure.status],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlation::CostIndex;
    use pc_core::{Dimension, Placement, RangeStatus, Tolerances, nearly_equal};

    fn base(value: Real, placement: Placement) -> BaseCost {
        BaseCost {
            value,
            status: RangeStatus::new(Dimension::Size, placement),
            cost_index: CostIndex::REFERENCE,
        }
    }

    #[test]
    fn simple_multiplies() {
        let b = base(103_299.9, Placement::Within);
        let r = compose_simple(&b, 1.12);
        assert!(nearly_equal(r.value(), 103_299.9 * 1.12, Tolerances::default()));
        assert_eq!(r.statuses().count(), 1);
        assert_eq!(r.cost_index(), CostIndex::REFERENCE);
    }

    #[test]
    fn pressure_adjusted_merges_statuses() {
        let b = base(2000.0, Placement::Below);
        let fp = PressureFactor {
            value: 1.5,
            status: RangeStatus::new(Dimension::Pressure, Placement::Above),
        };
        let r = compose_pressure_adjusted(&b, 2.0, &fp, 1.1);
        assert!(nearly_equal(r.value(), 2000.0 * 2.0 * 1.5 * 1.1, Tolerances::default()));
        assert_eq!(r.statuses().count(), 2);
        assert_eq!(
            r.status(Dimension::Size).unwrap().label(),
            "Warning - Below minimum size"
        );
        assert_eq!(
            r.status(Dimension::Pressure).unwrap().label(),
            "Warning - Upper pressure limit"
        );
        assert_eq!(r.warnings().count(), 2);
    }

    #[test]
    fn linear_factor() {
        let b = base(500.0, Placement::Within);
        let r = compose_linear(&b, 1.89, 1.35, 1.54, &PressureFactor::NEUTRAL);
        let fbm = 1.89 + 1.35 * 1.54;
        assert!(nearly_equal(r.value(), 500.0 * fbm, Tolerances::default()));
        assert!(r.is_within_range());
    }
}
