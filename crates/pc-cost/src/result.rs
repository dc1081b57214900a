//! Final cost record returned to callers.

use crate::correlation::{BaseCost, CostIndex};
use pc_core::numeric::Real;
use pc_core::{Dimension, RangeStatus};
use std::collections::BTreeMap;

/// A priced piece of equipment with the status of every checked input.
///
/// Constructed fresh per call and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CostResult {
    status: BTreeMap<Dimension, RangeStatus>,
    value: Real,
    cost_index: CostIndex,
}

impl CostResult {
    pub(crate) fn from_parts(
        value: Real,
        cost_index: CostIndex,
        statuses: impl IntoIterator<Item = RangeStatus>,
    ) -> Self {
        let status = statuses.into_iter().map(|s| (s.dimension, s)).collect();
        Self {
            status,
            value,
            cost_index,
        }
    }

    /// Purchased cost: the base correlation value with only a size status.
    pub fn purchased(base: &BaseCost) -> Self {
        Self::from_parts(base.value, base.cost_index, [base.status])
    }

    /// Cost in currency units at [`CostResult::cost_index`].
    pub fn value(&self) -> Real {
        self.value
    }

    pub fn cost_index(&self) -> CostIndex {
        self.cost_index
    }

    pub fn status(&self, dimension: Dimension) -> Option<&RangeStatus> {
        self.status.get(&dimension)
    }

    /// Every checked dimension, ordered size then pressure.
    pub fn statuses(&self) -> impl Iterator<Item = &RangeStatus> {
        self.status.values()
    }

    /// True when every checked input was inside its tabulated range.
    pub fn is_within_range(&self) -> bool {
        self.status.values().all(RangeStatus::within_range)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &RangeStatus> {
        self.status.values().filter(|s| !s.within_range())
    }
}
