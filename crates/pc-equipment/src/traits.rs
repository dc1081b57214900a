//! Core traits for equipment cost facades.

use crate::error::EquipmentResult;
use crate::table::SizeUnit;
use pc_core::numeric::Real;
use pc_cost::{BaseCost, CostCorrelation, CostIndex, CostResult};

/// A configured equipment type that can be priced from its sizing variable.
///
/// Facades are immutable after construction and can be shared across threads.
pub trait EquipmentCost: Send + Sync {
    /// Tabulated type name, for reports and debugging.
    fn type_name(&self) -> &'static str;

    /// Unit the sizing variable is tabulated in.
    fn unit(&self) -> SizeUnit;

    /// Correlation and size range of this type.
    fn correlation(&self) -> &CostCorrelation;

    /// Base correlation cost at `size`, expressed in [`EquipmentCost::unit`].
    fn base_cost(&self, size: Real, cost_index: CostIndex) -> EquipmentResult<BaseCost> {
        let base = self.correlation().evaluate(size, cost_index)?;
        tracing::debug!(
            equipment = self.type_name(),
            size,
            unit = self.unit().symbol(),
            value = base.value,
            "priced equipment"
        );
        Ok(base)
    }

    /// Purchased cost at `size`, expressed in [`EquipmentCost::unit`].
    fn purchased_cost(&self, size: Real, cost_index: CostIndex) -> EquipmentResult<CostResult> {
        Ok(CostResult::purchased(&self.base_cost(size, cost_index)?))
    }
}
