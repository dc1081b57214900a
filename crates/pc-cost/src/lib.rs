//! pc-cost: the shared cost-evaluation engine.
//!
//! Every equipment family is priced with the same three primitives:
//! - [`CostCorrelation`]: `10^(K1 + K2·log10(x) + K3·log10(x)²)` escalated by a cost index
//! - [`PressureFactorTable`]: piecewise pressure factors with clamped extrapolation
//! - the `compose_*` functions: bare-module multipliers folded into a [`CostResult`]
//!
//! Out-of-range inputs are reported through status fields, never as errors. Only
//! inputs outside the logarithm's domain fail.
//!
//! # Example
//!
//! ```
//! use pc_core::SizeRange;
//! use pc_cost::{CostCoefficients, CostCorrelation, CostIndex, compose_simple};
//!
//! let kneader = CostCorrelation::new(
//!     CostCoefficients::new(5.0141, 0.5867, 0.3224),
//!     SizeRange::new(0.14, 3.0),
//! );
//! let base = kneader.evaluate(1.0, CostIndex::REFERENCE).unwrap();
//! let bare = compose_simple(&base, 1.12);
//! assert!(bare.is_within_range());
//! ```

pub mod compose;
pub mod correlation;
pub mod pressure;
pub mod result;
pub mod temperature;

// Re-exports
pub use compose::{compose_linear, compose_pressure_adjusted, compose_simple};
pub use correlation::{
    BaseCost, CostCoefficients, CostCorrelation, CostIndex, REFERENCE_COST_INDEX, evaluate,
};
pub use pressure::{PressureFactor, PressureFactorTable, PressureSegment};
pub use result::CostResult;
pub use temperature::superheat_factor;
