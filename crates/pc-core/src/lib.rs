//! pc-core: stable foundation for plantcost.
//!
//! Contains:
//! - units (uom SI types + constructors for equipment sizing inputs)
//! - numeric (Real + tolerances + float helpers)
//! - range (inclusive range checks and their status labels)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod range;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PcError, PcResult};
pub use numeric::*;
pub use range::{Dimension, Placement, RangeStatus, SizeRange, check};
pub use units::*;
