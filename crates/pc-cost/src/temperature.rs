//! Superheat correction for fired equipment.

use pc_core::numeric::Real;

/// Temperature factor `1 + 0.00184·ΔT − 0.00000335·ΔT²` for `delta_t` of superheat (K).
pub fn superheat_factor(delta_t: Real) -> Real {
    1.0 + 0.00184 * delta_t - 0.00000335 * delta_t * delta_t
}
