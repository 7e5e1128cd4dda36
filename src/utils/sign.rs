use crate::math::{Real, RealVector, Vector};

/// The component-wise sign of `v`: `1`, `-1`, or `0` for a zero component.
///
/// Unlike [`f32::signum`], zero (including `-0.0`) maps to `0`.
#[inline]
pub fn sign(v: &RealVector) -> Vector {
    v.map(|c: Real| {
        if c > 0.0 {
            1
        } else if c < 0.0 {
            -1
        } else {
            0
        }
    })
}
