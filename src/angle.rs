//! Degree-domain angle helpers.
//!
//! Angles throughout this crate are `Real` degrees. Signed angles use the
//! `(-180, 180]` convention; wraparound is always explicit via
//! [`wrap_degrees`], never applied behind a caller's back.

use crate::float_types::{FULL_TURN_DEG, HALF_TURN_DEG, Real};

/// Wrap an angle into the signed half-open range `(-180, 180]`.
///
/// `wrap_degrees(190.0) == -170.0`, `wrap_degrees(-180.0) == 180.0`,
/// `wrap_degrees(540.0) == 180.0`.
#[inline]
pub fn wrap_degrees(degrees: Real) -> Real {
    let mut wrapped = degrees % FULL_TURN_DEG;
    if wrapped > HALF_TURN_DEG {
        wrapped -= FULL_TURN_DEG;
    } else if wrapped <= -HALF_TURN_DEG {
        wrapped += FULL_TURN_DEG;
    }
    wrapped
}
