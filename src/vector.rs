//! Vector utilities: normalization, pair orthonormalization, signed angles.
//!
//! The canonical frame used by every rotation in this crate is fixed here:
//! +X right, +Y up, +Z forward. [`world_forward`] and [`world_up`] are the
//! reference directions the look-rotation derivation aligns against.

use crate::errors::DegenerateInput;
use crate::float_types::{DEG_PER_RAD, EPSILON, Real};
use nalgebra::Vector3;

/// The canonical local forward axis (+Z).
#[inline]
pub fn world_forward() -> Vector3<Real> {
    Vector3::z()
}

/// The canonical local up axis (+Y).
#[inline]
pub fn world_up() -> Vector3<Real> {
    Vector3::y()
}

/// The canonical local right axis (+X).
#[inline]
pub fn world_right() -> Vector3<Real> {
    Vector3::x()
}

/// Returns `v` scaled to unit magnitude, or [`DegenerateInput::ZeroVector`]
/// when its magnitude is below [`EPSILON`].
#[inline]
pub fn try_normalized(v: Vector3<Real>) -> Result<Vector3<Real>, DegenerateInput> {
    let norm = v.norm();
    if norm <= EPSILON {
        return Err(DegenerateInput::ZeroVector);
    }
    Ok(v / norm)
}

/// Returns `v` scaled to unit magnitude, or the zero vector when `v` is too
/// short to define a direction. Callers that must distinguish the fallback
/// use [`try_normalized`].
#[inline]
pub fn normalized_or_zero(v: Vector3<Real>) -> Vector3<Real> {
    try_normalized(v).unwrap_or_else(|_| Vector3::zeros())
}

/// Deterministic unit vector perpendicular to `unit`: crosses `unit` with the
/// canonical axis least aligned with it. The smallest component of a unit
/// vector is at most 1/√3, so the cross product is never degenerate.
fn arbitrary_perpendicular(unit: Vector3<Real>) -> Vector3<Real> {
    let abs = unit.map(Real::abs);
    let candidate = if abs.x <= abs.y && abs.x <= abs.z {
        Vector3::x()
    } else if abs.y <= abs.z {
        Vector3::y()
    } else {
        Vector3::z()
    };
    unit.cross(&candidate).normalize()
}

/// **Mathematical Foundation: Gram-Schmidt Pair Orthonormalization**
///
/// Returns `a` normalized, and `b` replaced by the component of `b`
/// orthogonal to `a`, normalized:
/// ```text
/// a' = a / |a|
/// b' = (b - (a'·b)·a') / |b - (a'·b)·a'|
/// ```
///
/// Errors with [`DegenerateInput::ZeroVector`] when `|a|` is below
/// [`EPSILON`]. When `b` is parallel to `a` (or zero) the rejection collapses
/// and `b'` is a **deterministic arbitrary perpendicular** to `a'` (the
/// tie-break in [`arbitrary_perpendicular`]); callers that need to treat that
/// case specially must test for parallelism themselves before calling.
pub fn ortho_normalize(
    a: Vector3<Real>,
    b: Vector3<Real>,
) -> Result<(Vector3<Real>, Vector3<Real>), DegenerateInput> {
    let unit_a = try_normalized(a)?;
    let rejected = b - unit_a * unit_a.dot(&b);
    let unit_b = match try_normalized(rejected) {
        Ok(unit) => unit,
        Err(_) => arbitrary_perpendicular(unit_a),
    };
    Ok((unit_a, unit_b))
}

/// Angle in degrees, in `(-180, 180]`, required to rotate `from` onto `to`,
/// with the sign given by the right-hand rule about `axis`.
///
/// `axis` need not be unit length; only its direction determines the sign.
/// Degenerate inputs (zero `from` or `to`) yield `0.0`, and an `axis` lying
/// in the `from`/`to` plane leaves the sign positive, both documented
/// fallbacks rather than faults.
pub fn signed_angle(from: Vector3<Real>, to: Vector3<Real>, axis: Vector3<Real>) -> Real {
    let cross = from.cross(&to);
    // atan2(|from × to|, from · to) is the unsigned angle, stable near 0 and 180.
    let unsigned = cross.norm().atan2(from.dot(&to));
    let sign = if axis.dot(&cross) < 0.0 { -1.0 } else { 1.0 };
    unsigned * DEG_PER_RAD * sign
}
