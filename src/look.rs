//! Look-rotation derivation from first principles.
//!
//! [`derive_look_rotation`] produces the rotation that points the canonical
//! local forward axis ([`world_forward`](crate::vector::world_forward), +Z)
//! along an arbitrary target direction while turning the canonical local up
//! axis (+Y) as close to a supplied up hint as orthogonality allows.
//!
//! A from-to rotation between two single directions cannot do this job:
//! rotating one point onto another has infinitely many solutions differing by
//! spin about the target axis. The derivation therefore solves two smaller
//! problems in sequence and composes the answers:
//!
//! 1. **Aim**: pitch and yaw that carry +Z onto the target direction, with
//!    roll pinned at zero.
//! 2. **Spin**: the roll about the target direction that carries the aimed
//!    up axis onto the hint's projection.

use crate::errors::DegenerateInput;
use crate::float_types::{DEG_PER_RAD, EPSILON, HALF_TURN_DEG, Real};
use crate::rotation::{from_axis_angle, from_euler};
use crate::vector::{ortho_normalize, signed_angle, try_normalized, world_up};
use nalgebra::{UnitQuaternion, Vector3};

/// Pitch (about X) and yaw (about Y) aligning the canonical forward axis
/// with `forward`, computed directly from the target's components:
///
/// ```text
/// pitch = atan2(-forward.y, |(forward.x, forward.z)|)
/// yaw   = atan2(forward.x, forward.z)
/// ```
///
/// Positive pitch tilts the forward axis downward (hence the negated y).
/// When `forward.x == 0` the yaw baseline is pinned by an exact tie-break:
/// 0° for `forward.z >= 0`, 180° otherwise, which also covers the exactly
/// vertical target (both x and z zero) with yaw 0°. The target's magnitude
/// does not matter; only the direction is used.
pub fn try_aim_rotation(forward: Vector3<Real>) -> Result<UnitQuaternion<Real>, DegenerateInput> {
    try_normalized(forward)?;
    let pitch = (-forward.y).atan2(forward.x.hypot(forward.z)) * DEG_PER_RAD;
    // Exact comparison is the documented tie-break, not an oversight.
    let yaw = if forward.x == 0.0 {
        if forward.z >= 0.0 { 0.0 } else { HALF_TURN_DEG }
    } else {
        forward.x.atan2(forward.z) * DEG_PER_RAD
    };
    Ok(from_euler(pitch, yaw, 0.0))
}

/// [`try_aim_rotation`] with the documented fallback: a zero-length target
/// yields the identity rotation.
#[inline]
pub fn aim_rotation(forward: Vector3<Real>) -> UnitQuaternion<Real> {
    try_aim_rotation(forward).unwrap_or_else(|_| UnitQuaternion::identity())
}

/// Spin stage: the roll about `unit_forward` carrying the world-up baseline
/// onto the hint, both projected into the plane orthogonal to the target.
///
/// When the target is vertical the world-up projection collapses and the
/// baseline falls back to the deterministic arbitrary perpendicular chosen by
/// [`ortho_normalize`]; roll is then measured from that baseline.
fn spin_rotation(unit_forward: Vector3<Real>, up: Vector3<Real>) -> UnitQuaternion<Real> {
    let Ok((_, baseline)) = ortho_normalize(unit_forward, world_up()) else {
        return UnitQuaternion::identity();
    };
    let Ok((_, hint)) = ortho_normalize(unit_forward, up) else {
        return UnitQuaternion::identity();
    };
    let roll = signed_angle(baseline, hint, unit_forward);
    from_axis_angle(unit_forward, roll)
}

/// Derive the rotation aligning the canonical forward axis with `forward`
/// and resolving roll from the `up` hint, as `spin * aim`: the spin is a
/// world-space rotation about the target direction applied after aiming
/// (roll about an arbitrary direction cannot be folded into the Euler triple
/// once pitch and yaw are fixed).
///
/// Faults surfaced: `ZeroVector` when either input cannot define a
/// direction, `ParallelVectors` when the hint is parallel to the target (the
/// spin angle is undefined there). The panic-free fallback lives in
/// [`derive_look_rotation`].
///
/// For any non-degenerate pair the result matches the trusted reference
/// (`UnitQuaternion::face_towards`) up to the double-cover sign, except when
/// `forward` is parallel to world up, where the two-stage algorithm's roll
/// baseline is the documented arbitrary perpendicular instead.
pub fn try_derive_look_rotation(
    forward: Vector3<Real>,
    up: Vector3<Real>,
) -> Result<UnitQuaternion<Real>, DegenerateInput> {
    let unit_forward = try_normalized(forward)?;
    let unit_up = try_normalized(up)?;
    if unit_forward.cross(&unit_up).norm() <= EPSILON {
        return Err(DegenerateInput::ParallelVectors);
    }
    Ok(spin_rotation(unit_forward, up) * aim_rotation(forward))
}

/// [`try_derive_look_rotation`] with the documented fallbacks: a zero-length
/// target yields the identity rotation, and a degenerate hint (zero length,
/// or parallel to the target) leaves roll at 0° so the result is the aim
/// stage alone. Momentary degenerate states during interactive manipulation
/// thus still render a usable rotation.
pub fn derive_look_rotation(forward: Vector3<Real>, up: Vector3<Real>) -> UnitQuaternion<Real> {
    let Ok(unit_forward) = try_normalized(forward) else {
        return UnitQuaternion::identity();
    };
    let aim = aim_rotation(forward);
    match try_normalized(up) {
        Ok(unit_up) if unit_forward.cross(&unit_up).norm() > EPSILON => {
            spin_rotation(unit_forward, up) * aim
        },
        _ => aim,
    }
}
