//! Rotation primitives built from first principles on nalgebra's quaternion
//! value type.
//!
//! nalgebra supplies the representation ([`UnitQuaternion`]) and its
//! associative, non-commutative `*`; every constructor and decomposition in
//! this module does its own trigonometry so that the crate's results can be
//! cross-validated against nalgebra's built-in routines instead of being
//! defined by them.

use crate::errors::DegenerateInput;
use crate::float_types::{
    DEG_PER_RAD, EPSILON, FULL_TURN_DEG, HALF_TURN_DEG, RAD_PER_DEG, Real,
};
use crate::vector::try_normalized;
use nalgebra::{Quaternion, UnitQuaternion, Vector3};

/// **Mathematical Foundation: Half-Angle Axis-Angle Construction**
///
/// For a unit axis `â` and angle θ:
/// ```text
/// q = (cos(θ/2), sin(θ/2)·â)
/// ```
///
/// `axis` need not be pre-normalized; it is normalized internally. A
/// zero-length axis cannot define a rotation and errors with
/// [`DegenerateInput::ZeroVector`].
pub fn try_from_axis_angle(
    axis: Vector3<Real>,
    degrees: Real,
) -> Result<UnitQuaternion<Real>, DegenerateInput> {
    let unit = try_normalized(axis)?;
    let half = degrees * RAD_PER_DEG * 0.5;
    let (sin, cos) = half.sin_cos();
    Ok(UnitQuaternion::new_normalize(Quaternion::new(
        cos,
        unit.x * sin,
        unit.y * sin,
        unit.z * sin,
    )))
}

/// Axis-angle construction with the documented fallback: a zero-length axis
/// yields the identity rotation. See [`try_from_axis_angle`].
#[inline]
pub fn from_axis_angle(axis: Vector3<Real>, degrees: Real) -> UnitQuaternion<Real> {
    try_from_axis_angle(axis, degrees).unwrap_or_else(|_| UnitQuaternion::identity())
}

/// Decompose a rotation into a unit axis plus an angle in `(-180, 180]`
/// degrees.
///
/// The raw half-angle decomposition yields an angle in `[0, 360)`; anything
/// above 180 has a full turn subtracted so the minimal-magnitude
/// representation is returned (the axis is kept, the angle goes negative).
/// The identity rotation has no axis; it decomposes to `(+X, 0)` by
/// convention.
pub fn to_axis_angle(q: UnitQuaternion<Real>) -> (Vector3<Real>, Real) {
    let imag = q.quaternion().imag();
    let norm = imag.norm();
    if norm <= EPSILON {
        return (Vector3::x(), 0.0);
    }
    let raw = 2.0 * norm.atan2(q.quaternion().w) * DEG_PER_RAD;
    let degrees = if raw > HALF_TURN_DEG {
        raw - FULL_TURN_DEG
    } else {
        raw
    };
    (imag / norm, degrees)
}

/// Composition of three single-axis rotations about the **fixed world axes**
/// in the canonical order: Z first, then X, then Y.
///
/// ```text
/// from_euler(x, y, z) = R_y(y) * R_x(x) * R_z(z)
/// ```
///
/// This is the yaw-pitch-roll convention the interactive demos build on:
/// roll about Z is applied first, pitch about X second, yaw about Y last,
/// all extrinsically. Angles are degrees.
pub fn from_euler(x_deg: Real, y_deg: Real, z_deg: Real) -> UnitQuaternion<Real> {
    let qx = from_axis_angle(Vector3::x(), x_deg);
    let qy = from_axis_angle(Vector3::y(), y_deg);
    let qz = from_axis_angle(Vector3::z(), z_deg);
    qy * qx * qz
}

/// Double-cover-aware approximate equality: `q` and `-q` represent the same
/// orientation, so two rotations match when their components agree within
/// `tol` either directly or after negating one side.
pub fn approx_same_orientation(
    a: UnitQuaternion<Real>,
    b: UnitQuaternion<Real>,
    tol: Real,
) -> bool {
    let diff = (a.quaternion().coords - b.quaternion().coords).amax();
    let sum = (a.quaternion().coords + b.quaternion().coords).amax();
    diff <= tol || sum <= tol
}

/// Rotational distance in degrees between two orientations: the magnitude of
/// the minimal axis-angle decomposition of `b * a⁻¹`. Always in `[0, 180]`.
pub fn orientation_angle(a: UnitQuaternion<Real>, b: UnitQuaternion<Real>) -> Real {
    let (_, degrees) = to_axis_angle(b * a.inverse());
    degrees.abs()
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn quarter_turn_about_y_maps_forward_to_right() {
        let q = from_axis_angle(Vector3::y(), 90.0);
        let rotated = q * Vector3::z();
        assert_relative_eq!(rotated.x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(rotated.y, 0.0, epsilon = 1e-10);
        assert_relative_eq!(rotated.z, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn axis_is_normalized_internally() {
        let a = from_axis_angle(Vector3::new(0.0, 10.0, 0.0), 45.0);
        let b = from_axis_angle(Vector3::y(), 45.0);
        assert!(approx_same_orientation(a, b, 1e-12));
    }

    #[test]
    fn zero_axis_falls_back_to_identity() {
        assert_eq!(
            try_from_axis_angle(Vector3::zeros(), 90.0),
            Err(DegenerateInput::ZeroVector)
        );
        let q = from_axis_angle(Vector3::zeros(), 90.0);
        assert!(approx_same_orientation(q, UnitQuaternion::identity(), 1e-12));
    }

    #[test]
    fn axis_angle_round_trip_in_signed_range() {
        for &degrees in &[-170.0, -90.0, -1.0, 1.0, 45.0, 90.0, 179.0] {
            let axis = Vector3::new(1.0, -2.0, 0.5).normalize();
            let (axis_out, deg_out) = to_axis_angle(from_axis_angle(axis, degrees));
            // axis reproduced up to sign, angle negating with the flip
            let aligned = axis_out.dot(&axis);
            if aligned > 0.0 {
                assert_relative_eq!(deg_out, degrees, epsilon = 1e-6);
                assert_relative_eq!(aligned, 1.0, epsilon = 1e-10);
            } else {
                assert_relative_eq!(deg_out, -degrees, epsilon = 1e-6);
                assert_relative_eq!(aligned, -1.0, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn decomposition_folds_long_way_round() {
        let (axis, degrees) = to_axis_angle(from_axis_angle(Vector3::x(), 200.0));
        assert_relative_eq!(degrees, -160.0, epsilon = 1e-8);
        assert_relative_eq!(axis.x, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn identity_decomposes_to_convention() {
        let (axis, degrees) = to_axis_angle(UnitQuaternion::identity());
        assert_eq!(degrees, 0.0);
        assert_eq!(axis, Vector3::x());
    }

    #[test]
    fn euler_yaw_only_matches_axis_angle() {
        let q = from_euler(0.0, 90.0, 0.0);
        assert!(approx_same_orientation(
            q,
            from_axis_angle(Vector3::y(), 90.0),
            1e-12
        ));
    }

    #[test]
    fn positive_pitch_tilts_forward_down() {
        let rotated = from_euler(45.0, 0.0, 0.0) * Vector3::z();
        assert!(rotated.y < 0.0, "positive pitch must lower the forward axis");
        assert_relative_eq!(rotated.y, -(45.0 as Real).to_radians().sin(), epsilon = 1e-10);
    }

    #[test]
    fn double_cover_detected() {
        let q = from_axis_angle(Vector3::new(1.0, 1.0, 0.0), 70.0);
        let negated = UnitQuaternion::new_normalize(-q.into_inner());
        assert!(approx_same_orientation(q, negated, 1e-12));
        assert!(orientation_angle(q, negated) < 1e-8);
    }

    #[test]
    fn orientation_angle_measures_relative_turn() {
        let a = from_axis_angle(Vector3::y(), 10.0);
        let b = from_axis_angle(Vector3::y(), 55.0);
        assert_relative_eq!(orientation_angle(a, b), 45.0, epsilon = 1e-8);
    }
}
