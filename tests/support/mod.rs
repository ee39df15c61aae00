//! Test support library
//! Provides shared helpers for comparing rotations and directions.

use nalgebra::{UnitQuaternion, Vector3};
use orientrs::float_types::Real;
use orientrs::rotation::approx_same_orientation;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Assert two rotations describe the same orientation within `tol`, printing
/// both component vectors on failure.
pub fn assert_same_orientation(a: UnitQuaternion<Real>, b: UnitQuaternion<Real>, tol: Real) {
    assert!(
        approx_same_orientation(a, b, tol),
        "orientations differ beyond {tol}: {:?} vs {:?}",
        a.quaternion().coords,
        b.quaternion().coords
    );
}

/// Assert two vectors agree component-wise within `eps`.
pub fn assert_direction_eq(a: Vector3<Real>, b: Vector3<Real>, eps: Real) {
    assert!(
        (a - b).norm() < eps,
        "directions differ: ({}, {}, {}) vs ({}, {}, {})",
        a.x,
        a.y,
        a.z,
        b.x,
        b.y,
        b.z
    );
}
