//! Three ways to travel between two orientations.
//!
//! [`AxisAngleTween`] decomposes the delta rotation once and re-applies a
//! scaled slice of it per sample, [`slerp`] walks the great-circle arc with
//! trigonometric weights, and [`nlerp`] blends components linearly before
//! renormalizing. All three share their endpoints; they differ in the path
//! and speed between them, which is exactly what comparing their samples
//! makes visible.

use crate::float_types::{EPSILON, Real};
use crate::rotation::{from_axis_angle, to_axis_angle};
use nalgebra::{UnitQuaternion, Vector3};

/// Interpolator that re-applies a scaled slice of the delta rotation.
///
/// `end * start⁻¹` is decomposed into axis and angle once at construction;
/// [`sample`](Self::sample) rebuilds `from_axis_angle(axis, angle·t)` and
/// applies it ahead of `start`. The decomposition folds the angle into
/// (-180, 180], so the sampled path takes the short way around and coincides
/// with the slerp arc at constant angular speed.
#[derive(Debug, Clone, Copy)]
pub struct AxisAngleTween {
    start: UnitQuaternion<Real>,
    axis: Vector3<Real>,
    angle: Real,
}

impl AxisAngleTween {
    pub fn new(start: UnitQuaternion<Real>, end: UnitQuaternion<Real>) -> Self {
        let (axis, angle) = to_axis_angle(end * start.inverse());
        Self { start, axis, angle }
    }

    /// Unit axis of the decomposed delta.
    pub const fn axis(&self) -> Vector3<Real> {
        self.axis
    }

    /// Delta angle in degrees, folded into (-180, 180].
    pub const fn delta_angle(&self) -> Real {
        self.angle
    }

    /// Orientation at progress `t`; `t` is clamped to [0, 1].
    pub fn sample(&self, t: Real) -> UnitQuaternion<Real> {
        from_axis_angle(self.axis, self.angle * t.clamp(0.0, 1.0)) * self.start
    }
}

/// Spherical linear interpolation between `start` (t = 0) and `end` (t = 1),
/// with `t` clamped to [0, 1].
///
/// ```text
/// slerp(a, b, t) = (sin((1-t)·Ω)·a + sin(t·Ω)·b) / sin(Ω),  Ω = arccos(a·b)
/// ```
///
/// The dot product is taken over the four components; a negative dot means
/// the endpoints sit on opposite sheets of the double cover, and `end` is
/// negated so the arc is the shorter of the two. Nearly parallel endpoints
/// fall back to the linear blend.
pub fn slerp(start: UnitQuaternion<Real>, end: UnitQuaternion<Real>, t: Real) -> UnitQuaternion<Real> {
    let t = t.clamp(0.0, 1.0);
    let a = start.into_inner();
    let mut b = end.into_inner();

    let mut dot = a.coords.dot(&b.coords);
    if dot < 0.0 {
        b = -b;
        dot = -dot;
    }

    // Nearly parallel endpoints: the arc has no usable length
    if 1.0 - dot <= EPSILON {
        return UnitQuaternion::new_normalize(a.lerp(&b, t));
    }

    let omega = dot.clamp(-1.0, 1.0).acos();
    let sin_omega = omega.sin();
    let wa = ((1.0 - t) * omega).sin() / sin_omega;
    let wb = (t * omega).sin() / sin_omega;

    UnitQuaternion::new_normalize(a * wa + b * wb)
}

/// Normalized linear interpolation: component-wise blend of the four
/// components followed by renormalization, with the same shortest-arc flip
/// as [`slerp`] and `t` clamped to [0, 1].
///
/// The path matches slerp's (and passes through the same midpoint at
/// t = 0.5) but the angular speed is not constant: samples bunch up near the
/// endpoints as the total angle grows.
pub fn nlerp(start: UnitQuaternion<Real>, end: UnitQuaternion<Real>, t: Real) -> UnitQuaternion<Real> {
    let t = t.clamp(0.0, 1.0);
    let a = start.into_inner();
    let mut b = end.into_inner();
    if a.coords.dot(&b.coords) < 0.0 {
        b = -b;
    }
    UnitQuaternion::new_normalize(a.lerp(&b, t))
}
