//! Euler rotation orders and the data-driven composition table.
//!
//! An Euler triple is ambiguous until two conventions are pinned down: the
//! order the three single-axis rotations are applied in, and whether each is
//! applied about the fixed world axes (extrinsic) or the body's just-rotated
//! axes (intrinsic). [`compose`] makes both explicit; the fixed canonical
//! choice used elsewhere in the crate is [`from_euler`](crate::rotation::from_euler).

use crate::float_types::Real;
use crate::rotation::from_axis_angle;
use nalgebra::{UnitQuaternion, Vector3};

/// A canonical world axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along the axis.
    pub fn unit_vector(self) -> Vector3<Real> {
        match self {
            Axis::X => Vector3::x(),
            Axis::Y => Vector3::y(),
            Axis::Z => Vector3::z(),
        }
    }

    /// Select this axis's entry from an (x, y, z) degree triple.
    pub const fn pick(self, x_deg: Real, y_deg: Real, z_deg: Real) -> Real {
        match self {
            Axis::X => x_deg,
            Axis::Y => y_deg,
            Axis::Z => z_deg,
        }
    }

    /// Single-axis rotation about this world axis.
    pub fn rotation(self, degrees: Real) -> UnitQuaternion<Real> {
        from_axis_angle(self.unit_vector(), degrees)
    }
}

/// The six permutations of axis application order. The variant name lists the
/// axes in the order they are applied: `XYZ` applies the X rotation first,
/// then Y, then Z.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationOrder {
    XYZ,
    XZY,
    YXZ,
    YZX,
    /// The canonical order (matches [`from_euler`](crate::rotation::from_euler)
    /// when composed extrinsically).
    #[default]
    ZXY,
    ZYX,
}

impl RotationOrder {
    /// Every order, in declaration order.
    pub const ALL: [RotationOrder; 6] = [
        RotationOrder::XYZ,
        RotationOrder::XZY,
        RotationOrder::YXZ,
        RotationOrder::YZX,
        RotationOrder::ZXY,
        RotationOrder::ZYX,
    ];

    /// The application order as an axis triple: first, second, third.
    pub const fn axes(self) -> [Axis; 3] {
        match self {
            RotationOrder::XYZ => [Axis::X, Axis::Y, Axis::Z],
            RotationOrder::XZY => [Axis::X, Axis::Z, Axis::Y],
            RotationOrder::YXZ => [Axis::Y, Axis::X, Axis::Z],
            RotationOrder::YZX => [Axis::Y, Axis::Z, Axis::X],
            RotationOrder::ZXY => [Axis::Z, Axis::X, Axis::Y],
            RotationOrder::ZYX => [Axis::Z, Axis::Y, Axis::X],
        }
    }
}

/// General Euler-order composition of three single-axis rotations, given as
/// degrees about the world X, Y and Z axes.
///
/// **Intrinsic** composition multiplies the factors in application order
/// (each new rotation is appended, acting in the body's rotated axes).
/// **Extrinsic** composition multiplies them in the *reverse* of the
/// application order (each new rotation is prepended, acting in world axes):
///
/// ```text
/// intrinsic: q = q_first * q_second * q_third
/// extrinsic: q = q_third * q_second * q_first
/// ```
pub fn compose(
    order: RotationOrder,
    intrinsic: bool,
    x_deg: Real,
    y_deg: Real,
    z_deg: Real,
) -> UnitQuaternion<Real> {
    let [first, second, third] = order.axes();
    let qf = first.rotation(first.pick(x_deg, y_deg, z_deg));
    let qs = second.rotation(second.pick(x_deg, y_deg, z_deg));
    let qt = third.rotation(third.pick(x_deg, y_deg, z_deg));
    if intrinsic { qf * qs * qt } else { qt * qs * qf }
}
