//! 3D rotation representations built from first principles: Euler orders,
//! axis-angle, quaternion composition, three interpolation strategies, and a
//! two-stage **look-rotation** derivation (aim a forward axis at a target,
//! resolve roll from an up hint), all cross-validated against [nalgebra]'s
//! trusted constructions.
//!
//! Angles are degrees throughout; the canonical frame is +X right, +Y up,
//! +Z forward. `nalgebra` supplies the `Vector3`/`UnitQuaternion` value
//! types and the `*` composition operator; every construction and
//! decomposition in [`rotation`], [`euler`], [`look`] and [`tween`] is
//! implemented here and only compared against nalgebra's own in the
//! [`validate`] harness and the test suite.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to run validation sweeps across a thread pool

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod angle;
pub mod errors;
pub mod euler;
pub mod float_types;
pub mod look;
pub mod rig;
pub mod rotation;
pub mod tween;
pub mod validate;
pub mod vector;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::DegenerateInput;
pub use euler::{Axis, RotationOrder, compose};
pub use look::{derive_look_rotation, try_derive_look_rotation};
pub use rotation::{from_axis_angle, from_euler, to_axis_angle};
pub use tween::{AxisAngleTween, nlerp, slerp};
pub use validate::{SweepReport, sweep_look_rotation};
