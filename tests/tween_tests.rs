mod support;

use nalgebra::{UnitQuaternion, Vector3};
use orientrs::float_types::{Real, tolerance};
use orientrs::validate::random_rotation;
use orientrs::{AxisAngleTween, from_axis_angle, nlerp, slerp};
use rand::{SeedableRng, rngs::StdRng};

use crate::support::{approx_eq, assert_direction_eq, assert_same_orientation};

/// Pair whose representations already sit on the same sheet of the double
/// cover, comfortably away from the flip boundary, so the reference
/// interpolators walk the same arc without any hemisphere handling.
fn aligned_pair(rng: &mut StdRng) -> (UnitQuaternion<Real>, UnitQuaternion<Real>) {
    loop {
        let a = random_rotation(rng);
        let b = random_rotation(rng);
        if a.quaternion().coords.dot(&b.quaternion().coords) > 0.05 {
            return (a, b);
        }
    }
}

#[test]
fn slerp_matches_the_reference_on_aligned_pairs() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..100 {
        let (a, b) = aligned_pair(&mut rng);
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_same_orientation(slerp(a, b, t), a.slerp(&b, t), tolerance());
        }
    }
}

#[test]
fn nlerp_matches_the_reference_on_aligned_pairs() {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..100 {
        let (a, b) = aligned_pair(&mut rng);
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_same_orientation(nlerp(a, b, t), a.nlerp(&b, t), tolerance());
        }
    }
}

#[test]
fn axis_angle_tween_matches_slerp_on_random_pairs() {
    // no alignment needed: both strategies fold to the short arc themselves
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..100 {
        let (start, end) = (random_rotation(&mut rng), random_rotation(&mut rng));
        let tween = AxisAngleTween::new(start, end);
        for t in [0.1, 0.3, 0.5, 0.7, 0.9] {
            assert_same_orientation(tween.sample(t), slerp(start, end, t), 1e-9);
        }
    }
}

#[test]
fn endpoints_are_shared_by_every_strategy() {
    let mut rng = StdRng::seed_from_u64(37);
    for _ in 0..50 {
        let (start, end) = (random_rotation(&mut rng), random_rotation(&mut rng));
        let tween = AxisAngleTween::new(start, end);
        for q in [tween.sample(0.0), slerp(start, end, 0.0), nlerp(start, end, 0.0)] {
            assert_same_orientation(q, start, 1e-9);
        }
        for q in [tween.sample(1.0), slerp(start, end, 1.0), nlerp(start, end, 1.0)] {
            assert_same_orientation(q, end, 1e-9);
        }
    }
}

#[test]
fn tween_decomposition_recovers_the_constructed_delta() {
    let mut rng = StdRng::seed_from_u64(41);
    let start = random_rotation(&mut rng);
    let axis = Vector3::new(1.0, 2.0, -0.5).normalize();
    let end = from_axis_angle(axis, 150.0) * start;
    let tween = AxisAngleTween::new(start, end);
    assert!(approx_eq(tween.delta_angle(), 150.0, 1e-9));
    assert_direction_eq(tween.axis(), axis, 1e-9);
}

#[test]
fn small_deltas_keep_all_three_strategies_together() {
    let mut rng = StdRng::seed_from_u64(43);
    for _ in 0..50 {
        let start = random_rotation(&mut rng);
        let end = from_axis_angle(Vector3::new(0.3, -1.0, 0.8), 8.0) * start;
        let tween = AxisAngleTween::new(start, end);
        for t in [0.2, 0.4, 0.6, 0.8] {
            let arc = slerp(start, end, t);
            assert_same_orientation(tween.sample(t), arc, 1e-9);
            assert_same_orientation(nlerp(start, end, t), arc, 1e-4);
        }
    }
}
