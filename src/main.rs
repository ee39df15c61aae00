// main.rs
//
// Minimal walkthrough of each function of orientrs: the validation sweep,
// the look-rotation derivation on its known scenarios, Euler order
// composition, axis-angle round trips, the accumulator rig, and the three
// interpolation strategies driven by a tween clock.

use nalgebra::{UnitQuaternion, Vector3};
use rand::{SeedableRng, rngs::StdRng};

use orientrs::float_types::{Real, tolerance};
use orientrs::rig::{Adjust, Channel, OrbitRig, TweenClock, TweenPhase};
use orientrs::rotation::orientation_angle;
use orientrs::validate::random_rotation;
use orientrs::{
    AxisAngleTween, RotationOrder, compose, derive_look_rotation, from_axis_angle, from_euler,
    nlerp, slerp, sweep_look_rotation, to_axis_angle,
};

fn print_rotation(label: &str, q: UnitQuaternion<Real>) {
    let c = q.quaternion();
    println!(
        "{label}: x {:.3}  y {:.3}  z {:.3}  w {:.3}",
        c.i, c.j, c.k, c.w
    );
}

fn main() {
    // 1) sweep_look_rotation(): 1000 random pairs against the trusted reference
    let report = sweep_look_rotation(1000, 0xC0FFEE, tolerance());
    println!("{report}");

    // 2) derive_look_rotation() on the scenarios with known answers
    print_rotation(
        "look (0,0,1) up (0,1,0)",
        derive_look_rotation(Vector3::z(), Vector3::y()),
    );
    print_rotation(
        "look (1,0,0) up (0,1,0)",
        derive_look_rotation(Vector3::x(), Vector3::y()),
    );
    let tilted = derive_look_rotation(Vector3::new(2.0, -1.0, 0.5), Vector3::y());
    print_rotation("look (2,-1,0.5) up (0,1,0)", tilted);
    let imag_axis = tilted.quaternion().imag().normalize();
    println!(
        "  imaginary part points along ({:.2}, {:.2}, {:.2})",
        imag_axis.x, imag_axis.y, imag_axis.z
    );

    // 3) compose() with the same angles under every order, both readings
    println!("compose(30, 45, 60) by order:");
    for order in RotationOrder::ALL {
        let inner = compose(order, true, 30.0, 45.0, 60.0);
        let outer = compose(order, false, 30.0, 45.0, 60.0);
        println!(
            "  {order:?}: intrinsic and extrinsic differ by {:.2} degrees",
            orientation_angle(inner, outer)
        );
    }

    // 4) from_euler(): the canonical extrinsic Z, X, Y composition
    print_rotation("from_euler(20, 135, 10)", from_euler(20.0, 135.0, 10.0));

    // 5) from_axis_angle() / to_axis_angle() round trip
    let quarter = from_axis_angle(Vector3::y(), 90.0);
    let carried = quarter * Vector3::z();
    println!(
        "90 degrees about +Y carries +Z to ({:.2}, {:.2}, {:.2})",
        carried.x, carried.y, carried.z
    );
    let (axis, angle) = to_axis_angle(quarter);
    println!(
        "...and decomposes back to axis ({:.2}, {:.2}, {:.2}), angle {angle:.1}",
        axis.x, axis.y, axis.z
    );

    // 6) OrbitRig: a second of orbit, half a second of pitch, then some spin
    let mut rig = OrbitRig::default();
    rig.step(Channel::Orbit, Adjust::Raise, 1.0);
    rig.step(Channel::Pitch, Adjust::Lower, 0.5);
    rig.step(Channel::Spin, Adjust::Raise, 0.25);
    let handle = rig.handle_direction();
    println!(
        "rig spin {:.1} pitch {:.1} orbit {:.1} -> handle ({:.2}, {:.2}, {:.2})",
        rig.spin(),
        rig.pitch(),
        rig.orbit(),
        handle.x,
        handle.y,
        handle.z
    );
    print_rotation("rig orientation", rig.orientation());
    print_rotation("rig spin about handle", rig.spin_about_handle());

    // 7) the three interpolation strategies driven by a TweenClock
    let mut rng = StdRng::seed_from_u64(42);
    let start = random_rotation(&mut rng);
    let end = random_rotation(&mut rng);
    let tween = AxisAngleTween::new(start, end);
    println!("tween delta angle {:.2} degrees", tween.delta_angle());
    let mut clock = TweenClock::new(0.25, 1.0);
    loop {
        match clock.advance(0.5) {
            TweenPhase::Running(t) => {
                let a = tween.sample(t);
                let s = slerp(start, end, t);
                let n = nlerp(start, end, t);
                println!(
                    "  t {t:.3}: axis-angle w {:.4}, slerp w {:.4}, nlerp w {:.4}",
                    a.quaternion().w,
                    s.quaternion().w,
                    n.quaternion().w
                );
            },
            TweenPhase::Holding => println!("  holding at the end pose"),
            TweenPhase::Restarted => {
                println!("  dwell elapsed, a fresh pair would be drawn here");
                break;
            },
        }
    }

    println!("All rotation walkthroughs complete.");
}
