//! Host-loop-facing demo state: the spin/pitch/orbit accumulator rig and the
//! interpolation progress clock.
//!
//! Everything here is plain bookkeeping over explicit per-frame inputs. The
//! host loop owns input devices and clocks; it maps keys (or GUI fields) to
//! [`Channel`] adjustments and feeds elapsed seconds in, once per frame.

use crate::angle::wrap_degrees;
use crate::float_types::Real;
use crate::rotation::{from_axis_angle, from_euler};
use crate::vector::world_forward;
use nalgebra::{UnitQuaternion, Vector3};

/// The three angle accumulators a rotation rig maintains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Roll about the handle's own forward axis.
    Spin,
    /// Tilt above or below the horizon, clamped to [-90, 90].
    Pitch,
    /// Turn about the world up axis.
    Orbit,
}

/// One frame's adjustment to a single channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjust {
    /// Add `rate * delta_seconds` degrees.
    Raise,
    /// Subtract `rate * delta_seconds` degrees.
    Lower,
    /// Snap the channel back to 0.
    Reset,
}

/// Spin/pitch/orbit accumulator rig.
///
/// Holds the three degree accumulators, applies per-frame adjustments at a
/// fixed rate, and exposes the composite orientation the accumulators
/// describe plus the rotated handle direction derived from it. Spin and
/// orbit wrap into (-180, 180]; pitch clamps to [-90, 90]. Direct
/// assignment through [`set`](Self::set) runs through the same wrap and
/// clamp, so the rig never holds an out-of-range angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRig {
    spin: Real,
    pitch: Real,
    orbit: Real,
    rate: Real,
    handle_base: Vector3<Real>,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RATE)
    }
}

impl OrbitRig {
    /// Adjustment rate in degrees per second.
    pub const DEFAULT_RATE: Real = 90.0;
    /// Pitch never leaves [-PITCH_LIMIT, PITCH_LIMIT].
    pub const PITCH_LIMIT: Real = 90.0;

    /// A zeroed rig adjusting at `rate` degrees per second, with the handle
    /// base pointing along [`world_forward`].
    pub fn new(rate: Real) -> Self {
        OrbitRig {
            spin: 0.0,
            pitch: 0.0,
            orbit: 0.0,
            rate,
            handle_base: world_forward(),
        }
    }

    /// Same rig with a different handle base vector.
    pub const fn with_handle_base(mut self, base: Vector3<Real>) -> Self {
        self.handle_base = base;
        self
    }

    pub const fn spin(&self) -> Real {
        self.spin
    }

    pub const fn pitch(&self) -> Real {
        self.pitch
    }

    pub const fn orbit(&self) -> Real {
        self.orbit
    }

    pub const fn rate(&self) -> Real {
        self.rate
    }

    /// Current value of one channel in degrees.
    pub const fn get(&self, channel: Channel) -> Real {
        match channel {
            Channel::Spin => self.spin,
            Channel::Pitch => self.pitch,
            Channel::Orbit => self.orbit,
        }
    }

    /// Apply one frame's adjustment to `channel`, scaled by the elapsed
    /// seconds, then wrap or clamp the result.
    pub fn step(&mut self, channel: Channel, adjust: Adjust, delta_seconds: Real) {
        let nudge = self.rate * delta_seconds;
        let next = match adjust {
            Adjust::Raise => self.get(channel) + nudge,
            Adjust::Lower => self.get(channel) - nudge,
            Adjust::Reset => 0.0,
        };
        self.set(channel, next);
    }

    /// Assign a channel directly (the GUI text-field path); the value runs
    /// through the same wrap or clamp as [`step`](Self::step).
    pub fn set(&mut self, channel: Channel, degrees: Real) {
        match channel {
            Channel::Spin => self.spin = wrap_degrees(degrees),
            Channel::Pitch => self.pitch = degrees.clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT),
            Channel::Orbit => self.orbit = wrap_degrees(degrees),
        }
    }

    /// Composite orientation of the accumulators, built extrinsically about
    /// the fixed world axes: spin (about +Z) applied first, then pitch
    /// (about +X), then orbit (about +Y).
    ///
    /// The three-factor product equals the canonical
    /// [`from_euler`]`(pitch, orbit, spin)` composition; it is spelled out
    /// so the application order stays visible.
    pub fn orientation(&self) -> UnitQuaternion<Real> {
        from_euler(0.0, self.orbit, 0.0)
            * from_euler(self.pitch, 0.0, 0.0)
            * from_euler(0.0, 0.0, self.spin)
    }

    /// The handle base vector carried through [`orientation`](Self::orientation).
    ///
    /// With the default +Z base, spin turns the handle about its own length
    /// and leaves this direction unchanged; only pitch and orbit move it.
    pub fn handle_direction(&self) -> Vector3<Real> {
        self.orientation() * self.handle_base
    }

    /// Rotation of `spin` degrees about the current handle direction, the
    /// single axis-angle rotation the rig's spin channel describes in world
    /// space.
    pub fn spin_about_handle(&self) -> UnitQuaternion<Real> {
        from_axis_angle(self.handle_direction(), self.spin)
    }
}

/// Phase reported by [`TweenClock::advance`] for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenPhase {
    /// Interpolation in flight; the payload is the progress in [0, 1].
    Running(Real),
    /// Progress reached 1 and the clock is sitting out the dwell.
    Holding,
    /// The dwell elapsed this frame; progress is back at 0 and the host
    /// should draw a fresh endpoint pair.
    Restarted,
}

/// Progress clock for the interpolation comparison.
///
/// Progress advances by `rate * delta_seconds` and clamps at 1; the clock
/// then holds for `dwell` seconds before signalling a restart, at which
/// point progress returns to 0 and the cycle repeats with whatever new
/// endpoints the host supplies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenClock {
    rate: Real,
    dwell: Real,
    progress: Real,
    hold_left: Option<Real>,
}

impl Default for TweenClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RATE, Self::DEFAULT_DWELL)
    }
}

impl TweenClock {
    /// Progress per second; a full sweep takes five seconds.
    pub const DEFAULT_RATE: Real = 0.2;
    /// Seconds to hold at the end before restarting.
    pub const DEFAULT_DWELL: Real = 1.3;

    pub const fn new(rate: Real, dwell: Real) -> Self {
        TweenClock {
            rate,
            dwell,
            progress: 0.0,
            hold_left: None,
        }
    }

    /// Progress in [0, 1] as of the last [`advance`](Self::advance).
    pub const fn progress(&self) -> Real {
        self.progress
    }

    pub const fn is_holding(&self) -> bool {
        self.hold_left.is_some()
    }

    /// Advance the clock by one frame of `delta_seconds`.
    ///
    /// Non-positive deltas leave the clock untouched and report the current
    /// phase.
    pub fn advance(&mut self, delta_seconds: Real) -> TweenPhase {
        if delta_seconds <= 0.0 {
            return match self.hold_left {
                Some(_) => TweenPhase::Holding,
                None => TweenPhase::Running(self.progress),
            };
        }
        if let Some(left) = self.hold_left {
            let left = left - delta_seconds;
            if left <= 0.0 {
                self.hold_left = None;
                self.progress = 0.0;
                return TweenPhase::Restarted;
            }
            self.hold_left = Some(left);
            return TweenPhase::Holding;
        }
        self.progress += self.rate * delta_seconds;
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.hold_left = Some(self.dwell);
        }
        TweenPhase::Running(self.progress)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rotation::{approx_same_orientation, to_axis_angle};
    use approx::assert_relative_eq;

    #[test]
    fn step_scales_by_rate_and_elapsed_time() {
        let mut rig = OrbitRig::default();
        rig.step(Channel::Spin, Adjust::Raise, 0.5);
        assert_relative_eq!(rig.spin(), 45.0, epsilon = 1e-12);
        rig.step(Channel::Spin, Adjust::Lower, 0.25);
        assert_relative_eq!(rig.spin(), 22.5, epsilon = 1e-12);
    }

    #[test]
    fn reset_clears_only_the_named_channel() {
        let mut rig = OrbitRig::default();
        rig.set(Channel::Spin, 30.0);
        rig.set(Channel::Pitch, 40.0);
        rig.set(Channel::Orbit, 50.0);
        rig.step(Channel::Pitch, Adjust::Reset, 1.0);
        assert_relative_eq!(rig.spin(), 30.0);
        assert_relative_eq!(rig.pitch(), 0.0);
        assert_relative_eq!(rig.orbit(), 50.0);
    }

    #[test]
    fn spin_and_orbit_wrap_past_half_turn() {
        let mut rig = OrbitRig::default();
        rig.set(Channel::Spin, 179.0);
        rig.step(Channel::Spin, Adjust::Raise, 2.0 / 90.0);
        assert_relative_eq!(rig.spin(), -179.0, epsilon = 1e-9);
        rig.set(Channel::Orbit, 540.0);
        assert_relative_eq!(rig.orbit(), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn pitch_clamps_at_the_poles() {
        let mut rig = OrbitRig::default();
        rig.set(Channel::Pitch, 135.0);
        assert_relative_eq!(rig.pitch(), 90.0);
        rig.step(Channel::Pitch, Adjust::Raise, 1.0);
        assert_relative_eq!(rig.pitch(), 90.0);
        rig.step(Channel::Pitch, Adjust::Lower, 3.0);
        assert_relative_eq!(rig.pitch(), -90.0);
    }

    #[test]
    fn composite_orientation_matches_canonical_euler() {
        let mut rig = OrbitRig::default();
        rig.set(Channel::Spin, 25.0);
        rig.set(Channel::Pitch, -35.0);
        rig.set(Channel::Orbit, 110.0);
        assert!(approx_same_orientation(
            rig.orientation(),
            from_euler(-35.0, 110.0, 25.0),
            1e-12
        ));
    }

    #[test]
    fn orbit_quarter_turn_points_the_handle_right() {
        let mut rig = OrbitRig::default();
        rig.set(Channel::Orbit, 90.0);
        let handle = rig.handle_direction();
        assert_relative_eq!(handle.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(handle.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(handle.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn spin_does_not_move_the_default_handle() {
        let mut rig = OrbitRig::default();
        rig.set(Channel::Pitch, 20.0);
        rig.set(Channel::Orbit, 30.0);
        let still = rig.handle_direction();
        rig.set(Channel::Spin, 77.0);
        let spinning = rig.handle_direction();
        assert_relative_eq!((still - spinning).norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn spin_about_handle_decomposes_back_to_the_handle_axis() {
        let mut rig = OrbitRig::default();
        rig.set(Channel::Orbit, 90.0);
        rig.set(Channel::Spin, 45.0);
        let (axis, angle) = to_axis_angle(rig.spin_about_handle());
        let aligned = axis.dot(&rig.handle_direction()) * angle;
        assert_relative_eq!(aligned, 45.0, epsilon = 1e-9);
    }

    #[test]
    fn rebased_handle_follows_the_new_base() {
        let rig = OrbitRig::default().with_handle_base(-world_forward());
        let handle = rig.handle_direction();
        assert_relative_eq!(handle.z, -1.0, epsilon = 1e-12);
    }

    fn running_progress(phase: TweenPhase) -> Real {
        match phase {
            TweenPhase::Running(p) => p,
            other => panic!("expected a running phase, got {other:?}"),
        }
    }

    #[test]
    fn clock_runs_clamps_holds_and_restarts() {
        let mut clock = TweenClock::new(0.5, 1.0);
        assert_relative_eq!(running_progress(clock.advance(1.0)), 0.5);
        assert_relative_eq!(running_progress(clock.advance(1.0)), 1.0);
        assert!(clock.is_holding());
        assert_eq!(clock.advance(0.6), TweenPhase::Holding);
        assert_eq!(clock.advance(0.5), TweenPhase::Restarted);
        assert!(!clock.is_holding());
        assert_relative_eq!(running_progress(clock.advance(0.4)), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn overshooting_a_frame_still_clamps_at_one() {
        let mut clock = TweenClock::new(TweenClock::DEFAULT_RATE, TweenClock::DEFAULT_DWELL);
        assert_relative_eq!(running_progress(clock.advance(60.0)), 1.0);
        assert!(clock.is_holding());
    }

    #[test]
    fn zero_delta_reports_the_phase_without_advancing() {
        let mut clock = TweenClock::new(0.5, 1.0);
        clock.advance(1.0);
        assert_relative_eq!(running_progress(clock.advance(0.0)), 0.5);
        assert_relative_eq!(running_progress(clock.advance(-5.0)), 0.5);
        assert_relative_eq!(clock.progress(), 0.5);
    }
}
