//! Closed-form motions: spinning about an axis and travelling on a circle.

use std::f64::consts::TAU;

use glam::{Quat, Vec3};

use super::{Animator, Pose};

/// Rotation about a fixed axis at a constant angular speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    axis: Vec3,
    degrees_per_second: f64,
}

impl Spin {
    /// Creates a new spin. The axis is normalised; a zero-length axis spins about +Y.
    pub fn new(axis: Vec3, degrees_per_second: f64) -> Self {
        Self {
            axis: axis.try_normalize().unwrap_or(Vec3::Y),
            degrees_per_second,
        }
    }

    /// Seconds per full turn, or `None` when the spin is stationary.
    pub fn period(&self) -> Option<f64> {
        (self.degrees_per_second != 0.0).then(|| 360.0 / self.degrees_per_second.abs())
    }

    /// The rotation angle at `time`, in degrees, within `[0, 360)`.
    pub fn angle_degrees(&self, time: f64) -> f64 {
        let angle = (time * self.degrees_per_second).rem_euclid(360.0);
        // rem_euclid rounds tiny negative values up to exactly 360
        if angle >= 360.0 { 0.0 } else { angle }
    }

    pub fn rotation_at(&self, time: f64) -> Quat {
        Quat::from_axis_angle(self.axis, self.angle_degrees(time).to_radians() as f32)
    }
}

impl Animator for Spin {
    fn pose_at(&self, time: f64) -> Pose {
        Pose::IDENTITY.with_rotation(self.rotation_at(time))
    }
}

/// Uniform circular motion in the XZ plane.
///
/// At `time = 0` the position is `center + (radius, 0, 0)`; the orbit then runs towards +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub center: Vec3,
    pub radius: f32,
    pub revolutions_per_second: f64,
}

impl Orbit {
    pub fn new(center: Vec3, radius: f32, revolutions_per_second: f64) -> Self {
        Self {
            center,
            radius,
            revolutions_per_second,
        }
    }

    /// The orbit angle at `time`, in radians, within `[0, 2π)`.
    pub fn phase(&self, time: f64) -> f64 {
        (time * self.revolutions_per_second).rem_euclid(1.0) * TAU
    }

    pub fn translation_at(&self, time: f64) -> Vec3 {
        let phase = self.phase(time);
        self.center
            + Vec3::new(
                self.radius * phase.cos() as f32,
                0.0,
                self.radius * phase.sin() as f32,
            )
    }
}

impl Animator for Orbit {
    fn pose_at(&self, time: f64) -> Pose {
        Pose::at(self.translation_at(time))
    }
}

/// A spin, optionally carried around an orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub spin: Spin,
    pub orbit: Option<Orbit>,
}

impl Motion {
    pub fn spinning(spin: Spin) -> Self {
        Self { spin, orbit: None }
    }

    pub fn orbiting(spin: Spin, orbit: Orbit) -> Self {
        Self {
            spin,
            orbit: Some(orbit),
        }
    }
}

impl Animator for Motion {
    fn pose_at(&self, time: f64) -> Pose {
        let position = self
            .orbit
            .map(|orbit| orbit.translation_at(time))
            .unwrap_or(Vec3::ZERO);
        Pose::at(position).with_rotation(self.spin.rotation_at(time))
    }
}
