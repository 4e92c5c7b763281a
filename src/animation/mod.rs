//! Time-driven transforms.
//!
//! Everything in this module is a pure function of the elapsed time in seconds: evaluating an
//! [`Animator`] twice with the same time yields the same [`Pose`]. The render loop samples the
//! animators once per frame with the value of its [`crate::demo::Clock`].

use glam::{Mat4, Quat, Vec3};

pub mod motion;
pub mod path;

pub use motion::*;
pub use path::*;

/// A rigid transform with a non-uniform scale, applied as scale, then rotation, then
/// translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// A pose that only translates.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn with_rotation(self, rotation: Quat) -> Self {
        Self { rotation, ..self }
    }

    pub fn with_scale(self, scale: Vec3) -> Self {
        Self { scale, ..self }
    }

    /// Returns the 4x4 model matrix for this pose.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Interpolates towards `other`: position and scale linearly, rotation along the shortest
    /// arc.
    pub fn interpolate(&self, other: &Pose, s: f32) -> Pose {
        Pose {
            position: self.position.lerp(other.position, s),
            rotation: self.rotation.slerp(other.rotation, s).normalize(),
            scale: self.scale.lerp(other.scale, s),
        }
    }
}

/// Anything that maps an elapsed time to a pose.
pub trait Animator {
    /// Samples the pose at `time` seconds.
    fn pose_at(&self, time: f64) -> Pose;

    /// Samples the pose at `time` seconds as a model matrix.
    fn transform_at(&self, time: f64) -> Mat4 {
        self.pose_at(time).matrix()
    }
}
