//! Cameras.
//!
//! The scene-graph demos use a [`TrackballCamera`] orbiting the scene: drag with the left mouse
//! button to rotate, scroll to zoom and press Space to return to the home view. The raw demos
//! look at the origin from a fixed point, see [`fixed_view`].

use glam::{Mat4, Quat, Vec2, Vec3};
use sdl2::{keyboard::Keycode, mouse::MouseButton};

use crate::geometry::Bounds;
use crate::input::UpdateContext;

/// Degrees of rotation per pixel of mouse motion.
const ROTATE_SENSITIVITY: f32 = 0.3;
/// Distance factor per scroll step.
const ZOOM_STEP: f32 = 0.9;
const MIN_DISTANCE: f32 = 0.05;
const MAX_PITCH: f32 = 89.0;
/// Home distance in bounding-sphere radii.
const HOME_DISTANCE_FACTOR: f32 = 3.5;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fovy_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fovy_degrees: 30.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Projection {
    pub fn matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fovy_degrees.to_radians(),
            aspect_ratio.max(1e-3),
            self.near,
            self.far,
        )
    }
}

/// The view used by the raw demos: looking at the origin from `distance` along +Z.
pub fn fixed_view(distance: f32) -> Mat4 {
    Mat4::look_at_rh(Vec3::new(0.0, 0.0, distance), Vec3::ZERO, Vec3::Y)
}

/// Orbits a center point at a distance, Y up.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackballCamera {
    center: Vec3,
    distance: f32,
    yaw: f32,
    pitch: f32,
    home_center: Vec3,
    home_distance: f32,
}

impl TrackballCamera {
    /// Looks at `center` from `distance` along +Z; this is also the home view.
    pub fn new(center: Vec3, distance: f32) -> Self {
        let distance = distance.max(MIN_DISTANCE);
        Self {
            center,
            distance,
            yaw: 0.0,
            pitch: 0.0,
            home_center: center,
            home_distance: distance,
        }
    }

    /// A home view that keeps the whole of `bounds` in sight.
    pub fn framing(bounds: &Bounds) -> Self {
        Self::new(bounds.center(), bounds.radius() * HOME_DISTANCE_FACTOR)
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    fn orientation(&self) -> Quat {
        let yaw = Quat::from_rotation_y(self.yaw.to_radians());
        yaw * Quat::from_rotation_x(-self.pitch.to_radians())
    }

    pub fn eye(&self) -> Vec3 {
        self.center + self.orientation() * Vec3::new(0.0, 0.0, self.distance)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.center, Vec3::Y)
    }

    /// Rotates by a mouse motion in pixels. Dragging down raises the eye.
    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw = (self.yaw - delta.x * ROTATE_SENSITIVITY).rem_euclid(360.0);
        self.pitch = (self.pitch + delta.y * ROTATE_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Moves closer for positive steps and away for negative ones.
    pub fn zoom(&mut self, steps: f32) {
        self.distance = (self.distance * ZOOM_STEP.powf(steps)).max(MIN_DISTANCE);
    }

    /// Returns to the home view.
    pub fn home(&mut self) {
        self.center = self.home_center;
        self.distance = self.home_distance;
        self.yaw = 0.0;
        self.pitch = 0.0;
    }

    /// Applies this frame's mouse and keyboard input.
    pub fn update(&mut self, ctx: &UpdateContext) {
        if ctx.mouse.down.contains(&MouseButton::Left) {
            self.rotate(ctx.mouse.delta);
        }
        if ctx.mouse.scroll_delta.y != 0.0 {
            self.zoom(ctx.mouse.scroll_delta.y);
        }
        if ctx.keyboard.pressed.contains(&Keycode::Space) {
            self.home();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_view_looks_down_negative_z() {
        let camera = TrackballCamera::new(Vec3::new(1.0, 0.0, 0.0), 10.0);
        assert!(camera.eye().abs_diff_eq(Vec3::new(1.0, 0.0, 10.0), 1e-5));
        let center_in_view = camera.view().transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!(center_in_view.abs_diff_eq(Vec3::new(0.0, 0.0, -10.0), 1e-4));
    }

    #[test]
    fn dragging_down_raises_the_eye() {
        let mut camera = TrackballCamera::new(Vec3::ZERO, 5.0);
        camera.rotate(Vec2::new(0.0, 100.0));
        assert!(camera.eye().y > 0.0);
        assert!((camera.eye().length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = TrackballCamera::new(Vec3::ZERO, 5.0);
        camera.rotate(Vec2::new(0.0, 10_000.0));
        assert_eq!(camera.pitch(), MAX_PITCH);
        camera.rotate(Vec2::new(0.0, -100_000.0));
        assert_eq!(camera.pitch(), -MAX_PITCH);
    }

    #[test]
    fn zoom_never_reaches_the_center() {
        let mut camera = TrackballCamera::new(Vec3::ZERO, 5.0);
        camera.zoom(1.0);
        assert!((camera.distance() - 4.5).abs() < 1e-5);
        camera.zoom(1000.0);
        assert_eq!(camera.distance(), MIN_DISTANCE);
    }

    #[test]
    fn home_restores_the_initial_view() {
        let mut camera = TrackballCamera::new(Vec3::ZERO, 5.0);
        let initial = camera.clone();
        camera.rotate(Vec2::new(40.0, 25.0));
        camera.zoom(3.0);
        camera.home();
        assert_eq!(camera, initial);
    }

    #[test]
    fn framing_backs_off_by_the_bounding_radius() {
        let bounds = Bounds {
            min: Vec3::new(-2.5, -0.5, -0.5),
            max: Vec3::new(2.5, 0.5, 0.5),
        };
        let camera = TrackballCamera::framing(&bounds);
        assert_eq!(camera.center(), Vec3::ZERO);
        assert!((camera.distance() - bounds.radius() * HOME_DISTANCE_FACTOR).abs() < 1e-5);
    }

    #[test]
    fn fixed_view_moves_the_origin_in_front() {
        let p = fixed_view(5.0).transform_point3(Vec3::ZERO);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), 1e-6));
    }

    #[test]
    fn projection_tolerates_zero_height() {
        let m = Projection::default().matrix(0.0);
        assert!(m.is_finite());
    }
}
