//! The built-in cube travelling a circular animation path while it tumbles, lit by a light
//! that orbits above it.

use std::sync::Arc;

use glam::Vec3;

use crate::abs::App;
use crate::animation::{Orbit, Pose, Spin, circle_path};
use crate::camera::TrackballCamera;
use crate::config::WindowConfig;
use crate::demo::{self, Demo};
use crate::error::Result;
use crate::geometry::cube;
use crate::input::UpdateContext;
use crate::render::SceneRenderer;
use crate::scene::{LightSource, MeshId, Node, Scene, Transform};

pub const PATH_RADIUS: f32 = 3.0;
pub const PATH_LOOP_TIME: f64 = 12.0;
pub const PATH_SAMPLES: usize = 41;
pub const TUMBLE_AXIS: Vec3 = Vec3::X;
pub const TUMBLE_DEGREES_PER_SECOND: f64 = 90.0;
pub const LIGHT_ORBIT: Orbit = Orbit {
    center: Vec3::new(0.0, 4.0, 0.0),
    radius: 6.0,
    revolutions_per_second: -0.05,
};
pub const LIGHT_DIFFUSE: Vec3 = Vec3::new(1.0, 0.9, 0.7);

pub fn build_scene(cube_mesh: MeshId) -> Scene {
    let tumbling = Transform::new(Pose::IDENTITY)
        .animated(Spin::new(TUMBLE_AXIS, TUMBLE_DEGREES_PER_SECOND))
        .with_child(cube_mesh);
    let travelling = Transform::new(Pose::IDENTITY)
        .animated(circle_path(Vec3::ZERO, PATH_RADIUS, PATH_LOOP_TIME, PATH_SAMPLES))
        .with_child(tumbling);

    let marker = Transform::new(Pose::IDENTITY.with_scale(Vec3::splat(0.2))).with_child(cube_mesh);
    let light = Transform::new(Pose::IDENTITY)
        .animated(LIGHT_ORBIT)
        .with_child(LightSource::point(Vec3::ZERO, LIGHT_DIFFUSE).with_child(marker));

    Scene::new(Node::Group(vec![travelling.into(), light.into()]))
}

pub struct LitCube {
    renderer: SceneRenderer,
    scene: Scene,
    camera: TrackballCamera,
}

impl LitCube {
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self> {
        let mut renderer = SceneRenderer::new(gl)?;
        let mesh = renderer.add_mesh(&cube(0.5))?;
        renderer.headlight = Vec3::splat(0.3);

        let mut camera = TrackballCamera::new(Vec3::ZERO, 18.0);
        camera.rotate(glam::Vec2::new(0.0, 100.0));

        Ok(Self {
            renderer,
            scene: build_scene(mesh),
            camera,
        })
    }
}

impl Demo for LitCube {
    fn update(&mut self, ctx: &UpdateContext) {
        self.camera.update(ctx);
    }

    fn render(&mut self, _gl: &glow::Context, ctx: &UpdateContext) -> Result<()> {
        let frame = self.scene.collect(ctx.elapsed);
        self.renderer.draw(&frame, &self.camera, ctx.aspect_ratio());
        Ok(())
    }
}

pub fn run() -> Result<()> {
    let mut app = App::new(WindowConfig::titled("litcube"))?;
    let mut demo = LitCube::new(&app.gl)?;
    demo::run(&mut app, &mut demo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_starts_on_the_path() {
        let frame = build_scene(MeshId(0)).collect(0.0);
        assert_eq!(frame.draws.len(), 2);
        let position = frame.draws[0].model.transform_point3(Vec3::ZERO);
        assert!(position.abs_diff_eq(Vec3::new(PATH_RADIUS, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn cube_returns_after_one_loop() {
        let scene = build_scene(MeshId(0));
        let start = scene.collect(0.0).draws[0].model.transform_point3(Vec3::ZERO);
        let half = scene.collect(PATH_LOOP_TIME / 2.0).draws[0]
            .model
            .transform_point3(Vec3::ZERO);
        let end = scene.collect(PATH_LOOP_TIME).draws[0]
            .model
            .transform_point3(Vec3::ZERO);
        assert!(start.abs_diff_eq(end, 1e-4));
        assert!(half.abs_diff_eq(Vec3::new(-PATH_RADIUS, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn light_orbits_above() {
        let scene = build_scene(MeshId(0));
        for t in [0.0, 3.0, 7.5] {
            let frame = scene.collect(t);
            assert_eq!(frame.lights.len(), 1);
            let p = frame.lights[0].position;
            assert_eq!(p.w, 1.0);
            assert!((p.y - 4.0).abs() < 1e-5);
            assert!(((p.truncate() - LIGHT_ORBIT.center).length() - 6.0).abs() < 1e-4);
        }
    }
}
