//! Two copies of a loaded model spinning in place, lit by an extra yellow light.
//!
//! Both copies hang off one shared rotation transform, so they always show the same
//! orientation. The light's position is marked by a small copy of the model.

use std::ffi::OsString;
use std::rc::Rc;
use std::sync::Arc;

use glam::Vec3;

use crate::abs::App;
use crate::animation::{Pose, Spin, rotation_path};
use crate::camera::TrackballCamera;
use crate::cli;
use crate::config::WindowConfig;
use crate::demo::{self, Demo};
use crate::error::{DemoError, Result};
use crate::geometry::ModelData;
use crate::input::UpdateContext;
use crate::model;
use crate::render::SceneRenderer;
use crate::scene::{LightSource, MeshId, Node, Scene, Transform};

pub const ROTATION_AXIS: Vec3 = Vec3::new(0.0, 1.0, 1.0);
pub const DEGREES_PER_SECOND: f64 = 40.0;
pub const SAMPLE_INTERVAL: f64 = 1.0;
/// The two copies sit at `±CUBE_OFFSET` on the X axis.
pub const CUBE_OFFSET: f32 = 2.0;
pub const LIGHT_POSITION: Vec3 = Vec3::new(5.0, 12.0, 3.0);
pub const LIGHT_DIFFUSE: Vec3 = Vec3::new(1.0, 1.0, 0.0);
pub const LIGHT_MARKER_SCALE: f32 = 0.1;

pub fn build_scene(model: MeshId) -> Scene {
    let spin = Spin::new(ROTATION_AXIS, DEGREES_PER_SECOND);
    let rotation = Transform::new(Pose::IDENTITY)
        .animated(rotation_path(&spin, SAMPLE_INTERVAL))
        .with_child(model)
        .shared();

    let left = Transform::new(Pose::at(Vec3::new(-CUBE_OFFSET, 0.0, 0.0)))
        .with_child(Rc::clone(&rotation));
    let right =
        Transform::new(Pose::at(Vec3::new(CUBE_OFFSET, 0.0, 0.0))).with_child(rotation);

    let light = Transform::new(
        Pose::at(LIGHT_POSITION).with_scale(Vec3::splat(LIGHT_MARKER_SCALE)),
    )
    .with_child(LightSource::point(Vec3::ZERO, LIGHT_DIFFUSE).with_child(model));

    Scene::new(Node::Group(vec![light.into(), left.into(), right.into()]))
}

pub struct SpinningModel {
    renderer: SceneRenderer,
    scene: Scene,
    camera: TrackballCamera,
}

impl SpinningModel {
    pub fn new(gl: &Arc<glow::Context>, model: &ModelData) -> Result<Self> {
        let mut renderer = SceneRenderer::new(gl)?;
        let mesh = renderer.add_mesh(model)?;
        let scene = build_scene(mesh);

        let camera = scene
            .collect(0.0)
            .bounds(renderer.mesh_bounds())
            .map(|bounds| TrackballCamera::framing(&bounds))
            .unwrap_or_else(|| TrackballCamera::new(Vec3::ZERO, 10.0));

        Ok(Self {
            renderer,
            scene,
            camera,
        })
    }
}

impl Demo for SpinningModel {
    fn update(&mut self, ctx: &UpdateContext) {
        self.camera.update(ctx);
    }

    fn render(&mut self, _gl: &glow::Context, ctx: &UpdateContext) -> Result<()> {
        let frame = self.scene.collect(ctx.elapsed);
        self.renderer.draw(&frame, &self.camera, ctx.aspect_ratio());
        Ok(())
    }
}

/// Loads the model named on the command line and shows it until the window closes.
///
/// The arguments and the model are checked before the window opens.
pub fn run<I>(args: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let path = cli::model_path_from_args(args)?;
    let model = model::load(&path).map_err(|source| DemoError::ModelLoad {
        path: path.clone(),
        source,
    })?;

    let mut app = App::new(WindowConfig::titled("spinningcube"))?;
    let mut demo = SpinningModel::new(&app.gl, &model)?;
    demo::run(&mut app, &mut demo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_copies_share_the_rotation() {
        let scene = build_scene(MeshId(0));
        for t in [0.0, 1.5, 9.0, 31.7] {
            let frame = scene.collect(t);
            // light marker first, then the two copies
            assert_eq!(frame.draws.len(), 3);
            let (_, left_rot, left_pos) = frame.draws[1].model.to_scale_rotation_translation();
            let (_, right_rot, right_pos) = frame.draws[2].model.to_scale_rotation_translation();
            assert!(left_rot.abs_diff_eq(right_rot, 1e-6));
            assert!(left_pos.abs_diff_eq(Vec3::new(-CUBE_OFFSET, 0.0, 0.0), 1e-6));
            assert!(right_pos.abs_diff_eq(Vec3::new(CUBE_OFFSET, 0.0, 0.0), 1e-6));
        }
    }

    #[test]
    fn copies_start_unrotated() {
        let frame = build_scene(MeshId(0)).collect(0.0);
        let (_, rotation, _) = frame.draws[1].model.to_scale_rotation_translation();
        assert!(rotation.abs_diff_eq(glam::Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn rotation_repeats_every_nine_seconds() {
        let scene = build_scene(MeshId(0));
        for t in [0.3, 2.0, 5.5] {
            let a = scene.collect(t).draws[1].model;
            let b = scene.collect(t + 9.0).draws[1].model;
            assert!(a.abs_diff_eq(b, 1e-4), "t = {t}");
        }
    }

    #[test]
    fn yellow_light_above_the_scene() {
        let frame = build_scene(MeshId(0)).collect(4.0);
        assert_eq!(frame.lights.len(), 1);
        assert!(
            frame.lights[0]
                .position
                .abs_diff_eq(LIGHT_POSITION.extend(1.0), 1e-6)
        );
        assert_eq!(frame.lights[0].diffuse, LIGHT_DIFFUSE);
    }

    #[test]
    fn wrong_argument_count_fails_before_loading() {
        let err = run(["spinningcube"]).unwrap_err();
        assert!(matches!(err, DemoError::Usage { .. }));
    }

    #[test]
    fn missing_model_fails_before_opening_a_window() {
        let missing = std::env::temp_dir().join("spinningcube-missing-model.json");
        let err = run([OsString::from("spinningcube"), missing.into_os_string()]).unwrap_err();
        assert!(matches!(err, DemoError::ModelLoad { .. }));
        assert!(err.to_string().starts_with("Problem opening"));
    }
}
