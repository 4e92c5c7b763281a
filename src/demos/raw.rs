//! The three raw-GL cubes. No scene graph: each frame the cube's model matrix is computed
//! straight from the elapsed time and handed to the `basic` shader.
//!
//! - `colorcube`: per-face colours, spinning about a tilted axis.
//! - `texturedcube`: the same cube with `assets/cube.png` on every face.
//! - `orbitcube`: the coloured cube spinning while it circles the origin.

use std::path::Path;
use std::sync::Arc;

use glam::Vec3;
use glow::HasContext;
use image::DynamicImage;

use crate::abs::{App, Mesh, ShaderProgram, Texture, load_image};
use crate::animation::{Animator, Motion, Orbit, Spin};
use crate::camera::{Projection, fixed_view};
use crate::config::WindowConfig;
use crate::demo::{self, Demo};
use crate::error::Result;
use crate::geometry::cube;
use crate::input::UpdateContext;

pub const ORBIT_RADIUS: f32 = 1.5;
pub const ORBIT_REVOLUTIONS_PER_SECOND: f64 = 0.125;
pub const TEXTURE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/cube.png");
const VIEW_DISTANCE: f32 = 6.0;

pub fn color_motion() -> Motion {
    Motion::spinning(Spin::new(Vec3::new(1.0, 1.0, 0.0), 50.0))
}

pub fn textured_motion() -> Motion {
    Motion::spinning(Spin::new(Vec3::new(0.5, 1.0, 0.25), 30.0))
}

pub fn orbit_motion() -> Motion {
    let orbit = Orbit::new(Vec3::ZERO, ORBIT_RADIUS, ORBIT_REVOLUTIONS_PER_SECOND);
    Motion::orbiting(Spin::new(Vec3::Y, 120.0), orbit)
}

pub struct RawCube {
    program: ShaderProgram,
    mesh: Mesh,
    texture: Option<Texture>,
    motion: Motion,
    projection: Projection,
}

impl RawCube {
    pub fn new(gl: &Arc<glow::Context>, motion: Motion, texture: Option<Texture>) -> Result<Self> {
        let program = crate::shader_program!(gl, "basic")?;
        let data = cube(0.5);
        let mesh = Mesh::new(gl, &data.vertices, &data.indices)?;

        unsafe {
            gl.enable(glow::DEPTH_TEST);
            gl.enable(glow::CULL_FACE);
            gl.cull_face(glow::BACK);
            gl.front_face(glow::CCW);
        }

        Ok(Self {
            program,
            mesh,
            texture,
            motion,
            projection: Projection {
                fovy_degrees: 45.0,
                ..Projection::default()
            },
        })
    }
}

impl Demo for RawCube {
    fn render(&mut self, _gl: &glow::Context, ctx: &UpdateContext) -> Result<()> {
        let mvp = self.projection.matrix(ctx.aspect_ratio())
            * fixed_view(VIEW_DISTANCE)
            * self.motion.transform_at(ctx.elapsed);

        self.program.use_program();
        self.program.set_uniform("u_mvp", mvp);
        self.program.set_uniform("u_use_texture", self.texture.is_some());
        if let Some(texture) = &self.texture {
            texture.bind(0);
            self.program.set_uniform("u_texture", 0);
        }
        self.mesh.draw();
        Ok(())
    }
}

/// Decodes the optional texture. An unreadable file is logged and leaves the cube untextured.
pub fn decode_texture(path: Option<&Path>) -> Option<DynamicImage> {
    match load_image(path?) {
        Ok(image) => Some(image),
        Err(err) => {
            log::warn!("{err}; drawing the cube untextured");
            None
        }
    }
}

fn run_cube(title: &str, motion: Motion, texture_path: Option<&Path>) -> Result<()> {
    // Decoded before the window opens.
    let image = decode_texture(texture_path);

    let mut app = App::new(WindowConfig::titled(title))?;
    let texture = image.map(|image| Texture::new(&app.gl, &image)).transpose()?;
    if let Some(texture) = &texture {
        log::info!("Uploaded {}x{} texture", texture.width(), texture.height());
    }
    let mut demo = RawCube::new(&app.gl, motion, texture)?;
    demo::run(&mut app, &mut demo)
}

pub fn colorcube() -> Result<()> {
    run_cube("colorcube", color_motion(), None)
}

pub fn texturedcube() -> Result<()> {
    run_cube(
        "texturedcube",
        textured_motion(),
        Some(Path::new(TEXTURE_PATH)),
    )
}

pub fn orbitcube() -> Result<()> {
    run_cube("orbitcube", orbit_motion(), None)
}
