//! Drawing a flattened [`Frame`] of the scene graph.
//!
//! The [`SceneRenderer`] owns every uploaded mesh and its texture; a [`MeshId`] is the index
//! returned by [`SceneRenderer::add_mesh`]. Lighting is a headlight at the eye plus up to
//! [`MAX_LIGHTS`] scene lights, diffuse only. Meshes without a texture sample a white texel, so
//! they show their vertex colours.

use std::sync::Arc;

use glam::{Vec3, Vec4};
use glow::HasContext;

use crate::abs::{Mesh, ShaderProgram, Texture};
use crate::camera::{Projection, TrackballCamera};
use crate::error::Result;
use crate::geometry::{Bounds, ModelData};
use crate::scene::{Frame, MeshId};

/// Scene lights beyond this count are ignored.
pub const MAX_LIGHTS: usize = 4;

pub struct SceneRenderer {
    program: ShaderProgram,
    meshes: Vec<Mesh>,
    textures: Vec<Option<Texture>>,
    bounds: Vec<Bounds>,
    gl: Arc<glow::Context>,
    white: Texture,
    pub projection: Projection,
    pub ambient: Vec3,
    pub headlight: Vec3,
}

impl SceneRenderer {
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self> {
        let program = crate::shader_program!(gl, "lit")?;

        unsafe {
            gl.enable(glow::DEPTH_TEST);
            // Loaded models do not promise a consistent winding.
            gl.disable(glow::CULL_FACE);
        }

        Ok(Self {
            program,
            meshes: Vec::new(),
            textures: Vec::new(),
            bounds: Vec::new(),
            gl: Arc::clone(gl),
            white: Texture::white(gl)?,
            projection: Projection::default(),
            ambient: Vec3::splat(0.2),
            headlight: Vec3::splat(0.8),
        })
    }

    /// Uploads a mesh and its texture, and returns the id to reference it from the scene graph.
    pub fn add_mesh(&mut self, data: &ModelData) -> Result<MeshId> {
        let mesh = Mesh::new(&self.gl, &data.vertices, &data.indices)?;
        let texture = match &data.texture {
            Some(image) => {
                let texture = Texture::new(&self.gl, image)?;
                log::debug!("Uploaded {}x{} texture", texture.width(), texture.height());
                Some(texture)
            }
            None => None,
        };
        let id = MeshId(self.meshes.len());
        self.meshes.push(mesh);
        self.textures.push(texture);
        self.bounds.push(data.bounds().unwrap_or(Bounds {
            min: Vec3::ZERO,
            max: Vec3::ZERO,
        }));
        log::debug!("Uploaded mesh {} ({} indices)", id.0, data.indices.len());
        Ok(id)
    }

    /// Object-space bounds of every uploaded mesh, indexed by [`MeshId`].
    pub fn mesh_bounds(&self) -> &[Bounds] {
        &self.bounds
    }

    pub fn draw(&self, frame: &Frame, camera: &TrackballCamera, aspect_ratio: f32) {
        let mut positions = [Vec4::ZERO; MAX_LIGHTS];
        let mut diffuse = [Vec3::ZERO; MAX_LIGHTS];
        for (i, light) in frame.lights.iter().take(MAX_LIGHTS).enumerate() {
            positions[i] = light.position;
            diffuse[i] = light.diffuse;
        }

        self.program.use_program();
        self.program.set_uniform("u_projection", self.projection.matrix(aspect_ratio));
        self.program.set_uniform("u_view", camera.view());
        self.program.set_uniform("u_eye", camera.eye());
        self.program.set_uniform("u_ambient", self.ambient);
        self.program.set_uniform("u_headlight", self.headlight);
        self.program.set_uniform("u_light_count", frame.lights.len().min(MAX_LIGHTS) as i32);
        self.program.set_uniform("u_light_positions", positions);
        self.program.set_uniform("u_light_diffuse", diffuse);
        self.program.set_uniform("u_texture", 0);

        for draw in &frame.draws {
            let Some(mesh) = self.meshes.get(draw.mesh.0) else {
                continue;
            };
            match self.textures.get(draw.mesh.0) {
                Some(Some(texture)) => texture.bind(0),
                _ => self.white.bind(0),
            }
            self.program.set_uniform("u_model", draw.model);
            mesh.draw();
        }
    }
}
