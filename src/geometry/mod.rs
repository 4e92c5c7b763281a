//! CPU-side mesh data shared by the built-in cube and the model loaders.

use glam::{Vec2, Vec3};
use image::DynamicImage;

use crate::abs::Vertex;

pub mod cube;

pub use cube::*;

/// The single vertex layout used by every demo.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct ModelVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub color: Vec3,
    pub uv: Vec2,
}

impl Vertex for ModelVertex {
    fn vertex_attribs(gl: &glow::Context) {
        use glow::HasContext;

        unsafe {
            let stride = std::mem::size_of::<ModelVertex>() as i32;
            let vec3 = std::mem::size_of::<Vec3>() as i32;

            // Position
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);

            // Normal
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, vec3);

            // Color
            gl.enable_vertex_attrib_array(2);
            gl.vertex_attrib_pointer_f32(2, 3, glow::FLOAT, false, stride, 2 * vec3);

            // Texture coordinates
            gl.enable_vertex_attrib_array(3);
            gl.vertex_attrib_pointer_f32(3, 2, glow::FLOAT, false, stride, 3 * vec3);
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Radius of the sphere around [`Bounds::center`] enclosing the box.
    pub fn radius(&self) -> f32 {
        (self.max - self.min).length() * 0.5
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Bounds of the eight corners of this box after applying `matrix`.
    pub fn transformed(&self, matrix: &glam::Mat4) -> Bounds {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for i in 0..8 {
            let corner = Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            );
            let p = matrix.transform_point3(corner);
            min = min.min(p);
            max = max.max(p);
        }
        Bounds { min, max }
    }
}

/// Indexed triangle list ready to be uploaded with [`crate::abs::Mesh::new`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelData {
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u32>,
    /// Base colour texture, modulated with the vertex colours. Texture coordinates put
    /// `(0, 0)` at the bottom-left corner of the image.
    pub texture: Option<DynamicImage>,
}

impl ModelData {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Appends another mesh, offsetting its indices past the current vertices. The first
    /// texture seen is kept.
    pub fn append(&mut self, mut other: ModelData) {
        let offset = self.vertices.len() as u32;
        self.indices.extend(other.indices.iter().map(|i| i + offset));
        self.vertices.append(&mut other.vertices);
        if self.texture.is_none() {
            self.texture = other.texture;
        }
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.vertices.first()?.position;
        let (min, max) = self
            .vertices
            .iter()
            .fold((first, first), |(min, max), v| {
                (min.min(v.position), max.max(v.position))
            });
        Some(Bounds { min, max })
    }

    /// Returns the first index that does not refer to a vertex, if any.
    pub fn invalid_index(&self) -> Option<u32> {
        let count = self.vertices.len() as u32;
        self.indices.iter().copied().find(|&i| i >= count)
    }

    /// Replaces every normal with the area-weighted average of its adjacent face normals.
    pub fn recompute_normals(&mut self) {
        for v in &mut self.vertices {
            v.normal = Vec3::ZERO;
        }
        for tri in self.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| i as usize);
            let (pa, pb, pc) = (
                self.vertices[a].position,
                self.vertices[b].position,
                self.vertices[c].position,
            );
            let face = (pb - pa).cross(pc - pa);
            for i in [a, b, c] {
                self.vertices[i].normal += face;
            }
        }
        for v in &mut self.vertices {
            v.normal = v.normal.try_normalize().unwrap_or(Vec3::Y);
        }
    }
}
