//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for managing OpenGL shaders,
//! and the [`Uniform`] trait for setting uniform variables in shader programs.

use std::sync::Arc;

use glam::{Mat4, Vec3, Vec4};
use glow::HasContext;

use crate::error::{DemoError, Result};

/// Compiles and links `render/shaders/<name>/{vert,frag}.glsl` into a [`ShaderProgram`].
#[macro_export]
macro_rules! shader_program {
    ($gl:expr, $name:literal) => {{
        let vert = $crate::abs::Shader::new(
            &$gl,
            glow::VERTEX_SHADER,
            include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/src/render/shaders/",
                $name,
                "/vert.glsl"
            )),
        )?;
        let frag = $crate::abs::Shader::new(
            &$gl,
            glow::FRAGMENT_SHADER,
            include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/src/render/shaders/",
                $name,
                "/frag.glsl"
            )),
        )?;
        $crate::abs::ShaderProgram::new(&$gl, &[&vert, &frag])
    }};
}

/// Represents an individual compiled OpenGL shader stage.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    pub fn new(gl: &Arc<glow::Context>, shader_type: u32, source: &str) -> Result<Self> {
        unsafe {
            let shader = gl.create_shader(shader_type).map_err(DemoError::Shader)?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(DemoError::Shader(log.trim_end().to_string()));
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
            })
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// Represents a uniform variable in a shader program.
pub trait Uniform {
    /// Uploads the value to the given location of the currently bound program.
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation);
}

macro_rules! uniform {
    ($ty:ty, |$gl:ident, $loc:ident, $value:ident| $body:expr) => {
        impl Uniform for $ty {
            fn upload(&self, $gl: &glow::Context, $loc: &glow::UniformLocation) {
                let $value = self;
                unsafe { $body }
            }
        }
    };
}

uniform!(bool, |gl, loc, v| gl.uniform_1_i32(Some(loc), *v as i32));
uniform!(i32, |gl, loc, v| gl.uniform_1_i32(Some(loc), *v));
uniform!(Vec3, |gl, loc, v| gl.uniform_3_f32(Some(loc), v.x, v.y, v.z));
uniform!(Vec4, |gl, loc, v| gl.uniform_4_f32(Some(loc), v.x, v.y, v.z, v.w));
uniform!(Mat4, |gl, loc, v| {
    gl.uniform_matrix_4_f32_slice(Some(loc), false, &v.to_cols_array())
});

impl<const N: usize> Uniform for [Vec3; N] {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        let data: Vec<f32> = self.iter().flat_map(|v| v.to_array()).collect();
        unsafe {
            gl.uniform_3_f32_slice(Some(location), &data);
        }
    }
}

impl<const N: usize> Uniform for [Vec4; N] {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        let data: Vec<f32> = self.iter().flat_map(|v| v.to_array()).collect();
        unsafe {
            gl.uniform_4_f32_slice(Some(location), &data);
        }
    }
}

/// Represents an OpenGL shader program composed of multiple shaders.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Links a new shader program from the given shaders.
    pub fn new(gl: &Arc<glow::Context>, shaders: &[&Shader]) -> Result<Self> {
        unsafe {
            let program = gl.create_program().map_err(DemoError::Shader)?;

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(DemoError::Shader(log.trim_end().to_string()));
            }

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
            })
        }
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }

    /// Sets a uniform variable in the shader program. The program must be bound.
    ///
    /// Names the linker optimised away are ignored.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) {
        let location = unsafe { self.gl.get_uniform_location(self.id, name) };
        if let Some(location) = location {
            value.upload(&self.gl, &location);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}
