//! Thin wrappers over SDL2 and OpenGL.
//!
//! These types own their GL objects and release them on drop. They are what the raw demos
//! talk to directly and what the scene renderer is built on.

pub mod app;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use app::*;
pub use mesh::*;
pub use shader::*;
pub use texture::*;
