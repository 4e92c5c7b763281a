//! Spinning-cube demos.
//!
//! Five small programs render a rotating cube, either through a tiny scene graph
//! ([`scene`], [`render`]) or with raw OpenGL calls ([`abs`]). What they share is the
//! time-driven transform generator in [`animation`]: a pure function from elapsed seconds to
//! the cube's model matrix.

pub mod abs;
pub mod animation;
pub mod camera;
pub mod cli;
pub mod config;
pub mod demo;
pub mod demos;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod model;
pub mod render;
pub mod scene;
