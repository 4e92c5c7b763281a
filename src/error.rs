//! Error types shared by the demo binaries.
//!
//! Every failure in these demos is terminal: the binary reports the error with [`report`] and
//! exits with a failure status. The only recoverable case, a texture that cannot be read, is
//! handled at the call site before it ever becomes a [`DemoError`].

use std::path::PathBuf;

use thiserror::Error;

use crate::model::ModelError;

pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Usage: {program} <model file>")]
    Usage { program: String },
    #[error("Problem opening '{}': {source}", path.display())]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
    #[error("Failed to load texture '{}': {source}", path.display())]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Window error: {0}")]
    Window(String),
    #[error("OpenGL error: {0}")]
    Gl(String),
    #[error("Shader error: {0}")]
    Shader(String),
}

/// Prints the error as a single line on stderr and logs its debug form.
pub fn report(err: &DemoError) {
    eprintln!("{err}");
    log::debug!("{err:?}");
}
