//! Model file loading.
//!
//! The loader picks a format from the file extension:
//!
//! - `.json`: a list of coloured boxes, see [`cuboids`].
//! - `.gltf` / `.glb`: every triangle primitive in the file, see [`gltf_file`].
//!
//! Loading happens entirely on the CPU, so a bad model is reported before any window opens.

use std::path::Path;
use std::time::Instant;

use thiserror::Error;

use crate::geometry::ModelData;

pub mod cuboids;
pub mod gltf_file;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid cuboid model: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Gltf(#[from] gltf::Error),
    #[error("unsupported model format '{0}' (expected .json, .gltf or .glb)")]
    UnsupportedFormat(String),
    #[error("model contains no triangles")]
    Empty,
    #[error("index {index} is out of range for {vertex_count} vertices")]
    InvalidIndex { index: u32, vertex_count: usize },
    #[error("{index_count} indices do not form whole triangles")]
    PartialTriangle { index_count: usize },
}

/// Checks that the mesh is made of whole triangles, that every index refers to a vertex and
/// that there is at least one triangle.
pub fn validate(data: &ModelData) -> Result<(), ModelError> {
    if let Some(index) = data.invalid_index() {
        return Err(ModelError::InvalidIndex {
            index,
            vertex_count: data.vertices.len(),
        });
    }
    if data.indices.len() % 3 != 0 {
        return Err(ModelError::PartialTriangle {
            index_count: data.indices.len(),
        });
    }
    if data.triangle_count() == 0 {
        return Err(ModelError::Empty);
    }
    Ok(())
}

/// Loads a model file, choosing the format from its extension.
pub fn load(path: &Path) -> Result<ModelData, ModelError> {
    let start = Instant::now();

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let data = match extension.as_str() {
        "json" => cuboids::load(path)?,
        "gltf" | "glb" => gltf_file::load(path)?,
        _ => return Err(ModelError::UnsupportedFormat(path.display().to_string())),
    };
    validate(&data)?;

    log::info!(
        "Loaded '{}': {} vertices, {} triangles{} in {:?}",
        path.display(),
        data.vertices.len(),
        data.triangle_count(),
        if data.texture.is_some() { ", textured" } else { "" },
        start.elapsed()
    );

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load(Path::new("teapot.3ds")).unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedFormat(_)));
        assert!(err.to_string().contains("teapot.3ds"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("spinningcube-no-such-model.json");
        assert!(matches!(load(&path), Err(ModelError::Io(_))));
    }

    #[test]
    fn extension_is_case_insensitive() {
        let path = std::env::temp_dir().join(format!(
            "spinningcube-upper-{}.JSON",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "cuboids": [ { "min": [0, 0, 0], "max": [1, 1, 1] } ] }"#)
            .unwrap();
        let data = load(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(data.unwrap().triangle_count(), 12);
    }

    #[test]
    fn validate_reports_bad_indices() {
        let mut data = crate::geometry::cube(1.0);
        data.indices[5] = 99;
        assert!(matches!(
            validate(&data),
            Err(ModelError::InvalidIndex {
                index: 99,
                vertex_count: 24
            })
        ));
        assert!(matches!(
            validate(&ModelData::default()),
            Err(ModelError::Empty)
        ));
    }

    #[test]
    fn validate_rejects_partial_triangles() {
        let mut data = crate::geometry::cube(1.0);
        data.indices.pop();
        assert!(matches!(
            validate(&data),
            Err(ModelError::PartialTriangle { index_count: 35 })
        ));
    }
}
