//! Cuboid models: a JSON list of coloured axis-aligned boxes.
//!
//! ```json
//! {
//!     "cuboids": [
//!         { "min": [-0.5, -0.5, -0.5], "max": [0.5, 0.5, 0.5], "color": [1.0, 0.5, 0.0] }
//!     ]
//! }
//! ```
//!
//! `color` is optional and defaults to white.

use std::path::Path;

use glam::Vec3;
use serde::Deserialize;

use super::ModelError;
use crate::geometry::{ModelData, cuboid};

fn white() -> [f32; 3] {
    [1.0; 3]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCuboid {
    min: [f32; 3],
    max: [f32; 3],
    #[serde(default = "white")]
    color: [f32; 3],
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCuboidModel {
    cuboids: Vec<RawCuboid>,
}

/// Builds the mesh described by a cuboid model document.
pub fn parse(s: &str) -> Result<ModelData, ModelError> {
    let raw: RawCuboidModel = serde_json::from_str(s)?;
    let mut data = ModelData::default();
    for c in raw.cuboids {
        data.append(cuboid(
            Vec3::from(c.min),
            Vec3::from(c.max),
            Vec3::from(c.color),
        ));
    }
    Ok(data)
}

pub fn load(path: &Path) -> Result<ModelData, ModelError> {
    parse(&std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_boxes_with_optional_color() {
        let data = parse(
            r#"{
                "cuboids": [
                    { "min": [-1, -1, -1], "max": [1, 1, 1], "color": [1, 0, 0] },
                    { "min": [2, 0, 0], "max": [3, 1, 1] }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(data.vertices.len(), 48);
        assert_eq!(data.triangle_count(), 24);
        assert_eq!(data.vertices[0].color, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(data.vertices[47].color, Vec3::ONE);

        let bounds = data.bounds().unwrap();
        assert_eq!(bounds.min, Vec3::splat(-1.0));
        assert_eq!(bounds.max, Vec3::new(3.0, 1.0, 1.0));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = parse(r#"{ "cuboids": [], "spheres": [] }"#).unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));
    }

    #[test]
    fn rejects_malformed_corners() {
        let err = parse(r#"{ "cuboids": [ { "min": [0, 0], "max": [1, 1, 1] } ] }"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid cuboid model"));
    }

    #[test]
    fn empty_list_parses_to_empty_mesh() {
        assert!(parse(r#"{ "cuboids": [] }"#).unwrap().is_empty());
    }
}
