//! The hard-coded cube.
//!
//! Each face has its own four vertices so that normals, colours and texture coordinates can
//! differ per face. Faces wind counter-clockwise when seen from outside.

use glam::{Vec2, Vec3};

use super::{ModelData, ModelVertex};

/// One cube face: outward normal, the in-plane axes `u` and `v` (with `u × v = normal`), and
/// its colour.
struct Face {
    normal: Vec3,
    u: Vec3,
    v: Vec3,
    color: Vec3,
}

const FACES: [Face; 6] = [
    // +X
    Face {
        normal: Vec3::X,
        u: Vec3::NEG_Z,
        v: Vec3::Y,
        color: Vec3::new(1.0, 0.0, 0.0),
    },
    // -X
    Face {
        normal: Vec3::NEG_X,
        u: Vec3::Z,
        v: Vec3::Y,
        color: Vec3::new(0.0, 1.0, 1.0),
    },
    // +Y
    Face {
        normal: Vec3::Y,
        u: Vec3::X,
        v: Vec3::NEG_Z,
        color: Vec3::new(0.0, 1.0, 0.0),
    },
    // -Y
    Face {
        normal: Vec3::NEG_Y,
        u: Vec3::X,
        v: Vec3::Z,
        color: Vec3::new(1.0, 0.0, 1.0),
    },
    // +Z
    Face {
        normal: Vec3::Z,
        u: Vec3::X,
        v: Vec3::Y,
        color: Vec3::new(0.0, 0.0, 1.0),
    },
    // -Z
    Face {
        normal: Vec3::NEG_Z,
        u: Vec3::NEG_X,
        v: Vec3::Y,
        color: Vec3::new(1.0, 1.0, 0.0),
    },
];

const CORNERS: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

const FACE_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

fn build(center: Vec3, half_extents: Vec3, color: impl Fn(&Face) -> Vec3) -> ModelData {
    let mut data = ModelData {
        vertices: Vec::with_capacity(24),
        indices: Vec::with_capacity(36),
        texture: None,
    };

    for face in &FACES {
        let base = data.vertices.len() as u32;
        for (su, sv) in CORNERS {
            let offset = face.normal + face.u * su + face.v * sv;
            data.vertices.push(ModelVertex {
                position: center + offset * half_extents,
                normal: face.normal,
                color: color(face),
                uv: Vec2::new((su + 1.0) * 0.5, (sv + 1.0) * 0.5),
            });
        }
        data.indices.extend(FACE_INDICES.iter().map(|i| base + i));
    }

    data
}

/// A cube centred on the origin with a different colour on every face.
pub fn cube(half_extent: f32) -> ModelData {
    build(Vec3::ZERO, Vec3::splat(half_extent), |face| face.color)
}

/// An axis-aligned box spanning `min..max` in a single colour.
pub fn cuboid(min: Vec3, max: Vec3, color: Vec3) -> ModelData {
    let min_corner = min.min(max);
    let max_corner = min.max(max);
    build(
        (min_corner + max_corner) * 0.5,
        (max_corner - min_corner) * 0.5,
        |_| color,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_24_vertices_and_12_triangles() {
        let data = cube(0.5);
        assert_eq!(data.vertices.len(), 24);
        assert_eq!(data.indices.len(), 36);
        assert_eq!(data.invalid_index(), None);
    }

    #[test]
    fn face_axes_are_right_handed() {
        for face in &FACES {
            assert_eq!(face.u.cross(face.v), face.normal);
        }
    }

    #[test]
    fn triangles_wind_counter_clockwise_from_outside() {
        let data = cube(1.0);
        for tri in data.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| data.vertices[i as usize]);
            let winding = (b.position - a.position).cross(c.position - a.position);
            assert!(winding.dot(a.normal) > 0.0);
            // Every vertex of a face lies on the face plane.
            assert!((a.position.dot(a.normal) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn cube_spans_half_extent() {
        let bounds = cube(0.5).bounds().unwrap();
        assert_eq!(bounds.min, Vec3::splat(-0.5));
        assert_eq!(bounds.max, Vec3::splat(0.5));
    }

    #[test]
    fn texture_coordinates_cover_each_face() {
        let data = cube(1.0);
        for face in data.vertices.chunks_exact(4) {
            let uvs: Vec<Vec2> = face.iter().map(|v| v.uv).collect();
            assert_eq!(uvs, vec![Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y]);
        }
    }

    #[test]
    fn cuboid_accepts_swapped_corners() {
        let data = cuboid(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::ONE);
        let bounds = data.bounds().unwrap();
        assert_eq!(bounds.min, Vec3::ZERO);
        assert_eq!(bounds.max, Vec3::new(1.0, 2.0, 3.0));
        assert!(data.vertices.iter().all(|v| v.color == Vec3::ONE));
    }
}
