//! glTF 2.0 models.
//!
//! All triangle primitives of all meshes are merged into one [`ModelData`]. Node transforms are
//! not applied; the meshes are taken in their own coordinate space. Normals are generated for
//! primitives that do not carry any. The base colour texture of the first textured material
//! becomes the model's texture.

use std::path::Path;

use glam::{Vec2, Vec3};
use gltf::image::Format;
use image::DynamicImage;

use super::ModelError;
use crate::geometry::{ModelData, ModelVertex};

/// Converts a decoded glTF image. Formats other than 8 bits per channel are skipped.
fn to_dynamic_image(data: gltf::image::Data) -> Option<DynamicImage> {
    let (width, height) = (data.width, data.height);
    let image = match data.format {
        Format::R8 => image::GrayImage::from_raw(width, height, data.pixels)
            .map(DynamicImage::ImageLuma8),
        Format::R8G8 => image::GrayAlphaImage::from_raw(width, height, data.pixels)
            .map(DynamicImage::ImageLumaA8),
        Format::R8G8B8 => {
            image::RgbImage::from_raw(width, height, data.pixels).map(DynamicImage::ImageRgb8)
        }
        Format::R8G8B8A8 => {
            image::RgbaImage::from_raw(width, height, data.pixels).map(DynamicImage::ImageRgba8)
        }
        other => {
            log::warn!("Skipping {other:?} texture");
            return None;
        }
    };
    if image.is_none() {
        log::warn!("Skipping texture with truncated pixel data");
    }
    image
}

fn base_color_texture(
    primitive: &gltf::Primitive,
    images: &[gltf::image::Data],
) -> Option<DynamicImage> {
    let info = primitive
        .material()
        .pbr_metallic_roughness()
        .base_color_texture()?;
    let data = images.get(info.texture().source().index())?;
    to_dynamic_image(data.clone())
}

pub fn load(path: &Path) -> Result<ModelData, ModelError> {
    let (document, buffers, images) = gltf::import(path)?;
    let mut data = ModelData::default();

    for mesh in document.meshes() {
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                log::warn!(
                    "Skipping {:?} primitive {} of mesh {}",
                    primitive.mode(),
                    primitive.index(),
                    mesh.index()
                );
                continue;
            }

            let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));
            let Some(positions) = reader.read_positions() else {
                continue;
            };

            let positions: Vec<[f32; 3]> = positions.collect();
            let normals: Option<Vec<[f32; 3]>> = reader.read_normals().map(|n| n.collect());
            let uvs: Option<Vec<[f32; 2]>> =
                reader.read_tex_coords(0).map(|t| t.into_f32().collect());
            let colors: Option<Vec<[f32; 3]>> =
                reader.read_colors(0).map(|c| c.into_rgb_f32().collect());

            let attribute = |values: &Option<Vec<[f32; 3]>>, i: usize, default: Vec3| {
                values
                    .as_ref()
                    .and_then(|v| v.get(i))
                    .map(|v| Vec3::from(*v))
                    .unwrap_or(default)
            };

            let mut part = ModelData {
                vertices: positions
                    .iter()
                    .enumerate()
                    .map(|(i, p)| ModelVertex {
                        position: Vec3::from(*p),
                        normal: attribute(&normals, i, Vec3::Y),
                        color: attribute(&colors, i, Vec3::ONE),
                        // glTF puts the texture origin at the top-left corner
                        uv: uvs
                            .as_ref()
                            .and_then(|v| v.get(i))
                            .map(|[u, v]| Vec2::new(*u, 1.0 - *v))
                            .unwrap_or(Vec2::ZERO),
                    })
                    .collect(),
                indices: match reader.read_indices() {
                    Some(indices) => indices.into_u32().collect(),
                    None => (0..positions.len() as u32).collect(),
                },
                texture: None,
            };
            if data.texture.is_none() {
                part.texture = base_color_texture(&primitive, &images);
            }

            if let Some(index) = part.invalid_index() {
                return Err(ModelError::InvalidIndex {
                    index,
                    vertex_count: part.vertices.len(),
                });
            }
            if normals.is_none() {
                part.recompute_normals();
            }
            data.append(part);
        }
    }

    Ok(data)
}
