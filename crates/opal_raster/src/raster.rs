//! Scanline triangle rasterization over the shared scene model.
//!
//! Pipeline per triangle: object → world via the object matrix, world →
//! screen via [`ViewTransform`], optional backface cull, per-vertex
//! shading, then mode dispatch — wireframe edges or a barycentric fill
//! with depth testing.

use glam::{Vec2, Vec3};
use opal_core::{
    shade, Bitmap, Camera, Color, DepthBuffer, LightingSettings, Material, Scene, ScreenPoint,
    ShadingMode, Triangle, ViewTransform,
};
use wide::f32x8;

use crate::line::draw_line;
use crate::simd::BatchTriangle;

/// Rasterize every visible mesh of `scene` into `output`.
///
/// `depth` enables hidden-surface removal when present; without it,
/// triangles overwrite each other in draw order. Vertex lighting runs
/// only when the scene has lights — an unlit scene draws raw vertex
/// colors.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    cull_backfaces: bool,
    output: &mut Bitmap,
    mut depth: Option<&mut DepthBuffer>,
) {
    let view = ViewTransform::new(camera, output.width(), output.height());
    let lighting = LightingSettings::default();

    for object in &scene.objects {
        let matrix = object.world_matrix();
        for mesh in object.model.meshes() {
            if !mesh.visible {
                continue;
            }
            for triangle in &mesh.triangles {
                draw_triangle(
                    &triangle.transformed(&matrix),
                    scene,
                    camera,
                    &view,
                    cull_backfaces,
                    &lighting,
                    output,
                    depth.as_deref_mut(),
                );
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_triangle(
    world: &Triangle,
    scene: &Scene,
    camera: &Camera,
    view: &ViewTransform,
    cull_backfaces: bool,
    lighting: &LightingSettings,
    output: &mut Bitmap,
    depth: Option<&mut DepthBuffer>,
) {
    let face_normal = world.unit_normal();
    if cull_backfaces && face_normal.dot(camera.forward()) >= 0.0 {
        return;
    }

    let mut points = [ScreenPoint {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    }; 3];
    for (point, vertex) in points.iter_mut().zip(&world.vertices) {
        match view.to_screen(vertex.position) {
            Some(p) => *point = p,
            // Any vertex behind the camera drops the whole triangle
            None => return,
        }
    }

    let mode = world
        .material
        .as_ref()
        .map_or(ShadingMode::FaceVertexColor, |m| m.mode);

    let mut colors = [Color::WHITE; 3];
    for (color, vertex) in colors.iter_mut().zip(&world.vertices) {
        *color = if scene.lights.is_empty() {
            vertex.color
        } else {
            let normal = if vertex.normal == Vec3::ZERO {
                face_normal
            } else {
                vertex.normal
            };
            // Material mode samples textures at the vertices; Textured
            // mode defers its texture to the per-pixel fill
            let uv = (mode == ShadingMode::Material).then_some(vertex.uv);
            shade(
                vertex.position,
                normal,
                world.material.as_ref(),
                camera.position,
                &scene.lights,
                lighting,
                &[],
                uv,
            )
            .modulate(vertex.color)
        };
    }

    if mode == ShadingMode::Wireframe {
        let mut depth = depth;
        for i in 0..3 {
            let j = (i + 1) % 3;
            draw_line(
                output,
                depth.as_deref_mut(),
                points[i],
                colors[i],
                points[j],
                colors[j],
            );
        }
        return;
    }

    let Some(batch) = BatchTriangle::new(&points, colors) else {
        log::debug!("skipping screen-degenerate triangle");
        return;
    };
    let uvs = [
        world.vertices[0].uv,
        world.vertices[1].uv,
        world.vertices[2].uv,
    ];
    fill_triangle(
        output,
        depth,
        &batch,
        &points,
        mode,
        world.material.as_deref(),
        &uvs,
    );
}

fn fill_triangle(
    output: &mut Bitmap,
    mut depth: Option<&mut DepthBuffer>,
    batch: &BatchTriangle,
    points: &[ScreenPoint; 3],
    mode: ShadingMode,
    material: Option<&Material>,
    uvs: &[Vec2; 3],
) {
    if output.width() < 3 || output.height() < 3 {
        return;
    }

    // Bounding box clamped one pixel inside the viewport
    let min_x = points
        .iter()
        .map(|p| p.x)
        .fold(f32::INFINITY, f32::min)
        .floor()
        .max(1.0) as i32;
    let max_x = points
        .iter()
        .map(|p| p.x)
        .fold(f32::NEG_INFINITY, f32::max)
        .ceil()
        .min(output.width() as f32 - 2.0) as i32;
    let min_y = points
        .iter()
        .map(|p| p.y)
        .fold(f32::INFINITY, f32::min)
        .floor()
        .max(1.0) as i32;
    let max_y = points
        .iter()
        .map(|p| p.y)
        .fold(f32::NEG_INFINITY, f32::max)
        .ceil()
        .min(output.height() as f32 - 2.0) as i32;
    if min_x > max_x || min_y > max_y {
        return;
    }

    let diffuse_texture = match mode {
        ShadingMode::Textured => material.and_then(|m| m.diffuse.texture.as_deref()),
        _ => None,
    };

    for y in min_y..=max_y {
        let py = f32x8::splat(y as f32);
        let mut x = min_x;
        while x <= max_x {
            let px = f32x8::from(std::array::from_fn::<f32, 8, _>(|i| (x + i as i32) as f32));
            let wide = batch.weights_x8(px, py);
            let lanes = [wide[0].to_array(), wide[1].to_array(), wide[2].to_array()];

            for lane in 0..8 {
                let sx = x + lane as i32;
                if sx > max_x {
                    break;
                }
                let weights = [lanes[0][lane], lanes[1][lane], lanes[2][lane]];
                if !BatchTriangle::covers(&weights) {
                    continue;
                }

                let z = batch.depth(&weights);
                if let Some(d) = depth.as_deref_mut() {
                    if !d.test_and_set(sx, y, z) {
                        continue;
                    }
                }

                let mut color = match mode {
                    ShadingMode::Flat => batch.vertex_color(0),
                    _ => batch.color(&weights),
                };
                if let Some(texture) = diffuse_texture {
                    let uv = uvs[0] * weights[0] + uvs[1] * weights[1] + uvs[2] * weights[2];
                    color = color.modulate(texture.sample_nearest(uv.x, uv.y));
                }
                output.set_color(sx, y, color.clamped());
            }
            x += 8;
        }
    }
}
