//! The ray tracing render loop.
//!
//! Rows are partitioned into contiguous bands, one band per worker, and
//! the output bitmap is split into disjoint band slices before the
//! workers start — so no two workers can ever touch the same pixel and
//! the result is identical for any worker count.

use std::ops::Range;

use glam::Vec3;
use opal_core::{shade, Bitmap, Color, Light, RenderSettings, Scene, ViewTransform};
use opal_math::Ray;

use crate::intersect::{closest_intersection, Intersection};
use crate::surface::Surface;
use crate::world::WorldScene;

/// Ray trace `scene` into `output` using one band per rayon worker.
pub fn render(scene: &Scene, settings: &RenderSettings, output: &mut Bitmap) {
    render_with_tasks(scene, settings, output, rayon::current_num_threads().max(1));
}

/// Split `height` rows into `tasks` contiguous bands.
///
/// Every band except the last holds `height / tasks` rows; the last
/// absorbs the remainder. The bands are disjoint and cover every row.
fn partition_rows(height: usize, tasks: usize) -> Vec<Range<usize>> {
    let tasks = tasks.clamp(1, height.max(1));
    let rows = height / tasks;

    (0..tasks)
        .map(|i| {
            let start = i * rows;
            let end = if i + 1 == tasks { height } else { start + rows };
            start..end
        })
        .collect()
}

fn render_with_tasks(scene: &Scene, settings: &RenderSettings, output: &mut Bitmap, tasks: usize) {
    let width = output.width();
    let height = output.height();
    if width == 0 || height == 0 {
        return;
    }

    let world = WorldScene::from_scene(scene);
    let view = ViewTransform::new(&settings.camera, width, height);
    let format = output.format();
    let bands = partition_rows(height, tasks);
    log::debug!(
        "ray tracing {width}x{height}, {} surfaces, {} bands",
        world.surface_count(),
        bands.len()
    );

    // Carve the pixel buffer into one disjoint slice per band
    let mut rest = output.pixels_mut();
    let mut slices = Vec::with_capacity(bands.len());
    for band in bands {
        let (head, tail) = rest.split_at_mut(band.len() * width);
        slices.push((band, head));
        rest = tail;
    }
    debug_assert!(rest.is_empty());

    let world = &world;
    let view = &view;
    rayon::scope(|scope| {
        for (band, slice) in slices {
            scope.spawn(move |_| {
                for (row, y) in band.enumerate() {
                    let pixels = &mut slice[row * width..(row + 1) * width];
                    for (x, pixel) in pixels.iter_mut().enumerate() {
                        let ray = view.pixel_ray(x, y);
                        let color = match closest_intersection(world, &ray, None) {
                            Some(hit) => trace_hit(
                                world,
                                settings,
                                &ray,
                                &hit,
                                settings.max_reflection_count,
                            ),
                            None => world.background,
                        };
                        *pixel = color.clamped().to_packed(format);
                    }
                }
            });
        }
    });

    if settings.lighting.render_point_lights {
        draw_light_markers(world, view, output);
    }
}

/// Color contribution of one ray hit, recursing through reflections.
fn trace_hit(
    world: &WorldScene,
    settings: &RenderSettings,
    ray: &Ray,
    hit: &Intersection<'_>,
    bounces: u32,
) -> Color {
    let point = ray.at(hit.distance);
    let normal = hit.surface.normal_at(point);
    let material = hit.surface.material();
    let uv = if settings.texture_mapping {
        hit.surface.uv_at(point)
    } else {
        None
    };

    let mut color = if settings.lighting.enabled {
        let factors = shadow_factors(world, settings, point, &hit.surface);
        shade(
            point,
            normal,
            material,
            settings.camera.position,
            &world.lights,
            &settings.lighting,
            &factors,
            uv,
        )
    } else {
        // Unlit: base surface color plus emission
        material.map_or(Color::BLACK, |m| (m.diffuse.sample(uv) + m.emissive).clamped())
    };

    if settings.reflections && bounces > 0 {
        if let Some(material) = material {
            if material.reflectivity > 0.0 {
                let incident = ray.direction.normalize_or_zero();
                let reflected_dir = incident - 2.0 * incident.dot(normal) * normal;
                let reflected_ray = Ray::new(point, reflected_dir);

                let reflected =
                    match closest_intersection(world, &reflected_ray, Some(&hit.surface)) {
                        Some(next) => {
                            trace_hit(world, settings, &reflected_ray, &next, bounces - 1)
                        }
                        None => world.background,
                    };
                color = color + reflected.scale_rgb(material.reflectivity);
            }
        }
    }

    color
}

/// Per-light shadow attenuation at a surface point.
///
/// An occluder strictly between the point and the light (distance
/// parameter in (0, 1) along the unnormalized light vector) blocks the
/// light entirely. Ambient lights are never occluded. An empty vector
/// means fully lit everywhere.
fn shadow_factors(
    world: &WorldScene,
    settings: &RenderSettings,
    point: Vec3,
    surface: &Surface<'_>,
) -> Vec<f32> {
    if !settings.lighting.shadows {
        return Vec::new();
    }

    world
        .lights
        .iter()
        .map(|light| {
            let to_light = match light {
                Light::Ambient { .. } => return 1.0,
                Light::Point { position, .. } => *position - point,
                // Directional lights sit infinitely far away; cap the
                // occlusion range at the camera's far distance
                Light::Directional { direction, .. } => {
                    -direction.normalize_or_zero() * settings.camera.far
                }
            };

            let shadow_ray = Ray::new(point, to_light);
            match closest_intersection(world, &shadow_ray, Some(surface)) {
                Some(hit) if hit.distance > 0.0 && hit.distance < 1.0 => 0.0,
                _ => 1.0,
            }
        })
        .collect()
}

/// Splat a 3x3 marker at each point light's screen position.
fn draw_light_markers(world: &WorldScene, view: &ViewTransform, output: &mut Bitmap) {
    for light in &world.lights {
        let Light::Point { position, color } = light else {
            continue;
        };
        let Some(screen) = view.to_screen(*position) else {
            continue;
        };

        let cx = screen.x.round() as i32;
        let cy = screen.y.round() as i32;
        for dy in -1..=1 {
            for dx in -1..=1 {
                output.set_color(cx + dx, cy + dy, color.clamped());
            }
        }
    }
}
