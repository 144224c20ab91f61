//! Closest-hit search over the world scene.

use opal_math::Ray;

use crate::surface::Surface;
use crate::world::WorldScene;

/// A ray/surface hit at a distance parameter along the ray.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    pub distance: f32,
    pub surface: Surface<'a>,
}

/// Find the nearest surface hit by `ray`, skipping `ignore` when given.
///
/// Distances tie-break toward the first surface found, spheres before
/// triangles. Secondary rays pass their launch surface as `ignore` so
/// they never re-hit it at distance zero.
pub fn closest_intersection<'a>(
    world: &'a WorldScene,
    ray: &Ray,
    ignore: Option<&Surface<'_>>,
) -> Option<Intersection<'a>> {
    let mut closest: Option<Intersection<'a>> = None;
    let mut best = f32::INFINITY;

    let spheres = world.spheres.iter().map(Surface::Sphere);
    let triangles = world.triangles.iter().map(Surface::Triangle);

    for surface in spheres.chain(triangles) {
        if ignore.is_some_and(|skip| skip.same(&surface)) {
            continue;
        }
        if let Some(distance) = surface.intersect(ray) {
            if distance < best {
                best = distance;
                closest = Some(Intersection { distance, surface });
            }
        }
    }

    closest
}
