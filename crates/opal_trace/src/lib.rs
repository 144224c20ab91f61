//! OPAL Trace - multithreaded CPU ray tracer.
//!
//! Traces the `opal_core` scene model: primary rays from the shared
//! viewing transform, closest-hit search over world-space triangles and
//! spheres, shadow rays, and bounded reflection recursion. Rendering is
//! parallelized over disjoint row bands, so output is identical for any
//! worker count.

pub mod intersect;
pub mod surface;
pub mod tracer;
pub mod world;

pub use intersect::{closest_intersection, Intersection};
pub use surface::Surface;
pub use tracer::render;
pub use world::WorldScene;
