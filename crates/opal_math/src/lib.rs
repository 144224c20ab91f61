// Re-export glam for convenience
pub use glam::*;

// OPAL math types
mod barycentric;
mod ray;

pub use barycentric::{barycentric_2d, barycentric_3d, DEGENERATE_EPSILON};
pub use ray::Ray;
