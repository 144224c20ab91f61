//! DDA line drawing for wireframe triangles.

use opal_core::{Bitmap, Color, DepthBuffer, ScreenPoint};

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    Color::new(
        lerp(a.r, b.r, t),
        lerp(a.g, b.g, t),
        lerp(a.b, b.b, t),
        lerp(a.a, b.a, t),
    )
}

/// Draw a depth-tested line between two screen points, interpolating
/// color and depth along it.
///
/// Endpoints are clamped to the buffer before stepping, so a segment
/// leaving the viewport draws its visible portion against the border.
pub fn draw_line(
    bitmap: &mut Bitmap,
    mut depth: Option<&mut DepthBuffer>,
    from: ScreenPoint,
    from_color: Color,
    to: ScreenPoint,
    to_color: Color,
) {
    let max_x = (bitmap.width().max(1) - 1) as f32;
    let max_y = (bitmap.height().max(1) - 1) as f32;

    let x0 = from.x.clamp(0.0, max_x);
    let y0 = from.y.clamp(0.0, max_y);
    let x1 = to.x.clamp(0.0, max_x);
    let y1 = to.y.clamp(0.0, max_y);

    let dx = x1 - x0;
    let dy = y1 - y0;
    let steps = dx.abs().max(dy.abs()).round() as i32;

    if steps == 0 {
        let z = from.z.min(to.z);
        if depth
            .as_deref_mut()
            .map_or(true, |d| d.test_and_set(x0 as i32, y0 as i32, z))
        {
            bitmap.set_color(x0 as i32, y0 as i32, from_color.clamped());
        }
        return;
    }

    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = (x0 + dx * t).round() as i32;
        let y = (y0 + dy * t).round() as i32;
        let z = lerp(from.z, to.z, t);

        if let Some(d) = depth.as_deref_mut() {
            if !d.test_and_set(x, y, z) {
                continue;
            }
        }
        bitmap.set_color(x, y, lerp_color(from_color, to_color, t).clamped());
    }
}
