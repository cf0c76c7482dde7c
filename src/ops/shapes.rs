// ============================================================================
// SHAPES — line segments drawn straight into the image
// ============================================================================

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;

use super::params::LineParams;

/// Default stroke colour for drawn lines.
pub const LINE_GREEN: Rgba<u8> = Rgba([0, 128, 0, 255]);

/// Corners of a `width`-wide band centred on the segment a→b, without caps.
/// Returns None for zero-length segments.
fn thick_line_corners(a: (f32, f32), b: (f32, f32), width: f32) -> Option<[Point<i32>; 4]> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return None;
    }
    let half = width / 2.0;
    let (nx, ny) = (-dy / len * half, dx / len * half);
    let pt = |x: f32, y: f32| Point::new(x.round() as i32, y.round() as i32);
    Some([
        pt(a.0 + nx, a.1 + ny),
        pt(b.0 + nx, b.1 + ny),
        pt(b.0 - nx, b.1 - ny),
        pt(a.0 - nx, a.1 - ny),
    ])
}

/// Draw a line segment on `img`. Width 0 or 1 draws a single-pixel line;
/// anything wider is filled as a band centred on the segment. Everything
/// outside the image is clipped.
pub fn draw_line(img: &mut RgbaImage, params: LineParams, color: Rgba<u8>) {
    let a = (params.x1 as f32, params.y1 as f32);
    let b = (params.x2 as f32, params.y2 as f32);

    if params.width > 1
        && let Some(corners) = thick_line_corners(a, b, params.width as f32)
    {
        draw_polygon_mut(img, &corners, color);
        return;
    }
    draw_line_segment_mut(img, a, b, color);
}
