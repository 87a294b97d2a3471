//! Pixel-level rasterisation.
//!
//! All drawing is done with plain per-pixel coverage tests and src-over
//! alpha compositing onto an opaque RGB buffer. There is no anti-aliasing;
//! shape identity and colour are what matter, not edge quality.

use image::RgbImage;

use crate::types::Colour;

/// Composite `colour` over the pixel at (x, y), ignoring out-of-bounds
/// coordinates. Fully opaque colours overwrite; translucent colours blend
/// src-over against the existing pixel.
pub fn blend_pixel(img: &mut RgbImage, x: i32, y: i32, colour: Colour) {
    if x < 0 || y < 0 || x >= img.width() as i32 || y >= img.height() as i32 {
        return;
    }
    let (x, y) = (x as u32, y as u32);

    if colour.a == 255 {
        img.put_pixel(x, y, image::Rgb([colour.r, colour.g, colour.b]));
        return;
    }
    if colour.a == 0 {
        return;
    }

    let dst = img.get_pixel(x, y).0;
    let a = colour.a as u32;
    let inv = 255 - a;
    let blend = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv) / 255) as u8;
    img.put_pixel(
        x,
        y,
        image::Rgb([
            blend(colour.r, dst[0]),
            blend(colour.g, dst[1]),
            blend(colour.b, dst[2]),
        ]),
    );
}

/// Fill a circle by distance test over its bounding box.
pub fn fill_circle(img: &mut RgbImage, cx: f32, cy: f32, radius: f32, colour: Colour) {
    if radius <= 0.0 {
        return;
    }
    let r2 = radius * radius;
    let x_min = (cx - radius).floor() as i32;
    let x_max = (cx + radius).ceil() as i32;
    let y_min = (cy - radius).floor() as i32;
    let y_max = (cy + radius).ceil() as i32;

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= r2 {
                blend_pixel(img, x, y, colour);
            }
        }
    }
}

/// Stroke a circle outline as a ring of the given width, drawn inward from
/// the radius.
pub fn stroke_circle(img: &mut RgbImage, cx: f32, cy: f32, radius: f32, colour: Colour, width: u32) {
    if radius <= 0.0 {
        return;
    }
    let w = (width.max(1)) as f32;
    let outer = radius;
    let inner = (radius - w).max(0.0);
    let x_min = (cx - outer).floor() as i32;
    let x_max = (cx + outer).ceil() as i32;
    let y_min = (cy - outer).floor() as i32;
    let y_max = (cy + outer).ceil() as i32;

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let d2 = dx * dx + dy * dy;
            if d2 <= outer * outer && d2 >= inner * inner {
                blend_pixel(img, x, y, colour);
            }
        }
    }
}

/// Fill a closed polygon with even-odd scanline coverage.
pub fn fill_polygon(img: &mut RgbImage, points: &[(f32, f32)], colour: Colour) {
    if points.len() < 3 {
        return;
    }

    let y_min = points
        .iter()
        .map(|p| p.1)
        .fold(f32::INFINITY, f32::min)
        .floor() as i32;
    let y_max = points
        .iter()
        .map(|p| p.1)
        .fold(f32::NEG_INFINITY, f32::max)
        .ceil() as i32;

    let mut crossings: Vec<f32> = Vec::with_capacity(points.len());

    for y in y_min..=y_max {
        let scan_y = y as f32 + 0.5;
        crossings.clear();

        for i in 0..points.len() {
            let (x1, y1) = points[i];
            let (x2, y2) = points[(i + 1) % points.len()];
            // Half-open test keeps shared vertices from double counting
            if (y1 <= scan_y) != (y2 <= scan_y) {
                let t = (scan_y - y1) / (y2 - y1);
                crossings.push(x1 + t * (x2 - x1));
            }
        }

        crossings.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for pair in crossings.chunks_exact(2) {
            let start = (pair[0] - 0.5).ceil() as i32;
            let end = (pair[1] - 0.5).floor() as i32;
            for x in start..=end {
                blend_pixel(img, x, y, colour);
            }
        }
    }
}

/// Stroke a polygon's edges, including the closing edge.
pub fn stroke_polygon(img: &mut RgbImage, points: &[(f32, f32)], colour: Colour, width: u32) {
    if points.len() < 2 {
        return;
    }
    for i in 0..points.len() {
        let (x1, y1) = points[i];
        let (x2, y2) = points[(i + 1) % points.len()];
        draw_line(img, x1, y1, x2, y2, colour, width);
    }
}

/// Draw a thick line as a capsule: every pixel within half the stroke width
/// of the segment is covered.
pub fn draw_line(
    img: &mut RgbImage,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    colour: Colour,
    width: u32,
) {
    let half = (width.max(1) as f32) / 2.0;
    let pad = half + 1.0;

    let x_min = (x1.min(x2) - pad).floor() as i32;
    let x_max = (x1.max(x2) + pad).ceil() as i32;
    let y_min = (y1.min(y2) - pad).floor() as i32;
    let y_max = (y1.max(y2) + pad).ceil() as i32;

    let dx = x2 - x1;
    let dy = y2 - y1;
    let len2 = dx * dx + dy * dy;

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let t = if len2 > 0.0 {
                (((px - x1) * dx + (py - y1) * dy) / len2).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let nx = x1 + t * dx - px;
            let ny = y1 + t * dy - py;
            if nx * nx + ny * ny <= half * half {
                blend_pixel(img, x, y, colour);
            }
        }
    }
}

/// Evaluate a cubic Bezier curve at `t` for control points `p0..p3`.
pub fn bezier_point(
    p0: (f32, f32),
    p1: (f32, f32),
    p2: (f32, f32),
    p3: (f32, f32),
    t: f32,
) -> (f32, f32) {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;
    (
        b0 * p0.0 + b1 * p1.0 + b2 * p2.0 + b3 * p3.0,
        b0 * p0.1 + b1 * p1.1 + b2 * p2.1 + b3 * p3.1,
    )
}

/// Number of samples per cubic Bezier segment.
pub const BEZIER_SAMPLES: usize = 50;

/// Rasterise one cubic Bezier segment as a connected polyline.
pub fn draw_bezier_segment(
    img: &mut RgbImage,
    p0: (f32, f32),
    p1: (f32, f32),
    p2: (f32, f32),
    p3: (f32, f32),
    colour: Colour,
    width: u32,
) {
    let mut prev = bezier_point(p0, p1, p2, p3, 0.0);
    for i in 1..BEZIER_SAMPLES {
        let t = i as f32 / (BEZIER_SAMPLES - 1) as f32;
        let next = bezier_point(p0, p1, p2, p3, t);
        draw_line(img, prev.0, prev.1, next.0, next.1, colour, width);
        prev = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(w: u32, h: u32) -> RgbImage {
        RgbImage::from_pixel(w, h, image::Rgb([255, 255, 255]))
    }

    #[test]
    fn test_blend_pixel_opaque_overwrites() {
        let mut img = canvas(4, 4);
        blend_pixel(&mut img, 1, 1, Colour::rgb(10, 20, 30));
        assert_eq!(img.get_pixel(1, 1).0, [10, 20, 30]);
    }

    #[test]
    fn test_blend_pixel_translucent_mixes() {
        let mut img = canvas(2, 2);
        blend_pixel(&mut img, 0, 0, Colour::new(0, 0, 0, 128));
        let [r, g, b] = img.get_pixel(0, 0).0;
        // Half black over white lands near mid-grey
        assert!((r as i32 - 127).abs() <= 2);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn test_blend_pixel_out_of_bounds_is_noop() {
        let mut img = canvas(2, 2);
        blend_pixel(&mut img, -1, 0, Colour::BLACK);
        blend_pixel(&mut img, 0, 5, Colour::BLACK);
        assert!(img.pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn test_fill_circle_covers_centre_not_corner() {
        let mut img = canvas(20, 20);
        fill_circle(&mut img, 10.0, 10.0, 5.0, Colour::BLACK);
        assert_eq!(img.get_pixel(10, 10).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_fill_circle_clipped_at_edges() {
        // Circle centred outside the image must not panic
        let mut img = canvas(10, 10);
        fill_circle(&mut img, -3.0, -3.0, 5.0, Colour::BLACK);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(9, 9).0, [255, 255, 255]);
    }

    #[test]
    fn test_stroke_circle_leaves_interior() {
        let mut img = canvas(30, 30);
        stroke_circle(&mut img, 15.0, 15.0, 10.0, Colour::BLACK, 1);
        // Interior untouched
        assert_eq!(img.get_pixel(15, 15).0, [255, 255, 255]);
        // Somewhere on the rim is black
        assert_eq!(img.get_pixel(15, 5).0, [0, 0, 0]);
    }

    #[test]
    fn test_fill_polygon_square() {
        let mut img = canvas(20, 20);
        let square = [(5.0, 5.0), (15.0, 5.0), (15.0, 15.0), (5.0, 15.0)];
        fill_polygon(&mut img, &square, Colour::BLACK);
        assert_eq!(img.get_pixel(10, 10).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(2, 2).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(18, 18).0, [255, 255, 255]);
    }

    #[test]
    fn test_fill_polygon_degenerate_is_noop() {
        let mut img = canvas(8, 8);
        fill_polygon(&mut img, &[(1.0, 1.0), (5.0, 5.0)], Colour::BLACK);
        assert!(img.pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn test_draw_line_horizontal() {
        let mut img = canvas(20, 20);
        draw_line(&mut img, 2.0, 10.0, 18.0, 10.0, Colour::BLACK, 2);
        assert_eq!(img.get_pixel(10, 10).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(10, 2).0, [255, 255, 255]);
    }

    #[test]
    fn test_draw_line_zero_length_draws_dot() {
        let mut img = canvas(10, 10);
        draw_line(&mut img, 5.0, 5.0, 5.0, 5.0, Colour::BLACK, 3);
        assert_eq!(img.get_pixel(5, 5).0, [0, 0, 0]);
    }

    #[test]
    fn test_bezier_endpoints_exact() {
        let p0 = (10.0, 20.0);
        let p1 = (40.0, 80.0);
        let p2 = (90.0, 10.0);
        let p3 = (120.0, 60.0);
        assert_eq!(bezier_point(p0, p1, p2, p3, 0.0), p0);
        let end = bezier_point(p0, p1, p2, p3, 1.0);
        assert!((end.0 - p3.0).abs() < 1e-4);
        assert!((end.1 - p3.1).abs() < 1e-4);
    }

    #[test]
    fn test_bezier_midpoint_of_straight_control_line() {
        // Collinear, evenly spaced control points trace the straight line
        let p = bezier_point((0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0), 0.5);
        assert!((p.0 - 1.5).abs() < 1e-5);
        assert!((p.1 - 1.5).abs() < 1e-5);
    }
}
