//! The drawing surface.
//!
//! A [`Canvas`] keeps two synchronised representations of a scene: an RGB
//! pixel raster and an ordered list of vector primitives. Every circle,
//! polygon, and line draw call rasterises the shape *and* appends a matching
//! [`VectorElement`], so the raster and the SVG export always depict the
//! same scene. Bezier strokes and noise only touch the raster.
//!
//! The canvas also owns the run's random stream: a [`ChaCha8Rng`] seeded at
//! construction. Every random decision of a generation run (palette picks,
//! placement, parameters) draws from this one stream, so a fixed seed plus a
//! fixed configuration reproduces output bit for bit.

mod element;
mod raster;

pub use element::VectorElement;
pub use raster::bezier_point;

use image::RgbImage;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{Colour, Palette};

/// A raster + vector drawing surface with its own seeded random stream.
pub struct Canvas {
    width: u32,
    height: u32,
    seed: Option<u64>,
    pixels: RgbImage,
    elements: Vec<VectorElement>,
    palette: Palette,
    rng: ChaCha8Rng,
}

impl Canvas {
    /// Create a canvas of the given size.
    ///
    /// A `seed` makes the whole generation run reproducible; without one the
    /// stream is seeded from entropy. The background defaults to white.
    pub fn new(width: u32, height: u32, seed: Option<u64>, background: Option<Colour>) -> Self {
        let bg = background.unwrap_or(Colour::WHITE);
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            width,
            height,
            seed,
            pixels: RgbImage::from_pixel(width, height, image::Rgb([bg.r, bg.g, bg.b])),
            elements: Vec::new(),
            palette: Palette::default(),
            rng,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The recorded vector primitives, in draw order.
    pub fn elements(&self) -> &[VectorElement] {
        &self.elements
    }

    /// The pixel raster.
    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replace the active palette.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Replace the active palette by predefined name (unknown names fall
    /// back to `vibrant`).
    pub fn set_palette_name(&mut self, name: &str) {
        self.palette = Palette::from_name(name);
    }

    /// The canvas's random stream. Generators draw all their randomness
    /// from here so that a seed fixes the entire run.
    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// A random palette colour, translucent when `alpha < 255`.
    pub fn random_colour(&mut self, alpha: u8) -> Colour {
        self.palette.random_colour(&mut self.rng).with_alpha(alpha)
    }

    /// Reset the raster to a solid colour and drop all recorded elements.
    pub fn clear(&mut self, colour: Colour) {
        self.pixels = RgbImage::from_pixel(
            self.width,
            self.height,
            image::Rgb([colour.r, colour.g, colour.b]),
        );
        self.elements.clear();
    }

    /// Draw a filled circle and record it.
    ///
    /// Without an explicit `fill` a random palette colour is used.
    pub fn add_circle(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        fill: Option<Colour>,
        outline: Option<Colour>,
        width: u32,
    ) {
        let fill = fill.unwrap_or_else(|| self.palette.random_colour(&mut self.rng));

        raster::fill_circle(&mut self.pixels, x, y, radius, fill);
        if let Some(outline) = outline {
            raster::stroke_circle(&mut self.pixels, x, y, radius, outline, width);
        }

        self.elements.push(VectorElement::Circle {
            cx: x,
            cy: y,
            radius,
            fill,
            stroke: outline,
            stroke_width: width,
        });
    }

    /// Draw a filled polygon (implicitly closed, at least 3 points) and
    /// record it.
    pub fn add_polygon(
        &mut self,
        points: &[(f32, f32)],
        fill: Option<Colour>,
        outline: Option<Colour>,
        width: u32,
    ) {
        let fill = fill.unwrap_or_else(|| self.palette.random_colour(&mut self.rng));

        raster::fill_polygon(&mut self.pixels, points, fill);
        if let Some(outline) = outline {
            raster::stroke_polygon(&mut self.pixels, points, outline, width);
        }

        self.elements.push(VectorElement::Polygon {
            points: points.to_vec(),
            fill,
            stroke: outline,
            stroke_width: width,
        });
    }

    /// Draw a straight line and record it.
    pub fn add_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        colour: Option<Colour>,
        width: u32,
    ) {
        let colour = colour.unwrap_or_else(|| self.palette.random_colour(&mut self.rng));

        raster::draw_line(&mut self.pixels, x1, y1, x2, y2, colour, width);

        self.elements.push(VectorElement::Line {
            x1,
            y1,
            x2,
            y2,
            stroke: colour,
            stroke_width: width,
        });
    }

    /// Rasterise a chain of cubic Bezier segments.
    ///
    /// Control points are consumed four at a time at strides of three
    /// (indices 0..4, 3..7, ...), each segment sampled at 50 parameter
    /// values and rendered as a connected polyline. Segments are
    /// independent; no tangent continuity is enforced. Not recorded as a
    /// vector element.
    pub fn add_bezier(&mut self, points: &[(f32, f32)], colour: Option<Colour>, width: u32) {
        // Colour is resolved before the length check so the random stream
        // advances identically either way
        let colour = colour.unwrap_or_else(|| self.palette.random_colour(&mut self.rng));

        if points.len() < 4 {
            return;
        }
        let mut i = 0;
        while i + 3 < points.len() {
            raster::draw_bezier_segment(
                &mut self.pixels,
                points[i],
                points[i + 1],
                points[i + 2],
                points[i + 3],
                colour,
                width,
            );
            i += 3;
        }
    }

    /// Scatter `width x height x density` randomly coloured pixels at
    /// uniformly random coordinates (with replacement). When `color_range`
    /// is given each channel is jittered by a uniform integer in
    /// `[-range, range]`, clamped to 0..=255. Not recorded as a vector
    /// element.
    pub fn add_noise(&mut self, density: f64, color_range: Option<i32>) {
        let count = (self.width as f64 * self.height as f64 * density) as usize;
        for _ in 0..count {
            let x = self.rng.gen_range(0..self.width) as i32;
            let y = self.rng.gen_range(0..self.height) as i32;
            let mut colour = self.palette.random_colour(&mut self.rng);
            if let Some(range) = color_range {
                colour = jitter(colour, range, &mut self.rng);
            }
            raster::blend_pixel(&mut self.pixels, x, y, colour);
        }
    }

    /// Write a single raster pixel without recording a vector element.
    /// Used by noise-like effects such as the oil-paint texture pass.
    pub fn stamp_pixel(&mut self, x: i32, y: i32, colour: Colour) {
        raster::blend_pixel(&mut self.pixels, x, y, colour);
    }
}

/// Jitter each RGB channel by a uniform integer in `[-range, range]`,
/// clamped to the channel range.
pub(crate) fn jitter(colour: Colour, range: i32, rng: &mut impl Rng) -> Colour {
    if range <= 0 {
        return colour;
    }
    let mut channel = |c: u8| (c as i32 + rng.gen_range(-range..=range)).clamp(0, 255) as u8;
    let r = channel(colour.r);
    let g = channel(colour.g);
    let b = channel(colour.b);
    Colour::new(r, g, b, colour.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_background() {
        let canvas = Canvas::new(10, 8, Some(1), None);
        assert_eq!(canvas.width(), 10);
        assert_eq!(canvas.height(), 8);
        assert!(canvas.elements().is_empty());
        assert!(canvas.pixels().pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn test_custom_background() {
        let canvas = Canvas::new(4, 4, None, Some(Colour::rgb(10, 20, 30)));
        assert!(canvas.pixels().pixels().all(|p| p.0 == [10, 20, 30]));
    }

    #[test]
    fn test_circle_records_matching_element() {
        let mut canvas = Canvas::new(100, 100, Some(5), None);
        let fill = Colour::new(200, 10, 10, 255);
        let outline = Colour::BLACK;
        canvas.add_circle(50.0, 40.0, 12.0, Some(fill), Some(outline), 2);

        assert_eq!(canvas.elements().len(), 1);
        match &canvas.elements()[0] {
            VectorElement::Circle {
                cx,
                cy,
                radius,
                fill: f,
                stroke,
                stroke_width,
            } => {
                assert_eq!((*cx, *cy, *radius), (50.0, 40.0, 12.0));
                assert_eq!(*f, fill);
                assert_eq!(*stroke, Some(outline));
                assert_eq!(*stroke_width, 2);
            }
            other => panic!("expected circle, got {:?}", other),
        }
        // And the raster shows the fill at the centre
        assert_eq!(canvas.pixels().get_pixel(50, 40).0, [200, 10, 10]);
    }

    #[test]
    fn test_polygon_records_matching_element() {
        let mut canvas = Canvas::new(60, 60, Some(5), None);
        let points = vec![(10.0, 10.0), (50.0, 10.0), (30.0, 50.0)];
        let fill = Colour::rgb(0, 120, 0);
        canvas.add_polygon(&points, Some(fill), None, 1);

        match &canvas.elements()[0] {
            VectorElement::Polygon {
                points: p,
                fill: f,
                stroke,
                ..
            } => {
                assert_eq!(*p, points);
                assert_eq!(*f, fill);
                assert_eq!(*stroke, None);
            }
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_line_records_matching_element() {
        let mut canvas = Canvas::new(40, 40, Some(5), None);
        let colour = Colour::rgb(1, 2, 3);
        canvas.add_line(0.0, 0.0, 39.0, 39.0, Some(colour), 3);

        match &canvas.elements()[0] {
            VectorElement::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
                stroke_width,
            } => {
                assert_eq!((*x1, *y1, *x2, *y2), (0.0, 0.0, 39.0, 39.0));
                assert_eq!(*stroke, colour);
                assert_eq!(*stroke_width, 3);
            }
            other => panic!("expected line, got {:?}", other),
        }
    }

    #[test]
    fn test_default_fill_comes_from_palette() {
        let mut canvas = Canvas::new(50, 50, Some(5), None);
        canvas.set_palette_name("warm");
        canvas.add_circle(25.0, 25.0, 10.0, None, None, 1);

        let fill = canvas.elements()[0].colour();
        let palette = Palette::from_name("warm");
        assert!(palette.iter().any(|&c| c == fill));
    }

    #[test]
    fn test_bezier_and_noise_record_nothing() {
        let mut canvas = Canvas::new(80, 80, Some(5), None);
        canvas.add_bezier(
            &[(0.0, 0.0), (20.0, 60.0), (60.0, 20.0), (79.0, 79.0)],
            Some(Colour::BLACK),
            2,
        );
        canvas.add_noise(0.01, Some(30));
        assert!(canvas.elements().is_empty());
    }

    #[test]
    fn test_bezier_marks_raster() {
        let mut canvas = Canvas::new(80, 80, Some(5), None);
        canvas.add_bezier(
            &[(0.0, 40.0), (20.0, 40.0), (60.0, 40.0), (79.0, 40.0)],
            Some(Colour::BLACK),
            2,
        );
        // Collinear control points: the curve is the horizontal line y=40
        assert_eq!(canvas.pixels().get_pixel(40, 40).0, [0, 0, 0]);
    }

    #[test]
    fn test_bezier_too_few_points_is_raster_noop() {
        let mut canvas = Canvas::new(20, 20, Some(5), None);
        canvas.add_bezier(&[(1.0, 1.0), (5.0, 5.0), (9.0, 9.0)], Some(Colour::BLACK), 2);
        assert!(canvas.pixels().pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn test_clear_resets_both_representations() {
        let mut canvas = Canvas::new(30, 30, Some(5), None);
        canvas.add_circle(15.0, 15.0, 5.0, Some(Colour::BLACK), None, 1);
        assert!(!canvas.elements().is_empty());

        canvas.clear(Colour::rgb(9, 9, 9));
        assert!(canvas.elements().is_empty());
        assert!(canvas.pixels().pixels().all(|p| p.0 == [9, 9, 9]));
    }

    #[test]
    fn test_noise_scatters_expected_count_region() {
        let mut canvas = Canvas::new(100, 100, Some(11), None);
        canvas.set_palette_name("neon");
        canvas.add_noise(0.05, None);
        // 100*100*0.05 = 500 draws with replacement; well over half should
        // land on distinct pixels and none of them are white
        let touched = canvas
            .pixels()
            .pixels()
            .filter(|p| p.0 != [255, 255, 255])
            .count();
        assert!(touched > 250, "only {} pixels touched", touched);
    }

    #[test]
    fn test_same_seed_reproduces_raster_and_elements() {
        let draw = || {
            let mut canvas = Canvas::new(64, 64, Some(42), None);
            canvas.set_palette_name("vibrant");
            for _ in 0..10 {
                let x = canvas.rng().gen_range(0.0..64.0);
                let y = canvas.rng().gen_range(0.0..64.0);
                canvas.add_circle(x, y, 6.0, None, None, 1);
            }
            canvas.add_noise(0.01, Some(20));
            canvas
        };
        let a = draw();
        let b = draw();
        assert_eq!(a.pixels().as_raw(), b.pixels().as_raw());
        assert_eq!(a.elements(), b.elements());
    }

    #[test]
    fn test_random_colour_applies_alpha() {
        let mut canvas = Canvas::new(10, 10, Some(3), None);
        let c = canvas.random_colour(128);
        assert_eq!(c.a, 128);
        let c = canvas.random_colour(255);
        assert_eq!(c.a, 255);
    }

    #[test]
    fn test_jitter_clamps_channels() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
        for _ in 0..64 {
            let c = jitter(Colour::rgb(250, 5, 128), 30, &mut rng);
            // u8 storage already proves 0..=255; check jitter stayed near
            assert!(c.r >= 220);
            assert!(c.g <= 35);
        }
    }
}
