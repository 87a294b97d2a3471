//! Primitive shape generators.
//!
//! Each [`ShapeKind`] knows how to emit `count` randomly parameterised
//! primitives of one kind onto a canvas. The randomisation order is part of
//! the determinism contract: for a fixed seed the exact sequence of draws
//! below reproduces identical output.

use std::f32::consts::TAU;

use rand::Rng;

use crate::canvas::Canvas;
use crate::config::GeneratorConfig;
use crate::types::Colour;

/// The closed set of primitive shape generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Polygon,
    Line,
    Bezier,
    Noise,
}

impl ShapeKind {
    /// All kinds in their fixed declared order. The mixed pattern generator
    /// distributes its element budget across this order.
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Circle,
        ShapeKind::Polygon,
        ShapeKind::Line,
        ShapeKind::Bezier,
        ShapeKind::Noise,
    ];

    /// Draw `count` primitives of this kind. Noise ignores `count` and is
    /// driven by `noise_density` instead.
    pub fn generate(self, canvas: &mut Canvas, count: u32, config: &GeneratorConfig) {
        match self {
            ShapeKind::Circle => circles(canvas, count),
            ShapeKind::Polygon => polygons(canvas, count),
            ShapeKind::Line => lines(canvas, count),
            ShapeKind::Bezier => beziers(canvas, count),
            ShapeKind::Noise => {
                canvas.add_noise(config.noise_density, Some(config.noise_color_range))
            }
        }
    }
}

fn circles(canvas: &mut Canvas, count: u32) {
    let (w, h) = (canvas.width(), canvas.height());
    let max_radius = (w.min(h) / 10).max(5);

    for _ in 0..count {
        let x = canvas.rng().gen_range(0..=w) as f32;
        let y = canvas.rng().gen_range(0..=h) as f32;
        let radius = canvas.rng().gen_range(5..=max_radius) as f32;

        let alpha = canvas.rng().gen_range(100..=255);
        let fill = canvas.random_colour(alpha);
        let outline = if canvas.rng().gen::<f32>() < 0.3 {
            Some(canvas.random_colour(255))
        } else {
            None
        };

        canvas.add_circle(x, y, radius, Some(fill), outline, 1);
    }
}

fn polygons(canvas: &mut Canvas, count: u32) {
    let (w, h) = (canvas.width(), canvas.height());
    let max_radius = (w.min(h) / 8).max(10);

    for _ in 0..count {
        let cx = canvas.rng().gen_range(0..=w) as f32;
        let cy = canvas.rng().gen_range(0..=h) as f32;
        let sides = canvas.rng().gen_range(3..=8);
        let radius = canvas.rng().gen_range(10..=max_radius) as f32;

        let mut points = Vec::with_capacity(sides);
        for i in 0..sides {
            let angle = TAU * i as f32 / sides as f32 + canvas.rng().gen_range(-0.5..=0.5);
            points.push((cx + radius * angle.cos(), cy + radius * angle.sin()));
        }

        let alpha = canvas.rng().gen_range(120..=255);
        let fill = canvas.random_colour(alpha);
        let outline = if canvas.rng().gen::<f32>() < 0.4 {
            Some(canvas.random_colour(255))
        } else {
            None
        };

        canvas.add_polygon(&points, Some(fill), outline, 1);
    }
}

fn lines(canvas: &mut Canvas, count: u32) {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);

    for _ in 0..count {
        let (x1, y1, x2, y2) = if canvas.rng().gen::<f32>() < 0.6 {
            // Straight line between two independent points
            let x1 = canvas.rng().gen_range(0..=w);
            let y1 = canvas.rng().gen_range(0..=h);
            let x2 = canvas.rng().gen_range(0..=w);
            let y2 = canvas.rng().gen_range(0..=h);
            (x1, y1, x2, y2)
        } else {
            // Short polyline-like segment offset from its start
            let x1 = canvas.rng().gen_range(0..=w);
            let y1 = canvas.rng().gen_range(0..=h);
            let x2 = x1 + canvas.rng().gen_range(-100..=100);
            let y2 = y1 + canvas.rng().gen_range(-100..=100);
            (x1, y1, x2, y2)
        };

        let colour = canvas.random_colour(255);
        let width = canvas.rng().gen_range(1..=8);

        canvas.add_line(x1 as f32, y1 as f32, x2 as f32, y2 as f32, Some(colour), width);
    }
}

fn beziers(canvas: &mut Canvas, count: u32) {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);

    for _ in 0..count {
        let start_x = canvas.rng().gen_range(0..=w);
        let start_y = canvas.rng().gen_range(0..=h);

        let mut points: Vec<(f32, f32)> = vec![(start_x as f32, start_y as f32)];
        for _ in 0..3 {
            // Control points stay within ±200 of the start, clamped to the
            // canvas bounds
            let x = canvas
                .rng()
                .gen_range((start_x - 200).max(0)..=(start_x + 200).min(w));
            let y = canvas
                .rng()
                .gen_range((start_y - 200).max(0)..=(start_y + 200).min(h));
            points.push((x as f32, y as f32));
        }

        let colour = canvas.random_colour(255);
        let width = canvas.rng().gen_range(2..=10);

        canvas.add_bezier(&points, Some(colour), width);
    }
}

/// Paint colour selection shared by the oil-painting generator: one palette
/// colour, or a truncated blend of two when colour mixing is enabled.
pub(crate) fn paint_colour(canvas: &mut Canvas, color_mixing: f32) -> Colour {
    let base = canvas.random_colour(255);
    if color_mixing > 0.5 {
        let mix = canvas.random_colour(255);
        let ratio = canvas.rng().gen_range(0.2..=0.8) * color_mixing;
        base.blend(mix, ratio)
    } else {
        base
    }
}
