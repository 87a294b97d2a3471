//! The oil-painting generator: layered brushwork over a textured ground.
//!
//! One texture pass, then four layers (background, midground, highlights,
//! details) with fixed alpha ranges. Each layer element is 60% a brush
//! stroke, 24% a colour blob, 16% an impasto cluster.

use std::f32::consts::TAU;

use rand::Rng;

use crate::canvas::{jitter, Canvas};
use crate::config::{BrushSize, GeneratorConfig};

/// Per-layer alpha ranges: background, midground, highlights, details.
const LAYER_ALPHAS: [(u8, u8); 4] = [(120, 200), (100, 180), (150, 220), (180, 255)];

pub fn apply(config: &GeneratorConfig, canvas: &mut Canvas) {
    canvas_texture(config, canvas);

    for alpha_range in LAYER_ALPHAS {
        let layer_complexity = config.complexity / LAYER_ALPHAS.len() as u32;

        for _ in 0..layer_complexity {
            if canvas.rng().gen::<f32>() < 0.6 {
                brush_stroke(config, canvas, alpha_range);
            } else if canvas.rng().gen::<f32>() < 0.6 {
                colour_blob(config, canvas, alpha_range);
            } else {
                impasto(canvas);
            }
        }
    }
}

/// Scatter subtly jittered palette-coloured pixels to suggest canvas weave.
fn canvas_texture(config: &GeneratorConfig, canvas: &mut Canvas) {
    let density = config.texture_density * 0.005;
    let count = (canvas.width() as f64 * canvas.height() as f64 * density) as usize;

    for _ in 0..count {
        let (cw, ch) = (canvas.width(), canvas.height());
        let x = canvas.rng().gen_range(0..cw) as i32;
        let y = canvas.rng().gen_range(0..ch) as i32;

        let base = canvas.random_colour(255);
        let noise = jitter(base, 15, canvas.rng());
        canvas.stamp_pixel(x, y, noise);
    }
}

/// A directional random walk rendered as a Bezier stroke.
fn brush_stroke(config: &GeneratorConfig, canvas: &mut Canvas, alpha_range: (u8, u8)) {
    let (cw, ch) = (canvas.width(), canvas.height());
    let (w, h) = (cw as f32, ch as f32);
    let start_x = canvas.rng().gen_range(0..=cw) as f32;
    let start_y = canvas.rng().gen_range(0..=ch) as f32;

    let stroke_length = canvas.rng().gen_range(30..=120) as f32;
    let stroke_angle = canvas.rng().gen_range(0.0..TAU);

    let mut points = vec![(start_x, start_y)];
    let (mut x, mut y) = (start_x, start_y);

    let segments = canvas.rng().gen_range(3..=6);
    for _ in 0..segments {
        let angle_variation = canvas.rng().gen_range(-0.3..=0.3) * config.stroke_variation;
        let segment_length = stroke_length / segments as f32;

        x = (x + segment_length * (stroke_angle + angle_variation).cos()).clamp(0.0, w);
        y = (y + segment_length * (stroke_angle + angle_variation).sin()).clamp(0.0, h);
        points.push((x, y));
    }

    if points.len() >= 4 {
        let colour = super::shapes::paint_colour(canvas, config.color_mixing);
        let alpha = canvas.rng().gen_range(alpha_range.0..=alpha_range.1);
        let width = brush_width(config.brush_size, canvas);
        canvas.add_bezier(&points, Some(colour.with_alpha(alpha)), width);
    }
}

/// An 8-16 sided irregular polygon suggesting a blob of mixed paint.
fn colour_blob(config: &GeneratorConfig, canvas: &mut Canvas, alpha_range: (u8, u8)) {
    let (cw, ch) = (canvas.width(), canvas.height());
    let x = canvas.rng().gen_range(0..=cw) as f32;
    let y = canvas.rng().gen_range(0..=ch) as f32;

    let blob_size = canvas.rng().gen_range(10..=40) as f32;
    let sides = canvas.rng().gen_range(8..=16);

    let mut points = Vec::with_capacity(sides);
    for i in 0..sides {
        let angle = TAU * i as f32 / sides as f32;
        let radius = blob_size * canvas.rng().gen_range(0.5..=1.5);
        points.push((x + radius * angle.cos(), y + radius * angle.sin()));
    }

    let colour = super::shapes::paint_colour(canvas, config.color_mixing);
    let alpha = canvas.rng().gen_range(alpha_range.0..=alpha_range.1);
    canvas.add_polygon(&points, Some(colour.with_alpha(alpha)), None, 1);
}

/// A cluster of 2-5 small, nearly opaque dabs. Dabs whose jittered centre
/// lands outside the canvas are skipped individually.
fn impasto(canvas: &mut Canvas) {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    let x = canvas.rng().gen_range(0..=w);
    let y = canvas.rng().gen_range(0..=h);

    let dabs = canvas.rng().gen_range(2..=5);
    for _ in 0..dabs {
        let dab_x = x + canvas.rng().gen_range(-15..=15);
        let dab_y = y + canvas.rng().gen_range(-15..=15);
        let dab_size = canvas.rng().gen_range(3..=12) as f32;

        if (0..=w).contains(&dab_x) && (0..=h).contains(&dab_y) {
            let colour = canvas.random_colour(255);
            let alpha = canvas.rng().gen_range(180..=255);
            canvas.add_circle(
                dab_x as f32,
                dab_y as f32,
                dab_size,
                Some(colour.with_alpha(alpha)),
                None,
                1,
            );
        }
    }
}

/// Brush stroke width by brush class.
fn brush_width(size: BrushSize, canvas: &mut Canvas) -> u32 {
    let range = match size {
        BrushSize::Fine => 1..=4,
        BrushSize::Medium => 3..=8,
        BrushSize::Thick => 6..=15,
        BrushSize::Mixed => 1..=12,
    };
    canvas.rng().gen_range(range)
}
