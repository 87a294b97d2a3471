//! The organic generator: irregular polygons, flow-field walks, and
//! translucent blobs.
//!
//! Each iteration draws one of three stochastic choices: 40% an organic
//! shape, 30% a flowing line, 30% a blob.

use std::f32::consts::TAU;

use rand::Rng;

use crate::canvas::Canvas;
use crate::config::GeneratorConfig;

pub fn apply(config: &GeneratorConfig, canvas: &mut Canvas) {
    for _ in 0..config.complexity {
        if canvas.rng().gen::<f32>() < 0.4 {
            organic_shape(config, canvas);
        } else if canvas.rng().gen::<f32>() < 0.5 {
            flowing_line(config, canvas);
        } else {
            blob(canvas);
        }
    }
}

/// An irregular polygon: 6-16 vertices around a centre, each pushed in or
/// out by up to the organic factor.
fn organic_shape(config: &GeneratorConfig, canvas: &mut Canvas) {
    let (w, h) = (canvas.width(), canvas.height());
    let cx = canvas.rng().gen_range(50..=(w.saturating_sub(50)).max(50)) as f32;
    let cy = canvas.rng().gen_range(50..=(h.saturating_sub(50)).max(50)) as f32;
    let base_radius = canvas.rng().gen_range(20..=80) as f32;

    let sides = canvas.rng().gen_range(6..=16);
    let factor = config.organic_factor;

    let mut points = Vec::with_capacity(sides);
    for i in 0..sides {
        let angle = TAU * i as f32 / sides as f32;
        let noise_factor = 1.0 + canvas.rng().gen_range(-factor..=factor);
        let radius = base_radius * noise_factor;
        points.push((cx + radius * angle.cos(), cy + radius * angle.sin()));
    }

    let alpha = canvas.rng().gen_range(80..=200);
    let fill = canvas.random_colour(alpha);
    canvas.add_polygon(&points, Some(fill), None, 1);
}

/// A flow-field walk rendered as a Bezier stroke. Each step moves a random
/// distance in a random direction, scaled by the flow-field strength and
/// clamped to the canvas bounds.
fn flowing_line(config: &GeneratorConfig, canvas: &mut Canvas) {
    let (cw, ch) = (canvas.width(), canvas.height());
    let (w, h) = (cw as f32, ch as f32);
    let start_x = canvas.rng().gen_range(0..=cw) as f32;
    let start_y = canvas.rng().gen_range(0..=ch) as f32;

    let mut points = vec![(start_x, start_y)];
    let (mut x, mut y) = (start_x, start_y);

    let steps = canvas.rng().gen_range(5..=15);
    for _ in 0..steps {
        let angle = canvas.rng().gen_range(0.0..TAU);
        let length = canvas.rng().gen_range(10..=50) as f32;

        x = (x + length * angle.cos() * config.flow_field_strength).clamp(0.0, w);
        y = (y + length * angle.sin() * config.flow_field_strength).clamp(0.0, h);
        points.push((x, y));
    }

    if points.len() >= 4 {
        let colour = canvas.random_colour(255);
        let width = canvas.rng().gen_range(2..=8);
        canvas.add_bezier(&points, Some(colour), width);
    }
}

/// A small translucent circle.
fn blob(canvas: &mut Canvas) {
    let (cw, ch) = (canvas.width(), canvas.height());
    let x = canvas.rng().gen_range(0..=cw) as f32;
    let y = canvas.rng().gen_range(0..=ch) as f32;
    let radius = canvas.rng().gen_range(5..=40) as f32;

    let alpha = canvas.rng().gen_range(100..=180);
    let fill = canvas.random_colour(alpha);
    canvas.add_circle(x, y, radius, Some(fill), None, 1);
}
