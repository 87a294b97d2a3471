//! The geometric generator: grid, symmetric, and freeform modes.
//!
//! `grid_based` takes priority over `symmetry`; with neither flag set the
//! freeform mode runs.

use std::f32::consts::TAU;

use rand::Rng;

use crate::canvas::Canvas;
use crate::config::GeneratorConfig;

pub fn apply(config: &GeneratorConfig, canvas: &mut Canvas) {
    if config.grid_based {
        grid_pattern(config, canvas);
    } else if config.symmetry {
        symmetric_pattern(config, canvas);
    } else {
        freeform_shapes(config, canvas);
    }
}

/// A `⌊√complexity⌋ x ⌊√complexity⌋` grid with one primitive per cell.
fn grid_pattern(config: &GeneratorConfig, canvas: &mut Canvas) {
    let grid_size = (config.complexity as f64).sqrt() as u32;
    if grid_size == 0 {
        return;
    }
    let cell_width = canvas.width() / grid_size;
    let cell_height = canvas.height() / grid_size;

    for i in 0..grid_size {
        for j in 0..grid_size {
            let cx = (i * cell_width + cell_width / 2) as f32;
            let cy = (j * cell_height + cell_height / 2) as f32;

            let choice = canvas.rng().gen_range(0..3);
            let fill = canvas.random_colour(255);

            match choice {
                0 => {
                    let radius = (cell_width.min(cell_height) / 4) as f32;
                    canvas.add_circle(cx, cy, radius, Some(fill), None, 1);
                }
                1 => {
                    let sides = canvas.rng().gen_range(3..=6);
                    let radius = (cell_width.min(cell_height) / 4) as f32;
                    let points: Vec<(f32, f32)> = (0..sides)
                        .map(|k| {
                            let angle = TAU * k as f32 / sides as f32;
                            (cx + radius * angle.cos(), cy + radius * angle.sin())
                        })
                        .collect();
                    canvas.add_polygon(&points, Some(fill), None, 1);
                }
                _ => {
                    // The "line" choice has never drawn anything; kept as a
                    // no-op to preserve cell selection behaviour
                }
            }
        }
    }
}

/// Quarter-canvas placement mirrored across both axes, giving 4-fold
/// symmetry about the canvas centre. Only circles are mirrored.
fn symmetric_pattern(config: &GeneratorConfig, canvas: &mut Canvas) {
    let (w, h) = (canvas.width(), canvas.height());
    let centre_x = w / 2;
    let centre_y = h / 2;

    for _ in 0..config.complexity / 4 {
        let x = canvas.rng().gen_range(centre_x..=(w.saturating_sub(50)).max(centre_x)) as f32;
        let y = canvas.rng().gen_range(centre_y..=(h.saturating_sub(50)).max(centre_y)) as f32;

        let choice = canvas.rng().gen_range(0..2);
        let fill = canvas.random_colour(255);

        if choice == 0 {
            let radius = canvas.rng().gen_range(5..=30) as f32;
            let (w, h) = (w as f32, h as f32);
            canvas.add_circle(x, y, radius, Some(fill), None, 1);
            canvas.add_circle(w - x, y, radius, Some(fill), None, 1);
            canvas.add_circle(x, h - y, radius, Some(fill), None, 1);
            canvas.add_circle(w - x, h - y, radius, Some(fill), None, 1);
        }
        // The "polygon" choice is selected but unimplemented; kept as a
        // no-op rather than guessed at
    }
}

/// Uniformly chosen triangles, squares, pentagons, and hexagons.
fn freeform_shapes(config: &GeneratorConfig, canvas: &mut Canvas) {
    for _ in 0..config.complexity {
        let choice = canvas.rng().gen_range(0..4);
        let (cw, ch) = (canvas.width(), canvas.height());
        let cx = canvas.rng().gen_range(0..=cw) as f32;
        let cy = canvas.rng().gen_range(0..=ch) as f32;
        let size = canvas.rng().gen_range(10..=60) as f32;

        let points: Vec<(f32, f32)> = match choice {
            // Triangle and square use fixed analytic vertices
            0 => vec![
                (cx, cy - size),
                (cx - size * 0.866, cy + size * 0.5),
                (cx + size * 0.866, cy + size * 0.5),
            ],
            1 => vec![
                (cx - size, cy - size),
                (cx + size, cy - size),
                (cx + size, cy + size),
                (cx - size, cy + size),
            ],
            // Pentagon and hexagon are regular
            n => {
                let sides = if n == 2 { 5 } else { 6 };
                (0..sides)
                    .map(|i| {
                        let angle = TAU * i as f32 / sides as f32;
                        (cx + size * angle.cos(), cy + size * angle.sin())
                    })
                    .collect()
            }
        };

        let alpha = canvas.rng().gen_range(120..=255);
        let fill = canvas.random_colour(alpha);
        canvas.add_polygon(&points, Some(fill), None, 1);
    }
}
