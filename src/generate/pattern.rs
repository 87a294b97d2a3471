//! The default pattern generator.
//!
//! Runs one shape generator for the full element budget, or splits the
//! budget evenly across all five when the shape type is mixed.

use crate::canvas::Canvas;
use crate::config::{GeneratorConfig, ShapeType};

use super::shapes::ShapeKind;

pub fn apply(config: &GeneratorConfig, canvas: &mut Canvas) {
    let kind = match config.shape_type {
        ShapeType::Circle => ShapeKind::Circle,
        ShapeType::Polygon => ShapeKind::Polygon,
        ShapeType::Line => ShapeKind::Line,
        ShapeType::Bezier => ShapeKind::Bezier,
        ShapeType::Noise => ShapeKind::Noise,
        ShapeType::Mixed => {
            let generators = ShapeKind::ALL;
            let per_generator = config.complexity / generators.len() as u32;
            let remainder = config.complexity % generators.len() as u32;

            // The remainder goes to the first generators in declared order
            for (i, generator) in generators.iter().enumerate() {
                let count = per_generator + u32::from((i as u32) < remainder);
                generator.generate(canvas, count, config);
            }
            return;
        }
    };

    kind.generate(canvas, config.complexity, config);
}
