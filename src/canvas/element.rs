//! Vector elements recorded alongside the raster.
//!
//! Every circle, polygon, and line drawn on the canvas is mirrored here so
//! the scene can be re-emitted as SVG. Bezier strokes and noise are
//! rasterised only and never recorded, so the SVG rendition of a scene
//! carries less detail than the raster.

use crate::types::Colour;

/// A single recorded vector primitive, in draw order.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorElement {
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        fill: Colour,
        stroke: Option<Colour>,
        stroke_width: u32,
    },
    Polygon {
        points: Vec<(f32, f32)>,
        fill: Colour,
        stroke: Option<Colour>,
        stroke_width: u32,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Colour,
        stroke_width: u32,
    },
}

impl VectorElement {
    /// The fill or stroke colour that dominates this element's appearance.
    pub fn colour(&self) -> Colour {
        match self {
            Self::Circle { fill, .. } | Self::Polygon { fill, .. } => *fill,
            Self::Line { stroke, .. } => *stroke,
        }
    }
}
