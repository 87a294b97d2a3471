//! Generator configuration.
//!
//! The configuration is an explicit struct with named, defaulted fields.
//! Each composite generator reads the knobs it cares about and ignores the
//! rest; unknown options are rejected at the CLI boundary rather than
//! silently dropped.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AbstroError;

/// Which composite generator to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    Pattern,
    Organic,
    Geometric,
    OilPainting,
}

impl Default for GeneratorKind {
    fn default() -> Self {
        Self::Pattern
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pattern => "pattern",
            Self::Organic => "organic",
            Self::Geometric => "geometric",
            Self::OilPainting => "oil_painting",
        };
        f.write_str(name)
    }
}

impl FromStr for GeneratorKind {
    type Err = AbstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "organic" => Ok(Self::Organic),
            "geometric" => Ok(Self::Geometric),
            "oil_painting" => Ok(Self::OilPainting),
            // Anything else runs the default pattern generator
            _ => Ok(Self::Pattern),
        }
    }
}

/// Which primitive shapes a pattern draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeType {
    Circle,
    Polygon,
    Line,
    Bezier,
    Noise,
    Mixed,
}

impl Default for ShapeType {
    fn default() -> Self {
        Self::Mixed
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Circle => "circle",
            Self::Polygon => "polygon",
            Self::Line => "line",
            Self::Bezier => "bezier",
            Self::Noise => "noise",
            Self::Mixed => "mixed",
        };
        f.write_str(name)
    }
}

impl FromStr for ShapeType {
    type Err = AbstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(Self::Circle),
            "polygon" => Ok(Self::Polygon),
            "line" => Ok(Self::Line),
            "bezier" => Ok(Self::Bezier),
            "noise" => Ok(Self::Noise),
            "mixed" => Ok(Self::Mixed),
            _ => Err(AbstroError::Config {
                message: format!("Unknown shape type: {}", s),
                help: Some("Valid types: circle, polygon, line, bezier, noise, mixed".to_string()),
            }),
        }
    }
}

/// Brush width class for the oil-painting generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BrushSize {
    Fine,
    Medium,
    Thick,
    Mixed,
}

impl Default for BrushSize {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for BrushSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fine => "fine",
            Self::Medium => "medium",
            Self::Thick => "thick",
            Self::Mixed => "mixed",
        };
        f.write_str(name)
    }
}

impl FromStr for BrushSize {
    type Err = AbstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fine" => Ok(Self::Fine),
            "medium" => Ok(Self::Medium),
            "thick" => Ok(Self::Thick),
            "mixed" => Ok(Self::Mixed),
            _ => Err(AbstroError::Config {
                message: format!("Unknown brush size: {}", s),
                help: Some("Valid sizes: fine, medium, thick, mixed".to_string()),
            }),
        }
    }
}

/// Tuning knobs for a generation run.
///
/// Each knob documents its default; generators read only the fields that
/// apply to them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorConfig {
    /// Which composite generator runs.
    pub generator: GeneratorKind,

    /// Number of top-level elements to generate. Default 50.
    pub complexity: u32,

    /// Which primitive shapes the pattern generator draws. Default mixed.
    pub shape_type: ShapeType,

    /// Named colour palette. Default "vibrant".
    pub palette: String,

    /// Fraction of canvas pixels scattered by the noise shape. Default 0.001.
    pub noise_density: f64,

    /// Per-channel jitter range for noise pixels. Default 30.
    pub noise_color_range: i32,

    /// Step-length multiplier for flowing lines. Default 0.5.
    pub flow_field_strength: f32,

    /// Per-vertex radius perturbation for organic shapes. Default 0.8.
    pub organic_factor: f32,

    /// Geometric: mirror shapes across both canvas axes. Default false.
    pub symmetry: bool,

    /// Geometric: lay shapes out on a square grid. Default false.
    /// Takes priority over `symmetry`.
    pub grid_based: bool,

    /// Oil painting: brush width class. Default medium.
    pub brush_size: BrushSize,

    /// Oil painting: paint thickness. Default 0.7.
    pub paint_thickness: f32,

    /// Oil painting: colour mixing amount; above 0.5 strokes blend two
    /// palette colours. Default 0.8.
    pub color_mixing: f32,

    /// Oil painting: canvas texture pixel density. Default 0.3.
    pub texture_density: f64,

    /// Oil painting: per-segment stroke angle variation. Default 0.9.
    pub stroke_variation: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorKind::Pattern,
            complexity: 50,
            shape_type: ShapeType::Mixed,
            palette: "vibrant".to_string(),
            noise_density: 0.001,
            noise_color_range: 30,
            flow_field_strength: 0.5,
            organic_factor: 0.8,
            symmetry: false,
            grid_based: false,
            brush_size: BrushSize::Medium,
            paint_thickness: 0.7,
            color_mixing: 0.8,
            texture_density: 0.3,
            stroke_variation: 0.9,
        }
    }
}
