//! abstro - Seeded procedural abstract art generator
//!
//! A library for generating abstract 2D compositions from named presets,
//! rendered simultaneously to a pixel raster and a matching SVG element
//! list. A fixed seed reproduces a piece bit for bit.

pub mod canvas;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod generate;
pub mod output;
pub mod presets;
pub mod types;

pub use canvas::{Canvas, VectorElement};
pub use config::{BrushSize, GeneratorConfig, GeneratorKind, ShapeType};
pub use error::{AbstroError, Result};
pub use generate::{Generator, ShapeKind};
pub use presets::{get_preset, list_presets, preset_description};
pub use types::{Colour, Palette};
