//! Procedural generators.
//!
//! Shape generators emit primitives of a single kind; composite generators
//! orchestrate them (or their own primitive-emission logic) into a style.
//! Both are closed enum-dispatched sets rather than trait-object
//! hierarchies.

mod geometric;
mod oil;
mod organic;
mod pattern;
mod shapes;

pub use shapes::ShapeKind;

use crate::canvas::Canvas;
use crate::config::{GeneratorConfig, GeneratorKind};

/// A configured composite generator, ready to run against a canvas.
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Build the generator the configuration selects.
    pub fn from_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Run the style strategy once, mutating the canvas through its
    /// primitive draw operations.
    pub fn apply(&self, canvas: &mut Canvas) {
        match self.config.generator {
            GeneratorKind::Pattern => pattern::apply(&self.config, canvas),
            GeneratorKind::Organic => organic::apply(&self.config, canvas),
            GeneratorKind::Geometric => geometric::apply(&self.config, canvas),
            GeneratorKind::OilPainting => oil::apply(&self.config, canvas),
        }
    }
}
