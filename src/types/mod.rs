//! Core value types for abstro.

mod colour;
mod palette;

pub use colour::Colour;
pub use palette::Palette;
