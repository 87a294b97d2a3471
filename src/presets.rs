//! Named preset styles.
//!
//! A preset bundles a composite generator with tuned knobs and a palette.
//! Unknown preset names fail with an error that lists every valid name.

use crate::config::{BrushSize, GeneratorConfig, GeneratorKind, ShapeType};
use crate::error::{AbstroError, Result};

/// All preset names with one-line descriptions, in declaration order.
pub const PRESETS: &[(&str, &str)] = &[
    ("organic", "Organic, flowing shapes with natural colours"),
    ("mosaic", "Colourful geometric mosaic pattern"),
    ("minimal", "Clean, minimal design with limited elements"),
    ("chaos", "High energy, chaotic composition with many elements"),
    ("sunset", "Warm, sunset-inspired organic shapes"),
    ("geometric", "Clean geometric shapes and patterns"),
    ("flow", "Flowing, water-like bezier curves"),
    ("pastel_dream", "Soft, dreamy pastel circles"),
    ("line_art", "Minimalist line-based composition"),
    ("warm_abstract", "Warm, abstract organic forms"),
    ("grid_modern", "Modern grid-based geometric pattern"),
    ("forest", "Nature-inspired green organic shapes"),
    ("oil_painting", "Traditional oil painting style with brush strokes"),
    ("oil_impressionist", "Impressionist oil painting with fine brush work"),
    ("oil_abstract", "Abstract oil painting with thick impasto technique"),
    ("oil_portrait", "Oil painting suitable for portrait-like compositions"),
];

/// All valid preset names.
pub fn list_presets() -> Vec<&'static str> {
    PRESETS.iter().map(|(name, _)| *name).collect()
}

/// One-line description for a preset, if it exists.
pub fn preset_description(name: &str) -> Option<&'static str> {
    let name = name.to_lowercase();
    PRESETS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, desc)| *desc)
}

/// Look up a preset configuration by name (case insensitive).
///
/// Unknown names fail with an error enumerating every valid preset.
pub fn get_preset(name: &str) -> Result<GeneratorConfig> {
    let lookup = name.to_lowercase();
    preset_config(&lookup).ok_or_else(|| AbstroError::Config {
        message: format!(
            "Preset '{}' not found. Available presets: {}",
            name,
            list_presets().join(", ")
        ),
        help: Some("Run `abstro list --presets` to see descriptions".to_string()),
    })
}

fn preset_config(name: &str) -> Option<GeneratorConfig> {
    let base = GeneratorConfig::default();

    let config = match name {
        "organic" => GeneratorConfig {
            generator: GeneratorKind::Organic,
            complexity: 40,
            palette: "earth".to_string(),
            flow_field_strength: 0.7,
            organic_factor: 0.8,
            shape_type: ShapeType::Mixed,
            ..base
        },
        "mosaic" => GeneratorConfig {
            generator: GeneratorKind::Geometric,
            complexity: 100,
            palette: "vibrant".to_string(),
            grid_based: true,
            shape_type: ShapeType::Polygon,
            ..base
        },
        "minimal" => GeneratorConfig {
            generator: GeneratorKind::Geometric,
            complexity: 15,
            palette: "monochrome".to_string(),
            symmetry: true,
            shape_type: ShapeType::Circle,
            ..base
        },
        "chaos" => GeneratorConfig {
            generator: GeneratorKind::Pattern,
            complexity: 200,
            palette: "neon".to_string(),
            shape_type: ShapeType::Mixed,
            noise_density: 0.005,
            noise_color_range: 50,
            ..base
        },
        "sunset" => GeneratorConfig {
            generator: GeneratorKind::Organic,
            complexity: 30,
            palette: "sunset".to_string(),
            flow_field_strength: 0.4,
            organic_factor: 0.6,
            shape_type: ShapeType::Circle,
            ..base
        },
        "geometric" => GeneratorConfig {
            generator: GeneratorKind::Geometric,
            complexity: 60,
            palette: "cool".to_string(),
            symmetry: false,
            grid_based: false,
            shape_type: ShapeType::Polygon,
            ..base
        },
        "flow" => GeneratorConfig {
            generator: GeneratorKind::Organic,
            complexity: 25,
            palette: "ocean".to_string(),
            flow_field_strength: 1.2,
            organic_factor: 1.0,
            shape_type: ShapeType::Bezier,
            ..base
        },
        "pastel_dream" => GeneratorConfig {
            generator: GeneratorKind::Pattern,
            complexity: 80,
            palette: "pastel".to_string(),
            shape_type: ShapeType::Circle,
            noise_density: 0.001,
            ..base
        },
        "line_art" => GeneratorConfig {
            generator: GeneratorKind::Pattern,
            complexity: 120,
            palette: "monochrome".to_string(),
            shape_type: ShapeType::Line,
            ..base
        },
        "warm_abstract" => GeneratorConfig {
            generator: GeneratorKind::Organic,
            complexity: 50,
            palette: "warm".to_string(),
            flow_field_strength: 0.8,
            organic_factor: 0.9,
            shape_type: ShapeType::Mixed,
            ..base
        },
        "grid_modern" => GeneratorConfig {
            generator: GeneratorKind::Geometric,
            // 12x12 grid
            complexity: 144,
            palette: "vibrant".to_string(),
            grid_based: true,
            shape_type: ShapeType::Mixed,
            ..base
        },
        "forest" => GeneratorConfig {
            generator: GeneratorKind::Organic,
            complexity: 35,
            palette: "forest".to_string(),
            flow_field_strength: 0.6,
            organic_factor: 1.2,
            shape_type: ShapeType::Mixed,
            ..base
        },
        "oil_painting" => GeneratorConfig {
            generator: GeneratorKind::OilPainting,
            complexity: 60,
            palette: "warm".to_string(),
            brush_size: BrushSize::Medium,
            paint_thickness: 0.8,
            color_mixing: 0.9,
            texture_density: 0.4,
            stroke_variation: 0.8,
            ..base
        },
        "oil_impressionist" => GeneratorConfig {
            generator: GeneratorKind::OilPainting,
            complexity: 80,
            palette: "pastel".to_string(),
            brush_size: BrushSize::Fine,
            paint_thickness: 0.6,
            color_mixing: 0.7,
            texture_density: 0.2,
            stroke_variation: 1.0,
            ..base
        },
        "oil_abstract" => GeneratorConfig {
            generator: GeneratorKind::OilPainting,
            complexity: 45,
            palette: "vibrant".to_string(),
            brush_size: BrushSize::Thick,
            paint_thickness: 1.0,
            color_mixing: 0.8,
            texture_density: 0.6,
            stroke_variation: 0.9,
            ..base
        },
        "oil_portrait" => GeneratorConfig {
            generator: GeneratorKind::OilPainting,
            complexity: 70,
            palette: "earth".to_string(),
            brush_size: BrushSize::Mixed,
            paint_thickness: 0.7,
            color_mixing: 0.6,
            texture_density: 0.3,
            stroke_variation: 0.5,
            ..base
        },
        _ => return None,
    };

    Some(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_preset_resolves() {
        for name in list_presets() {
            let config = get_preset(name).unwrap();
            assert!(config.complexity > 0, "{} has zero complexity", name);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(get_preset("ORGANIC").unwrap(), get_preset("organic").unwrap());
    }

    #[test]
    fn test_unknown_preset_lists_valid_names() {
        let err = get_preset("nonexistent").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("nonexistent"));
        for name in list_presets() {
            assert!(message.contains(name), "missing {} in error", name);
        }
    }

    #[test]
    fn test_organic_preset_values() {
        let cfg = get_preset("organic").unwrap();
        assert_eq!(cfg.generator, GeneratorKind::Organic);
        assert_eq!(cfg.complexity, 40);
        assert_eq!(cfg.palette, "earth");
        assert_eq!(cfg.flow_field_strength, 0.7);
    }

    #[test]
    fn test_mosaic_preset_values() {
        let cfg = get_preset("mosaic").unwrap();
        assert_eq!(cfg.generator, GeneratorKind::Geometric);
        assert_eq!(cfg.complexity, 100);
        assert!(cfg.grid_based);
    }

    #[test]
    fn test_descriptions_exist_for_all() {
        for name in list_presets() {
            assert!(preset_description(name).is_some(), "{} lacks description", name);
        }
        assert!(preset_description("nope").is_none());
    }
}
