//! Generate command implementation.
//!
//! Resolves a preset, applies CLI overrides, runs the generator, and saves
//! the result in the format the output extension implies.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::canvas::Canvas;
use crate::config::ShapeType;
use crate::error::{AbstroError, Result};
use crate::export;
use crate::generate::Generator;
use crate::output::{display_path, Printer};
use crate::presets::get_preset;
use crate::types::Colour;

/// Generate a single piece of abstract art
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output file path (.png, .jpg, .svg)
    #[arg(long, short)]
    pub output: PathBuf,

    /// Canvas width in pixels
    #[arg(long, short = 'W', default_value = "800")]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, short = 'H', default_value = "600")]
    pub height: u32,

    /// Random seed for reproducible results
    #[arg(long, short)]
    pub seed: Option<u64>,

    /// Preset style name
    #[arg(long, short, default_value = "organic")]
    pub preset: String,

    /// Number of elements to generate (overrides the preset)
    #[arg(long, short)]
    pub complexity: Option<u32>,

    /// Colour palette name (overrides the preset)
    #[arg(long)]
    pub palette: Option<String>,

    /// Type of shapes to generate (overrides the preset)
    #[arg(long)]
    pub shape_type: Option<ShapeType>,

    /// Background colour as hex (#ffffff) or RGB (255,255,255)
    #[arg(long)]
    pub background: Option<Colour>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let printer = Printer::new();

    let mut config = get_preset(&args.preset)?;
    if let Some(complexity) = args.complexity {
        config.complexity = complexity;
    }
    if let Some(palette) = &args.palette {
        config.palette = palette.clone();
    }
    if let Some(shape_type) = args.shape_type {
        config.shape_type = shape_type;
    }

    if config.complexity == 0 {
        printer.warning("Warning", "complexity is 0, nothing will be drawn");
    }

    let mut canvas = Canvas::new(args.width, args.height, args.seed, args.background);
    canvas.set_palette_name(&config.palette);

    let seed_note = match canvas.seed() {
        Some(seed) => format!("seed {}", seed),
        None => "random seed".to_string(),
    };
    printer.status(
        "Generating",
        &format!(
            "{} ({}x{}, {})",
            args.preset.to_lowercase(),
            args.width,
            args.height,
            seed_note
        ),
    );

    Generator::from_config(config).apply(&mut canvas);

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| AbstroError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    export::save(&canvas, &args.output)?;
    printer.status("Saved", &display_path(&args.output));

    Ok(())
}
