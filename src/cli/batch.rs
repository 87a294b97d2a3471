//! Batch command implementation.
//!
//! Generates many pieces at once, each with its own seed baked into the
//! filename so any piece can be regenerated individually.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::canvas::Canvas;
use crate::error::{AbstroError, Result};
use crate::export;
use crate::generate::Generator;
use crate::output::{display_path, plural, Printer};
use crate::presets::{get_preset, list_presets};

/// Output file format for batch generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Png,
    Jpg,
    Svg,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ext = match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Svg => "svg",
        };
        f.write_str(ext)
    }
}

/// Generate multiple pieces in batch mode
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Number of images to generate
    #[arg(long, short = 'n', default_value = "1")]
    pub count: u32,

    /// Output directory
    #[arg(long, short = 'd', default_value = "generated")]
    pub output_dir: PathBuf,

    /// Filename prefix
    #[arg(long, default_value = "abstro")]
    pub prefix: String,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Canvas width in pixels
    #[arg(long, short = 'W', default_value = "800")]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, short = 'H', default_value = "600")]
    pub height: u32,

    /// Pick a random preset for each image
    #[arg(long)]
    pub random_presets: bool,

    /// Seed for the batch itself, making the whole run reproducible
    #[arg(long, short)]
    pub seed: Option<u64>,
}

pub fn run(args: BatchArgs) -> Result<()> {
    let printer = Printer::new();

    if !args.output_dir.exists() {
        fs::create_dir_all(&args.output_dir).map_err(|e| AbstroError::Io {
            path: args.output_dir.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    // One meta stream drives preset picks and per-image seeds
    let mut batch_rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let presets = list_presets();

    printer.status(
        "Batch",
        &format!(
            "{} to {}",
            plural(args.count as usize, "image", "images"),
            display_path(&args.output_dir)
        ),
    );

    for i in 0..args.count {
        let preset = if args.random_presets {
            presets[batch_rng.gen_range(0..presets.len())]
        } else {
            "organic"
        };
        let seed = batch_rng.gen_range(0..=999_999u64);

        let filename = format!("{}_{:04}_{}_{}.{}", args.prefix, i + 1, preset, seed, args.format);
        let path = args.output_dir.join(&filename);

        let config = get_preset(preset)?;
        let mut canvas = Canvas::new(args.width, args.height, Some(seed), None);
        canvas.set_palette_name(&config.palette);
        Generator::from_config(config).apply(&mut canvas);
        export::save(&canvas, &path)?;

        printer.status("Generated", &filename);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(dir: PathBuf) -> BatchArgs {
        BatchArgs {
            count: 3,
            output_dir: dir,
            prefix: "abstro".to_string(),
            format: OutputFormat::Png,
            width: 120,
            height: 90,
            random_presets: false,
            seed: Some(7),
        }
    }

    #[test]
    fn test_batch_writes_count_files() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("generated");
        run(args(out.clone())).unwrap();

        let files: Vec<_> = fs::read_dir(&out).unwrap().collect();
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_filenames_carry_index_preset_and_seed() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("generated");
        run(args(out.clone())).unwrap();

        let mut names: Vec<String> = fs::read_dir(&out)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();

        for (i, name) in names.iter().enumerate() {
            assert!(name.starts_with(&format!("abstro_{:04}_organic_", i + 1)), "{}", name);
            assert!(name.ends_with(".png"));
        }
    }

    #[test]
    fn test_seeded_batch_is_reproducible() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        run(args(a.clone())).unwrap();
        run(args(b.clone())).unwrap();

        let read_sorted = |d: &PathBuf| {
            let mut names: Vec<String> = fs::read_dir(d)
                .unwrap()
                .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                .collect();
            names.sort();
            names
        };
        let names_a = read_sorted(&a);
        assert_eq!(names_a, read_sorted(&b));
        for name in names_a {
            assert_eq!(
                fs::read(a.join(&name)).unwrap(),
                fs::read(b.join(&name)).unwrap()
            );
        }
    }

    #[test]
    fn test_random_presets_stay_valid() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("generated");
        let mut batch = args(out.clone());
        batch.count = 5;
        batch.random_presets = true;
        batch.format = OutputFormat::Svg;
        run(batch).unwrap();

        for entry in fs::read_dir(&out).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().into_owned();
            // abstro_NNNN_<preset>_<seed>.svg
            let middle = name
                .strip_prefix("abstro_")
                .and_then(|s| s.strip_suffix(".svg"))
                .unwrap();
            let preset: String = middle
                .splitn(2, '_')
                .nth(1)
                .unwrap()
                .rsplitn(2, '_')
                .nth(1)
                .unwrap()
                .to_string();
            assert!(list_presets().contains(&preset.as_str()), "{}", preset);
        }
    }
}
