//! List command implementation.
//!
//! Prints the available presets and palettes. Human-readable output goes to
//! stderr through the printer; `--json` writes a machine-readable document
//! to stdout.

use clap::Args;
use serde::Serialize;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::output::Printer;
use crate::presets::{get_preset, PRESETS};
use crate::types::Palette;

/// List available presets and colour palettes
#[derive(Args, Debug)]
pub struct ListArgs {
    /// List presets only
    #[arg(long)]
    pub presets: bool,

    /// List colour palettes only
    #[arg(long)]
    pub palettes: bool,

    /// Emit machine-readable JSON on stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct PresetEntry {
    name: &'static str,
    description: &'static str,
    config: GeneratorConfig,
}

#[derive(Serialize)]
struct PaletteEntry {
    name: &'static str,
    colours: Vec<String>,
}

#[derive(Serialize)]
struct Inventory {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    presets: Vec<PresetEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    palettes: Vec<PaletteEntry>,
}

pub fn run(args: ListArgs) -> Result<()> {
    // With neither flag set, show everything
    let show_presets = args.presets || !args.palettes;
    let show_palettes = args.palettes || !args.presets;

    if args.json {
        return print_json(show_presets, show_palettes);
    }

    let printer = Printer::new();
    if show_presets {
        printer.info("Presets", "");
        for (name, description) in PRESETS {
            printer.info(name, description);
        }
    }
    if show_palettes {
        printer.info("Palettes", "");
        for name in Palette::names() {
            let palette = Palette::from_name(name);
            let swatch = palette
                .iter()
                .take(3)
                .map(|c| c.css_rgb())
                .collect::<Vec<_>>()
                .join(", ");
            printer.info(name, &format!("{}{}", swatch, printer.dim(" ...")));
        }
    }

    Ok(())
}

fn print_json(show_presets: bool, show_palettes: bool) -> Result<()> {
    let presets = if show_presets {
        PRESETS
            .iter()
            .map(|&(name, description)| {
                // Listed names always resolve
                let config = get_preset(name)?;
                Ok(PresetEntry {
                    name,
                    description,
                    config,
                })
            })
            .collect::<Result<Vec<_>>>()?
    } else {
        Vec::new()
    };

    let palettes = if show_palettes {
        Palette::names()
            .into_iter()
            .map(|name| PaletteEntry {
                name,
                colours: Palette::from_name(name)
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
            })
            .collect()
    } else {
        Vec::new()
    };

    let inventory = Inventory { presets, palettes };
    // Only fails on a non-serialisable type, which these are not
    println!("{}", serde_json::to_string_pretty(&inventory).unwrap());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_all_modes() {
        for (presets, palettes) in [(false, false), (true, false), (false, true), (true, true)] {
            run(ListArgs {
                presets,
                palettes,
                json: false,
            })
            .unwrap();
        }
    }

    #[test]
    fn test_json_inventory_serialises() {
        let inventory = Inventory {
            presets: vec![PresetEntry {
                name: "organic",
                description: "test",
                config: get_preset("organic").unwrap(),
            }],
            palettes: vec![PaletteEntry {
                name: "warm",
                colours: Palette::from_name("warm")
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
            }],
        };

        let json = serde_json::to_string(&inventory).unwrap();
        assert!(json.contains("\"organic\""));
        assert!(json.contains("\"complexity\":40"));
        assert!(json.contains("#FF"));
    }

    #[test]
    fn test_json_runs_for_all_flag_combinations() {
        for (presets, palettes) in [(false, false), (true, false), (false, true)] {
            run(ListArgs {
                presets,
                palettes,
                json: true,
            })
            .unwrap();
        }
    }
}
