pub mod batch;
pub mod completions;
pub mod generate;
pub mod list;

use clap::{Parser, Subcommand};

/// abstro - Seeded procedural abstract art generator
#[derive(Parser, Debug)]
#[command(name = "abstro")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a single piece of abstract art
    Generate(generate::GenerateArgs),

    /// Generate multiple pieces in batch mode
    Batch(batch::BatchArgs),

    /// List available presets and colour palettes
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
