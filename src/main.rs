use abstro::cli::{Cli, Commands};
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => abstro::cli::generate::run(args)?,
        Commands::Batch(args) => abstro::cli::batch::run(args)?,
        Commands::List(args) => abstro::cli::list::run(args)?,
        Commands::Completions(args) => abstro::cli::completions::run(args)?,
    }

    Ok(())
}
