mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::{run_batch, run_search};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => {
            run_search(args)?;
        }
        Commands::Batch(args) => {
            run_batch(args)?;
        }
    }

    Ok(())
}
