//! sansuf - SANS user file inspection tool

use anyhow::Result;
use clap::Parser;

use sansuf::cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { file, family, json } => commands::list::execute(&file, family, json),
        Commands::Check { file } => commands::check::execute(&file),
        Commands::Show { file, key } => commands::show::execute(&file, &key),
    }
}
