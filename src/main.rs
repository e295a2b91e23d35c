//! crategen command-line entry point.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use crategen::{config::CrategenConfig, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config: CrategenConfig = cli::load_config(&cli)?;

    match &cli.command {
        Commands::Build { args } => cli::build::run_build(args, &config),
        Commands::Check { artifact } => {
            if !cli::check::run_check(artifact.as_deref(), &config)? {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Tree { assets } => cli::tree::run_tree(assets.as_deref(), &config),
    }
}
