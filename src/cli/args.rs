//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Compile an asset directory into typed Rust accessors
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "crategen.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate the accessor source file
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },

    /// Check whether an artifact was produced by this generator build
    #[command(visible_alias = "c")]
    Check {
        /// Artifact to check (default: the configured output)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        artifact: Option<PathBuf>,
    },

    /// Print the namespace tree of the asset directory
    #[command(visible_alias = "t")]
    Tree {
        /// Asset directory (relative to current directory)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        assets: Option<PathBuf>,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Asset directory (relative to current directory)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub assets: Option<PathBuf>,

    /// Output directory (relative to current directory)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Target module path, e.g. `assets` or `app::res`
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Name of the generated root type
    #[arg(long)]
    pub root_type: Option<String>,

    /// Leave the artifact alone if its generator hash is current
    #[arg(short, long)]
    pub skip_if_valid: bool,

    /// Print the artifact to stdout instead of writing it
    #[arg(short, long)]
    pub dry: bool,
}
