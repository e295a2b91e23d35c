//! Command-line interface module.

mod args;
pub mod build;
pub mod check;
pub mod tree;

pub use args::{BuildArgs, Cli, Commands};

use anyhow::{Context, Result};
use crategen::config::CrategenConfig;

/// Load `crategen.toml` for this invocation, or defaults if there is none.
pub fn load_config(cli: &Cli) -> Result<CrategenConfig> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let config = CrategenConfig::discover(&cwd, &cli.config)
        .with_context(|| format!("Failed to load config `{}`", cli.config.display()))?;

    match &config.config_path {
        Some(path) => crategen::debug!("config"; "using {}", path.display()),
        None => crategen::debug!("config"; "no {} found, using defaults", cli.config.display()),
    }
    Ok(config)
}
