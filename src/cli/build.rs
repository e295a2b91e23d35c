//! `crategen build`: generate the accessor artifact.

use super::BuildArgs;
use anyhow::{Context, Result};
use crategen::config::CrategenConfig;
use crategen::generate::{GenerateOptions, generate_with, is_artifact_valid, render_artifact};
use crategen::log;
use std::io::Write;

/// Apply command-line overrides on top of the configured options.
pub fn apply_args(mut options: GenerateOptions, args: &BuildArgs) -> GenerateOptions {
    if let Some(assets) = &args.assets {
        options.input_dir = assets.clone();
    }
    if let Some(output) = &args.output {
        options.output_root = output.clone();
    }
    if let Some(namespace) = &args.namespace {
        options.namespace = namespace.clone();
    }
    if let Some(root_type) = &args.root_type {
        options.root_type = root_type.clone();
    }
    options
}

pub fn run_build(args: &BuildArgs, config: &CrategenConfig) -> Result<()> {
    let options = apply_args(config.generate_options(), args);

    if args.dry {
        return print_artifact(&options);
    }

    if args.skip_if_valid {
        let path = options.artifact_path()?;
        if is_artifact_valid(&path) {
            log!("build"; "{} is up to date", path.display());
            return Ok(());
        }
    }

    let written = generate_with(&options)
        .with_context(|| format!("Failed to generate from `{}`", options.input_dir.display()))?;
    if written.is_none() {
        log!("build"; "nothing to do: `{}` is not a directory", options.input_dir.display());
    }
    Ok(())
}

fn print_artifact(options: &GenerateOptions) -> Result<()> {
    let Some(text) = render_artifact(options)
        .with_context(|| format!("Failed to render `{}`", options.input_dir.display()))?
    else {
        log!("build"; "nothing to do: `{}` is not a directory", options.input_dir.display());
        return Ok(());
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
