//! Command dispatch.
//!
//! Resolves the effective generator options (flag > config file > default)
//! and runs the pipeline.

use std::{env, path::Path};

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command, GenerateArgs},
    commands::init::init,
    exit_status::ExitStatus,
    report::print_report,
};
use crate::config::{Config, load_config};
use crate::core::{GenerateOptions, generate};

pub fn run(
    Arguments {
        command,
        generate: generate_args,
    }: Arguments,
) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to resolve working directory")?;
    match command {
        Some(Command::Init) => init(&cwd),
        None => run_generate(&cwd, &generate_args),
    }
}

fn run_generate(cwd: &Path, args: &GenerateArgs) -> Result<ExitStatus> {
    let loaded = load_config(cwd)?;
    let options = resolve_options(&loaded.config, args)?;

    let report = generate(&options)?;
    print_report(&report, loaded.source.as_deref(), args.verbose);

    Ok(ExitStatus::Success)
}

/// Merge CLI flags over the loaded configuration and validate the result.
///
/// Relative paths stay relative to the working directory.
pub fn resolve_options(config: &Config, args: &GenerateArgs) -> Result<GenerateOptions> {
    let merged = Config {
        schema_file: args
            .schema
            .as_ref()
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or_else(|| config.schema_file.clone()),
        output_dir: args
            .output_dir
            .as_ref()
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or_else(|| config.output_dir.clone()),
        namespace: args
            .namespace
            .clone()
            .unwrap_or_else(|| config.namespace.clone()),
        target: args.target.unwrap_or(config.target),
    };
    merged.validate()?;

    Ok(GenerateOptions {
        schema_path: merged.schema_file.into(),
        output_dir: merged.output_dir.into(),
        targets: merged.target.targets(),
        namespace: merged.namespace,
    })
}
