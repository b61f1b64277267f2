//! CLI argument definitions using clap.
//!
//! Running without a subcommand generates the constant files. `init` writes a
//! default `.schemeconstrc.json`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::render::TargetSelection;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Flags for a generator run. Each one overrides the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Scheme file to scan (overrides config file)
    #[arg(long, value_name = "PATH")]
    pub schema: Option<PathBuf>,

    /// Directory receiving ColumnName and TableName (overrides config file)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Namespace of the generated PHP classes (overrides config file)
    #[arg(long)]
    pub namespace: Option<String>,

    /// Output language (overrides config file)
    #[arg(long, value_enum)]
    pub target: Option<TargetSelection>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .schemeconstrc.json configuration file
    Init,
}
