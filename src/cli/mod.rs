//! Command-line interface layer.

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, GenerateArgs};
pub use exit_status::ExitStatus;
pub use report::{print_error, print_report};
pub use run::resolve_options;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(args)
}
