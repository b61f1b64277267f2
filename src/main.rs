use std::process::ExitCode;

use clap::Parser;
use schemeconst::cli::{Arguments, ExitStatus, print_error};

fn main() -> ExitCode {
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(err) if !err.use_stderr() => {
            let _ = err.print();
            return ExitStatus::Success.into();
        }
        Err(err) => {
            print!("{}", err);
            return ExitStatus::Failure.into();
        }
    };

    match schemeconst::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            print_error(&err);
            ExitStatus::Failure.into()
        }
    }
}
