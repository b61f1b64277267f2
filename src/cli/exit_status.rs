use std::process::ExitCode;

/// Exit status of a run.
///
/// - `Success` (0): constant files generated (or config created)
/// - `Failure` (1): anything went wrong; the error was already reported
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
        }
    }
}
