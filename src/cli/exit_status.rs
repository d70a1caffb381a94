use std::process::ExitCode;

/// Exit status for the extractor CLI.
///
/// - `Success` (0): run completed and output files were written, even when
///   no strings were found
/// - `Error` (1): fatal error (input path missing, unreadable template,
///   output write failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
