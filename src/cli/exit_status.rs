use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed (a dry-run that found new keys still
///   succeeds; it reported the work to do)
/// - `Error` (2): Command failed (config error, file error, API error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command failed due to an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
