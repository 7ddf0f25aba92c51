use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed (per-file parse failures included)
/// - `Error` (2): Command failed (missing corpus, bad config, write error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed.
    Success,
    /// Command failed due to a fatal error.
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
