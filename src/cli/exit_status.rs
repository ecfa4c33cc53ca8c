use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed successfully
/// - `Failure` (1): Command ran but could not do its job (e.g. `init` target exists)
/// - `Error` (2): Command failed (config, catalog or report write error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command ran but refused to do its work: `init` exits with this
    /// instead of overwriting an existing `paths.yml`, so scripts can tell
    /// "already set up" apart from a broken config or catalog.
    Failure,
    /// Command failed due to an error (config, catalog, report write).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
