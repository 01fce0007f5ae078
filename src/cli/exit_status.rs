use std::process::ExitCode;

use crate::core::TranslateError;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed successfully
/// - `Failure` (1): The catalog lacks what was asked for (missing string, config already exists)
/// - `Error` (2): Command failed (invalid language, unreadable catalog, bad config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status for a command that returned `err`.
    ///
    /// A missing catalog entry is a content problem, not a broken setup.
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<TranslateError>() {
            Some(TranslateError::MissingCatalogEntry(_)) => ExitStatus::Failure,
            _ => ExitStatus::Error,
        }
    }
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
