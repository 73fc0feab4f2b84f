use crate::vcs::commands::CommandError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LastGreenError {
    #[error("No repository found from: {path}")]
    RepositoryNotFound { path: PathBuf },

    #[error("Failed to read the history with `{command}`: {source}")]
    LogFailed {
        command: String,
        #[source]
        source: CommandError,
    },

    #[error("Failed to check out {commit}: {source}")]
    CheckoutFailed {
        commit: String,
        #[source]
        source: CommandError,
    },

    #[error("Could not run build `{command}`: {source}")]
    BuildFailed {
        command: String,
        #[source]
        source: CommandError,
    },

    #[error("Can't find a non passing commit/revision in the available history")]
    NoFailingRevision,

    #[error("Can't find a passing commit/revision before {before}")]
    NoPassingRevision { before: String },

    #[error("Failed to render report: {0}")]
    Report(#[from] serde_json::Error),
}

impl LastGreenError {
    /// Process exit code for this failure. Usage errors (2) are reported by clap.
    pub fn exit_code(&self) -> i32 {
        match self {
            LastGreenError::RepositoryNotFound { .. } => 3,
            LastGreenError::LogFailed { .. } => 4,
            LastGreenError::CheckoutFailed { .. } | LastGreenError::BuildFailed { .. } => 5,
            LastGreenError::NoFailingRevision => 6,
            LastGreenError::NoPassingRevision { .. } => 7,
            LastGreenError::Report(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, LastGreenError>;
