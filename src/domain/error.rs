use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for gist-sweep operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No account was given to sweep.
    #[error("No username defined (with -u flag).")]
    MissingUsername,

    /// Description pattern failed to compile.
    #[error("Invalid pattern '{pattern}': {details}")]
    InvalidPattern { pattern: String, details: String },

    /// Credential cache is readable or writable by other users.
    #[error(
        "Credential file {} is accessible by other users (mode {mode:o}); restrict it with chmod 400",
        .path.display()
    )]
    InsecureCredentialFile { path: PathBuf, mode: u32 },

    /// Credential cache exists but cannot be parsed.
    #[error("Failed to read credential file {}: {details}", .path.display())]
    CredentialFile { path: PathBuf, details: String },

    /// Operator supplied an empty access token.
    #[error("No personal access token provided")]
    MissingToken,

    /// GitHub API request failed.
    #[error(
        "GitHub API error{}: {message}",
        .status.map(|s| format!(" ({})", s)).unwrap_or_default()
    )]
    GitHubApi { message: String, status: Option<u16> },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn api_error<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        AppError::GitHubApi { message: message.into(), status }
    }

    /// True for errors detected before any remote call is made.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            AppError::Configuration(_)
                | AppError::MissingUsername
                | AppError::InvalidPattern { .. }
                | AppError::InsecureCredentialFile { .. }
                | AppError::CredentialFile { .. }
                | AppError::MissingToken
        )
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on error classes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::MissingUsername
            | AppError::InvalidPattern { .. }
            | AppError::CredentialFile { .. }
            | AppError::MissingToken => io::ErrorKind::InvalidInput,
            AppError::InsecureCredentialFile { .. } => io::ErrorKind::PermissionDenied,
            AppError::GitHubApi { .. } => io::ErrorKind::Other,
        }
    }
}
