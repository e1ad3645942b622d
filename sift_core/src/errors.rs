use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for search operations
pub type SiftResult<T> = Result<T, SiftError>;

/// Errors that can occur while building or running the search pipeline
#[derive(Error, Debug)]
pub enum SiftError {
    /// All configuration problems found in one pass, not just the first
    #[error("invalid configuration:\n{}", format_config_errors(.0))]
    InvalidConfig(Vec<String>),
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// No stage variant claimed the configuration. Unreachable by
    /// construction; fatal if it ever fires.
    #[error("no {0} stage accepts the given configuration")]
    Dispatch(&'static str),
}

fn format_config_errors(errors: &[String]) -> String {
    errors.join("\n")
}

impl SiftError {
    pub fn invalid_config(errors: Vec<String>) -> Self {
        Self::InvalidConfig(errors)
    }

    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound(path.into())
    }

    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied(path.into())
    }

    /// Maps an open/read failure to the matching variant, keeping the
    /// offending path in the message where the kind allows it.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::file_not_found(path),
            std::io::ErrorKind::PermissionDenied => Self::permission_denied(path),
            _ => Self::Io(err),
        }
    }

    /// Validation and pattern errors are detected before any file is
    /// opened; everything else surfaces mid-run.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig(_) | Self::InvalidPattern { .. })
    }
}
