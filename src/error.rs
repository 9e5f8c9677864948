//! Error types and result aliases for yamlnorm.
//!
//! This module defines the error handling infrastructure:
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used throughout the crate
//! - [`Error`]: The typed conditions the entry point and file processor react to

use anyhow::Result as AnyhowResult;
use thiserror::Error as ThisError;

pub type Result<T> = AnyhowResult<T>;

/// Conditions that change how a run proceeds or terminates
#[derive(Debug, ThisError)]
pub enum Error {
    /// Wrong number of arguments or an unknown flag
    #[error("expected exactly one argument: the directory to normalize")]
    Invocation,

    /// The target directory is missing, not a directory, or cannot be listed
    #[error("{path} is not available: {reason}")]
    DirectoryUnavailable { path: String, reason: String },

    /// A caller-supplied configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A file's content could not be parsed into the restricted YAML schema
    #[error("{0}")]
    MalformedDocument(String),
}

impl Error {
    /// Process exit code used when this error ends the run
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Invocation | Error::InvalidConfig(_) | Error::MalformedDocument(_) => 1,
            Error::DirectoryUnavailable { .. } => 2,
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedDocument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::Invocation.exit_code(), 1);
        let unavailable = Error::DirectoryUnavailable {
            path: "data".to_string(),
            reason: "not found".to_string(),
        };
        assert_eq!(unavailable.exit_code(), 2);
        assert_eq!(Error::InvalidConfig("indent".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_directory_unavailable_message() {
        let err = Error::DirectoryUnavailable {
            path: "data".to_string(),
            reason: "not a directory".to_string(),
        };
        assert_eq!(err.to_string(), "data is not available: not a directory");
    }

    #[test]
    fn test_malformed_carries_diagnostic() {
        let err = Error::malformed("did not find expected key at line 2 column 1");
        assert_eq!(
            err.to_string(),
            "did not find expected key at line 2 column 1"
        );
    }
}
