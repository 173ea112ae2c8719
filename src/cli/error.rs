// src/cli/error.rs

use thiserror::Error;

/// Raised before any process is spawned when the supplied parameters cannot
/// form a valid command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    #[error("arguments must be a JSON object")]
    NotAnObject,
    #[error("missing required argument: '{0}'")]
    MissingField(String),
    #[error("one of {} must be provided", .0.join(", "))]
    MissingAlternative(Vec<String>),
    #[error("invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Failure modes of a single child-process invocation.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Stellar CLI not found at '{program}'. Please ensure 'stellar' is installed and in PATH, or set STELLAR_CLI_PATH.")]
    NotFound { program: String },
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Command timed out after {0}ms")]
    Timeout(u64),
    #[error("{message}")]
    Failed {
        exit_code: i32,
        message: String,
        stdout: String,
        stderr: String,
    },
    #[error("I/O error while running '{program}': {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, CliError::Timeout(_))
    }

    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CliError::Failed { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }
}
