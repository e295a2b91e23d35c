//! Generation error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generation run.
///
/// Font parse failures are not represented here: they are recovered locally
/// by falling back to the file name.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("`{}` does not exist or is not a directory", .0.display())]
    InvalidInput(PathBuf),

    #[error("IO error when reading `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to write artifact `{}`", .0.display())]
    ArtifactWrite(PathBuf, #[source] std::io::Error),

    #[error("no free identifier for `{name}` after {attempts} suffix attempts")]
    IdentifierExhausted { name: String, attempts: usize },

    #[error("invalid {kind} `{value}`: {reason}")]
    InvalidNamespace {
        kind: &'static str,
        value: String,
        reason: &'static str,
    },
}

pub type Result<T, E = GenerateError> = std::result::Result<T, E>;
