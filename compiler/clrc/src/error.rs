use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a driver command.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot read `{}`: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write `{}`: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid JSON in `{}`: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("{0}")]
    Usage(String),
}

impl DriverError {
    pub fn usage(message: impl Into<String>) -> Self {
        DriverError::Usage(message.into())
    }
}
