//! Error types for the terminal
//!
//! Nothing the operator types is an error; bad menu tokens are a normal
//! branch of the state machine. These variants cover the ambient failures:
//! writing to the real terminal, reading config, saving the report file.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the library API
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config '{path}': {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("failed to export '{path}': {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown scene '{0}'")]
    UnknownScene(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TerminalError {
    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn export(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Export {
            path: path.into(),
            source,
        }
    }
}
