use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by queries, the pattern demo and config loading.
#[derive(Error, Debug)]
pub enum Error {
    /// A required element was missing: empty sequence or no element matched.
    #[error("{operation}: sequence contains no matching element")]
    NotFound { operation: &'static str },

    /// Text rejected by a pattern check. Recovered by re-prompting.
    #[error("input '{input}' does not match pattern '{pattern}'")]
    InvalidInput { input: String, pattern: String },

    /// An arithmetic total left the range of its type.
    #[error("{operation}: arithmetic overflow")]
    Overflow { operation: &'static str },

    #[error("input closed before a valid line was entered")]
    InputClosed,

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to load config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl Error {
    pub fn not_found(operation: &'static str) -> Self {
        Self::NotFound { operation }
    }

    pub fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }

    pub fn invalid_input(input: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
            pattern: pattern.into(),
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
