//! Error types for mdhead

use std::path::PathBuf;

use crate::head::Field;

/// Result type for mdhead operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a parse.
///
/// Malformed head syntax is never an error: it degrades to "no head found".
/// Only malformed values of recognized fields and failing reads end a parse.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "urlid only supports letters, digits, `_` and `-`: found {found:?} at byte {position} in {value:?}"
    )]
    InvalidUrlId {
        value: String,
        found: char,
        position: usize,
    },

    #[error("Invalid {field} timestamp {value:?}: {source}")]
    InvalidTimestamp {
        field: Field,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("I/O error at {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }

    /// Whether the error came from reading the document rather than its content.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::File { .. })
    }
}
