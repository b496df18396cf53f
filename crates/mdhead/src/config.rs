//! Parser configuration

use serde::{Deserialize, Serialize};

/// Default capacity of the internal read buffer.
pub const DEFAULT_READ_CHUNK_SIZE: usize = 2048;

/// Settings for a single [`HeadParser`](crate::HeadParser) run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Collect everything outside the head as the body.
    ///
    /// When false, no body is kept and reading stops at the close marker.
    pub capture_body: bool,
    /// Bytes requested from the reader per read call. Zero is treated as one.
    pub read_chunk_size: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            capture_body: true,
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
        }
    }
}

impl ParserConfig {
    /// Configuration for head-only parsing.
    pub fn head_only() -> Self {
        Self {
            capture_body: false,
            ..Self::default()
        }
    }

    pub fn with_read_chunk_size(mut self, size: usize) -> Self {
        self.read_chunk_size = size;
        self
    }

    pub(crate) fn chunk_size(&self) -> usize {
        self.read_chunk_size.max(1)
    }
}
