//! Metadata heads for markdown documents.
//!
//! A head is a block of `key: value` lines wrapped in an HTML comment with
//! `+` markers, placed before the markdown content:
//!
//! ```text
//! <!-- +
//! title: test title
//! urlid: test-title
//! overview: this is a sample markdown
//! cate: sample of usage
//! tags: #sample, #test, #parse
//! image: test-title.png
//! published_at: 2020-09-06T12:23:00Z
//! + -->
//! ## title
//! content
//! ```
//!
//! Recognized keys fill the typed fields of [`Head`]; any other key is kept
//! in [`Head::extra`]. Everything outside the head block is the body, byte
//! for byte. A document without a complete head is all body.
//!
//! # Example
//! ```
//! let input = "<!-- +\ntitle: Hello\ntags: #a, #b\n+ -->\n# Hello\n";
//! let doc = mdhead::parse_str(input).unwrap();
//!
//! assert_eq!(doc.head.title.as_deref(), Some("Hello"));
//! assert_eq!(doc.head.tags, vec!["a", "b"]);
//! assert_eq!(doc.body_str(), "\n# Hello\n");
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod fields;
pub mod head;
pub mod parser;

use std::fs::File;
use std::io::Read;
use std::path::Path;

pub use config::ParserConfig;
pub use error::{Error, Result};
pub use head::{Field, Head};
pub use parser::{CLOSE_MARKER, HeadParser, OPEN_MARKER, ParsedDocument, State};

/// Read a whole document, splitting it into head and body.
pub fn parse<R: Read>(reader: R) -> Result<ParsedDocument> {
    HeadParser::new().parse(reader)
}

/// Read only as far as needed to extract the head. No body is kept.
pub fn parse_head<R: Read>(reader: R) -> Result<Head> {
    HeadParser::with_config(ParserConfig::head_only())
        .parse(reader)
        .map(|doc| doc.head)
}

/// Parse an in-memory document.
pub fn parse_str(content: &str) -> Result<ParsedDocument> {
    parse_bytes(content.as_bytes())
}

/// Parse an in-memory document.
pub fn parse_bytes(content: &[u8]) -> Result<ParsedDocument> {
    parse(content)
}

/// Open and parse the document at `path`.
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParsedDocument> {
    parse(open(path.as_ref())?)
}

/// Open the document at `path` and extract its head.
pub fn parse_head_file(path: impl AsRef<Path>) -> Result<Head> {
    parse_head(open(path.as_ref())?)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| Error::file(path, e))
}
