//! Streaming head parser.
//!
//! Classifies every input byte as body or head in a single pass:
//!
//! ```text
//! Body -> OpenMarker(1..6) -> Head -> Key -> AfterKey -> Value -> Head ...
//!                             Head -> CloseMarker(1..5) -> Drain
//! ```
//!
//! Bytes consumed after a candidate `<` are held in a replay buffer. If the
//! open marker fails to match, or the stream ends before the close marker
//! completes, the replay buffer is written back to the body so that no input
//! byte is lost.

use std::io::{BufRead, BufReader, ErrorKind, Read};

use crate::classify::{is_key_byte, is_letter, is_whitespace};
use crate::config::ParserConfig;
use crate::error::Result;
use crate::fields;
use crate::head::Head;

/// Marker opening a head block.
pub const OPEN_MARKER: &[u8] = b"<!-- +";
/// Marker closing a head block.
pub const CLOSE_MARKER: &[u8] = b"+ -->";

/// Parser state.
///
/// The marker states carry how many bytes of their marker are matched so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Outside any head; bytes go to the body.
    Body,
    /// A prefix of [`OPEN_MARKER`] has been matched.
    OpenMarker(usize),
    /// Inside the head, between lines.
    Head,
    /// Reading a key.
    Key,
    /// Skipping whitespace after `:`.
    AfterKey,
    /// Reading a value up to the newline.
    Value,
    /// A prefix of [`CLOSE_MARKER`] has been matched.
    CloseMarker(usize),
    /// The head is complete; the rest of the input is body.
    Drain,
}

/// Head and body of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    pub head: Head,
    /// Every input byte outside the head block, in document order.
    pub body: Vec<u8>,
}

impl ParsedDocument {
    /// The body as text, replacing invalid UTF-8.
    pub fn body_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Split into head and body without copying.
    pub fn into_parts(self) -> (Head, Vec<u8>) {
        (self.head, self.body)
    }
}

/// Single-use streaming parser. Create one per document.
///
/// # Example
/// ```
/// use mdhead::{HeadParser, ParserConfig};
///
/// let input = "<!-- +\ntitle: Hello\n+ -->\n# Hello\n";
/// let doc = HeadParser::with_config(ParserConfig::default())
///     .parse(input.as_bytes())
///     .unwrap();
/// assert_eq!(doc.head.title.as_deref(), Some("Hello"));
/// assert_eq!(doc.body_str(), "\n# Hello\n");
/// ```
#[derive(Debug)]
pub struct HeadParser {
    config: ParserConfig,
    state: State,
    key: Vec<u8>,
    value: Vec<u8>,
    replay: Vec<u8>,
    head: Head,
    body: Vec<u8>,
}

impl Default for HeadParser {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadParser {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            state: State::Body,
            key: Vec::new(),
            value: Vec::new(),
            replay: Vec::new(),
            head: Head::default(),
            body: Vec::new(),
        }
    }

    /// Consume `reader` and split it into head and body.
    ///
    /// With body capture disabled, reading stops once the close marker is
    /// matched and the returned body is empty.
    ///
    /// # Errors
    /// Returns an error for an invalid `urlid`, an unparsable timestamp, or a
    /// failed read. No head is returned in that case.
    pub fn parse<R: Read>(mut self, reader: R) -> Result<ParsedDocument> {
        let mut reader = BufReader::with_capacity(self.config.chunk_size(), reader);

        while self.state != State::Drain {
            let chunk = match reader.fill_buf() {
                Ok(chunk) => chunk,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if chunk.is_empty() {
                return Ok(self.finish());
            }

            let mut used = 0;
            for &b in chunk {
                used += 1;
                self.step(b)?;
                if self.state == State::Drain {
                    break;
                }
            }
            reader.consume(used);
        }

        if self.config.capture_body {
            reader.read_to_end(&mut self.body)?;
        }
        Ok(self.finish())
    }

    fn step(&mut self, b: u8) -> Result<()> {
        match self.state {
            State::Body => self.in_body(b),
            State::OpenMarker(matched) => self.in_open_marker(matched, b),
            State::Head => self.in_head(b),
            State::Key => self.in_key(b),
            State::AfterKey => self.in_after_key(b),
            State::Value => return self.in_value(b),
            State::CloseMarker(matched) => self.in_close_marker(matched, b),
            State::Drain => {}
        }
        Ok(())
    }

    fn in_body(&mut self, b: u8) {
        if b == OPEN_MARKER[0] {
            self.remember(b);
            self.state = State::OpenMarker(1);
        } else if self.config.capture_body {
            self.body.push(b);
        }
    }

    fn in_open_marker(&mut self, matched: usize, b: u8) {
        if b == OPEN_MARKER[matched] {
            self.remember(b);
            let matched = matched + 1;
            self.state = if matched == OPEN_MARKER.len() {
                tracing::debug!(offset = self.body.len(), "Open marker matched");
                State::Head
            } else {
                State::OpenMarker(matched)
            };
            return;
        }

        tracing::trace!(matched, "Candidate open marker abandoned");
        self.flush_replay();
        // The mismatching byte goes straight to the body, even a `<`.
        if self.config.capture_body {
            self.body.push(b);
        }
        self.state = State::Body;
    }

    fn in_head(&mut self, b: u8) {
        self.remember(b);
        if is_letter(b) {
            self.key.clear();
            self.key.push(b);
            self.state = State::Key;
        } else if b == CLOSE_MARKER[0] {
            self.state = State::CloseMarker(1);
        }
    }

    fn in_key(&mut self, b: u8) {
        self.remember(b);
        if is_key_byte(b) {
            self.key.push(b);
        } else if b == b':' {
            self.state = State::AfterKey;
        } else {
            tracing::debug!(
                key = %String::from_utf8_lossy(&self.key),
                "Malformed key line skipped"
            );
            self.state = State::Head;
        }
    }

    fn in_after_key(&mut self, b: u8) {
        self.remember(b);
        if !is_whitespace(b) {
            self.value.clear();
            self.value.push(b);
            self.state = State::Value;
        }
    }

    fn in_value(&mut self, b: u8) -> Result<()> {
        self.remember(b);
        if b != b'\n' {
            self.value.push(b);
            return Ok(());
        }

        self.state = State::Head;
        let key = String::from_utf8_lossy(&self.key);
        let value = String::from_utf8_lossy(&self.value).into_owned();
        fields::dispatch(&mut self.head, &key, value)
    }

    fn in_close_marker(&mut self, matched: usize, b: u8) {
        self.remember(b);
        if b != CLOSE_MARKER[matched] {
            self.state = State::Head;
            return;
        }

        let matched = matched + 1;
        if matched == CLOSE_MARKER.len() {
            tracing::debug!("Close marker matched");
            self.replay.clear();
            self.state = State::Drain;
        } else {
            self.state = State::CloseMarker(matched);
        }
    }

    /// Hold a byte that belongs to the body unless a head block completes.
    fn remember(&mut self, b: u8) {
        if self.config.capture_body {
            self.replay.push(b);
        }
    }

    fn flush_replay(&mut self) {
        self.body.append(&mut self.replay);
    }

    fn finish(mut self) -> ParsedDocument {
        let found = self.state == State::Drain;
        if !found {
            // Unterminated or absent head: everything read is body.
            self.flush_replay();
            self.head = Head::default();
        }
        tracing::debug!(found, body_len = self.body.len(), "Parse finished");
        ParsedDocument {
            head: self.head,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> ParsedDocument {
        HeadParser::new().parse(input.as_bytes()).unwrap()
    }

    #[test]
    fn test_plain_text_is_body() {
        let doc = run("no head here");
        assert!(doc.head.is_empty());
        assert_eq!(doc.body_str(), "no head here");
    }

    #[test]
    fn test_empty_input() {
        let doc = run("");
        assert!(doc.head.is_empty());
        assert!(doc.body.is_empty());
    }

    #[test]
    fn test_simple_head() {
        let doc = run("<!-- +\ntitle: T\n+ -->body");
        assert_eq!(doc.head.title.as_deref(), Some("T"));
        assert_eq!(doc.body_str(), "body");
    }

    #[test]
    fn test_partial_open_marker_replayed() {
        let doc = run("<!-- x");
        assert!(doc.head.is_empty());
        assert_eq!(doc.body_str(), "<!-- x");
    }

    #[test]
    fn test_angle_bracket_mismatch_does_not_restart_marker() {
        let input = "<<!-- +\ntitle: T\n+ -->";
        let doc = run(input);
        assert!(doc.head.is_empty());
        assert_eq!(doc.body_str(), input);
    }

    #[test]
    fn test_into_parts() {
        let (head, body) = run("<!-- +\nlang: en\n+ -->text").into_parts();
        assert_eq!(head.lang.as_deref(), Some("en"));
        assert_eq!(body, b"text");
    }

    #[test]
    fn test_partial_open_marker_at_eof() {
        let doc = run("text <!--");
        assert_eq!(doc.body_str(), "text <!--");
    }

    #[test]
    fn test_close_marker_mismatch_stays_in_head() {
        let doc = run("<!-- +\ntitle: T\n+ x\nlang: en\n+ -->rest");
        assert_eq!(doc.head.title.as_deref(), Some("T"));
        assert_eq!(doc.head.lang.as_deref(), Some("en"));
        assert_eq!(doc.body_str(), "rest");
    }

    #[test]
    fn test_unterminated_head_resets_fields() {
        let input = "<!-- +\ntitle: T\n";
        let doc = run(input);
        assert!(doc.head.is_empty());
        assert_eq!(doc.body_str(), input);
    }

    #[test]
    fn test_head_only_discards_body() {
        let doc = HeadParser::with_config(ParserConfig::head_only())
            .parse("intro <!-- +\ntitle: T\n+ -->rest".as_bytes())
            .unwrap();
        assert_eq!(doc.head.title.as_deref(), Some("T"));
        assert!(doc.body.is_empty());
    }

    #[test]
    fn test_second_head_is_body() {
        let doc = run("<!-- +\ntitle: A\n+ -->\n<!-- +\ntitle: B\n+ -->\n");
        assert_eq!(doc.head.title.as_deref(), Some("A"));
        assert_eq!(doc.body_str(), "\n<!-- +\ntitle: B\n+ -->\n");
    }

    #[test]
    fn test_one_byte_chunks_match_default() {
        let input = "pre <!- <!-- +\ntitle: T\ntags: #a #b\n+ -->\npost";
        let chunked = HeadParser::with_config(ParserConfig::default().with_read_chunk_size(1))
            .parse(input.as_bytes())
            .unwrap();
        assert_eq!(chunked, run(input));
    }
}
