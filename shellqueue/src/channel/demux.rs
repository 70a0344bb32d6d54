//! Output demultiplexer.
//!
//! Turns the continuous byte stream of an interactive shell into discrete
//! per-command responses. Each inbound chunk is appended to the
//! accumulation buffer, which is then checked, in order, for:
//!
//! 1. a pagination marker - stripped, and the caller must acknowledge it;
//! 2. a prompt - everything before it is one command's response.
//!
//! The whole buffer is re-scanned on every chunk.

use bytes::Bytes;
use log::trace;

use super::buffer::OutputBuffer;
use super::patterns::PatternMatcher;

/// Outcome of feeding one chunk to the demultiplexer.
#[derive(Debug, PartialEq, Eq)]
pub enum Segment {
    /// No boundary yet; wait for more output.
    Pending,

    /// A pagination marker was stripped; the shell is waiting for the
    /// continuation text.
    Paginated,

    /// A prompt delimited the end of a response.
    Complete(Delimited),
}

/// A response cut out of the output stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimited {
    /// Output before the prompt, echo line included.
    pub raw: Bytes,

    /// Output with the first (echo or banner) line removed.
    pub result: Bytes,

    /// The prompt text that ended the response.
    pub prompt: Bytes,
}

impl Delimited {
    /// The raw output, echo line included, as lossy UTF-8.
    pub fn raw_str(&self) -> String {
        String::from_utf8_lossy(&self.raw).into_owned()
    }

    /// The output without its first line, as lossy UTF-8.
    pub fn result_str(&self) -> String {
        String::from_utf8_lossy(&self.result).into_owned()
    }

    /// The prompt text with surrounding whitespace trimmed.
    pub fn prompt_str(&self) -> String {
        String::from_utf8_lossy(&self.prompt).trim().to_string()
    }
}

/// Output demultiplexer owning the accumulation buffer.
#[derive(Debug)]
pub struct Demultiplexer {
    buffer: OutputBuffer,
    matcher: PatternMatcher,
}

impl Demultiplexer {
    /// Create a demultiplexer over an empty buffer.
    pub fn new(matcher: PatternMatcher, strip_ansi: bool) -> Self {
        let buffer = if strip_ansi {
            OutputBuffer::with_ansi_stripping()
        } else {
            OutputBuffer::new()
        };
        Self { buffer, matcher }
    }

    /// Append a chunk and look for the next boundary.
    pub fn feed(&mut self, chunk: &[u8]) -> Segment {
        self.buffer.extend(chunk);

        if let Some(marker) = self.matcher.match_page(self.buffer.as_slice()) {
            trace!("pagination marker at {:?}", marker);
            self.buffer.remove(marker);
            return Segment::Paginated;
        }

        if let Some(prompt) = self.matcher.match_prompt(self.buffer.as_slice()) {
            trace!(
                "prompt at {:?}, {} bytes buffered",
                prompt,
                self.buffer.len()
            );
            let (raw, prompt) = self.buffer.split_at_prompt(prompt);
            let skip = echo_line_len(&raw);
            let result = raw.slice(skip..);
            return Segment::Complete(Delimited {
                raw,
                result,
                prompt,
            });
        }

        Segment::Pending
    }

    /// Discard all buffered output.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// The buffered output not yet assigned to a response.
    pub fn buffered(&self) -> &[u8] {
        self.buffer.as_slice()
    }
}

/// Length of the leading echo line, including its line ending run.
///
/// The first line is only removed when it is non-empty and terminated;
/// output that starts with a line ending, or has none, is kept whole.
fn echo_line_len(raw: &[u8]) -> usize {
    match memchr::memchr2(b'\r', b'\n', raw) {
        Some(0) | None => 0,
        Some(eol) => {
            let run = raw[eol..]
                .iter()
                .take_while(|&&b| b == b'\r' || b == b'\n')
                .count();
            eol + run
        }
    }
}
