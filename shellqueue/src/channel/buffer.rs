//! Accumulation buffer for shell output.
//!
//! Holds everything the shell has sent since the last command boundary.
//! The buffer is cut at two kinds of points: a pagination marker (removed in
//! place) and a prompt (everything before it becomes a response, everything
//! after it stays for the next command).

use std::ops::Range;

use bytes::{Bytes, BytesMut};

use super::ansi::AnsiStripper;

/// Buffer for accumulating shell output between command boundaries.
#[derive(Debug)]
pub struct OutputBuffer {
    /// The accumulated output.
    buffer: BytesMut,

    /// Escape stripper, when ANSI removal is enabled.
    ansi: Option<AnsiStripper>,
}

impl OutputBuffer {
    /// Create an empty buffer that stores output verbatim.
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::with_capacity(4096),
            ansi: None,
        }
    }

    /// Create an empty buffer that strips ANSI escape codes on the way in.
    pub fn with_ansi_stripping() -> Self {
        Self {
            buffer: BytesMut::with_capacity(4096),
            ansi: Some(AnsiStripper::new()),
        }
    }

    /// Append a chunk of output.
    pub fn extend(&mut self, data: &[u8]) {
        match self.ansi.as_mut() {
            Some(stripper) => {
                let cleaned = stripper.strip(data);
                self.buffer.extend_from_slice(&cleaned);
            }
            None => self.buffer.extend_from_slice(data),
        }
    }

    /// Remove `range` from the buffer, closing the gap.
    pub fn remove(&mut self, range: Range<usize>) {
        let len = self.buffer.len();
        let removed = range.end - range.start;
        self.buffer.copy_within(range.end..len, range.start);
        self.buffer.truncate(len - removed);
    }

    /// Split the buffer around a prompt match.
    ///
    /// Returns `(before, prompt)`; the bytes after the prompt stay in the
    /// buffer.
    pub fn split_at_prompt(&mut self, prompt: Range<usize>) -> (Bytes, Bytes) {
        let before = self.buffer.split_to(prompt.start).freeze();
        let matched = self.buffer.split_to(prompt.end - prompt.start).freeze();
        (before, matched)
    }

    /// Get a reference to the buffer contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    /// Get the current buffer length.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
