//! ANSI escape stripping for shell output.

use vte::{Parser, Perform};

/// Stateful ANSI escape remover.
///
/// Wraps a `vte` parser so that escape sequences split across two chunks are
/// still recognised and removed. Printable characters and the `\r`, `\n` and
/// `\t` control bytes are kept; everything else is dropped.
pub struct AnsiStripper {
    parser: Parser,
}

impl AnsiStripper {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    /// Strip escape sequences from `data`, returning the printable bytes.
    pub fn strip(&mut self, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(data.len());
        self.parser.advance(&mut Printable { out: &mut out }, data);
        out
    }
}

impl Default for AnsiStripper {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AnsiStripper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnsiStripper").finish_non_exhaustive()
    }
}

struct Printable<'a> {
    out: &'a mut Vec<u8>,
}

impl Perform for Printable<'_> {
    fn print(&mut self, c: char) {
        let mut utf8 = [0u8; 4];
        self.out
            .extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
    }

    fn execute(&mut self, byte: u8) {
        if matches!(byte, b'\r' | b'\n' | b'\t') {
            self.out.push(byte);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_color_codes() {
        let mut stripper = AnsiStripper::new();
        assert_eq!(stripper.strip(b"\x1b[32mGreen text\x1b[0m"), b"Green text");
    }

    #[test]
    fn test_keeps_line_endings() {
        let mut stripper = AnsiStripper::new();
        assert_eq!(stripper.strip(b"a\r\nb\tc\x07"), b"a\r\nb\tc");
    }

    #[test]
    fn test_escape_split_across_chunks() {
        let mut stripper = AnsiStripper::new();
        let mut out = stripper.strip(b"before\x1b[3");
        out.extend(stripper.strip(b"1mred\x1b[0m"));
        assert_eq!(out, b"beforered");
    }
}
