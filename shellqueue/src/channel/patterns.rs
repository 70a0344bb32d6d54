//! Pattern matching for prompt and pagination detection.

use std::ops::Range;

use regex::bytes::{Regex, RegexBuilder};

/// Trait for locating a pattern in shell output - regex by default.
pub trait PromptMatcher: Send + Sync {
    /// Returns the byte span of the leftmost match, or None if no match.
    fn find_span(&self, data: &[u8]) -> Option<Range<usize>>;

    /// Check if the data matches the pattern.
    fn is_match(&self, data: &[u8]) -> bool {
        self.find_span(data).is_some()
    }
}

impl PromptMatcher for Regex {
    fn find_span(&self, data: &[u8]) -> Option<Range<usize>> {
        self.find(data).map(|m| m.range())
    }
}

/// The pair of patterns that segment a shell's output stream.
///
/// The prompt marks the end of a command's output; the page pattern marks a
/// pagination interruption that must be acknowledged before output resumes.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    prompt: Regex,
    page: Regex,
}

impl PatternMatcher {
    /// Create a matcher from compiled prompt and page patterns.
    pub fn new(prompt: Regex, page: Regex) -> Self {
        Self { prompt, page }
    }

    /// Locate the prompt in `buffer`.
    ///
    /// The start of the span is the boundary between the command's output
    /// and the trailing prompt text.
    pub fn match_prompt(&self, buffer: &[u8]) -> Option<Range<usize>> {
        self.prompt.find_span(buffer)
    }

    /// Locate a pagination marker in `buffer`.
    ///
    /// Zero-length matches are not markers: there would be nothing to strip.
    pub fn match_page(&self, buffer: &[u8]) -> Option<Range<usize>> {
        self.page
            .find_iter(buffer)
            .find(|m| !m.is_empty())
            .map(|m| m.range())
    }

    /// The prompt pattern.
    pub fn prompt(&self) -> &Regex {
        &self.prompt
    }

    /// The pagination pattern.
    pub fn page(&self) -> &Regex {
        &self.page
    }
}

/// Compile a textual pattern for matching against shell output.
///
/// Patterns are compiled in multi-line mode so `^` and `$` anchor at line
/// boundaries anywhere in the accumulated buffer.
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).multi_line(true).build()
}
