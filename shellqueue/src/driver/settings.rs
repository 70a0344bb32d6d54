//! Validated manager configuration.

use regex::bytes::Regex;

use crate::channel::PatternMatcher;

/// Immutable configuration of a command manager.
///
/// Produced by [`ManagerBuilder::settings`](super::ManagerBuilder::settings),
/// which validates every field.
#[derive(Debug, Clone)]
pub struct Settings {
    pub(crate) prompt: Regex,
    pub(crate) more: Regex,
    pub(crate) more_send: String,
    pub(crate) command_ending: String,
    pub(crate) clear_buffer: bool,
    pub(crate) verbose: bool,
    pub(crate) strip_ansi: bool,
}

impl Settings {
    /// Pattern marking the end of a command's output.
    pub fn prompt(&self) -> &Regex {
        &self.prompt
    }

    /// Pattern marking a pagination interruption.
    pub fn more(&self) -> &Regex {
        &self.more
    }

    /// Text written to acknowledge a pagination marker.
    pub fn more_send(&self) -> &str {
        &self.more_send
    }

    /// Line ending appended to every command.
    pub fn command_ending(&self) -> &str {
        &self.command_ending
    }

    /// Whether buffered output is discarded when a command is dispatched.
    pub fn clear_buffer(&self) -> bool {
        self.clear_buffer
    }

    /// Whether per-command activity is logged at info level.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Whether ANSI escape codes are removed from output.
    pub fn strip_ansi(&self) -> bool {
        self.strip_ansi
    }

    pub(crate) fn matcher(&self) -> PatternMatcher {
        PatternMatcher::new(self.prompt.clone(), self.more.clone())
    }
}
