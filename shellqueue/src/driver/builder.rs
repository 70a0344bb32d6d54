//! Builder for creating command managers.

use regex::bytes::Regex;
use serde::{Deserialize, Serialize};

use super::event::EventStream;
use super::manager::CommandManager;
use super::settings::Settings;
use crate::channel::compile_pattern;
use crate::error::{ConfigError, Result};
use crate::platform::{DEFAULT_MORE, DEFAULT_PROMPT, Preset};

/// Where a prompt or pagination pattern comes from.
///
/// In serialized options this is written `{"preset": "acos"}` or
/// `{"regex": "^router#\\s*"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternSpec {
    /// A preset name, matched case-insensitively.
    Preset(String),

    /// Regex text, compiled in multi-line mode.
    Regex(String),

    /// A prebuilt regex, used as-is.
    #[serde(skip)]
    Compiled(Regex),
}

impl PatternSpec {
    pub fn preset(name: impl Into<String>) -> Self {
        PatternSpec::Preset(name.into())
    }

    pub fn regex(pattern: impl Into<String>) -> Self {
        PatternSpec::Regex(pattern.into())
    }

    fn resolve(
        self,
        option: &'static str,
        from_preset: fn(Preset) -> Regex,
    ) -> std::result::Result<Regex, ConfigError> {
        match self {
            PatternSpec::Preset(name) => name
                .parse::<Preset>()
                .map(from_preset)
                .map_err(|_| ConfigError::UnknownPreset { option, name }),
            PatternSpec::Regex(pattern) => compile_pattern(&pattern)
                .map_err(|source| ConfigError::InvalidPattern { option, source }),
            PatternSpec::Compiled(regex) => Ok(regex),
        }
    }
}

impl From<Preset> for PatternSpec {
    fn from(preset: Preset) -> Self {
        PatternSpec::Preset(preset.name().to_string())
    }
}

impl From<Regex> for PatternSpec {
    fn from(regex: Regex) -> Self {
        PatternSpec::Compiled(regex)
    }
}

/// Serializable manager options, named as on the wire (`moreSend`,
/// `commandEnding`, ...). Unset fields take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Options {
    pub prompt: Option<PatternSpec>,
    pub more: Option<PatternSpec>,
    pub more_send: Option<String>,
    pub command_ending: Option<String>,
    pub clear_buffer: Option<bool>,
    pub verbose: Option<bool>,
    pub strip_ansi: Option<bool>,
}

/// Builder for constructing command managers.
///
/// # Example
///
/// ```rust,no_run
/// use shellqueue::{ManagerBuilder, Preset, SshConfig, AuthMethod};
///
/// # async fn example() -> Result<(), shellqueue::Error> {
/// let (mut manager, mut events) = ManagerBuilder::new()
///     .prompt(Preset::Acos)
///     .more(Preset::Acos)
///     .build()?;
///
/// manager.connect(SshConfig::new("10.0.0.1", "admin", AuthMethod::password("secret")))?;
/// let banner = events.ready().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ManagerBuilder {
    prompt: PatternSpec,
    more: PatternSpec,
    more_send: String,
    command_ending: String,
    clear_buffer: bool,
    verbose: bool,
    strip_ansi: bool,
}

impl ManagerBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self {
            prompt: PatternSpec::regex(DEFAULT_PROMPT),
            more: PatternSpec::regex(DEFAULT_MORE),
            more_send: " ".to_string(),
            command_ending: "\r\n".to_string(),
            clear_buffer: false,
            verbose: false,
            strip_ansi: false,
        }
    }

    /// Create a builder from deserialized options.
    pub fn from_options(options: Options) -> Self {
        let mut builder = Self::new();
        if let Some(prompt) = options.prompt {
            builder.prompt = prompt;
        }
        if let Some(more) = options.more {
            builder.more = more;
        }
        if let Some(more_send) = options.more_send {
            builder.more_send = more_send;
        }
        if let Some(command_ending) = options.command_ending {
            builder.command_ending = command_ending;
        }
        if let Some(clear_buffer) = options.clear_buffer {
            builder.clear_buffer = clear_buffer;
        }
        if let Some(verbose) = options.verbose {
            builder.verbose = verbose;
        }
        if let Some(strip_ansi) = options.strip_ansi {
            builder.strip_ansi = strip_ansi;
        }
        builder
    }

    /// Set the prompt pattern (default: `^`).
    pub fn prompt(mut self, prompt: impl Into<PatternSpec>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the pagination pattern (default: `-{4,}\s*more\s*-{4,}`,
    /// case-insensitive).
    pub fn more(mut self, more: impl Into<PatternSpec>) -> Self {
        self.more = more.into();
        self
    }

    /// Use a preset for both the prompt and pagination patterns.
    pub fn preset(self, preset: Preset) -> Self {
        self.prompt(preset).more(preset)
    }

    /// Set the text written to acknowledge a pagination marker (default: a space).
    pub fn more_send(mut self, more_send: impl Into<String>) -> Self {
        self.more_send = more_send.into();
        self
    }

    /// Set the line ending appended to each command (default: `\r\n`).
    pub fn command_ending(mut self, command_ending: impl Into<String>) -> Self {
        self.command_ending = command_ending.into();
        self
    }

    /// Discard buffered output whenever a command is dispatched.
    pub fn clear_buffer(mut self, clear_buffer: bool) -> Self {
        self.clear_buffer = clear_buffer;
        self
    }

    /// Log every dispatched and completed command at info level.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Remove ANSI escape codes from output before matching.
    pub fn strip_ansi(mut self, strip_ansi: bool) -> Self {
        self.strip_ansi = strip_ansi;
        self
    }

    /// Validate the options.
    pub fn settings(self) -> Result<Settings> {
        let prompt = self.prompt.resolve("prompt", Preset::prompt)?;
        let more = self.more.resolve("more", Preset::more)?;

        if self.more_send.is_empty() {
            return Err(ConfigError::EmptyMoreSend.into());
        }
        if self.command_ending.is_empty() {
            return Err(ConfigError::EmptyCommandEnding.into());
        }
        if !self.command_ending.bytes().all(|b| b == b'\r' || b == b'\n') {
            return Err(ConfigError::InvalidCommandEnding.into());
        }

        Ok(Settings {
            prompt,
            more,
            more_send: self.more_send,
            command_ending: self.command_ending,
            clear_buffer: self.clear_buffer,
            verbose: self.verbose,
            strip_ansi: self.strip_ansi,
        })
    }

    /// Build the manager.
    ///
    /// This validates the options but does not connect. Call
    /// [`CommandManager::connect`] to start the session.
    pub fn build(self) -> Result<(CommandManager, EventStream)> {
        let settings = self.settings()?;
        Ok(CommandManager::new(settings))
    }
}

impl Default for ManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
