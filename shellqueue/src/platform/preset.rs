//! Named prompt/pagination presets for known device shells.
//!
//! | preset | prompt | pagination |
//! |--------|--------|------------|
//! | `junos` | `user@host>` / `user@host#`, or the discard-changes question | none |
//! | `ios`   | none (`^`) | none |
//! | `acos`  | `host[-vmaster\|-vblade][[a/b]][(config...)]>` / `#`, or the quit question | `--MORE--` at line start |
//! | `eos`   | none (`^`) | none |
//!
//! A pattern of `^` matches the empty string at the start of the buffer.
//! As a prompt it makes every chunk a completion; as a pagination pattern
//! it never triggers, since empty matches are ignored.

use std::fmt;
use std::str::FromStr;

use regex::bytes::Regex;

use crate::channel::compile_pattern;

/// Default prompt pattern when none is configured.
///
/// It matches empty at the start of the buffer, so every response comes back
/// empty and the output stays buffered. Configure a real prompt or a preset.
pub const DEFAULT_PROMPT: &str = "^";

/// Default pagination pattern when none is configured.
pub const DEFAULT_MORE: &str = r"(?i)-{4,}\s*more\s*-{4,}";

const JUNOS_PROMPT: &str =
    r"^(?:[a-z0-9_.-]+@[a-z0-9_.-]+?[>#]|Discard\s+uncommitted\s+changes\?)\s*";

const ACOS_PROMPT: &str = r"(?i)^(?:[a-z0-9_.-]+?(?:-vmaster|-vblade)?(?:\[\d+/\d+\])?(?:\(config(?:-[^)]+)?\))?[>#]|are\s+you\s+sure\s+you\s+want\s+to\s+quit\s+\(n/y\)\?:\s+)";

const ACOS_MORE: &str = r"^--MORE--";

const EMPTY: &str = "^";

/// A known device shell family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Juniper Junos (expects the session to already be in config mode).
    Junos,
    /// Cisco IOS.
    Ios,
    /// A10 ACOS.
    Acos,
    /// Arista EOS.
    Eos,
}

impl Preset {
    /// All presets, in lookup order.
    pub const ALL: [Preset; 4] = [Preset::Junos, Preset::Ios, Preset::Acos, Preset::Eos];

    /// Lowercase preset name.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Junos => "junos",
            Preset::Ios => "ios",
            Preset::Acos => "acos",
            Preset::Eos => "eos",
        }
    }

    /// Pattern text for the prompt.
    pub fn prompt_pattern(self) -> &'static str {
        match self {
            Preset::Junos => JUNOS_PROMPT,
            Preset::Acos => ACOS_PROMPT,
            Preset::Ios | Preset::Eos => EMPTY,
        }
    }

    /// Pattern text for the pagination marker.
    pub fn more_pattern(self) -> &'static str {
        match self {
            Preset::Acos => ACOS_MORE,
            Preset::Junos | Preset::Ios | Preset::Eos => EMPTY,
        }
    }

    /// Compiled prompt regex.
    pub fn prompt(self) -> Regex {
        compile_static(self.prompt_pattern())
    }

    /// Compiled pagination regex.
    pub fn more(self) -> Regex {
        compile_static(self.more_pattern())
    }
}

fn compile_static(pattern: &'static str) -> Regex {
    compile_pattern(pattern).unwrap_or_else(|e| panic!("preset pattern {:?}: {}", pattern, e))
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a preset name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPreset(pub String);

impl fmt::Display for UnknownPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown preset '{}'", self.0)
    }
}

impl std::error::Error for UnknownPreset {}

impl FromStr for Preset {
    type Err = UnknownPreset;

    /// Case-insensitive lookup by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}
