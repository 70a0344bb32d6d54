//! Device-shell presets.
//!
//! A preset is a shorthand for the prompt and pagination patterns of a
//! known device family, resolved when the manager is built.

mod preset;

pub use preset::{DEFAULT_MORE, DEFAULT_PROMPT, Preset, UnknownPreset};
