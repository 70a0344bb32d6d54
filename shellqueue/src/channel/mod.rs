//! Channel layer: output accumulation and segmentation.
//!
//! This module turns raw shell output into per-command responses,
//! including pagination handling and optional ANSI stripping.

mod ansi;
mod buffer;
mod demux;
mod patterns;

pub use ansi::AnsiStripper;
pub use buffer::OutputBuffer;
pub use demux::{Delimited, Demultiplexer, Segment};
pub use patterns::{PatternMatcher, PromptMatcher, compile_pattern};
