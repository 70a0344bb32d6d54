//! Transport layer: the session that carries the interactive shell.
//!
//! The command queue only needs a duplex byte stream. [`Transport`] is the
//! connected session that can open that stream, and [`Shell`] is the stream
//! itself. [`SshTransport`] provides both over russh; [`StreamTransport`]
//! wraps any `AsyncRead + AsyncWrite` that is already connected to a shell.

pub mod config;
mod ssh;
mod stream;

pub use config::{AuthMethod, HostKeyVerification, SshConfig};
pub use ssh::{SshShell, SshTransport};
pub use stream::{StreamShell, StreamTransport};

use std::future::Future;

use bytes::Bytes;

use crate::error::Result;

/// Something the shell channel produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// Output on the primary stream.
    Data(Bytes),

    /// Output on the error stream.
    ExtendedData(Bytes),

    /// The remote side will send no more data.
    Eof,

    /// The channel is closed.
    Closed,
}

/// An open interactive shell channel.
pub trait Shell: Send + 'static {
    /// Wait for the next event. Must be cancel-safe.
    fn recv(&mut self) -> impl Future<Output = Result<ShellEvent>> + Send;

    /// Write bytes to the shell's input.
    fn send(&mut self, data: &[u8]) -> impl Future<Output = Result<()>> + Send;

    /// End the shell's input and close the channel.
    fn end(&mut self) -> impl Future<Output = Result<()>> + Send;
}

/// A connected session able to open a shell.
pub trait Transport: Send + 'static {
    /// The shell channel type.
    type Shell: Shell;

    /// Open an interactive shell channel on this session.
    fn open_shell(&mut self) -> impl Future<Output = Result<Self::Shell>> + Send;

    /// End the session.
    fn close(self) -> impl Future<Output = Result<()>> + Send;
}
