//! Error types for shellqueue.

use std::io;
use thiserror::Error;

/// Main error type for shellqueue operations.
#[derive(Error, Debug)]
pub enum Error {
    /// SSH transport-level errors
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Shell channel errors
    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    /// Command queue errors
    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),

    /// Invalid manager configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Transport layer errors (SSH connection, authentication).
#[derive(Error, Debug)]
pub enum TransportError {
    /// SSH handshake or protocol error
    #[error("SSH error: {0}")]
    Ssh(#[from] russh::Error),

    /// Authentication failed
    #[error("Authentication failed for user '{user}'")]
    AuthenticationFailed { user: String },

    /// SSH key error
    #[error("SSH key error: {0}")]
    Key(String),

    /// Host is not present in known_hosts (strict verification)
    #[error("Host key for {host}:{port} is not known")]
    HostKeyUnknown { host: String, port: u16 },

    /// Host key differs from the one recorded in known_hosts
    #[error("Host key for {host}:{port} changed (known_hosts line {line})")]
    HostKeyChanged { host: String, port: u16, line: usize },

    /// known_hosts could not be read or written
    #[error("known_hosts error: {0}")]
    KnownHosts(String),

    /// Operation timed out
    #[error("Operation timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Shell channel errors.
#[derive(Error, Debug)]
pub enum ChannelError {
    /// Failed to open the session channel or request the shell
    #[error("Failed to request shell")]
    ShellRequestFailed,

    /// Channel closed unexpectedly
    #[error("Channel closed")]
    Closed,

    /// SSH protocol error on the channel
    #[error("Channel SSH error: {0}")]
    Ssh(russh::Error),

    /// I/O error on a stream-backed shell
    #[error("Channel I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Command queue and handle errors.
#[derive(Error, Debug)]
pub enum DriverError {
    /// A command was rejected at submission time
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// `connect` was called on a manager that already started a session
    #[error("Manager already connected")]
    AlreadyConnected,

    /// The session task has shut down
    #[error("Session closed")]
    Closed,

    /// The command was discarded (flush or teardown) before it completed
    #[error("Command '{command}' was dropped before completion")]
    CommandDropped { command: String },
}

/// Construction-time configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A pattern option did not compile
    #[error("{option} option is not a valid regex: {source}")]
    InvalidPattern {
        option: &'static str,
        #[source]
        source: regex::Error,
    },

    /// A pattern option named a preset that does not exist
    #[error("{option} option must be a regex or a pre-defined preset, got '{name}'")]
    UnknownPreset { option: &'static str, name: String },

    /// `more_send` is empty
    #[error("moreSend option must be a non-zero-length string")]
    EmptyMoreSend,

    /// `command_ending` is empty
    #[error("commandEnding option must be a non-zero-length string")]
    EmptyCommandEnding,

    /// `command_ending` contains something other than `\r` and `\n`
    #[error("commandEnding option may only contain \\r and \\n")]
    InvalidCommandEnding,
}

/// Result type alias using shellqueue's Error.
pub type Result<T> = std::result::Result<T, Error>;
