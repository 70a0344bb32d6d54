//! # Shellqueue
//!
//! Async command queue for prompt-driven CLI shells.
//!
//! Network devices and appliances often expose nothing but an interactive
//! shell. Shellqueue writes commands to such a shell one at a time, waits for
//! the prompt to come back, strips the echoed command, pagination markers and
//! the prompt itself, and hands each clean response back in submission order.
//!
//! ## Features
//!
//! - Async SSH sessions via russh, or any `AsyncRead + AsyncWrite` stream
//! - Strict FIFO: one command in flight, completions in submission order
//! - Transparent pagination (`--More--`) acknowledgment
//! - Presets for Junos, IOS, ACOS and EOS shells
//! - Optional ANSI escape stripping
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shellqueue::{AuthMethod, ManagerBuilder, Preset, SshConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), shellqueue::Error> {
//!     let (mut manager, mut events) = ManagerBuilder::new()
//!         .preset(Preset::Acos)
//!         .build()?;
//!
//!     manager.connect(SshConfig::new("10.0.0.1", "admin", AuthMethod::password("secret")))?;
//!     let banner = events.ready().await?;
//!     println!("{}", banner);
//!
//!     manager.run("show version", |response| println!("{}", response.result))?;
//!     let running = manager.send_command("show running-config").await?;
//!     println!("{}", running.result);
//!
//!     manager.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Limitations
//!
//! A command whose prompt never arrives stalls the queue: there is no
//! timeout at this layer. [`CommandManager::send_command`] can be wrapped in
//! `tokio::time::timeout` to stop waiting, and [`CommandManager::flush`]
//! discards whatever is queued behind the stalled command, but the stalled
//! command itself stays in flight until a prompt shows up or the session is
//! closed.

pub mod channel;
pub mod driver;
pub mod error;
pub mod platform;
pub mod transport;

// Re-export main types for convenience
pub use driver::{
    CommandManager, EventStream, ManagerBuilder, Options, PatternSpec, Response, SessionEvent,
    SessionState, Settings,
};
pub use error::Error;
pub use platform::Preset;
pub use transport::{AuthMethod, HostKeyVerification, SshConfig};
