//! Command queue driver.
//!
//! The driver layer owns the command queue, runs the session task that
//! serializes commands against the shell, and exposes the public
//! [`CommandManager`] handle.

mod builder;
mod event;
mod manager;
mod queue;
mod response;
mod session;
mod settings;

pub use builder::{ManagerBuilder, Options, PatternSpec};
pub use event::{EventStream, SessionEvent, SessionState};
pub use manager::CommandManager;
pub use queue::OnComplete;
pub use response::Response;
pub use settings::Settings;
