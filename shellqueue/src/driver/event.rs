//! Session lifecycle events.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::mpsc;

use crate::error::{Error, Result};

/// Lifecycle state of a manager's session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Built; `connect` has not been called.
    Idle,
    /// Waiting for the transport to connect and authenticate.
    Connecting,
    /// Session is up; the shell channel is being opened.
    ShellOpen,
    /// Shell is wired to the queue.
    Running,
    /// Torn down.
    Closed,
    /// Connecting, opening the shell or reading from it failed. The
    /// session stays up until `close()`.
    Errored,
}

/// Something that happened to the session.
#[derive(Debug)]
pub enum SessionEvent {
    /// The shell is open and its banner was captured, or opening it failed.
    Ready(Result<String>),

    /// A transport or channel error. The session is not closed automatically.
    Error(Error),

    /// The remote side ended the session.
    End,

    /// The session was torn down.
    Closed,
}

/// Receiving side of a manager's events.
///
/// Usable directly through [`recv`](Self::recv) or as a [`Stream`].
#[derive(Debug)]
pub struct EventStream {
    rx: mpsc::UnboundedReceiver<SessionEvent>,
}

impl EventStream {
    pub(crate) fn new(rx: mpsc::UnboundedReceiver<SessionEvent>) -> Self {
        Self { rx }
    }

    /// Wait for the next event. Returns `None` once the session task has
    /// exited and every event has been delivered.
    pub async fn recv(&mut self) -> Option<SessionEvent> {
        self.rx.recv().await
    }

    /// Wait for the `Ready` event, returning the banner.
    ///
    /// Events before `Ready` are skipped; an `Error` before `Ready` is
    /// returned as the error.
    pub async fn ready(&mut self) -> Result<String> {
        while let Some(event) = self.rx.recv().await {
            match event {
                SessionEvent::Ready(result) => return result,
                SessionEvent::Error(e) => return Err(e),
                SessionEvent::End | SessionEvent::Closed => break,
            }
        }
        Err(crate::error::DriverError::Closed.into())
    }
}

impl Stream for EventStream {
    type Item = SessionEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<SessionEvent>> {
        self.rx.poll_recv(cx)
    }
}
