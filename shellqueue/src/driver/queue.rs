//! Command queue and scheduler.
//!
//! The queue is a pure state machine: it never performs I/O itself. Every
//! operation returns the [`Action`]s the session task must carry out, in
//! order. This keeps the ordering rules testable without a shell:
//!
//! - at most one command is in flight;
//! - the in-flight command stays at the head of the queue until the
//!   demultiplexer delimits its response;
//! - completions fire in submission order;
//! - nothing is written before the shell's banner has been captured.

use std::collections::VecDeque;
use std::fmt;
use std::time::Instant;

use bytes::Bytes;
use log::{debug, info, trace};

use super::response::Response;
use super::settings::Settings;
use crate::channel::{Delimited, Demultiplexer, Segment};

/// Callback receiving a completed command's response.
pub type OnComplete = Box<dyn FnOnce(Response) + Send + 'static>;

/// A queued command.
pub(crate) struct PendingCommand {
    kind: CommandKind,
    dispatched_at: Option<Instant>,
}

enum CommandKind {
    /// Captures the shell banner; never transmitted.
    Banner,
    User {
        text: String,
        on_complete: OnComplete,
    },
}

impl PendingCommand {
    pub(crate) fn new(text: String, on_complete: OnComplete) -> Self {
        Self {
            kind: CommandKind::User { text, on_complete },
            dispatched_at: None,
        }
    }

    fn banner() -> Self {
        Self {
            kind: CommandKind::Banner,
            dispatched_at: Some(Instant::now()),
        }
    }

    fn is_banner(&self) -> bool {
        matches!(self.kind, CommandKind::Banner)
    }
}

impl fmt::Debug for PendingCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CommandKind::Banner => f.write_str("PendingCommand(<banner>)"),
            CommandKind::User { text, .. } => write!(f, "PendingCommand({:?})", text),
        }
    }
}

/// Work for the session task, to be performed in order.
pub(crate) enum Action {
    /// Write bytes to the shell.
    Write(Bytes),

    /// The banner was captured.
    Ready(String),

    /// A command completed; invoke its callback.
    Complete(OnComplete, Response),
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Write(bytes) => f.debug_tuple("Write").field(bytes).finish(),
            Action::Ready(banner) => f.debug_tuple("Ready").field(banner).finish(),
            Action::Complete(_, response) => f.debug_tuple("Complete").field(response).finish(),
        }
    }
}

/// FIFO command queue with a single in-flight slot.
#[derive(Debug)]
pub(crate) struct CommandQueue {
    queue: VecDeque<PendingCommand>,
    in_flight: bool,
    demux: Demultiplexer,
    more_send: Bytes,
    command_ending: String,
    clear_buffer: bool,
    verbose: bool,
}

impl CommandQueue {
    /// Create a queue that waits for the shell banner before dispatching.
    pub(crate) fn new(settings: &Settings) -> Self {
        Self {
            queue: VecDeque::new(),
            in_flight: true,
            demux: Demultiplexer::new(settings.matcher(), settings.strip_ansi()),
            more_send: Bytes::from(settings.more_send().to_string()),
            command_ending: settings.command_ending().to_string(),
            clear_buffer: settings.clear_buffer(),
            verbose: settings.verbose(),
        }
    }

    /// The shell is open: capture its banner before any queued command.
    pub(crate) fn start(&mut self) {
        self.queue.push_front(PendingCommand::banner());
        self.in_flight = true;
    }

    /// Append a command and try to dispatch.
    pub(crate) fn enqueue(&mut self, command: PendingCommand) -> Vec<Action> {
        trace!("enqueue {:?} ({} queued)", command, self.queue.len());
        self.queue.push_back(command);
        self.dispatch_next().into_iter().collect()
    }

    /// Write the head command if nothing is in flight.
    pub(crate) fn dispatch_next(&mut self) -> Option<Action> {
        if self.in_flight {
            return None;
        }
        let head = self.queue.front_mut()?;
        self.in_flight = true;
        head.dispatched_at = Some(Instant::now());

        let CommandKind::User { text, .. } = &head.kind else {
            // The banner is read, not written.
            return None;
        };

        if self.clear_buffer {
            self.demux.clear();
        }
        if self.verbose {
            info!("dispatching {:?}", text);
        } else {
            debug!("dispatching {:?}", text);
        }

        let mut line = String::with_capacity(text.len() + self.command_ending.len());
        line.push_str(text);
        line.push_str(&self.command_ending);
        Some(Action::Write(Bytes::from(line)))
    }

    /// Feed a chunk of shell output (primary or error stream).
    pub(crate) fn on_data(&mut self, chunk: &[u8]) -> Vec<Action> {
        match self.demux.feed(chunk) {
            Segment::Pending => Vec::new(),
            Segment::Paginated => {
                debug!("acknowledging pagination marker");
                vec![Action::Write(self.more_send.clone())]
            }
            Segment::Complete(delimited) => self.complete(delimited),
        }
    }

    fn complete(&mut self, delimited: Delimited) -> Vec<Action> {
        self.in_flight = false;
        let mut actions = Vec::with_capacity(2);

        // Only a dispatched head can own this output; after a flush the
        // head may be a command that was never written.
        let finished = match self.queue.front() {
            Some(head) if head.dispatched_at.is_some() => self.queue.pop_front(),
            _ => None,
        };

        match finished {
            Some(PendingCommand {
                kind: CommandKind::Banner,
                ..
            }) => {
                debug!("banner captured ({} bytes)", delimited.result.len());
                actions.push(Action::Ready(delimited.result_str()));
            }
            Some(PendingCommand {
                kind: CommandKind::User { text, on_complete },
                dispatched_at,
            }) => {
                let elapsed = dispatched_at.map(|at| at.elapsed()).unwrap_or_default();
                if self.verbose {
                    info!("completed {:?} in {:?}", text, elapsed);
                } else {
                    debug!("completed {:?} in {:?}", text, elapsed);
                }
                let response = Response::new(
                    text,
                    delimited.result_str(),
                    delimited.raw_str(),
                    delimited.prompt_str(),
                    elapsed,
                );
                actions.push(Action::Complete(on_complete, response));
            }
            None => {
                debug!(
                    "discarding {} bytes of output with no command to complete",
                    delimited.raw.len()
                );
            }
        }

        actions.extend(self.dispatch_next());
        actions
    }

    /// Drop every queued command and the buffered output.
    ///
    /// The in-flight flag is left alone: if a command was in flight, its
    /// prompt will still arrive and is then discarded. The banner read, if
    /// still pending, is kept. Dropped callbacks are never invoked.
    pub(crate) fn flush(&mut self) {
        let dropped = self.queue.len();
        self.queue.retain(PendingCommand::is_banner);
        self.demux.clear();
        debug!("flushed {} queued command(s)", dropped - self.queue.len());
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    #[cfg(test)]
    pub(crate) fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}
