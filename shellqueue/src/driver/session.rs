//! Session task: the single owner of the queue, the buffer and the shell.
//!
//! Requests from [`CommandManager`](super::CommandManager) and events from
//! the shell are funneled into one `tokio::select!` loop, so every state
//! change happens in one place and in arrival order.

use std::future::Future;

use log::{debug, trace, warn};
use tokio::sync::{mpsc, oneshot, watch};

use super::event::{SessionEvent, SessionState};
use super::queue::{Action, CommandQueue, PendingCommand};
use crate::error::Result;
use crate::transport::{Shell, ShellEvent, Transport};

/// A request posted by the manager handle.
pub(crate) enum Request {
    Run(PendingCommand),
    Flush,
    Close(oneshot::Sender<()>),
}

pub(crate) struct SessionActor<T: Transport> {
    queue: CommandQueue,
    requests: mpsc::UnboundedReceiver<Request>,
    events: mpsc::UnboundedSender<SessionEvent>,
    state: watch::Sender<SessionState>,
    transport: Option<T>,
    shell: Option<T::Shell>,
}

/// How the main loop ended.
enum Exit {
    /// `close()` was called; acknowledge once torn down.
    Closed(Option<oneshot::Sender<()>>),
    /// The remote side went away.
    Ended,
}

impl<T: Transport> SessionActor<T> {
    pub(crate) fn new(
        queue: CommandQueue,
        requests: mpsc::UnboundedReceiver<Request>,
        events: mpsc::UnboundedSender<SessionEvent>,
        state: watch::Sender<SessionState>,
    ) -> Self {
        Self {
            queue,
            requests,
            events,
            state,
            transport: None,
            shell: None,
        }
    }

    /// Drive the session from connection to teardown.
    pub(crate) async fn run<F>(mut self, connecting: F)
    where
        F: Future<Output = Result<T>> + Send,
    {
        self.set_state(SessionState::Connecting);

        let exit = match self.connect(connecting).await {
            Ok(()) => self.serve().await,
            Err(exit) => exit,
        };

        self.teardown().await;
        match exit {
            Exit::Closed(ack) => {
                self.emit(SessionEvent::Closed);
                if let Some(ack) = ack {
                    let _ = ack.send(());
                }
            }
            Exit::Ended => {
                self.emit(SessionEvent::End);
                self.emit(SessionEvent::Closed);
            }
        }
    }

    /// Connect, open the shell and wire it to the queue.
    ///
    /// Requests that arrive meanwhile are queued; nothing is written until
    /// the banner has been read.
    async fn connect<F>(&mut self, connecting: F) -> std::result::Result<(), Exit>
    where
        F: Future<Output = Result<T>> + Send,
    {
        tokio::pin!(connecting);
        let connected = loop {
            tokio::select! {
                biased;
                request = self.requests.recv() => {
                    if let Some(exit) = self.handle(request).await {
                        return Err(exit);
                    }
                }
                result = &mut connecting => break result,
            }
        };

        let mut transport = match connected {
            Ok(transport) => transport,
            Err(e) => {
                warn!("session failed to connect: {}", e);
                self.set_state(SessionState::Errored);
                self.emit(SessionEvent::Error(e));
                return Err(self.idle().await);
            }
        };

        self.set_state(SessionState::ShellOpen);
        match transport.open_shell().await {
            Ok(shell) => {
                debug!("shell open, waiting for banner");
                self.transport = Some(transport);
                self.shell = Some(shell);
                self.queue.start();
                self.set_state(SessionState::Running);
                Ok(())
            }
            Err(e) => {
                warn!("failed to open shell: {}", e);
                self.transport = Some(transport);
                self.set_state(SessionState::Errored);
                self.emit(SessionEvent::Ready(Err(e)));
                Err(self.idle().await)
            }
        }
    }

    /// Main loop while the shell is open.
    ///
    /// Requests already posted are applied before the next shell event.
    async fn serve(&mut self) -> Exit {
        loop {
            tokio::select! {
                biased;
                request = self.requests.recv() => {
                    if let Some(exit) = self.handle(request).await {
                        return exit;
                    }
                }
                event = recv_shell(&mut self.shell) => {
                    match event {
                        Ok(ShellEvent::Data(chunk)) | Ok(ShellEvent::ExtendedData(chunk)) => {
                            trace!("received {} bytes", chunk.len());
                            let actions = self.queue.on_data(&chunk);
                            self.perform(actions).await;
                        }
                        Ok(ShellEvent::Eof) => debug!("shell sent EOF"),
                        Ok(ShellEvent::Closed) => {
                            debug!("shell closed by remote");
                            return Exit::Ended;
                        }
                        Err(e) => {
                            warn!("shell read failed: {}", e);
                            self.set_state(SessionState::Errored);
                            self.emit(SessionEvent::Error(e));
                            return self.idle().await;
                        }
                    }
                }
            }
        }
    }

    /// Wait for requests after a failure, until closed. The shell is no
    /// longer read; teardown is left to `close()`.
    async fn idle(&mut self) -> Exit {
        loop {
            let request = self.requests.recv().await;
            if let Some(exit) = self.handle(request).await {
                return exit;
            }
        }
    }

    /// Apply one request. Returns an exit when the session should stop.
    async fn handle(&mut self, request: Option<Request>) -> Option<Exit> {
        match request {
            Some(Request::Run(command)) => {
                let actions = self.queue.enqueue(command);
                self.perform(actions).await;
                None
            }
            Some(Request::Flush) => {
                self.queue.flush();
                None
            }
            Some(Request::Close(ack)) => Some(Exit::Closed(Some(ack))),
            // Every handle is gone.
            None => Some(Exit::Closed(None)),
        }
    }

    async fn perform(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::Write(bytes) => {
                    let Some(shell) = self.shell.as_mut() else {
                        warn!("no shell open, dropping {} byte write", bytes.len());
                        continue;
                    };
                    if let Err(e) = shell.send(&bytes).await {
                        warn!("shell write failed: {}", e);
                        self.emit(SessionEvent::Error(e));
                    }
                }
                Action::Ready(banner) => self.emit(SessionEvent::Ready(Ok(banner))),
                Action::Complete(on_complete, response) => on_complete(response),
            }
        }
    }

    /// End the shell and the session. Safe to call more than once.
    async fn teardown(&mut self) {
        if let Some(mut shell) = self.shell.take() {
            if let Err(e) = shell.end().await {
                debug!("ending shell: {}", e);
            }
        }
        if let Some(transport) = self.transport.take() {
            if let Err(e) = transport.close().await {
                debug!("closing session: {}", e);
            }
        }
        self.set_state(SessionState::Closed);
    }

    fn emit(&self, event: SessionEvent) {
        // Nobody listening is fine.
        let _ = self.events.send(event);
    }

    fn set_state(&self, state: SessionState) {
        self.state.send_replace(state);
    }
}

async fn recv_shell<S: Shell>(shell: &mut Option<S>) -> Result<ShellEvent> {
    match shell.as_mut() {
        Some(shell) => shell.recv().await,
        None => std::future::pending().await,
    }
}
