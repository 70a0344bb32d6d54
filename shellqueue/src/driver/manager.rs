//! Public handle to a command queue session.

use std::future::Future;

use log::debug;
use tokio::sync::{mpsc, oneshot, watch};

use super::event::{EventStream, SessionEvent, SessionState};
use super::queue::{CommandQueue, PendingCommand};
use super::response::Response;
use super::session::{Request, SessionActor};
use super::settings::Settings;
use crate::error::{DriverError, Result};
use crate::transport::{SshConfig, SshTransport, Transport};

/// State kept until `connect` hands it to the session task.
struct Unstarted {
    queue: CommandQueue,
    requests: mpsc::UnboundedReceiver<Request>,
    events: mpsc::UnboundedSender<SessionEvent>,
    state: watch::Sender<SessionState>,
}

/// Handle for submitting commands to an interactive shell.
///
/// Commands are written one at a time; each completes when the shell's
/// prompt reappears, and completions fire in submission order. Commands may
/// be submitted before the session is up: they wait until the shell's
/// banner has been captured.
///
/// All session state lives in a background task started by
/// [`connect`](Self::connect). The methods here only post requests to it,
/// so none of them block.
///
/// # Example
///
/// ```rust,no_run
/// use shellqueue::{AuthMethod, ManagerBuilder, PatternSpec, SshConfig};
///
/// # async fn example() -> Result<(), shellqueue::Error> {
/// let (mut manager, mut events) = ManagerBuilder::new()
///     .prompt(PatternSpec::regex(r"^router#\s*"))
///     .build()?;
///
/// manager.connect(SshConfig::new("192.168.1.1", "admin", AuthMethod::password("secret")))?;
/// println!("banner: {}", events.ready().await?);
///
/// let response = manager.send_command("show version").await?;
/// println!("{}", response.result);
///
/// manager.close().await?;
/// # Ok(())
/// # }
/// ```
pub struct CommandManager {
    requests: mpsc::UnboundedSender<Request>,
    state: watch::Receiver<SessionState>,
    unstarted: Option<Unstarted>,
    command_ending: String,
}

impl CommandManager {
    pub(crate) fn new(settings: Settings) -> (Self, EventStream) {
        let (requests_tx, requests_rx) = mpsc::unbounded_channel();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(SessionState::Idle);

        let manager = Self {
            requests: requests_tx,
            state: state_rx,
            unstarted: Some(Unstarted {
                queue: CommandQueue::new(&settings),
                requests: requests_rx,
                events: events_tx,
                state: state_tx,
            }),
            command_ending: settings.command_ending().to_string(),
        };
        (manager, EventStream::new(events_rx))
    }

    /// Connect over SSH and start the session.
    ///
    /// Returns immediately; the outcome is reported as
    /// [`SessionEvent::Ready`] or [`SessionEvent::Error`].
    pub fn connect(&mut self, config: SshConfig) -> Result<&mut Self> {
        self.connect_with(SshTransport::connect(config))
    }

    /// Start the session on a transport produced by `connecting`.
    ///
    /// Must be called within a tokio runtime.
    pub fn connect_with<T, F>(&mut self, connecting: F) -> Result<&mut Self>
    where
        T: Transport,
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let unstarted = self
            .unstarted
            .take()
            .ok_or(DriverError::AlreadyConnected)?;

        let actor = SessionActor::<T>::new(
            unstarted.queue,
            unstarted.requests,
            unstarted.events,
            unstarted.state,
        );
        tokio::spawn(actor.run(connecting));
        Ok(self)
    }

    /// Queue a command; `on_complete` receives its response.
    ///
    /// The command must be a single line: the configured command ending is
    /// appended when it is written.
    pub fn run<F>(&self, command: impl Into<String>, on_complete: F) -> Result<&Self>
    where
        F: FnOnce(Response) + Send + 'static,
    {
        let command = command.into();
        self.validate(&command)?;
        self.requests
            .send(Request::Run(PendingCommand::new(command, Box::new(on_complete))))
            .map_err(|_| DriverError::Closed)?;
        Ok(self)
    }

    /// Queue a command and wait for its response.
    pub async fn send_command(&self, command: &str) -> Result<Response> {
        let rx = self.submit(command)?;
        rx.await.map_err(|_| {
            DriverError::CommandDropped {
                command: command.to_string(),
            }
            .into()
        })
    }

    /// Queue several commands at once and wait for all responses, in order.
    pub async fn send_commands(&self, commands: &[&str]) -> Result<Vec<Response>> {
        let mut pending = Vec::with_capacity(commands.len());
        for command in commands {
            pending.push((*command, self.submit(command)?));
        }

        let mut responses = Vec::with_capacity(pending.len());
        for (command, rx) in pending {
            let response = rx.await.map_err(|_| DriverError::CommandDropped {
                command: command.to_string(),
            })?;
            responses.push(response);
        }
        Ok(responses)
    }

    /// Discard every queued command and any buffered output.
    ///
    /// Callbacks of discarded commands are never invoked. The session itself
    /// is not touched.
    pub fn flush(&self) -> Result<&Self> {
        self.requests
            .send(Request::Flush)
            .map_err(|_| DriverError::Closed)?;
        Ok(self)
    }

    /// Tear down the shell and the session.
    ///
    /// Calling this again, or on a manager that never connected, is a no-op.
    pub async fn close(&mut self) -> Result<()> {
        if let Some(unstarted) = self.unstarted.take() {
            debug!("closing manager that never connected");
            unstarted.state.send_replace(SessionState::Closed);
            let _ = unstarted.events.send(SessionEvent::Closed);
            return Ok(());
        }

        let (ack_tx, ack_rx) = oneshot::channel();
        if self.requests.send(Request::Close(ack_tx)).is_err() {
            return Ok(());
        }
        // The task may exit on its own before acknowledging.
        let _ = ack_rx.await;
        Ok(())
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        *self.state.borrow()
    }

    /// Whether the session has been torn down.
    pub fn is_closed(&self) -> bool {
        self.state() == SessionState::Closed
    }

    fn submit(&self, command: &str) -> Result<oneshot::Receiver<Response>> {
        let (tx, rx) = oneshot::channel();
        self.run(command, move |response| {
            let _ = tx.send(response);
        })?;
        Ok(rx)
    }

    fn validate(&self, command: &str) -> Result<()> {
        if command.contains(['\r', '\n']) {
            return Err(DriverError::InvalidArgument {
                message: format!(
                    "command {:?} contains a line ending; it is appended as {:?}",
                    command, self.command_ending
                ),
            }
            .into());
        }
        Ok(())
    }
}

impl std::fmt::Debug for CommandManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandManager")
            .field("state", &self.state())
            .field("started", &self.unstarted.is_none())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use bytes::Bytes;
    use futures_util::StreamExt;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    use super::*;
    use crate::driver::{ManagerBuilder, PatternSpec};
    use crate::error::{ChannelError, Error, TransportError};
    use crate::platform::Preset;
    use crate::transport::{Shell, ShellEvent, StreamTransport};

    /// Shell fed from a channel, recording every write.
    struct ScriptedShell {
        output: mpsc::UnboundedReceiver<Result<ShellEvent>>,
        writes: mpsc::UnboundedSender<Bytes>,
        ends: Arc<AtomicUsize>,
    }

    impl Shell for ScriptedShell {
        async fn recv(&mut self) -> Result<ShellEvent> {
            self.output.recv().await.unwrap_or(Ok(ShellEvent::Closed))
        }

        async fn send(&mut self, data: &[u8]) -> Result<()> {
            let _ = self.writes.send(Bytes::copy_from_slice(data));
            Ok(())
        }

        async fn end(&mut self) -> Result<()> {
            self.ends.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct ScriptedTransport {
        shell: Option<ScriptedShell>,
        closes: Arc<AtomicUsize>,
    }

    impl Transport for ScriptedTransport {
        type Shell = ScriptedShell;

        async fn open_shell(&mut self) -> Result<ScriptedShell> {
            self.shell
                .take()
                .ok_or_else(|| ChannelError::ShellRequestFailed.into())
        }

        async fn close(self) -> Result<()> {
            self.closes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// The remote end of a scripted shell.
    struct Device {
        output: mpsc::UnboundedSender<Result<ShellEvent>>,
        writes: mpsc::UnboundedReceiver<Bytes>,
        ends: Arc<AtomicUsize>,
        closes: Arc<AtomicUsize>,
    }

    impl Device {
        fn say(&self, text: &str) {
            let chunk = Bytes::copy_from_slice(text.as_bytes());
            self.output.send(Ok(ShellEvent::Data(chunk))).unwrap();
        }

        fn say_stderr(&self, text: &str) {
            let chunk = Bytes::copy_from_slice(text.as_bytes());
            self.output.send(Ok(ShellEvent::ExtendedData(chunk))).unwrap();
        }

        fn fail_read(&self) {
            let reset = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
            self.output.send(Err(ChannelError::Io(reset).into())).unwrap();
        }

        async fn heard(&mut self) -> String {
            let bytes = tokio::time::timeout(Duration::from_secs(5), self.writes.recv())
                .await
                .expect("timed out waiting for a write")
                .expect("shell dropped");
            String::from_utf8(bytes.to_vec()).unwrap()
        }

        fn silent(&mut self) -> bool {
            self.writes.try_recv().is_err()
        }
    }

    fn scripted() -> (ScriptedTransport, Device) {
        let (output_tx, output_rx) = mpsc::unbounded_channel();
        let (writes_tx, writes_rx) = mpsc::unbounded_channel();
        let ends = Arc::new(AtomicUsize::new(0));
        let closes = Arc::new(AtomicUsize::new(0));
        let transport = ScriptedTransport {
            shell: Some(ScriptedShell {
                output: output_rx,
                writes: writes_tx,
                ends: ends.clone(),
            }),
            closes: closes.clone(),
        };
        let device = Device {
            output: output_tx,
            writes: writes_rx,
            ends,
            closes,
        };
        (transport, device)
    }

    fn router() -> ManagerBuilder {
        ManagerBuilder::new().prompt(PatternSpec::regex(r"^router#\s*"))
    }

    async fn connected(builder: ManagerBuilder) -> (CommandManager, EventStream, Device) {
        let (mut manager, mut events) = builder.build().unwrap();
        let (transport, device) = scripted();
        manager.connect_with(async move { Ok::<_, Error>(transport) }).unwrap();
        device.say("Last login: never\r\nWelcome to R1\r\nrouter# ");
        assert_eq!(events.ready().await.unwrap(), "Welcome to R1\r\n");
        assert_eq!(manager.state(), SessionState::Running);
        (manager, events, device)
    }

    #[tokio::test]
    async fn test_show_version_example() {
        let (manager, _events, mut device) = connected(router()).await;

        let rx = manager.submit("show version").unwrap();
        assert_eq!(device.heard().await, "show version\r\n");
        device.say("show version\r\n");
        device.say("IOS 15.2\r\nrouter# ");

        let response = rx.await.unwrap();
        assert_eq!(response.command, "show version");
        assert_eq!(response.result, "IOS 15.2\r\n");
        assert_eq!(response.prompt, "router#");
    }

    #[tokio::test]
    async fn test_completions_in_submission_order() {
        let (manager, _events, mut device) = connected(router()).await;
        let log: Arc<Mutex<Vec<(String, String)>>> = Arc::default();
        let commands = ["show clock", "show users", "show ip route", "show arp"];

        for command in commands {
            let log = log.clone();
            manager
                .run(command, move |r| log.lock().unwrap().push((r.command, r.result)))
                .unwrap();
        }
        let last = manager.submit("show history").unwrap();

        for (i, command) in commands.iter().enumerate() {
            assert_eq!(device.heard().await, format!("{}\r\n", command));
            assert!(device.silent());
            device.say(&format!("{}\r\nout{}\r\nrouter# ", command, i));
        }
        assert_eq!(device.heard().await, "show history\r\n");
        device.say("show history\r\ndone\r\nrouter# ");
        assert_eq!(last.await.unwrap().result, "done\r\n");

        let log = log.lock().unwrap();
        assert_eq!(log.len(), commands.len());
        for (i, (command, result)) in log.iter().enumerate() {
            assert_eq!(command, commands[i]);
            assert_eq!(result, &format!("out{}\r\n", i));
        }
    }

    #[tokio::test]
    async fn test_send_commands() {
        let (manager, _events, mut device) = connected(router()).await;

        let device_side = async {
            for name in ["one", "two"] {
                let heard = device.heard().await;
                device.say(&format!("{}{}\r\nrouter# ", heard, name));
            }
        };
        let (responses, ()) = tokio::join!(manager.send_commands(&["show a", "show b"]), device_side);

        let responses = responses.unwrap();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].command, "show a");
        assert_eq!(responses[0].result, "one\r\n");
        assert_eq!(responses[1].result, "two\r\n");
    }

    #[tokio::test]
    async fn test_commands_wait_for_banner() {
        let (mut manager, mut events) = router().build().unwrap();
        let rx = manager.submit("show clock").unwrap();

        let (transport, mut device) = scripted();
        manager.connect_with(async move { Ok::<_, Error>(transport) }).unwrap();
        tokio::task::yield_now().await;
        assert!(device.silent());

        device.say("R1 ready\r\nrouter# ");
        assert_eq!(events.ready().await.unwrap(), "");
        assert_eq!(device.heard().await, "show clock\r\n");
        device.say("show clock\r\n12:00\r\nrouter# ");
        assert_eq!(rx.await.unwrap().result, "12:00\r\n");
    }

    #[tokio::test]
    async fn test_pagination_is_acknowledged() {
        let (manager, _events, mut device) = connected(router()).await;

        let rx = manager.submit("show log").unwrap();
        assert_eq!(device.heard().await, "show log\r\n");
        device.say("show log\r\nline1\r\n---- More ----");
        assert_eq!(device.heard().await, " ");
        device.say("line2\r\nrouter# ");

        let response = rx.await.unwrap();
        assert_eq!(response.result, "line1\r\nline2\r\n");
        assert!(!response.raw_result.contains("More"));
    }

    #[tokio::test]
    async fn test_acos_preset_sends_q() {
        let builder = ManagerBuilder::new()
            .prompt(PatternSpec::regex(r"^vThunder#\s*"))
            .more(Preset::Acos)
            .more_send("q");
        let (mut manager, mut events) = builder.build().unwrap();
        let (transport, mut device) = scripted();
        manager.connect_with(async move { Ok::<_, Error>(transport) }).unwrap();
        device.say("ACOS\r\nvThunder# ");
        events.ready().await.unwrap();

        let rx = manager.submit("show run").unwrap();
        device.heard().await;
        device.say("show run\r\nhostname vThunder\r\n--MORE--");
        assert_eq!(device.heard().await, "q");
        device.say("\r\nvThunder# ");
        assert_eq!(rx.await.unwrap().result, "hostname vThunder\r\n\r\n");
    }

    #[tokio::test]
    async fn test_extended_data_joins_output() {
        let (manager, _events, mut device) = connected(router()).await;

        let rx = manager.submit("copy run start").unwrap();
        device.heard().await;
        device.say("copy run start\r\n");
        device.say_stderr("% Warning: overwriting\r\n");
        device.say("router# ");

        assert_eq!(rx.await.unwrap().result, "% Warning: overwriting\r\n");
    }

    #[tokio::test]
    async fn test_flush_before_connect() {
        let (mut manager, mut events) = router().build().unwrap();
        let dropped: Arc<Mutex<Vec<Response>>> = Arc::default();
        for command in ["show a", "show b"] {
            let dropped = dropped.clone();
            manager
                .run(command, move |r| dropped.lock().unwrap().push(r))
                .unwrap();
        }
        manager.flush().unwrap();

        let (transport, mut device) = scripted();
        manager.connect_with(async move { Ok::<_, Error>(transport) }).unwrap();
        device.say("hello\r\nrouter# ");
        assert_eq!(events.ready().await.unwrap(), "");

        let rx = manager.submit("show c").unwrap();
        assert_eq!(device.heard().await, "show c\r\n");
        device.say("show c\r\nc\r\nrouter# ");
        assert_eq!(rx.await.unwrap().result, "c\r\n");
        assert!(dropped.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_flushed_command_never_written() {
        for _ in 0..20 {
            let (local, mut remote) = tokio::io::duplex(4096);
            remote.write_all(b"Welcome\r\nrouter# ").await.unwrap();

            let (mut manager, mut events) = router().build().unwrap();
            manager.run("reload", |_| {}).unwrap();
            manager.flush().unwrap();
            manager
                .connect_with(async move { Ok::<_, Error>(StreamTransport::new(local)) })
                .unwrap();
            assert_eq!(events.ready().await.unwrap(), "");

            // The first bytes written must belong to the command submitted
            // after the flush.
            let rx = manager.submit("show clock").unwrap();
            let mut heard = [0u8; 12];
            remote.read_exact(&mut heard).await.unwrap();
            assert_eq!(&heard, b"show clock\r\n");
            remote
                .write_all(b"show clock\r\n12:00\r\nrouter# ")
                .await
                .unwrap();
            assert_eq!(rx.await.unwrap().result, "12:00\r\n");

            manager.close().await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_read_error_keeps_session_until_close() {
        let (mut manager, mut events, device) = connected(router()).await;

        device.fail_read();
        match events.recv().await {
            Some(SessionEvent::Error(Error::Channel(ChannelError::Io(_)))) => {}
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(manager.state(), SessionState::Errored);

        // Neither End nor Closed is emitted on our own.
        let next = tokio::time::timeout(Duration::from_millis(50), events.recv()).await;
        assert!(next.is_err());
        assert_eq!(device.ends.load(Ordering::SeqCst), 0);
        assert_eq!(device.closes.load(Ordering::SeqCst), 0);

        manager.close().await.unwrap();
        assert!(manager.is_closed());
        assert!(matches!(events.recv().await, Some(SessionEvent::Closed)));
        assert_eq!(device.ends.load(Ordering::SeqCst), 1);
        assert_eq!(device.closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_flush_drops_waiting_commands() {
        let (manager, _events, mut device) = connected(router()).await;

        let first = manager.submit("show a").unwrap();
        let second = manager.submit("show b").unwrap();
        assert_eq!(device.heard().await, "show a\r\n");
        manager.flush().unwrap();
        let third = manager.submit("show c").unwrap();

        // Output of the flushed command is discarded, then the queue moves on.
        device.say("show a\r\na\r\nrouter# ");
        assert_eq!(device.heard().await, "show c\r\n");
        device.say("show c\r\nc\r\nrouter# ");

        assert!(first.await.is_err());
        assert!(second.await.is_err());
        assert_eq!(third.await.unwrap().result, "c\r\n");
    }

    #[tokio::test]
    async fn test_multiline_command_rejected() {
        let (manager, _events) = router().build().unwrap();
        let err = manager.run("show a\nshow b", |_| {}).unwrap_err();
        assert!(matches!(
            err,
            Error::Driver(DriverError::InvalidArgument { .. })
        ));
    }

    #[tokio::test]
    async fn test_connect_twice() {
        let (mut manager, _events) = router().build().unwrap();
        let (transport, _device) = scripted();
        manager.connect_with(async move { Ok::<_, Error>(transport) }).unwrap();

        let (transport, _device) = scripted();
        let err = manager
            .connect_with(async move { Ok::<_, Error>(transport) })
            .unwrap_err();
        assert!(matches!(err, Error::Driver(DriverError::AlreadyConnected)));
    }

    #[tokio::test]
    async fn test_close_twice() {
        let (mut manager, events, device) = connected(router()).await;

        manager.close().await.unwrap();
        assert!(manager.is_closed());
        manager.close().await.unwrap();

        let remaining: Vec<SessionEvent> = events.collect().await;
        assert_eq!(remaining.len(), 1);
        assert!(matches!(remaining[0], SessionEvent::Closed));
        assert_eq!(device.ends.load(Ordering::SeqCst), 1);
        assert_eq!(device.closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_close_without_connect() {
        let (mut manager, mut events) = router().build().unwrap();
        manager.close().await.unwrap();
        assert!(manager.is_closed());
        assert!(matches!(events.recv().await, Some(SessionEvent::Closed)));
        manager.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_remote_close_ends_session() {
        let (manager, events, device) = connected(router()).await;
        let Device { output, ends, .. } = device;
        drop(output);

        let remaining: Vec<SessionEvent> = events.collect().await;
        assert_eq!(remaining.len(), 2);
        assert!(matches!(remaining[0], SessionEvent::End));
        assert!(matches!(remaining[1], SessionEvent::Closed));
        assert!(manager.is_closed());
        assert_eq!(ends.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_shell_open_failure_reported_as_ready() {
        let (mut manager, mut events) = router().build().unwrap();
        let closes = Arc::new(AtomicUsize::new(0));
        let transport = ScriptedTransport {
            shell: None,
            closes: closes.clone(),
        };
        manager.connect_with(async move { Ok::<_, Error>(transport) }).unwrap();

        match events.recv().await {
            Some(SessionEvent::Ready(Err(Error::Channel(ChannelError::ShellRequestFailed)))) => {}
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(manager.state(), SessionState::Errored);

        manager.close().await.unwrap();
        assert!(manager.is_closed());
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_connect_failure_reported_as_error() {
        let (mut manager, mut events) = router().build().unwrap();
        manager
            .connect_with(async {
                Err::<ScriptedTransport, _>(TransportError::Timeout(Duration::from_secs(30)).into())
            })
            .unwrap();

        let err = events.ready().await.unwrap_err();
        assert!(matches!(err, Error::Transport(TransportError::Timeout(_))));
        assert_eq!(manager.state(), SessionState::Errored);

        manager.close().await.unwrap();
        assert!(matches!(events.recv().await, Some(SessionEvent::Closed)));
    }

    #[tokio::test]
    async fn test_over_duplex_stream() {
        let (local, mut remote) = tokio::io::duplex(4096);
        let (mut manager, mut events) = router().build().unwrap();
        manager
            .connect_with(async move { Ok::<_, Error>(StreamTransport::new(local)) })
            .unwrap();

        remote.write_all(b"Welcome\r\nrouter# ").await.unwrap();
        assert_eq!(events.ready().await.unwrap(), "");

        let device = tokio::spawn(async move {
            let mut heard = [0u8; 12];
            remote.read_exact(&mut heard).await.unwrap();
            assert_eq!(&heard, b"show clock\r\n");
            remote
                .write_all(b"show clock\r\n12:00:00 UTC\r\nrouter# ")
                .await
                .unwrap();
            remote
        });

        let response = manager.send_command("show clock").await.unwrap();
        assert_eq!(response.result, "12:00:00 UTC\r\n");

        drop(device.await.unwrap());
        assert!(matches!(events.recv().await, Some(SessionEvent::End)));
        assert!(matches!(events.recv().await, Some(SessionEvent::Closed)));
    }

    #[tokio::test]
    async fn test_over_mock_stream() {
        let mock = tokio_test::io::Builder::new()
            .read(b"Last login\r\nrouter# ")
            .write(b"show users\r\n")
            .read(b"show users\r\nadmin vty0\r\nrouter# ")
            .build();
        let (mut manager, mut events) = router().build().unwrap();
        manager
            .connect_with(async move { Ok::<_, Error>(StreamTransport::new(mock)) })
            .unwrap();

        assert_eq!(events.ready().await.unwrap(), "");
        let response = manager.send_command("show users").await.unwrap();
        assert_eq!(response.result, "admin vty0\r\n");
    }
}
