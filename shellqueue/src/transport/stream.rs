//! Transport over an already-connected byte stream.
//!
//! Useful for shells reached without SSH (a raw TCP console server, a local
//! process's stdio) and for driving the queue against in-memory streams.

use bytes::Bytes;
use log::debug;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use super::{Shell, ShellEvent, Transport};
use crate::error::{ChannelError, Result};

const READ_CHUNK: usize = 4096;

/// A transport whose single shell is the wrapped stream.
pub struct StreamTransport<S> {
    stream: Option<S>,
}

impl<S> StreamTransport<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    pub fn new(stream: S) -> Self {
        Self {
            stream: Some(stream),
        }
    }
}

impl<S> Transport for StreamTransport<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    type Shell = StreamShell<S>;

    /// Hands out the stream; a second call fails.
    async fn open_shell(&mut self) -> Result<StreamShell<S>> {
        let stream = self.stream.take().ok_or(ChannelError::ShellRequestFailed)?;
        Ok(StreamShell::new(stream))
    }

    async fn close(self) -> Result<()> {
        Ok(())
    }
}

/// Shell over a duplex byte stream. Reports data only; there is no
/// separate error stream.
pub struct StreamShell<S> {
    stream: S,
    read_buf: Box<[u8; READ_CHUNK]>,
    eof: bool,
}

impl<S> StreamShell<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            read_buf: Box::new([0u8; READ_CHUNK]),
            eof: false,
        }
    }
}

impl<S> Shell for StreamShell<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    async fn recv(&mut self) -> Result<ShellEvent> {
        if self.eof {
            return Ok(ShellEvent::Closed);
        }
        let n = self
            .stream
            .read(&mut self.read_buf[..])
            .await
            .map_err(ChannelError::Io)?;
        if n == 0 {
            debug!("stream shell reached EOF");
            self.eof = true;
            return Ok(ShellEvent::Eof);
        }
        Ok(ShellEvent::Data(Bytes::copy_from_slice(&self.read_buf[..n])))
    }

    async fn send(&mut self, data: &[u8]) -> Result<()> {
        self.stream.write_all(data).await.map_err(ChannelError::Io)?;
        self.stream.flush().await.map_err(ChannelError::Io)?;
        Ok(())
    }

    async fn end(&mut self) -> Result<()> {
        self.stream.shutdown().await.map_err(ChannelError::Io)?;
        Ok(())
    }
}
