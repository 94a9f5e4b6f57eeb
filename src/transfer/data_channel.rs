//! Module `data_channel`
//!
//! Wraps the passive-mode data connection opened for LIST, RETR and STOR.
//! The channel borrows the control session for its whole life, so no other
//! command can be issued until the transfer is finished or dropped.
//!
//! Reaching end of stream consumes the server's completion reply. A channel
//! dropped before that leaves the completion pending; the session settles it
//! before sending its next command.

use log::{debug, info, warn};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use crate::client::ControlSession;
use crate::error::{FtpClientError, FtpResult, ProtocolError, TransferError};
use crate::error::handlers::is_session_fatal;
use crate::protocol::responses::{CLOSING_DATA_CONNECTION, PASSIVE_MODE};
use crate::protocol::ExpectedReply;

/// An open data connection tied to its control session.
pub struct DataTransferChannel<'s> {
    stream: BufReader<TcpStream>,
    session: &'s mut ControlSession,
    is_finished: bool,
}

impl<'s> DataTransferChannel<'s> {
    pub(crate) fn new(stream: TcpStream, session: &'s mut ControlSession) -> Self {
        session.state_mut().set_completion_pending(true);
        Self {
            stream: BufReader::new(stream),
            session,
            is_finished: false,
        }
    }

    /// Read raw bytes. Returns `Ok(0)` once the server has closed the stream
    /// and the completion reply has been read.
    pub async fn read(&mut self, buf: &mut [u8]) -> FtpResult<usize> {
        if self.is_finished || buf.is_empty() {
            return Ok(0);
        }

        let n = self
            .stream
            .read(buf)
            .await
            .map_err(TransferError::DataStreamFailed)?;
        if n == 0 {
            self.complete().await?;
        }
        Ok(n)
    }

    /// Append the next line, terminator included, to `line`.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub async fn read_line(&mut self, line: &mut String) -> FtpResult<usize> {
        if self.is_finished {
            return Ok(0);
        }

        let mut raw = Vec::new();
        let n = self
            .stream
            .read_until(b'\n', &mut raw)
            .await
            .map_err(TransferError::DataStreamFailed)?;
        if n == 0 {
            self.complete().await?;
            return Ok(0);
        }
        line.push_str(&String::from_utf8_lossy(&raw));
        Ok(n)
    }

    /// Drain the stream into `out` and consume the completion reply.
    pub async fn read_to_end(&mut self, out: &mut Vec<u8>) -> FtpResult<usize> {
        if self.is_finished {
            return Ok(0);
        }

        let n = self
            .stream
            .read_to_end(out)
            .await
            .map_err(TransferError::DataStreamFailed)?;
        self.complete().await?;
        Ok(n)
    }

    /// Copy everything from `source` onto the data connection.
    pub async fn write_from<R>(&mut self, source: &mut R) -> FtpResult<u64>
    where
        R: AsyncRead + Unpin + ?Sized,
    {
        let written = tokio::io::copy(source, self.stream.get_mut())
            .await
            .map_err(TransferError::DataStreamFailed)?;
        debug!("Wrote {} bytes to data connection", written);
        Ok(written)
    }

    /// Close the upload side and wait for the server to confirm the file.
    pub async fn finish_upload(mut self) -> FtpResult<()> {
        self.stream
            .get_mut()
            .shutdown()
            .await
            .map_err(TransferError::DataStreamFailed)?;

        self.is_finished = true;
        self.session.state_mut().set_completion_pending(false);
        let reply = self
            .session
            .read_reply(ExpectedReply::Exact(CLOSING_DATA_CONNECTION))
            .await?;
        info!("Upload complete: {}", reply.message);
        Ok(())
    }

    /// Abandon the transfer and consume whatever completion the server sends.
    ///
    /// An abort reply (426 and friends) is expected here and is not an error.
    pub async fn close(self) -> FtpResult<()> {
        let DataTransferChannel {
            stream,
            session,
            is_finished,
        } = self;
        drop(stream);
        if is_finished {
            return Ok(());
        }

        session.state_mut().set_completion_pending(false);
        match session.read_reply(ExpectedReply::Class(2)).await {
            Ok(reply) => {
                debug!("Transfer closed: {} {}", reply.code, reply.message);
                Ok(())
            }
            Err(e) if is_session_fatal(&e) => Err(e),
            Err(FtpClientError::Protocol(ProtocolError::UnexpectedStatusCode { code, message })) => {
                warn!("Transfer closed early, server replied {} {}", code, message);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    async fn complete(&mut self) -> FtpResult<()> {
        self.is_finished = true;
        self.session.state_mut().set_completion_pending(false);
        match self
            .session
            .read_reply(ExpectedReply::Exact(CLOSING_DATA_CONNECTION))
            .await
        {
            Ok(reply) => {
                debug!("Transfer complete: {}", reply.message);
                Ok(())
            }
            // Some servers repeat the passive-mode reply here.
            Err(e) if e.status_code() == Some(PASSIVE_MODE) => {
                warn!("Ignoring {} after data transfer", PASSIVE_MODE);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
