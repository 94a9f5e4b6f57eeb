//! Control-connection reply reader
//!
//! Reads one reply off the control connection, applying the workarounds
//! needed for servers that do not follow the reply grammar exactly.

use log::{debug, trace, warn};
use serde::Deserialize;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::{FtpClientError, FtpResult};
use crate::protocol::{parse_status_line, ExpectedReply, Reply};

/// What to do with a hyphen-marked (`DDD-`) first reply line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContinuationMode {
    /// Keep reading until the `DDD ` line that ends the reply.
    #[default]
    Absorb,
    /// Decode the first line and leave any follow-up lines unread.
    FirstLine,
}

/// Reply-reading workarounds, taken from `SessionConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyQuirks {
    pub continuation: ContinuationMode,
    /// When a line starts with two spaces, read this many further lines and
    /// decode the last one instead. Zero turns the workaround off.
    pub indented_extra_lines: usize,
}

impl Default for ReplyQuirks {
    fn default() -> Self {
        Self {
            continuation: ContinuationMode::Absorb,
            indented_extra_lines: 2,
        }
    }
}

/// Read one line, stripping the CRLF. End of stream is a transport failure.
pub async fn read_line<R>(reader: &mut R) -> FtpResult<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let n = reader.read_until(b'\n', &mut buf).await?;
    if n == 0 {
        return Err(FtpClientError::Transport(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "control connection closed by server",
        )));
    }
    while matches!(buf.last(), Some(b'\n' | b'\r')) {
        buf.pop();
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Read and decode one reply, then check its code against `expected`.
///
/// The full reply is consumed before the code is checked, so a rejected
/// reply never leaves follow-up lines behind for the next command.
pub async fn read_reply<R>(
    reader: &mut R,
    expected: ExpectedReply,
    quirks: &ReplyQuirks,
) -> FtpResult<Reply>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = read_line(reader).await?;
    trace!("<<< {}", line);

    if quirks.indented_extra_lines > 0 && line.starts_with("  ") {
        warn!("Skipping indented reply text: {}", line.trim());
        for _ in 0..quirks.indented_extra_lines {
            line = read_line(reader).await?;
            trace!("<<< {}", line);
        }
    }

    let mut reply = parse_status_line(&line, ExpectedReply::Any)?;
    if reply.continued {
        match quirks.continuation {
            ContinuationMode::Absorb => absorb_continuation(reader, &mut reply).await?,
            ContinuationMode::FirstLine => {
                debug!("Treating continued reply {} as complete", reply.code)
            }
        }
    }

    if !expected.matches(reply.code) {
        return Err(FtpClientError::unexpected(reply.code, reply.message));
    }
    Ok(reply)
}

async fn absorb_continuation<R>(reader: &mut R, reply: &mut Reply) -> FtpResult<()>
where
    R: AsyncBufRead + Unpin,
{
    let terminator = format!("{} ", reply.code);
    loop {
        let line = read_line(reader).await?;
        trace!("<<< {}", line);
        let is_last = line.starts_with(&terminator);
        reply.extra_lines.push(line);
        if is_last {
            return Ok(());
        }
    }
}
