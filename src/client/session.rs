//! Control session
//!
//! Owns the control connection and drives the command/reply cycle every FTP
//! verb goes through. Any transport failure closes the session for good;
//! later operations fail fast with `SessionClosed`.

use log::{debug, info, warn};
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::client::reader;
use crate::client::state::SessionState;
use crate::config::SessionConfig;
use crate::error::handlers::is_session_fatal;
use crate::error::{AuthError, FtpClientError, FtpResult, ProtocolError, TransferError};
use crate::protocol::responses::{
    ABOUT_TO_SEND, ALREADY_OPEN, EXTENDED_PASSIVE_MODE, LOGGED_IN, PASSIVE_MODE, PATH_CREATED,
    READY, USER_OK,
};
use crate::protocol::{parse_epsv_reply, parse_pasv_reply, Command, ExpectedReply, Reply};
use crate::transfer::{DataTransferChannel, PassiveEndpoint, PassiveModeKind};
use crate::utils::logging::{log_command, log_reply};
use crate::utils::network::{data_address, normalize_address};
use crate::utils::validation::validate_argument;

/// A logged-in (or about to be) FTP control connection.
pub struct ControlSession {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    state: SessionState,
    config: SessionConfig,
}

impl ControlSession {
    /// Dial `address` and wait for the server greeting.
    ///
    /// `address` is `host` or `host:port`; the configured default port is
    /// appended when no port is given.
    pub async fn connect(address: &str, config: SessionConfig) -> FtpResult<Self> {
        let target = normalize_address(address, config.default_port);
        info!("Connecting to FTP server at {}", target.dial);

        let stream = TcpStream::connect(&target.dial).await?;
        let (read_half, write_half) = stream.into_split();
        let mut session = Self {
            reader: BufReader::new(read_half),
            writer: write_half,
            state: SessionState::new(target.host),
            config,
        };

        match session.read_reply(ExpectedReply::Exact(READY)).await {
            Ok(reply) => {
                info!("Connected to {}: {}", target.dial, reply.message);
                Ok(session)
            }
            Err(e) => {
                warn!("Server at {} did not greet as expected: {}", target.dial, e);
                session.quit().await;
                Err(e)
            }
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Send `command` and read its reply, requiring a code inside `expected`.
    ///
    /// While waiting for a 257, stray 230 replies are skipped; some servers
    /// send an extra login confirmation ahead of the PWD/MKD answer.
    pub async fn execute(&mut self, command: Command, expected: ExpectedReply) -> FtpResult<Reply> {
        self.send_command(&command).await?;

        let mut result = self.read_reply(expected).await;
        while expected == ExpectedReply::Exact(PATH_CREATED)
            && result.as_ref().err().and_then(FtpClientError::status_code) == Some(LOGGED_IN)
        {
            warn!("Ignoring stray {} while waiting for {}", LOGGED_IN, PATH_CREATED);
            result = self.read_reply(expected).await;
        }
        result
    }

    /// USER then PASS. A 230 answer to USER completes the login on its own.
    pub async fn login(&mut self, user: &str, password: &str) -> FtpResult<()> {
        match self
            .execute(Command::User(user.to_string()), ExpectedReply::Exact(USER_OK))
            .await
        {
            Ok(_) => {}
            Err(e) if e.status_code() == Some(LOGGED_IN) => {
                info!("Logged in as {} without a password", user);
                self.state.set_logged_in(user);
                return Ok(());
            }
            Err(e) => return Err(rejected(e)),
        }

        self.execute(
            Command::Pass(password.to_string()),
            ExpectedReply::Exact(LOGGED_IN),
        )
        .await
        .map_err(rejected)?;

        info!("Logged in as {}", user);
        self.state.set_logged_in(user);
        Ok(())
    }

    /// PASV: ask the server for a data port.
    pub async fn passive_mode(&mut self) -> FtpResult<PassiveEndpoint> {
        let reply = self
            .execute(Command::Pasv, ExpectedReply::Exact(PASSIVE_MODE))
            .await?;
        let endpoint = parse_pasv_reply(&reply.message)?;
        debug!(
            "PASV port {} (server advertised {:?})",
            endpoint.port, endpoint.advertised_ip
        );
        Ok(endpoint)
    }

    /// EPSV: ask the server for a data port without an address.
    pub async fn extended_passive_mode(&mut self) -> FtpResult<PassiveEndpoint> {
        let reply = self
            .execute(Command::Epsv, ExpectedReply::Exact(EXTENDED_PASSIVE_MODE))
            .await?;
        let endpoint = parse_epsv_reply(&reply.message)?;
        debug!("EPSV port {}", endpoint.port);
        Ok(endpoint)
    }

    /// Negotiate a port and dial it on the control host.
    ///
    /// The address in a PASV reply is ignored; servers behind NAT often
    /// advertise one that is not reachable.
    pub async fn open_data_connection(&mut self) -> FtpResult<TcpStream> {
        let endpoint = match self.config.passive_mode {
            PassiveModeKind::Pasv => self.passive_mode().await?,
            PassiveModeKind::Epsv => self.extended_passive_mode().await?,
        };

        let addr = data_address(self.state.host(), endpoint.port);
        match timeout(
            self.config.data_connect_timeout(),
            TcpStream::connect(&addr),
        )
        .await
        {
            Err(_) => Err(TransferError::DataConnectionTimeout(addr).into()),
            Ok(Err(e)) => Err(TransferError::DataConnectionFailed(addr, e).into()),
            Ok(Ok(stream)) => {
                info!("Data connection open to {}", addr);
                Ok(stream)
            }
        }
    }

    /// Open a data connection, then send `command` over the control channel.
    ///
    /// The server must answer 125, 150 or 227; anything else closes the data
    /// connection and fails.
    pub async fn execute_with_data_connection(
        &mut self,
        command: Command,
    ) -> FtpResult<DataTransferChannel<'_>> {
        let stream = self.open_data_connection().await?;
        self.send_command(&command).await?;

        let reply = self.read_reply(ExpectedReply::Any).await?;
        match reply.code {
            ALREADY_OPEN | ABOUT_TO_SEND | PASSIVE_MODE => {
                Ok(DataTransferChannel::new(stream, self))
            }
            code => {
                drop(stream);
                Err(FtpClientError::unexpected(code, reply.message))
            }
        }
    }

    /// Send QUIT without waiting for the answer, then close the connection.
    pub async fn quit(mut self) {
        if !self.state.is_closed() {
            log_command(self.state.host(), &Command::Quit);
            if let Err(e) = self.writer.write_all(Command::Quit.to_wire().as_bytes()).await {
                debug!("QUIT not delivered: {}", e);
            }
        }
        if let Err(e) = self.writer.shutdown().await {
            debug!("Control connection shutdown failed: {}", e);
        }
        self.state.set_closed();
        info!("Session with {} closed", self.state.host());
    }

    pub(crate) async fn send_command(&mut self, command: &Command) -> FtpResult<()> {
        self.ensure_open()?;
        if let Some(arg) = command.argument() {
            validate_argument(arg)?;
        }
        if self.state.is_completion_pending() {
            self.settle_pending_completion().await?;
        }

        log_command(self.state.host(), command);
        let result = self
            .writer
            .write_all(command.to_wire().as_bytes())
            .await
            .map_err(FtpClientError::from);
        self.track(result)
    }

    pub(crate) async fn read_reply(&mut self, expected: ExpectedReply) -> FtpResult<Reply> {
        self.ensure_open()?;
        let quirks = self.config.reply_quirks();
        let result = reader::read_reply(&mut self.reader, expected, &quirks).await;
        if let Ok(reply) = &result {
            log_reply(self.state.host(), reply);
        }
        self.track(result)
    }

    /// Consume the completion reply of a transfer that was dropped early.
    async fn settle_pending_completion(&mut self) -> FtpResult<()> {
        self.state.set_completion_pending(false);
        debug!("Reading completion reply of an abandoned transfer");
        match self.read_reply(ExpectedReply::Class(2)).await {
            Ok(reply) => debug!("Abandoned transfer finished: {}", reply.message),
            Err(e) if is_session_fatal(&e) => return Err(e),
            Err(e) => warn!("Abandoned transfer finished with: {}", e),
        }
        Ok(())
    }

    fn ensure_open(&self) -> FtpResult<()> {
        if self.state.is_closed() {
            Err(FtpClientError::SessionClosed)
        } else {
            Ok(())
        }
    }

    fn track<T>(&mut self, result: FtpResult<T>) -> FtpResult<T> {
        if let Err(e) = &result {
            if is_session_fatal(e) && !self.state.is_closed() {
                warn!("Closing session with {}: {}", self.state.host(), e);
                self.state.set_closed();
            }
        }
        result
    }
}

fn rejected(error: FtpClientError) -> FtpClientError {
    match error {
        FtpClientError::Protocol(ProtocolError::UnexpectedStatusCode { code, message }) => {
            AuthError::Rejected { code, message }.into()
        }
        other => other,
    }
}
