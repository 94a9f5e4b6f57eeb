//! Error types
//!
//! Defines domain-specific error types for each area of the FTP client.

use std::fmt;
use std::io;

/// Control-channel grammar and payload errors
#[derive(Debug)]
pub enum ProtocolError {
    MalformedStatusLine(String),
    InvalidStatusCode(String),
    UnexpectedStatusCode { code: u16, message: String },
    MalformedPassiveReply(String),
    UnsupportedReplyFormat(String),
    InvalidArgument(String),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::MalformedStatusLine(l) => write!(f, "Malformed status line: {}", l),
            ProtocolError::InvalidStatusCode(l) => write!(f, "Invalid status code: {}", l),
            ProtocolError::UnexpectedStatusCode { code, message } => {
                write!(f, "Unexpected status {}: {}", code, message)
            }
            ProtocolError::MalformedPassiveReply(t) => {
                write!(f, "Malformed passive mode reply: {}", t)
            }
            ProtocolError::UnsupportedReplyFormat(t) => {
                write!(f, "Unsupported reply format: {}", t)
            }
            ProtocolError::InvalidArgument(a) => write!(f, "Invalid command argument: {:?}", a),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Data connection errors
#[derive(Debug)]
pub enum TransferError {
    DataConnectionTimeout(String),
    DataConnectionFailed(String, io::Error),
    DataStreamFailed(io::Error),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::DataConnectionTimeout(addr) => {
                write!(f, "Timeout opening data connection to {}", addr)
            }
            TransferError::DataConnectionFailed(addr, e) => {
                write!(f, "Failed to open data connection to {}: {}", addr, e)
            }
            TransferError::DataStreamFailed(e) => write!(f, "Data connection failed: {}", e),
        }
    }
}

impl std::error::Error for TransferError {}

/// Authentication errors
#[derive(Debug)]
pub enum AuthError {
    Rejected { code: u16, message: String },
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Rejected { code, message } => {
                write!(f, "Login rejected with {}: {}", code, message)
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// General FTP client error that encompasses all error types
#[derive(Debug)]
pub enum FtpClientError {
    Protocol(ProtocolError),
    Transfer(TransferError),
    Auth(AuthError),
    Transport(io::Error),
    SessionClosed,
}

pub type FtpResult<T> = Result<T, FtpClientError>;

impl FtpClientError {
    /// The reply code the server answered with, when the failure carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FtpClientError::Protocol(ProtocolError::UnexpectedStatusCode { code, .. }) => {
                Some(*code)
            }
            FtpClientError::Auth(AuthError::Rejected { code, .. }) => Some(*code),
            _ => None,
        }
    }

    pub(crate) fn unexpected(code: u16, message: impl Into<String>) -> Self {
        FtpClientError::Protocol(ProtocolError::UnexpectedStatusCode {
            code,
            message: message.into(),
        })
    }
}

impl fmt::Display for FtpClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FtpClientError::Protocol(e) => write!(f, "Protocol error: {}", e),
            FtpClientError::Transfer(e) => write!(f, "Transfer error: {}", e),
            FtpClientError::Auth(e) => write!(f, "Authentication error: {}", e),
            FtpClientError::Transport(e) => write!(f, "Transport error: {}", e),
            FtpClientError::SessionClosed => write!(f, "Control session is closed"),
        }
    }
}

impl std::error::Error for FtpClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FtpClientError::Protocol(e) => Some(e),
            FtpClientError::Transfer(e) => Some(e),
            FtpClientError::Auth(e) => Some(e),
            FtpClientError::Transport(e) => Some(e),
            FtpClientError::SessionClosed => None,
        }
    }
}

// Implement conversions from specific errors to FtpClientError
impl From<ProtocolError> for FtpClientError {
    fn from(error: ProtocolError) -> Self {
        FtpClientError::Protocol(error)
    }
}

impl From<TransferError> for FtpClientError {
    fn from(error: TransferError) -> Self {
        FtpClientError::Transfer(error)
    }
}

impl From<AuthError> for FtpClientError {
    fn from(error: AuthError) -> Self {
        FtpClientError::Auth(error)
    }
}

impl From<io::Error> for FtpClientError {
    fn from(error: io::Error) -> Self {
        FtpClientError::Transport(error)
    }
}
