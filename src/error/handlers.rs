//! Error handlers
//!
//! Provides error classification and reporting functions.

use crate::error::types::FtpClientError;
use log::error;

/// Log an FTP client error
pub fn log_error(err: &FtpClientError) {
    error!("FTP Client Error: {}", err);
}

/// Whether the error leaves the control connection unusable.
///
/// Everything else only fails the command in flight.
pub fn is_session_fatal(err: &FtpClientError) -> bool {
    matches!(
        err,
        FtpClientError::Transport(_) | FtpClientError::SessionClosed
    )
}
