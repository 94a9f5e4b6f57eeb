//! Input validation utilities
//!
//! Checks command arguments before they reach the control connection.

use crate::error::ProtocolError;

/// Reject arguments that would end the command line early or smuggle in a
/// second command.
pub fn validate_argument(argument: &str) -> Result<(), ProtocolError> {
    if argument.contains(['\r', '\n', '\0']) {
        return Err(ProtocolError::InvalidArgument(argument.to_string()));
    }
    Ok(())
}
