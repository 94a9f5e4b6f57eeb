//! Status-line codec
//!
//! Decodes a single control-channel line of the form `DDD<sep>message`,
//! where `<sep>` is `-` for a continued reply and a space for a final one.

use crate::error::ProtocolError;
use crate::protocol::responses::{ExpectedReply, Reply};

/// Decode `line` and check its code against `expected`.
///
/// A well-formed line whose code is outside `expected` fails with
/// `UnexpectedStatusCode`; callers decide whether that outcome is fatal.
pub fn parse_status_line(line: &str, expected: ExpectedReply) -> Result<Reply, ProtocolError> {
    let bytes = line.as_bytes();
    if bytes.len() < 4 || (bytes[3] != b' ' && bytes[3] != b'-') {
        return Err(ProtocolError::MalformedStatusLine(line.to_string()));
    }
    let continued = bytes[3] == b'-';

    let digits = &line[..3];
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProtocolError::InvalidStatusCode(line.to_string()));
    }
    let code: u16 = digits
        .parse()
        .map_err(|_| ProtocolError::InvalidStatusCode(line.to_string()))?;
    if code < 100 {
        return Err(ProtocolError::InvalidStatusCode(line.to_string()));
    }

    let message = &line[4..];
    if !expected.matches(code) {
        return Err(ProtocolError::UnexpectedStatusCode {
            code,
            message: message.to_string(),
        });
    }

    Ok(Reply::new(code, continued, message))
}
